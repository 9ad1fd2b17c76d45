/*!
format.rs

Terminal formatting for the human output paths (prompt, `list` table).

  - StyleOptions::detect() -> StyleOptions   (NO_COLOR, COLUMNS)
  - color(role, text, &StyleOptions)          (256-colour roles)
  - hex(hex, text, &StyleOptions)             (truecolor from a theme entry)
  - prompt(user, host, &Theme, &StyleOptions)
  - table(headers, rows, &StyleOptions)

Handler output itself is printed untouched; only the chrome around it is
styled here. JSON output paths never go through these helpers.
*/

use std::borrow::Cow;

use crate::state::Theme;

#[derive(Debug, Clone)]
pub struct StyleOptions {
    pub use_color: bool,
    pub term_width: usize,
}

impl Default for StyleOptions {
    fn default() -> Self {
        Self::detect()
    }
}

impl StyleOptions {
    pub fn detect() -> Self {
        let width = std::env::var("COLUMNS")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .map(|w| w.clamp(40, 220))
            .unwrap_or(100);

        StyleOptions {
            use_color: std::env::var_os("NO_COLOR").is_none(),
            term_width: width,
        }
    }

    #[cfg(test)]
    pub fn plain(term_width: usize) -> Self {
        Self {
            use_color: false,
            term_width,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Role {
    Accent,
    Error,
    Dim,
}

pub fn color(role: Role, text: impl AsRef<str>, style: &StyleOptions) -> String {
    if !style.use_color {
        return text.as_ref().to_string();
    }
    let code = match role {
        Role::Accent => "38;5;213",
        Role::Error => "38;5;196",
        Role::Dim => "2",
    };
    format!("\x1b[{code}m{}\x1b[0m", text.as_ref())
}

/// Colour `text` with a `#rrggbb` theme value. Unparseable values leave it plain.
pub fn hex(hex: &str, text: impl AsRef<str>, style: &StyleOptions) -> String {
    match (style.use_color, parse_hex(hex)) {
        (true, Some((r, g, b))) => format!("\x1b[38;2;{r};{g};{b}m{}\x1b[0m", text.as_ref()),
        _ => text.as_ref().to_string(),
    }
}

fn parse_hex(raw: &str) -> Option<(u8, u8, u8)> {
    let digits = raw.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

/// `guest@host:~$ `, coloured from the active theme.
pub fn prompt(user: &str, host: &str, theme: &Theme, style: &StyleOptions) -> String {
    format!(
        "{}@{}:{}$ ",
        hex(&theme.yellow, user, style),
        hex(&theme.green, host, style),
        hex(&theme.blue, "~", style),
    )
}

pub fn table(headers: &[&str], rows: &[Vec<String>], style: &StyleOptions) -> String {
    if headers.is_empty() {
        return String::new();
    }
    let col_count = headers.len();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate().take(col_count) {
            widths[i] = widths[i].max(display_width(cell));
        }
    }

    // Only the last column shrinks; names must stay readable.
    let fixed: usize = widths[..col_count - 1].iter().sum::<usize>() + (col_count - 1) * 2;
    if fixed + widths[col_count - 1] > style.term_width {
        widths[col_count - 1] = style.term_width.saturating_sub(fixed).max(4);
    }

    let mut lines = Vec::with_capacity(rows.len() + 2);

    let header: Vec<String> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| color(Role::Accent, pad_or_truncate(h, widths[i]), style))
        .collect();
    lines.push(header.join("  ").trim_end().to_string());

    let sep: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    lines.push(color(Role::Dim, sep.join("  "), style));

    for row in rows {
        let cells: Vec<String> = (0..col_count)
            .map(|c| pad_or_truncate(row.get(c).map(String::as_str).unwrap_or(""), widths[c]))
            .collect();
        lines.push(cells.join("  ").trim_end().to_string());
    }

    lines.join("\n")
}

fn pad_or_truncate(s: &str, width: usize) -> String {
    let len = display_width(s);
    if len <= width {
        return format!("{s}{}", " ".repeat(width - len));
    }
    if width <= 1 {
        return "…".to_string();
    }
    let mut out: String = strip_ansi(s).chars().take(width - 1).collect();
    out.push('…');
    out
}

fn strip_ansi(s: &str) -> Cow<'_, str> {
    // Scans for ESC '[' ... final letter
    if !s.contains('\x1b') {
        return Cow::Borrowed(s);
    }
    let mut buf = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            for n in chars.by_ref() {
                if n.is_ascii_alphabetic() {
                    break;
                }
            }
            continue;
        }
        buf.push(c);
    }
    Cow::Owned(buf)
}

fn display_width(s: &str) -> usize {
    strip_ansi(s).chars().count()
}
