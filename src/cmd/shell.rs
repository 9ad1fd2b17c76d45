/*!
`shell.rs`

Implements the `shell` subcommand (also the default when no subcommand is
given): an interactive session in front of the command table.

Behavior:
  - Prints the banner, then a `guest@<host>:~$ ` prompt coloured from the
    active theme (so `theme set` is visible straight away).
  - Each line is split with shell-word rules; the first word is the command
    name (exact match), the rest are its arguments.
  - Output is printed and recorded in the history store; `clear` is not
    recorded and also wipes the screen.
  - Unknown commands and handler faults are printed, never fatal.
  - EOF (Ctrl-D) ends the session.
*/

use anyhow::Result;
use clap::Args;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use crate::cmd::format::{Role, StyleOptions, color, prompt};
use crate::cmd::shared::{SessionOptions, build_dispatcher, load_config, runtime};
use crate::state::HistoryEntry;
use crate::terminal::builtins::WHOAMI;
use crate::terminal::{DispatchError, Dispatcher};

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// CLI arguments for `webterm shell`
#[derive(Args, Debug, Default)]
pub struct ShellArgs {
    /// Skip the welcome banner
    #[arg(long)]
    pub no_banner: bool,
}

/// What one input line turned into.
#[derive(Debug, PartialEq, Eq)]
pub enum Step {
    /// Blank line.
    Nothing,
    /// History was cleared; redraw from scratch.
    ClearScreen,
    Output(String),
}

/// Entry point for the shell subcommand.
pub fn execute_shell(args: ShellArgs, opts: &SessionOptions) -> Result<()> {
    let cfg = load_config(opts)?;
    let dispatcher = build_dispatcher(cfg, opts.no_browser)?;
    let rt = runtime()?;
    rt.block_on(session(&dispatcher, &args))
}

async fn session(dispatcher: &Dispatcher, args: &ShellArgs) -> Result<()> {
    let style = StyleOptions::detect();
    let mut stdout = std::io::stdout();

    if !args.no_banner {
        let banner = dispatcher.invoke("banner", &[]).await?;
        writeln!(stdout, "{banner}")?;
    }

    repl(
        dispatcher,
        BufReader::new(tokio::io::stdin()),
        &mut stdout,
        &style,
    )
    .await?;

    tracing::debug!(
        entries = dispatcher.services().history.len(),
        "session ended"
    );
    Ok(())
}

/// Prompt, read, evaluate, print until `input` is exhausted.
///
/// Lines are read as raw bytes and decoded lossily, so stray non-UTF-8 input
/// becomes replacement characters instead of ending the session.
async fn repl<R, W>(
    dispatcher: &Dispatcher,
    mut input: R,
    out: &mut W,
    style: &StyleOptions,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let host = dispatcher.services().config.hostname();
    let mut buf = Vec::new();
    loop {
        let theme = dispatcher.services().themes.active();
        write!(out, "{}", prompt(WHOAMI, &host, &theme, style))?;
        out.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf).await? == 0 {
            writeln!(out)?;
            break;
        }
        let line = String::from_utf8_lossy(&buf);

        match evaluate(dispatcher, &line, style).await {
            Step::Nothing => {}
            Step::ClearScreen => write!(out, "{CLEAR_SCREEN}")?,
            Step::Output(text) if text.is_empty() => {}
            Step::Output(text) => writeln!(out, "{text}")?,
        }
    }
    Ok(())
}

/// Run one input line through the dispatcher and record it.
pub async fn evaluate(dispatcher: &Dispatcher, line: &str, style: &StyleOptions) -> Step {
    let line = line.trim();
    if line.is_empty() {
        return Step::Nothing;
    }

    let words = match shell_words::split(line) {
        Ok(words) => words,
        Err(e) => {
            let text = color(Role::Error, format!("parse error: {e}"), style);
            record(dispatcher, line, &text);
            return Step::Output(text);
        }
    };
    let Some((name, rest)) = words.split_first() else {
        return Step::Nothing;
    };

    let text = match dispatcher.invoke(name, rest).await {
        Ok(_) if name == "clear" => return Step::ClearScreen,
        Ok(output) => output,
        Err(DispatchError::NotFound(_)) => color(
            Role::Error,
            format!("Command not found: {name}. Try 'help' to get started."),
            style,
        ),
        Err(DispatchError::Handler(e)) => {
            tracing::warn!(command = %name, error = %e, "command failed");
            color(Role::Error, format!("{name}: {e:#}"), style)
        }
    };
    record(dispatcher, line, &text);
    Step::Output(text)
}

fn record(dispatcher: &Dispatcher, line: &str, output: &str) {
    dispatcher
        .services()
        .history
        .push(HistoryEntry::new(line, output));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::test_support::{Reply, harness, harness_replying};

    fn plain() -> StyleOptions {
        StyleOptions::plain(80)
    }

    #[tokio::test]
    async fn blank_line_does_nothing() {
        let h = harness();
        assert_eq!(evaluate(&h.dispatcher, "   ", &plain()).await, Step::Nothing);
        assert!(h.dispatcher.services().history.is_empty());
    }

    #[tokio::test]
    async fn quoted_arguments_survive() {
        let h = harness();
        let step = evaluate(&h.dispatcher, r#"echo "hello   world" again"#, &plain()).await;
        assert_eq!(step, Step::Output("hello   world again".into()));
        let entries = h.dispatcher.services().history.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].output, "hello   world again");
    }

    #[tokio::test]
    async fn unknown_command_message() {
        let h = harness();
        let step = evaluate(&h.dispatcher, "ls -la", &plain()).await;
        assert_eq!(
            step,
            Step::Output("Command not found: ls. Try 'help' to get started.".into())
        );
    }

    #[tokio::test]
    async fn clear_is_not_recorded() {
        let h = harness();
        evaluate(&h.dispatcher, "whoami", &plain()).await;
        assert_eq!(evaluate(&h.dispatcher, "clear", &plain()).await, Step::ClearScreen);
        assert!(h.dispatcher.services().history.is_empty());
    }

    #[tokio::test]
    async fn weather_fault_is_printed_not_fatal() {
        let h = harness_replying(Reply::Fail("network unreachable".into()));
        let step = evaluate(&h.dispatcher, "weather Brussels", &plain()).await;
        assert_eq!(step, Step::Output("weather: network unreachable".into()));
        assert_eq!(h.dispatcher.services().history.len(), 1);
    }

    #[tokio::test]
    async fn invalid_utf8_line_does_not_end_session() {
        let h = harness();
        let input: &[u8] = b"whoami\n\xff\xfe echo\nwhoami\n";
        let mut out = Vec::new();
        repl(&h.dispatcher, input, &mut out, &plain()).await.unwrap();

        let entries = h.dispatcher.services().history.entries();
        let commands: Vec<&str> = entries.iter().map(|e| e.command.as_str()).collect();
        assert_eq!(commands.len(), 3);
        assert_eq!(commands[0], "whoami");
        assert!(commands[1].starts_with('\u{FFFD}'));
        assert_eq!(commands[2], "whoami");
        assert!(entries[1].output.starts_with("Command not found"));

        let printed = String::from_utf8(out).unwrap();
        assert_eq!(printed.matches("guest@cloud417.space:~$ ").count(), 4);
        assert_eq!(printed.matches(":~$ guest\n").count(), 2);
    }

    #[tokio::test]
    async fn last_line_without_newline_runs() {
        let h = harness();
        let input: &[u8] = b"echo tail";
        let mut out = Vec::new();
        repl(&h.dispatcher, input, &mut out, &plain()).await.unwrap();
        assert!(String::from_utf8(out).unwrap().contains("tail\n"));
    }

    #[tokio::test]
    async fn unbalanced_quote_is_parse_error() {
        let h = harness();
        match evaluate(&h.dispatcher, "echo \"oops", &plain()).await {
            Step::Output(text) => assert!(text.starts_with("parse error")),
            other => panic!("unexpected step: {other:?}"),
        }
    }
}
