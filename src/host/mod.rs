//! Host environment seams: opening links and fetching URLs.
//!
//! resolve_url -> absolute Url (origin-relative for anything not absolute)
//! LinkOpener  -> SystemLinkOpener | NoopLinkOpener
//! Fetcher     -> HttpFetcher (see fetch.rs)
//!
use anyhow::{Context, Result, bail};
use std::io;
use std::process::{Command, ExitStatus, Stdio};
use std::thread::JoinHandle;
use url::Url;

pub mod fetch;

pub use fetch::{Fetcher, HttpFetcher};

/// Resolve a user or config supplied URL string.
///
/// - "https://example.org/x" -> unchanged
/// - "/neofetch"             -> origin + path
/// - "docs/a.txt"            -> joined relative to origin
///
/// Only http/https results are accepted; anything else is an error so that a
/// `curl file:///etc/passwd` never reaches the fetcher.
pub fn resolve_url(origin: &Url, raw: &str) -> Result<Url> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        bail!("URL is empty");
    }

    let url = match Url::parse(trimmed) {
        Ok(url) => url,
        Err(url::ParseError::RelativeUrlWithoutBase) => origin
            .join(trimmed)
            .with_context(|| format!("cannot resolve '{trimmed}' against {origin}"))?,
        Err(e) => bail!("invalid URL '{trimmed}': {e}"),
    };

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => bail!("unsupported URL scheme '{other}'"),
    }
}

/// "Open this URL in a new tab."
pub trait LinkOpener: Send + Sync {
    fn open(&self, url: &str) -> Result<()>;
}

/// Hands the URL to the desktop's default browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLinkOpener;

impl LinkOpener for SystemLinkOpener {
    fn open(&self, url: &str) -> Result<()> {
        launch_detached(opener_command(url))
            .with_context(|| format!("Failed to launch browser for {url}"))?;
        tracing::debug!(%url, "opened external link");
        Ok(())
    }
}

/// Spawn `cmd` with null stdio and reap it on a background thread.
///
/// The caller never blocks on the child; the returned handle yields its exit
/// status once it has been waited on.
fn launch_detached(mut cmd: Command) -> Result<JoinHandle<io::Result<ExitStatus>>> {
    cmd.stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());
    let mut child = cmd.spawn()?;
    Ok(std::thread::spawn(move || child.wait()))
}

#[cfg(target_os = "macos")]
fn opener_command(url: &str) -> Command {
    let mut c = Command::new("open");
    c.arg(url);
    c
}

#[cfg(target_os = "windows")]
fn opener_command(url: &str) -> Command {
    let mut c = Command::new("cmd");
    c.args(["/C", "start", "", url]);
    c
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn opener_command(url: &str) -> Command {
    let mut c = Command::new("xdg-open");
    c.arg(url);
    c
}

/// Logs the request and does nothing else (`--no-browser`, headless hosts).
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLinkOpener;

impl LinkOpener for NoopLinkOpener {
    fn open(&self, url: &str) -> Result<()> {
        tracing::info!(%url, "link not opened (browser disabled)");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn origin() -> Url {
        Url::parse("https://cloud417.space/terminal/").unwrap()
    }

    #[test]
    fn absolute_passes_through() {
        let u = resolve_url(&origin(), "https://example.com/a?b=1").unwrap();
        assert_eq!(u.as_str(), "https://example.com/a?b=1");
    }

    #[test]
    fn rooted_path_joins_host() {
        let u = resolve_url(&origin(), "/neofetch").unwrap();
        assert_eq!(u.as_str(), "https://cloud417.space/neofetch");
    }

    #[test]
    fn relative_path_joins_directory() {
        let u = resolve_url(&origin(), "notes.txt").unwrap();
        assert_eq!(u.as_str(), "https://cloud417.space/terminal/notes.txt");
    }

    #[test]
    fn non_http_scheme_rejected() {
        let err = resolve_url(&origin(), "file:///etc/passwd").unwrap_err();
        assert!(err.to_string().contains("unsupported URL scheme"));
    }

    #[test]
    fn empty_rejected() {
        assert!(resolve_url(&origin(), "  ").is_err());
    }

    #[cfg(unix)]
    #[test]
    fn launched_child_is_reaped() {
        let handle = launch_detached(Command::new("true")).unwrap();
        let status = handle.join().unwrap().unwrap();
        assert!(status.success());
    }

    #[test]
    fn launch_failure_is_an_error() {
        let err = launch_detached(Command::new("webterm-no-such-binary")).unwrap_err();
        assert!(err.downcast_ref::<io::Error>().is_some());
    }

    #[test]
    fn noop_opener_succeeds() {
        assert!(NoopLinkOpener.open("https://example.com").is_ok());
    }
}
