//! Commands whose whole job is opening a tab somewhere else.
//!
//! A failed open is logged and otherwise ignored, the same way a browser
//! silently swallows a blocked pop-up; the message is printed regardless.

use super::dispatcher::{CommandFuture, Dispatcher, ready};

fn open(d: &Dispatcher, url: &str) {
    if let Err(e) = d.services().links.open(url) {
        tracing::warn!(%url, error = %e, "could not open link");
    }
}

pub fn sudo<'a>(d: &'a Dispatcher, args: &'a [String]) -> CommandFuture<'a> {
    open(d, &d.services().config.sudo_url);
    let target = args.first().map(String::as_str).unwrap_or_default();
    ready(format!(
        "Permission denied: unable to run the command '{target}' as root."
    ))
}

pub fn repo<'a>(d: &'a Dispatcher, _args: &'a [String]) -> CommandFuture<'a> {
    open(d, &d.services().config.repository_url);
    ready("Opening repository...")
}

pub fn jellyfin<'a>(d: &'a Dispatcher, _args: &'a [String]) -> CommandFuture<'a> {
    open(d, &d.services().config.jellyfin_url);
    ready("Opening Jellyfin...")
}

pub fn torrent<'a>(d: &'a Dispatcher, _args: &'a [String]) -> CommandFuture<'a> {
    open(d, &d.services().config.torrent_url);
    ready("Opening Torrent...")
}

pub fn profile<'a>(d: &'a Dispatcher, _args: &'a [String]) -> CommandFuture<'a> {
    open(d, &d.services().config.profile_url);
    ready("Opening Profile...")
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::config::Config;
    use crate::host::LinkOpener;
    use crate::state::ThemeStore;
    use crate::terminal::Services;
    use crate::terminal::test_support::{FakeFetcher, Reply, args, harness};

    #[tokio::test]
    async fn sudo_opens_link_and_denies() {
        let h = harness();
        let out = h.dispatcher.invoke("sudo", &args(&["rm", "-rf"])).await.unwrap();
        assert_eq!(
            out,
            "Permission denied: unable to run the command 'rm' as root."
        );
        assert_eq!(
            h.opener.opened(),
            vec![Config::default().sudo_url]
        );
    }

    #[tokio::test]
    async fn sudo_without_args() {
        let h = harness();
        let out = h.dispatcher.invoke("sudo", &[]).await.unwrap();
        assert_eq!(out, "Permission denied: unable to run the command '' as root.");
    }

    #[tokio::test]
    async fn each_link_command_opens_its_url() {
        let h = harness();
        let cfg = Config::default();
        let cases = [
            ("repo", "Opening repository...", cfg.repository_url.clone()),
            ("jellyfin", "Opening Jellyfin...", cfg.jellyfin_url.clone()),
            ("torrent", "Opening Torrent...", cfg.torrent_url.clone()),
            ("profile", "Opening Profile...", cfg.profile_url.clone()),
        ];
        for (name, message, _) in &cases {
            assert_eq!(h.dispatcher.invoke(name, &[]).await.unwrap(), *message);
        }
        let expected: Vec<String> = cases.into_iter().map(|(_, _, url)| url).collect();
        assert_eq!(h.opener.opened(), expected);
    }

    struct BrokenOpener;

    impl LinkOpener for BrokenOpener {
        fn open(&self, _url: &str) -> anyhow::Result<()> {
            anyhow::bail!("no display")
        }
    }

    #[tokio::test]
    async fn open_failure_still_prints_message() {
        let services = Services::new(
            Config::default(),
            ThemeStore::builtin().unwrap(),
            Arc::new(BrokenOpener),
            Arc::new(FakeFetcher::new(Reply::Fail("unused".into()))),
        )
        .unwrap();
        let d = Dispatcher::new(services).unwrap();
        assert_eq!(d.invoke("repo", &[]).await.unwrap(), "Opening repository...");
    }
}
