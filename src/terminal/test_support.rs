//! In-memory collaborators for handler tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use url::Url;

use super::{Dispatcher, Services};
use crate::config::Config;
use crate::host::fetch::{FetchError, FetchResponse};
use crate::host::{Fetcher, LinkOpener};
use crate::state::ThemeStore;

#[derive(Debug, Clone)]
pub enum Reply {
    Status(u16, String),
    Fail(String),
}

/// Answers every GET with the same reply and records the URLs asked for.
#[derive(Debug)]
pub struct FakeFetcher {
    reply: Reply,
    requests: Mutex<Vec<String>>,
}

impl FakeFetcher {
    pub fn new(reply: Reply) -> Self {
        Self {
            reply,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Fetcher for FakeFetcher {
    async fn get(&self, url: &Url) -> Result<FetchResponse, FetchError> {
        self.requests.lock().unwrap().push(url.to_string());
        match &self.reply {
            Reply::Status(status, body) => Ok(FetchResponse {
                status: *status,
                body: body.clone(),
            }),
            Reply::Fail(msg) => Err(FetchError::Other(msg.clone())),
        }
    }
}

#[derive(Debug, Default)]
pub struct RecordingOpener {
    opened: Mutex<Vec<String>>,
}

impl RecordingOpener {
    pub fn opened(&self) -> Vec<String> {
        self.opened.lock().unwrap().clone()
    }
}

impl LinkOpener for RecordingOpener {
    fn open(&self, url: &str) -> anyhow::Result<()> {
        self.opened.lock().unwrap().push(url.to_string());
        Ok(())
    }
}

pub struct Harness {
    pub dispatcher: Dispatcher,
    pub fetcher: Arc<FakeFetcher>,
    pub opener: Arc<RecordingOpener>,
}

pub fn harness_with(config: Config, reply: Reply) -> Harness {
    let fetcher = Arc::new(FakeFetcher::new(reply));
    let opener = Arc::new(RecordingOpener::default());
    let services = Services::new(
        config,
        ThemeStore::builtin().unwrap(),
        opener.clone(),
        fetcher.clone(),
    )
    .unwrap();
    Harness {
        dispatcher: Dispatcher::new(services).unwrap(),
        fetcher,
        opener,
    }
}

pub fn harness_replying(reply: Reply) -> Harness {
    harness_with(
        Config {
            origin: "https://cloud417.space".into(),
            ..Config::default()
        },
        reply,
    )
}

pub fn harness() -> Harness {
    harness_replying(Reply::Status(200, "ok".into()))
}

pub fn args(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
