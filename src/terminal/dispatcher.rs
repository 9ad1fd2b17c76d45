/*!
Command table + dispatcher.

Every handler has the same calling convention, whether or not it touches the
network:

    fn(&Dispatcher, &[String]) -> CommandFuture

`CommandFuture` is a boxed `Send` future resolving to `anyhow::Result<String>`.
Handlers that answer immediately return an already-completed future via
[`ready`].

The table is built once, validated (non-empty lowercase names, no
duplicates) and never changes afterwards.
*/

use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use thiserror::Error;
use url::Url;

use crate::config::Config;
use crate::host::{Fetcher, LinkOpener};
use crate::state::{HistoryStore, ThemeStore};

/// Deferred handler output.
pub type CommandFuture<'a> = Pin<Box<dyn Future<Output = anyhow::Result<String>> + Send + 'a>>;

pub type Handler = for<'a> fn(&'a Dispatcher, &'a [String]) -> CommandFuture<'a>;

/// Wrap an immediate result in the uniform future type.
pub fn ready<'a>(output: impl Into<String>) -> CommandFuture<'a> {
    Box::pin(std::future::ready(Ok(output.into())))
}

#[derive(Clone, Copy)]
pub struct CommandEntry {
    pub name: &'static str,
    /// One line for `webterm list`.
    pub summary: &'static str,
    pub handler: Handler,
}

impl fmt::Debug for CommandEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandEntry")
            .field("name", &self.name)
            .field("summary", &self.summary)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    #[error("duplicate command name '{0}'")]
    DuplicateCommand(&'static str),
    #[error("invalid command name '{0}' (must be non-empty lowercase without whitespace)")]
    InvalidName(&'static str),
}

/// Name -> handler mapping, in registration order.
#[derive(Debug, Clone)]
pub struct CommandTable {
    entries: Vec<CommandEntry>,
    index: HashMap<&'static str, usize>,
}

impl CommandTable {
    pub fn new(entries: &[CommandEntry]) -> Result<Self, TableError> {
        let mut index = HashMap::with_capacity(entries.len());
        for (i, e) in entries.iter().enumerate() {
            let valid = !e.name.is_empty()
                && e
                    .name
                    .chars()
                    .all(|c| !c.is_whitespace() && !c.is_uppercase());
            if !valid {
                return Err(TableError::InvalidName(e.name));
            }
            if index.insert(e.name, i).is_some() {
                return Err(TableError::DuplicateCommand(e.name));
            }
        }
        Ok(Self {
            entries: entries.to_vec(),
            index,
        })
    }

    /// The built-in command set.
    pub fn standard() -> Result<Self, TableError> {
        Self::new(super::REGISTRY)
    }

    /// Exact-name lookup.
    pub fn get(&self, name: &str) -> Option<&CommandEntry> {
        self.index.get(name).map(|&i| &self.entries[i])
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.entries.iter().map(|e| e.name).collect()
    }

    pub fn entries(&self) -> &[CommandEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Collaborators handed to the dispatcher at construction.
#[derive(Clone)]
pub struct Services {
    pub config: Config,
    /// Parsed `config.origin`.
    pub origin: Url,
    pub history: Arc<HistoryStore>,
    pub themes: Arc<ThemeStore>,
    pub links: Arc<dyn LinkOpener>,
    pub fetcher: Arc<dyn Fetcher>,
}

impl Services {
    pub fn new(
        config: Config,
        themes: ThemeStore,
        links: Arc<dyn LinkOpener>,
        fetcher: Arc<dyn Fetcher>,
    ) -> anyhow::Result<Self> {
        let origin = config.origin_url()?;
        Ok(Self {
            config,
            origin,
            history: Arc::new(HistoryStore::new()),
            themes: Arc::new(themes),
            links,
            fetcher,
        })
    }
}

#[derive(Debug, Error)]
pub enum DispatchError {
    /// No handler registered under this name. The caller decides what to show.
    #[error("command not found: {0}")]
    NotFound(String),
    #[error(transparent)]
    Handler(#[from] anyhow::Error),
}

pub struct Dispatcher {
    table: CommandTable,
    services: Services,
}

impl Dispatcher {
    pub fn new(services: Services) -> Result<Self, TableError> {
        Ok(Self::with_table(CommandTable::standard()?, services))
    }

    pub fn with_table(table: CommandTable, services: Services) -> Self {
        debug_assert!(!table.is_empty(), "dispatcher needs at least one command");
        Self { table, services }
    }

    pub fn table(&self) -> &CommandTable {
        &self.table
    }

    pub fn services(&self) -> &Services {
        &self.services
    }

    /// Resolve `name` and run its handler to completion.
    pub async fn invoke(&self, name: &str, args: &[String]) -> Result<String, DispatchError> {
        let entry = self
            .table
            .get(name)
            .ok_or_else(|| DispatchError::NotFound(name.to_string()))?;
        tracing::debug!(command = name, argc = args.len(), "dispatch");
        let output = (entry.handler)(self, args).await?;
        Ok(output)
    }
}
