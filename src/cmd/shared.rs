/*!
shared.rs - setup shared by `shell` and `run`.

  - SessionOptions: the global flags that shape a session
  - load_config: file (flag / env) + origin override + validation
  - build_dispatcher: config -> themes, fetcher, link opener -> Dispatcher
  - runtime: the Tokio runtime the subcommands block on
*/

use anyhow::{Context, Result};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::host::{HttpFetcher, LinkOpener, NoopLinkOpener, SystemLinkOpener};
use crate::state::ThemeStore;
use crate::terminal::{Dispatcher, Services};

/// Global flags, resolved by `main` (CLI flag > env > config file > default).
#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    pub config_path: Option<PathBuf>,
    pub origin: Option<String>,
    pub theme: Option<String>,
    pub no_browser: bool,
}

pub fn load_config(opts: &SessionOptions) -> Result<Config> {
    let mut cfg = match &opts.config_path {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(origin) = opts.origin.as_deref().filter(|o| !o.trim().is_empty()) {
        cfg.origin = origin.trim().to_string();
    }
    if opts.theme.is_some() {
        cfg.default_theme = opts.theme.clone();
    }
    cfg.validate()?;
    Ok(cfg)
}

pub fn load_themes(cfg: &Config) -> Result<ThemeStore> {
    let store = match &cfg.themes_file {
        Some(path) => ThemeStore::load(path)?,
        None => ThemeStore::builtin()?,
    };
    if let Some(name) = &cfg.default_theme {
        store
            .select(name)
            .with_context(|| format!("Unknown startup theme '{name}'"))?;
    }
    tracing::debug!(
        themes = store.themes().len(),
        active = %store.active_name(),
        "theme registry loaded"
    );
    Ok(store)
}

pub fn build_dispatcher(cfg: Config, no_browser: bool) -> Result<Dispatcher> {
    let themes = load_themes(&cfg)?;
    let fetcher = HttpFetcher::new(cfg.http_timeout_secs.map(Duration::from_secs))
        .context("Failed to build HTTP client")?;
    let links: Arc<dyn LinkOpener> = if no_browser {
        Arc::new(NoopLinkOpener)
    } else {
        Arc::new(SystemLinkOpener)
    };

    let services = Services::new(cfg, themes, links, Arc::new(fetcher))?;
    let dispatcher = Dispatcher::new(services).context("Command table is invalid")?;
    Ok(dispatcher)
}

pub fn runtime() -> Result<tokio::runtime::Runtime> {
    tokio::runtime::Runtime::new().context("Failed to create Tokio runtime")
}
