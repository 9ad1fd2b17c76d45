//! Site configuration.
//!
//! Loaded from an optional YAML file (`--config` / `WEBTERM_CONFIG`); every
//! field has a default so an empty file (or no file) is valid. The origin is
//! the URL the terminal is "served" from: it yields the `hostname` output and
//! is the base that relative fetch targets (`/neofetch`, `curl /foo`) resolve
//! against.

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use url::Url;

pub const DEFAULT_ORIGIN: &str = "http://localhost:5173";

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Site origin, e.g. `https://cloud417.space`.
    pub origin: String,
    /// Link opened by `repo`.
    pub repository_url: String,
    pub jellyfin_url: String,
    pub torrent_url: String,
    pub profile_url: String,
    /// Link opened (unasked) by `sudo`.
    pub sudo_url: String,
    /// Base of the plain-text weather service; the city is appended as a path segment.
    pub weather_endpoint: String,
    /// Path (or absolute URL) serving the neofetch text.
    pub neofetch_path: String,
    /// Optional theme registry (JSON array). The embedded registry is used otherwise.
    pub themes_file: Option<PathBuf>,
    /// Theme selected at startup (case-insensitive). Defaults to the first registry entry.
    pub default_theme: Option<String>,
    /// Per-request HTTP timeout. No timeout when unset.
    pub http_timeout_secs: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            origin: DEFAULT_ORIGIN.to_string(),
            repository_url: "https://github.com/m4tt72/terminal".to_string(),
            jellyfin_url: "https://jellyfin.cloud417.space".to_string(),
            torrent_url: "https://torrent.cloud417.space".to_string(),
            profile_url: "https://github.com/Hamza417".to_string(),
            sudo_url: "https://www.youtube.com/watch?v=dQw4w9WgXcQ".to_string(),
            weather_endpoint: "https://wttr.in".to_string(),
            neofetch_path: "/neofetch".to_string(),
            themes_file: None,
            default_theme: None,
            http_timeout_secs: None,
        }
    }
}

impl Config {
    /// Parse a YAML document. An empty document yields the defaults.
    pub fn from_yaml(raw: &str) -> Result<Self> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        let cfg: Config = serde_yaml::from_str(raw).context("Invalid config YAML")?;
        Ok(cfg)
    }

    /// Load from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let mut cfg = Self::from_yaml(&raw)?;

        // Relative theme paths are relative to the config file, not the cwd.
        if let Some(themes) = &cfg.themes_file
            && themes.is_relative()
            && let Some(dir) = path.parent()
        {
            cfg.themes_file = Some(dir.join(themes));
        }
        Ok(cfg)
    }

    /// Check everything that can be checked without the network.
    pub fn validate(&self) -> Result<()> {
        self.origin_url()?;
        for (field, raw) in [
            ("repository_url", &self.repository_url),
            ("jellyfin_url", &self.jellyfin_url),
            ("torrent_url", &self.torrent_url),
            ("profile_url", &self.profile_url),
            ("sudo_url", &self.sudo_url),
            ("weather_endpoint", &self.weather_endpoint),
        ] {
            Url::parse(raw).with_context(|| format!("{field} is not an absolute URL: '{raw}'"))?;
        }
        Ok(())
    }

    /// The origin as a parsed URL. Must be absolute and carry a host.
    pub fn origin_url(&self) -> Result<Url> {
        let url = Url::parse(self.origin.trim())
            .with_context(|| format!("origin is not an absolute URL: '{}'", self.origin))?;
        if url.host_str().is_none() {
            bail!("origin has no host: '{}'", self.origin);
        }
        Ok(url)
    }

    /// Host part of the origin, as `window.location.hostname` would report it.
    pub fn hostname(&self) -> String {
        self.origin_url()
            .ok()
            .and_then(|u| u.host_str().map(str::to_string))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_yaml_is_default() {
        let cfg = Config::from_yaml("  \n").unwrap();
        assert_eq!(cfg.origin, DEFAULT_ORIGIN);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn partial_yaml_keeps_other_defaults() {
        let cfg = Config::from_yaml("origin: https://cloud417.space\nhttp_timeout_secs: 5\n").unwrap();
        assert_eq!(cfg.hostname(), "cloud417.space");
        assert_eq!(cfg.http_timeout_secs, Some(5));
        assert_eq!(cfg.weather_endpoint, "https://wttr.in");
    }

    #[test]
    fn unknown_field_rejected() {
        let err = Config::from_yaml("orign: https://typo.example\n").unwrap_err();
        assert!(err.to_string().contains("Invalid config"));
    }

    #[test]
    fn origin_without_host_rejected() {
        let cfg = Config {
            origin: "mailto:someone@example.com".into(),
            ..Config::default()
        };
        assert!(cfg.validate().is_err());
        assert_eq!(cfg.hostname(), "");
    }

    #[test]
    fn bad_link_rejected() {
        let cfg = Config {
            jellyfin_url: "jellyfin".into(),
            ..Config::default()
        };
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("jellyfin_url"));
    }
}
