/*!
Theme registry + active theme.

The registry is an ordered, read-only list of terminal colour schemes
(`themes.json` format: an array of objects with `name` and the sixteen ANSI
colours plus `foreground` / `background` / `cursorColor`). Lookup is a
case-insensitive exact match on `name`.
*/

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{RwLock, RwLockReadGuard};
use thiserror::Error;

const BUILTIN_THEMES: &str = include_str!("../../themes.json");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub name: String,
    pub black: String,
    pub red: String,
    pub green: String,
    pub yellow: String,
    pub blue: String,
    pub purple: String,
    pub cyan: String,
    pub white: String,
    pub bright_black: String,
    pub bright_red: String,
    pub bright_green: String,
    pub bright_yellow: String,
    pub bright_blue: String,
    pub bright_purple: String,
    pub bright_cyan: String,
    pub bright_white: String,
    pub foreground: String,
    pub background: String,
    pub cursor_color: String,
}

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("theme registry is empty")]
    Empty,
    #[error("duplicate theme name '{0}'")]
    Duplicate(String),
    #[error("invalid theme registry: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("cannot read theme registry {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("theme '{0}' not found")]
    NotFound(String),
}

#[derive(Debug)]
pub struct ThemeStore {
    registry: Vec<Theme>,
    active: RwLock<Theme>,
}

impl ThemeStore {
    /// Build from a list; the first entry becomes active.
    pub fn new(registry: Vec<Theme>) -> Result<Self, ThemeError> {
        let first = registry.first().cloned().ok_or(ThemeError::Empty)?;
        let mut seen = std::collections::HashSet::new();
        for t in &registry {
            if !seen.insert(t.name.to_lowercase()) {
                return Err(ThemeError::Duplicate(t.name.clone()));
            }
        }
        Ok(Self {
            registry,
            active: RwLock::new(first),
        })
    }

    pub fn from_json(raw: &str) -> Result<Self, ThemeError> {
        let registry: Vec<Theme> = serde_json::from_str(raw)?;
        Self::new(registry)
    }

    pub fn load(path: &Path) -> Result<Self, ThemeError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ThemeError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&raw)
    }

    /// The registry shipped inside the binary.
    pub fn builtin() -> Result<Self, ThemeError> {
        Self::from_json(BUILTIN_THEMES)
    }

    pub fn themes(&self) -> &[Theme] {
        &self.registry
    }

    pub fn find(&self, name: &str) -> Option<&Theme> {
        let wanted = name.to_lowercase();
        self.registry
            .iter()
            .find(|t| t.name.to_lowercase() == wanted)
    }

    fn read(&self) -> RwLockReadGuard<'_, Theme> {
        self.active.read().unwrap_or_else(|p| p.into_inner())
    }

    pub fn active(&self) -> Theme {
        self.read().clone()
    }

    pub fn active_name(&self) -> String {
        self.read().name.clone()
    }

    pub fn set_active(&self, theme: Theme) {
        tracing::debug!(theme = %theme.name, "active theme changed");
        *self.active.write().unwrap_or_else(|p| p.into_inner()) = theme;
    }

    /// Look up by name and activate; used for the startup `--theme` choice.
    pub fn select(&self, name: &str) -> Result<(), ThemeError> {
        let theme = self
            .find(name)
            .cloned()
            .ok_or_else(|| ThemeError::NotFound(name.to_string()))?;
        self.set_active(theme);
        Ok(())
    }
}
