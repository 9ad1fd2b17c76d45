//! Process-wide mutable state, passed explicitly into the dispatcher.
//!
//! history.rs : HistoryStore (append / clear)
//! theme.rs   : Theme, ThemeStore (registry + active theme)

pub mod history;
pub mod theme;

pub use history::{HistoryEntry, HistoryStore};
pub use theme::{Theme, ThemeStore};
