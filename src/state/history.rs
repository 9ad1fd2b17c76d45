use std::sync::{Mutex, MutexGuard};

/// One line typed at the prompt and what it printed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub command: String,
    pub output: String,
}

impl HistoryEntry {
    pub fn new(command: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            output: output.into(),
        }
    }
}

/// Append-only list of prior invocations, clearable in one step.
#[derive(Debug, Default)]
pub struct HistoryStore {
    entries: Mutex<Vec<HistoryEntry>>,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<HistoryEntry>> {
        // A panic while holding the lock leaves a Vec that is still valid.
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn push(&self, entry: HistoryEntry) {
        self.lock().push(entry);
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Snapshot in insertion order.
    pub fn entries(&self) -> Vec<HistoryEntry> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}
