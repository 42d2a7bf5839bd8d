use crate::entities::risk::{RiskEntry, RiskId};
use tracing::debug;

/// In-memory register of risk entries, kept in insertion order.
///
/// The store performs no validation: callers hand it finalized entries.
#[derive(Debug, Default, Clone)]
pub struct RegisterStore {
    entries: Vec<RiskEntry>,
}

impl RegisterStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All entries in insertion order.
    pub fn list(&self) -> &[RiskEntry] {
        &self.entries
    }

    pub fn get(&self, id: &RiskId) -> Option<&RiskEntry> {
        self.entries.iter().find(|entry| entry.id() == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Replaces the entry with the same id in place, or appends it.
    pub fn upsert(&mut self, entry: RiskEntry) {
        match self.entries.iter().position(|e| e.id() == entry.id()) {
            Some(index) => {
                debug!(id = %entry.id(), index, "replacing risk entry");
                self.entries[index] = entry;
            }
            None => {
                debug!(id = %entry.id(), "appending risk entry");
                self.entries.push(entry);
            }
        }
    }

    /// Removes the entry with this id. Unknown ids are ignored.
    pub fn remove(&mut self, id: &RiskId) -> Option<RiskEntry> {
        let index = self.entries.iter().position(|e| e.id() == id)?;
        debug!(%id, "removing risk entry");
        Some(self.entries.remove(index))
    }
}
