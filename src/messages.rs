//! Notification Log
//!
//! Append-only list of human-readable status strings shared between the
//! data service and whatever surface displays them. Cloning the log
//! yields another handle to the same entries.

use std::sync::{Arc, PoisonError, RwLock};

/// Shared, append-only message log
#[derive(Debug, Clone, Default)]
pub struct MessageLog {
    entries: Arc<RwLock<Vec<String>>>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message
    pub fn add(&self, message: impl Into<String>) {
        let message = message.into();
        tracing::info!(target: "heroes::messages", "{}", message);
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message);
    }

    /// Snapshot of all messages, oldest first
    pub fn messages(&self) -> Vec<String> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every message
    pub fn clear(&self) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}
