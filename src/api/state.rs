//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use std::sync::Arc;
use std::time::Instant;

use crate::service::HeroBackend;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Hero store backing the endpoints
    pub store: Arc<dyn HeroBackend>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    pub fn new(store: Arc<dyn HeroBackend>) -> Self {
        Self {
            store,
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
