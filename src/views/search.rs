//! Hero Search
//!
//! Typeahead over [`HeroService::search_heroes`]. A search waits out the
//! debounce interval, skips a term equal to the previous one, and only the
//! latest search may publish its results. Responses of superseded searches
//! are discarded, not cancelled.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use crate::hero::Hero;
use crate::service::HeroService;

/// Default debounce between keystrokes and the remote search
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

pub struct HeroSearch {
    service: Arc<HeroService>,
    debounce: Duration,
    keystrokes: AtomicU64,
    requests: AtomicU64,
    last_term: Mutex<Option<String>>,
    results: Mutex<Vec<Hero>>,
}

impl HeroSearch {
    pub fn new(service: Arc<HeroService>) -> Self {
        Self::with_debounce(service, DEFAULT_DEBOUNCE)
    }

    pub fn with_debounce(service: Arc<HeroService>, debounce: Duration) -> Self {
        Self {
            service,
            debounce,
            keystrokes: AtomicU64::new(0),
            requests: AtomicU64::new(0),
            last_term: Mutex::new(None),
            results: Mutex::new(Vec::new()),
        }
    }

    /// Search for `term`. Returns `true` if this call published results.
    pub async fn search(&self, term: &str) -> bool {
        let keystroke = self.keystrokes.fetch_add(1, Ordering::SeqCst) + 1;

        if !self.debounce.is_zero() {
            tokio::time::sleep(self.debounce).await;
        }
        if self.keystrokes.load(Ordering::SeqCst) != keystroke {
            tracing::trace!(term, "Search superseded during debounce");
            return false;
        }

        // A repeated term leaves any in-flight request as the latest one
        let request = {
            let mut last = self.last_term.lock().unwrap_or_else(PoisonError::into_inner);
            if last.as_deref() == Some(term) {
                return false;
            }
            *last = Some(term.to_string());
            self.requests.fetch_add(1, Ordering::SeqCst) + 1
        };

        let heroes = self.service.search_heroes(term).await;
        if self.requests.load(Ordering::SeqCst) != request {
            tracing::debug!(term, "Discarding superseded search response");
            return false;
        }

        *self.results.lock().unwrap_or_else(PoisonError::into_inner) = heroes;
        true
    }

    /// Results of the most recent published search
    pub fn results(&self) -> Vec<Hero> {
        self.results
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
