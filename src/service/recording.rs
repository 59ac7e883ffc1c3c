//! Call-recording backend used by unit tests.
//!
//! Wraps an [`InMemoryBackend`] and records every call as `METHOD /path`.
//! When switched to failing mode every call reports
//! [`BackendError::Unavailable`] without touching the store. Searches can
//! be slowed down to keep a request in flight.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use super::backend::{BackendError, BackendResult, HeroBackend};
use super::memory::InMemoryBackend;
use crate::hero::{Hero, HeroId, NewHero};

#[derive(Default)]
pub(crate) struct RecordingBackend {
    inner: InMemoryBackend,
    calls: Mutex<Vec<String>>,
    failing: AtomicBool,
    search_delay_ms: AtomicU64,
}

impl RecordingBackend {
    pub(crate) fn with_fixture() -> Self {
        Self {
            inner: InMemoryBackend::with_fixture(),
            ..Default::default()
        }
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Delay every search response by `delay`
    pub(crate) fn set_delay(&self, delay: Duration) {
        self.search_delay_ms
            .store(delay.as_millis() as u64, Ordering::SeqCst);
    }

    fn record(&self, call: String) -> BackendResult<()> {
        self.calls.lock().unwrap().push(call);
        if self.failing.load(Ordering::SeqCst) {
            Err(BackendError::Unavailable)
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl HeroBackend for RecordingBackend {
    async fn list(&self) -> BackendResult<Vec<Hero>> {
        self.record("GET /heroes".to_string())?;
        self.inner.list().await
    }

    async fn get(&self, id: HeroId) -> BackendResult<Hero> {
        self.record(format!("GET /heroes/{}", id))?;
        self.inner.get(id).await
    }

    async fn search(&self, term: &str) -> BackendResult<Vec<Hero>> {
        self.record(format!("GET /heroes?name={}", term))?;
        let delay = self.search_delay_ms.load(Ordering::SeqCst);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }
        self.inner.search(term).await
    }

    async fn create(&self, hero: &NewHero) -> BackendResult<Hero> {
        self.record("POST /heroes".to_string())?;
        self.inner.create(hero).await
    }

    async fn update(&self, hero: &Hero) -> BackendResult<()> {
        self.record("PUT /heroes".to_string())?;
        self.inner.update(hero).await
    }

    async fn delete(&self, id: HeroId) -> BackendResult<()> {
        self.record(format!("DELETE /heroes/{}", id))?;
        self.inner.delete(id).await
    }
}
