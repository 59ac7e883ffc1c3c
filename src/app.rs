//! App Root
//!
//! Composition root: builds the single shared service, log and navigator,
//! and opens views for paths.

use std::sync::Arc;

use crate::messages::MessageLog;
use crate::routes::{Navigator, Route};
use crate::service::{HeroBackend, HeroService, InMemoryBackend};
use crate::views::{DashboardView, HeroDetailView, HeroSearch, HeroesView};

/// A view opened for a route, already initialized
pub enum Page {
    Dashboard(DashboardView),
    Heroes(HeroesView),
    Detail(HeroDetailView),
    NotFound(String),
}

/// Application root holding the shared services
pub struct App {
    service: Arc<HeroService>,
    messages: MessageLog,
    navigator: Arc<Navigator>,
}

impl App {
    /// Wire the app against `backend`
    pub fn new(backend: Arc<dyn HeroBackend>) -> Self {
        let messages = MessageLog::new();
        let service = Arc::new(HeroService::new(backend, messages.clone()));

        Self {
            service,
            messages,
            navigator: Arc::new(Navigator::new()),
        }
    }

    /// Wire the app against the fixture-seeded in-memory store
    pub fn with_fixture() -> Self {
        Self::new(Arc::new(InMemoryBackend::with_fixture()))
    }

    pub fn service(&self) -> &Arc<HeroService> {
        &self.service
    }

    pub fn messages(&self) -> &MessageLog {
        &self.messages
    }

    pub fn navigator(&self) -> &Arc<Navigator> {
        &self.navigator
    }

    /// Navigate to `path` and return its initialized view
    pub async fn open(&self, path: &str) -> Page {
        match self.navigator.navigate(path) {
            Route::Dashboard => {
                let mut view = DashboardView::new(Arc::clone(&self.service));
                view.init().await;
                Page::Dashboard(view)
            }
            Route::Heroes => {
                let mut view = HeroesView::new(Arc::clone(&self.service));
                view.init().await;
                Page::Heroes(view)
            }
            Route::Detail(id) => {
                let mut view =
                    HeroDetailView::new(Arc::clone(&self.service), Arc::clone(&self.navigator));
                view.load(id).await;
                Page::Detail(view)
            }
            Route::NotFound(path) => {
                tracing::warn!(path = %path, "No route for path");
                Page::NotFound(path)
            }
        }
    }

    /// A search box bound to the shared service
    pub fn search(&self) -> HeroSearch {
        HeroSearch::new(Arc::clone(&self.service))
    }
}
