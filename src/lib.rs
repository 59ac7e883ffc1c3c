//! # Heroes
//!
//! A small hero roster manager: list, inspect, add, rename, delete and
//! search "hero" records against a REST backend or an in-memory store.
//!
//! ## Features
//!
//! - **Fail-soft data service**: every operation resolves to a value or a
//!   fallback, never an error, and records what happened in a shared log
//! - **Pluggable backends**: HTTP/JSON via reqwest, or a fixture-seeded
//!   in-memory store
//! - **Headless views**: list, detail, dashboard and typeahead search
//! - **Mock API**: an Axum server speaking the same endpoint contract
//!
//! ## Modules
//!
//! - [`service`]: backends and the `HeroService`
//! - [`views`]: view models driven by the service
//! - [`routes`]: route table and navigation history
//! - [`api`]: mock REST server
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use heroes::app::{App, Page};
//!
//! #[tokio::main]
//! async fn main() {
//!     let app = App::with_fixture();
//!
//!     if let Page::Heroes(mut list) = app.open("/heroes").await {
//!         list.add("Zeta").await;
//!         println!("{} heroes", list.heroes().len());
//!     }
//!
//!     for message in app.messages().messages() {
//!         println!("{}", message);
//!     }
//! }
//! ```

pub mod api;
pub mod app;
pub mod config;
pub mod fixture;
pub mod hero;
pub mod messages;
pub mod routes;
pub mod service;
pub mod views;

// Re-export top-level types for convenience
pub use hero::{Hero, HeroId, HeroRef, NewHero};

pub use messages::MessageLog;

pub use service::{
    BackendError, BackendResult, HeroBackend, HeroService, HttpBackend, HttpBackendConfig,
    InMemoryBackend,
};

pub use views::{DashboardView, HeroDetailView, HeroSearch, HeroesView};

pub use routes::{Navigator, Route};

pub use app::{App, Page};

pub use api::{build_router, serve, ApiError, AppState};

pub use config::{ClientConfig, Config, ConfigError, LoggingConfig, ServerConfig};
