//! Hero Data Access
//!
//! ## Architecture
//!
//! - **HeroBackend**: raw CRUD calls, reports failures as `BackendError`
//! - **HttpBackend**: REST/JSON backend built on reqwest
//! - **InMemoryBackend**: fixture-seeded store, also used by the mock server
//! - **HeroService**: fail-soft facade shared by every view
//!
//! ## Data Flow
//!
//! 1. A view calls a `HeroService` operation
//! 2. The service issues one backend call
//! 3. Success or failure is appended to the `MessageLog`
//! 4. The view receives the value, or the operation's fallback

mod backend;
mod hero_service;
mod http;
mod memory;
#[cfg(test)]
pub(crate) mod recording;

pub use backend::{BackendError, BackendResult, HeroBackend};
pub use hero_service::HeroService;
pub use http::{HttpBackend, HttpBackendConfig};
pub use memory::InMemoryBackend;
