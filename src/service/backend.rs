//! Backend Abstraction
//!
//! A backend performs the raw CRUD calls of the heroes endpoint contract and
//! reports failures as [`BackendError`]. It does no logging of its own; the
//! [`HeroService`](super::HeroService) turns failures into fallbacks.

use async_trait::async_trait;
use thiserror::Error;

use crate::hero::{Hero, HeroId, NewHero};

/// Raw CRUD access to hero records
#[async_trait]
pub trait HeroBackend: Send + Sync {
    /// `GET /heroes`
    async fn list(&self) -> BackendResult<Vec<Hero>>;

    /// `GET /heroes/{id}`
    async fn get(&self, id: HeroId) -> BackendResult<Hero>;

    /// `GET /heroes?name={term}`
    async fn search(&self, term: &str) -> BackendResult<Vec<Hero>>;

    /// `POST /heroes`
    async fn create(&self, hero: &NewHero) -> BackendResult<Hero>;

    /// `PUT /heroes`
    async fn update(&self, hero: &Hero) -> BackendResult<()>;

    /// `DELETE /heroes/{id}`
    async fn delete(&self, id: HeroId) -> BackendResult<()>;
}

/// Errors a backend can report
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("Backend unavailable")]
    Unavailable,

    #[error("Request timeout")]
    Timeout,

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Hero with id {0} not found")]
    NotFound(HeroId),

    #[error("Invalid hero: {0}")]
    Validation(String),
}

impl BackendError {
    /// Classify a transport error the way the HTTP client reports it
    pub(crate) fn from_transport(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            BackendError::Timeout
        } else if e.is_connect() {
            BackendError::Unavailable
        } else {
            BackendError::Request(e)
        }
    }
}

/// Result type for backend calls
pub type BackendResult<T> = Result<T, BackendError>;
