//! Data Transfer Objects
//!
//! Request and response types for the API endpoints that are not heroes
//! themselves. Hero bodies use [`Hero`](crate::hero::Hero) and
//! [`NewHero`](crate::hero::NewHero) directly.

use serde::{Deserialize, Serialize};

/// Query parameters of `GET /heroes`
#[derive(Debug, Default, Deserialize)]
pub struct HeroListParams {
    /// Optional name filter (case-insensitive substring)
    #[serde(default)]
    pub name: Option<String>,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: "healthy" or "unhealthy"
    pub status: String,
    /// Store status: "ok" or "error"
    pub store: String,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Server version
    pub version: String,
}
