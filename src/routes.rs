//! Route Table
//!
//! Static mapping from paths to views, plus the navigation history the
//! detail view walks back through.
//!
//! - `""`, `"/"` - redirect to `/dashboard`
//! - `/dashboard` - Dashboard
//! - `/heroes` - Hero list
//! - `/detail/{id}` - Hero detail

use std::fmt;
use std::sync::{PoisonError, RwLock};

use crate::hero::HeroId;

/// Path the empty route redirects to
pub const DEFAULT_PATH: &str = "/dashboard";

/// A resolved route
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Dashboard,
    Heroes,
    Detail(HeroId),
    NotFound(String),
}

impl Route {
    /// Resolve a path, applying the default redirect
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim().trim_matches('/');
        if trimmed.is_empty() {
            return Self::parse(DEFAULT_PATH);
        }

        let segments: Vec<&str> = trimmed.split('/').collect();
        match segments.as_slice() {
            ["dashboard"] => Route::Dashboard,
            ["heroes"] => Route::Heroes,
            ["detail", id] => match id.parse() {
                Ok(id) => Route::Detail(id),
                Err(_) => Route::NotFound(path.to_string()),
            },
            _ => Route::NotFound(path.to_string()),
        }
    }

    /// Canonical path for this route
    pub fn path(&self) -> String {
        match self {
            Route::Dashboard => "/dashboard".to_string(),
            Route::Heroes => "/heroes".to_string(),
            Route::Detail(id) => format!("/detail/{}", id),
            Route::NotFound(path) => path.clone(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Navigation history shared by the views
#[derive(Debug, Default)]
pub struct Navigator {
    history: RwLock<Vec<Route>>,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve `path` and push it onto the history
    pub fn navigate(&self, path: &str) -> Route {
        let route = Route::parse(path);
        tracing::debug!(route = %route, "Navigate");
        self.history
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(route.clone());
        route
    }

    /// Step back one entry. Returns the route that is now current.
    ///
    /// The first entry is never popped.
    pub fn back(&self) -> Option<Route> {
        let mut history = self.history.write().unwrap_or_else(PoisonError::into_inner);
        if history.len() > 1 {
            history.pop();
        }
        let current = history.last().cloned();
        tracing::debug!(route = ?current, "Navigate back");
        current
    }

    pub fn current(&self) -> Option<Route> {
        self.history
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }

    /// Number of entries in the history
    pub fn depth(&self) -> usize {
        self.history.read().unwrap_or_else(PoisonError::into_inner).len()
    }
}
