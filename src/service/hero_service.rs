//! Hero Data Service
//!
//! Single point of contact for hero persistence. Every operation resolves
//! exactly once: to the backend's value on success, or to a fallback on
//! failure. Failures never reach the caller; each remote call appends one
//! entry to the shared [`MessageLog`].

use std::fmt::Display;
use std::sync::Arc;

use super::backend::{BackendError, HeroBackend};
use crate::hero::{Hero, HeroId, HeroRef, NewHero};
use crate::messages::MessageLog;

/// Fail-soft CRUD service over a [`HeroBackend`]
#[derive(Clone)]
pub struct HeroService {
    backend: Arc<dyn HeroBackend>,
    messages: MessageLog,
}

impl HeroService {
    pub fn new(backend: Arc<dyn HeroBackend>, messages: MessageLog) -> Self {
        Self { backend, messages }
    }

    /// The log this service writes to
    pub fn messages(&self) -> &MessageLog {
        &self.messages
    }

    /// Fetch every hero. Resolves to an empty list on failure.
    pub async fn get_heroes(&self) -> Vec<Hero> {
        match self.backend.list().await {
            Ok(heroes) => {
                tracing::debug!(count = heroes.len(), "Fetched heroes");
                self.log("fetched heroes");
                heroes
            }
            Err(e) => self.handle_error("getHeroes", e, Vec::new()),
        }
    }

    /// Fetch one hero by id. Resolves to `None` when missing or on failure.
    pub async fn get_hero(&self, id: HeroId) -> Option<Hero> {
        match self.backend.get(id).await {
            Ok(hero) => {
                self.log(format!("fetched hero id={}", id));
                Some(hero)
            }
            Err(e) => self.handle_error(format!("getHero id={}", id), e, None),
        }
    }

    /// Create a hero. Resolves to the stored hero with its assigned id.
    pub async fn add_hero(&self, hero: NewHero) -> Option<Hero> {
        match self.backend.create(&hero).await {
            Ok(created) => {
                self.log(format!("added hero w/ id={}", created.id));
                Some(created)
            }
            Err(e) => self.handle_error("addHero", e, None),
        }
    }

    /// Persist an edited hero. `Some(())` acknowledges the write.
    pub async fn update_hero(&self, hero: &Hero) -> Option<()> {
        match self.backend.update(hero).await {
            Ok(()) => {
                self.log(format!("updated hero id={}", hero.id));
                Some(())
            }
            Err(e) => self.handle_error("updateHero", e, None),
        }
    }

    /// Delete a hero given either its id or the hero itself.
    pub async fn delete_hero(&self, hero: impl Into<HeroRef>) -> Option<()> {
        let id = hero.into().id();
        match self.backend.delete(id).await {
            Ok(()) => {
                self.log(format!("deleted hero id={}", id));
                Some(())
            }
            Err(e) => self.handle_error("deleteHero", e, None),
        }
    }

    /// Heroes whose name contains `term`.
    ///
    /// A blank term resolves to an empty list without a remote call.
    pub async fn search_heroes(&self, term: &str) -> Vec<Hero> {
        let term = term.trim();
        if term.is_empty() {
            return Vec::new();
        }

        match self.backend.search(term).await {
            Ok(heroes) => {
                if heroes.is_empty() {
                    self.log(format!("no heroes matching \"{}\"", term));
                } else {
                    self.log(format!("found heroes matching \"{}\"", term));
                }
                heroes
            }
            Err(e) => self.handle_error("searchHeroes", e, Vec::new()),
        }
    }

    fn log(&self, message: impl Display) {
        self.messages.add(format!("HeroService: {}", message));
    }

    /// Log a failed operation and substitute the fallback value
    fn handle_error<T>(&self, operation: impl Display, error: BackendError, fallback: T) -> T {
        tracing::error!(operation = %operation, error = %error, "Hero operation failed");
        self.log(format!("{} failed: {}", operation, error));
        fallback
    }
}
