//! In-Memory Backend
//!
//! Fixture-backed hero store. Stands in for a remote API in the demo and
//! tests, and is the store behind the mock REST server.

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::backend::{BackendError, BackendResult, HeroBackend};
use crate::fixture;
use crate::hero::{Hero, HeroId, NewHero};

/// First id handed out by an empty store
const FIRST_ID: HeroId = 11;

/// In-memory hero store
#[derive(Debug, Default)]
pub struct InMemoryBackend {
    heroes: RwLock<Vec<Hero>>,
}

impl InMemoryBackend {
    /// Create a store holding the given heroes
    pub fn new(heroes: Vec<Hero>) -> Self {
        Self {
            heroes: RwLock::new(heroes),
        }
    }

    /// Create a store seeded with the mock roster
    pub fn with_fixture() -> Self {
        Self::new(fixture::mock_heroes())
    }

    /// Number of stored heroes
    pub async fn len(&self) -> usize {
        self.heroes.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Next identifier: one past the highest stored id
    fn gen_id(heroes: &[Hero]) -> BackendResult<HeroId> {
        match heroes.iter().map(|h| h.id).max() {
            Some(max) => max
                .checked_add(1)
                .ok_or_else(|| BackendError::Validation("hero id space exhausted".to_string())),
            None => Ok(FIRST_ID),
        }
    }

    fn validate_name(name: &str) -> BackendResult<String> {
        let name = name.trim();
        if name.is_empty() {
            return Err(BackendError::Validation("name cannot be empty".to_string()));
        }
        Ok(name.to_string())
    }
}

#[async_trait]
impl HeroBackend for InMemoryBackend {
    async fn list(&self) -> BackendResult<Vec<Hero>> {
        Ok(self.heroes.read().await.clone())
    }

    async fn get(&self, id: HeroId) -> BackendResult<Hero> {
        self.heroes
            .read()
            .await
            .iter()
            .find(|h| h.id == id)
            .cloned()
            .ok_or(BackendError::NotFound(id))
    }

    async fn search(&self, term: &str) -> BackendResult<Vec<Hero>> {
        let needle = term.to_lowercase();
        Ok(self
            .heroes
            .read()
            .await
            .iter()
            .filter(|h| h.name.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn create(&self, hero: &NewHero) -> BackendResult<Hero> {
        let name = Self::validate_name(&hero.name)?;

        let mut heroes = self.heroes.write().await;
        let created = Hero::new(Self::gen_id(&heroes)?, name);
        heroes.push(created.clone());

        tracing::debug!(hero_id = created.id, "Stored new hero");
        Ok(created)
    }

    async fn update(&self, hero: &Hero) -> BackendResult<()> {
        let name = Self::validate_name(&hero.name)?;

        let mut heroes = self.heroes.write().await;
        let existing = heroes
            .iter_mut()
            .find(|h| h.id == hero.id)
            .ok_or(BackendError::NotFound(hero.id))?;
        existing.name = name;

        Ok(())
    }

    async fn delete(&self, id: HeroId) -> BackendResult<()> {
        let mut heroes = self.heroes.write().await;
        let index = heroes
            .iter()
            .position(|h| h.id == id)
            .ok_or(BackendError::NotFound(id))?;
        heroes.remove(index);

        Ok(())
    }
}
