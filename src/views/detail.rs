//! Hero Detail View

use std::sync::Arc;

use crate::hero::{Hero, HeroId};
use crate::routes::{Navigator, Route};
use crate::service::HeroService;

/// Detail view model for a single hero
pub struct HeroDetailView {
    service: Arc<HeroService>,
    navigator: Arc<Navigator>,
    hero: Option<Hero>,
}

impl HeroDetailView {
    pub fn new(service: Arc<HeroService>, navigator: Arc<Navigator>) -> Self {
        Self {
            service,
            navigator,
            hero: None,
        }
    }

    /// Detail view bound directly to a hero handed over by a parent view
    pub fn from_hero(service: Arc<HeroService>, navigator: Arc<Navigator>, hero: Hero) -> Self {
        Self {
            hero: Some(hero),
            ..Self::new(service, navigator)
        }
    }

    /// Resolve the hero for a route id
    pub async fn load(&mut self, id: HeroId) {
        self.hero = self.service.get_hero(id).await;
    }

    pub fn hero(&self) -> Option<&Hero> {
        self.hero.as_ref()
    }

    /// Edit the held hero's name. No-op when nothing is held.
    pub fn rename(&mut self, name: &str) {
        if let Some(hero) = self.hero.as_mut() {
            hero.name = name.to_string();
        }
    }

    /// Persist the held hero, then navigate back whatever the outcome
    pub async fn save(&mut self) -> Option<Route> {
        if let Some(hero) = &self.hero {
            self.service.update_hero(hero).await;
        }
        self.go_back()
    }

    pub fn go_back(&self) -> Option<Route> {
        self.navigator.back()
    }
}
