//! Dashboard View
//!
//! Shows a handful of "top heroes": the second through fifth entries of
//! the roster.

use std::sync::Arc;

use crate::hero::Hero;
use crate::service::HeroService;

const TOP_START: usize = 1;
const TOP_END: usize = 5;

pub struct DashboardView {
    service: Arc<HeroService>,
    heroes: Vec<Hero>,
}

impl DashboardView {
    pub fn new(service: Arc<HeroService>) -> Self {
        Self {
            service,
            heroes: Vec::new(),
        }
    }

    pub async fn init(&mut self) {
        let heroes = self.service.get_heroes().await;
        self.heroes = heroes
            .into_iter()
            .skip(TOP_START)
            .take(TOP_END - TOP_START)
            .collect();
    }

    pub fn top_heroes(&self) -> &[Hero] {
        &self.heroes
    }
}
