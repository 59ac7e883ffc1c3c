//! Hero List View
//!
//! Holds the last fetched roster and the current selection. Persistence is
//! delegated to the shared [`HeroService`].

use std::sync::Arc;
use tokio::task::JoinHandle;

use crate::hero::{Hero, NewHero};
use crate::service::HeroService;

/// Hero list view model
pub struct HeroesView {
    service: Arc<HeroService>,
    heroes: Vec<Hero>,
    selected: Option<Hero>,
}

impl HeroesView {
    pub fn new(service: Arc<HeroService>) -> Self {
        Self {
            service,
            heroes: Vec::new(),
            selected: None,
        }
    }

    /// Load the roster, replacing whatever is held
    pub async fn init(&mut self) {
        self.heroes = self.service.get_heroes().await;
    }

    pub fn heroes(&self) -> &[Hero] {
        &self.heroes
    }

    pub fn selected(&self) -> Option<&Hero> {
        self.selected.as_ref()
    }

    pub fn select(&mut self, hero: &Hero) {
        self.selected = Some(hero.clone());
    }

    /// Create a hero named `name` and append it once the backend confirms.
    ///
    /// Blank names are ignored without a remote call. Returns the added hero.
    pub async fn add(&mut self, name: &str) -> Option<Hero> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }

        let hero = self.service.add_hero(NewHero::new(name)).await?;
        self.heroes.push(hero.clone());
        Some(hero)
    }

    /// Remove `hero` from the held list now and delete it remotely in the
    /// background. The remote result is not inspected.
    ///
    /// Dropping the returned handle does not cancel the delete.
    pub fn delete(&mut self, hero: &Hero) -> JoinHandle<()> {
        if let Some(index) = self.heroes.iter().position(|h| h.id == hero.id) {
            self.heroes.remove(index);
        }
        if self.selected.as_ref().is_some_and(|s| s.id == hero.id) {
            self.selected = None;
        }

        let service = Arc::clone(&self.service);
        let id = hero.id;
        tokio::spawn(async move {
            service.delete_hero(id).await;
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::MOCK_HEROES;
    use crate::messages::MessageLog;
    use crate::service::recording::RecordingBackend;

    async fn view() -> (HeroesView, Arc<RecordingBackend>) {
        let backend = Arc::new(RecordingBackend::with_fixture());
        let service = Arc::new(HeroService::new(backend.clone(), MessageLog::new()));
        let mut view = HeroesView::new(service);
        view.init().await;
        (view, backend)
    }

    #[tokio::test]
    async fn test_init_loads_roster() {
        let (view, _backend) = view().await;
        assert_eq!(view.heroes().len(), MOCK_HEROES.len());
        assert!(view.selected().is_none());
    }

    #[tokio::test]
    async fn test_init_failure_yields_empty_list() {
        let backend = Arc::new(RecordingBackend::with_fixture());
        backend.set_failing(true);
        let service = Arc::new(HeroService::new(backend, MessageLog::new()));

        let mut view = HeroesView::new(service);
        view.init().await;
        assert!(view.heroes().is_empty());
    }

    #[tokio::test]
    async fn test_add_appends_server_assigned_hero() {
        let (mut view, _backend) = view().await;
        let before = view.heroes().len();

        let added = view.add("  Zeta ").await;

        assert_eq!(added, Some(Hero::new(21, "Zeta")));
        assert_eq!(view.heroes().len(), before + 1);
        assert_eq!(view.heroes().last(), Some(&Hero::new(21, "Zeta")));
    }

    #[tokio::test]
    async fn test_add_blank_is_noop() {
        let (mut view, backend) = view().await;
        let calls_before = backend.calls().len();

        for name in ["", "   ", "\t\n"] {
            assert!(view.add(name).await.is_none());
        }

        assert_eq!(view.heroes().len(), MOCK_HEROES.len());
        assert_eq!(backend.calls().len(), calls_before);
    }

    #[tokio::test]
    async fn test_failed_add_contributes_nothing() {
        let (mut view, backend) = view().await;
        backend.set_failing(true);

        assert!(view.add("Zeta").await.is_none());
        assert_eq!(view.heroes().len(), MOCK_HEROES.len());
    }

    #[tokio::test]
    async fn test_delete_removes_immediately() {
        let (mut view, backend) = view().await;
        let target = Hero::new(13, "Bombasto");
        view.select(&target);

        let handle = view.delete(&target);

        // Removed before the remote call is awaited
        assert_eq!(view.heroes().len(), MOCK_HEROES.len() - 1);
        assert!(!view.heroes().contains(&target));
        assert!(view.selected().is_none());

        handle.await.unwrap();
        assert!(backend.calls().contains(&"DELETE /heroes/13".to_string()));
    }

    #[tokio::test]
    async fn test_delete_ignores_remote_failure() {
        let (mut view, backend) = view().await;
        backend.set_failing(true);

        view.delete(&Hero::new(11, "Mr. Nice")).await.unwrap();
        assert_eq!(view.heroes().len(), MOCK_HEROES.len() - 1);
    }

    #[tokio::test]
    async fn test_delete_survives_dropped_handle_and_view() {
        let backend = Arc::new(RecordingBackend::with_fixture());
        let messages = MessageLog::new();
        let service = Arc::new(HeroService::new(backend.clone(), messages.clone()));
        let mut view = HeroesView::new(service);
        view.init().await;

        drop(view.delete(&Hero::new(13, "Bombasto")));
        drop(view);

        let deleted = "HeroService: deleted hero id=13".to_string();
        for _ in 0..100 {
            if messages.messages().contains(&deleted) {
                break;
            }
            tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        }

        assert!(messages.messages().contains(&deleted));
        assert!(backend.calls().contains(&"DELETE /heroes/13".to_string()));
    }
}
