//! Views
//!
//! Headless view models. Each view privately owns the heroes it displays
//! and delegates persistence to the shared `HeroService`.

mod dashboard;
mod detail;
mod heroes;
mod search;

pub use dashboard::DashboardView;
pub use detail::HeroDetailView;
pub use heroes::HeroesView;
pub use search::{HeroSearch, DEFAULT_DEBOUNCE};
