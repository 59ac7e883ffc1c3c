//! Heroes Demo
//!
//! Walks through the list, detail, dashboard and search views against the
//! in-memory store, then prints the message log.

use heroes::app::{App, Page};
use heroes::config::{Config, ConfigNote};
use heroes::service::InMemoryBackend;
use heroes::views::HeroSearch;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (config, notes) = Config::load_default();
    config.logging.init();
    notes.iter().for_each(ConfigNote::log);

    tracing::info!("Heroes demo v{}", env!("CARGO_PKG_VERSION"));

    let app = App::new(Arc::new(InMemoryBackend::with_fixture()));

    demo_dashboard(&app).await;
    demo_heroes(&app).await;
    demo_detail(&app).await;
    demo_search(&app, &config).await;

    println!();
    println!("Messages:");
    for message in app.messages().messages() {
        println!("  {}", message);
    }

    Ok(())
}

async fn demo_dashboard(app: &App) {
    if let Page::Dashboard(view) = app.open("/").await {
        let names: Vec<_> = view.top_heroes().iter().map(|h| h.name.as_str()).collect();
        println!("Top heroes: {}", names.join(", "));
    }
}

async fn demo_heroes(app: &App) {
    let Page::Heroes(mut view) = app.open("/heroes").await else {
        return;
    };

    println!("My heroes:");
    for hero in view.heroes() {
        println!("  {}", hero);
    }

    if let Some(hero) = view.add("Zeta").await {
        println!("Added {}", hero);
    }

    if let Some(first) = view.heroes().first().cloned() {
        // Removed locally right away; the remote delete finishes in the background
        let pending = view.delete(&first);
        println!("Deleted {} ({} left)", first, view.heroes().len());
        if let Err(e) = pending.await {
            tracing::warn!("Delete task failed: {}", e);
        }
    }
}

async fn demo_detail(app: &App) {
    let Page::Detail(mut view) = app.open("/detail/13").await else {
        return;
    };

    if let Some(hero) = view.hero() {
        println!("{} details: id={}", hero.name.to_uppercase(), hero.id);
    }

    view.rename("Bombastic");
    if let Some(route) = view.save().await {
        println!("Saved, back at {}", route);
    }
}

async fn demo_search(app: &App, config: &Config) {
    let search = HeroSearch::with_debounce(
        Arc::clone(app.service()),
        config.client.search_debounce(),
    );

    for term in ["ma", "mag", "mag"] {
        if search.search(term).await {
            let names: Vec<_> = search.results().into_iter().map(|h| h.name).collect();
            println!("Search {:?}: {}", term, names.join(", "));
        } else {
            println!("Search {:?}: unchanged", term);
        }
    }
}
