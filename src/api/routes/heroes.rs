//! Hero Routes
//!
//! CRUD endpoints over the hero store.
//!
//! - GET /api/heroes - List heroes (optionally `?name=` filtered)
//! - GET /api/heroes/:id - Get a hero
//! - POST /api/heroes - Create a hero
//! - PUT /api/heroes - Update a hero
//! - DELETE /api/heroes/:id - Delete a hero

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::api::dto::HeroListParams;
use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::hero::{Hero, HeroId, NewHero};

/// GET /api/heroes
///
/// List all heroes, or those whose name contains `name`.
pub async fn list_heroes(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HeroListParams>,
) -> ApiResult<Json<Vec<Hero>>> {
    let heroes = match params.name.as_deref() {
        Some(term) => state.store.search(term).await?,
        None => state.store.list().await?,
    };

    Ok(Json(heroes))
}

/// GET /api/heroes/:id
pub async fn get_hero(
    State(state): State<Arc<AppState>>,
    Path(id): Path<HeroId>,
) -> ApiResult<Json<Hero>> {
    Ok(Json(state.store.get(id).await?))
}

/// POST /api/heroes
///
/// Create a hero; the store assigns the id.
pub async fn create_hero(
    State(state): State<Arc<AppState>>,
    Json(req): Json<NewHero>,
) -> ApiResult<(StatusCode, Json<Hero>)> {
    let hero = state.store.create(&req).await?;

    tracing::info!(hero_id = hero.id, hero_name = %hero.name, "Created hero");

    Ok((StatusCode::CREATED, Json(hero)))
}

/// PUT /api/heroes
///
/// Replace the name of an existing hero.
pub async fn update_hero(
    State(state): State<Arc<AppState>>,
    Json(hero): Json<Hero>,
) -> ApiResult<StatusCode> {
    state.store.update(&hero).await?;

    tracing::info!(hero_id = hero.id, hero_name = %hero.name, "Updated hero");

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/heroes/:id
pub async fn delete_hero(
    State(state): State<Arc<AppState>>,
    Path(id): Path<HeroId>,
) -> ApiResult<StatusCode> {
    state.store.delete(id).await?;

    tracing::info!(hero_id = id, "Deleted hero");

    Ok(StatusCode::NO_CONTENT)
}
