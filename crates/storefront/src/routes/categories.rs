//! Store category listing.

use axum::{Json, extract::State};

use full_colombiano_core::StoreCategory;

use crate::services::{Resource, ResourceLoader};
use crate::state::AppState;

const CATEGORIES_NOTICE: &str = "No se pudieron cargar las categorías";

/// List all store categories.
pub async fn index(State(state): State<AppState>) -> Json<Resource<Vec<StoreCategory>>> {
    let categories = state.categories();
    Json(ResourceLoader::load(CATEGORIES_NOTICE, async move { categories.categories().await }).await)
}
