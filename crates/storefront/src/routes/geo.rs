//! Department and city listings.

use axum::{
    Json,
    extract::{Path, State},
};

use full_colombiano_core::{City, Department, DepartmentId};

use crate::services::{Resource, ResourceLoader};
use crate::state::AppState;

const DEPARTMENTS_NOTICE: &str = "No se pudieron cargar los departamentos";
const CITIES_NOTICE: &str = "No se pudieron cargar las ciudades";

/// List all departments.
pub async fn departments(State(state): State<AppState>) -> Json<Resource<Vec<Department>>> {
    let geo = state.geo();
    Json(ResourceLoader::load(DEPARTMENTS_NOTICE, async move { geo.departments().await }).await)
}

/// List the cities of a department.
///
/// Unknown departments produce an empty list, not a 404.
pub async fn cities(
    State(state): State<AppState>,
    Path(department_id): Path<String>,
) -> Json<Resource<Vec<City>>> {
    let geo = state.geo();
    let department_id = DepartmentId::new(department_id);
    Json(ResourceLoader::load(CITIES_NOTICE, async move { geo.cities(&department_id).await }).await)
}
