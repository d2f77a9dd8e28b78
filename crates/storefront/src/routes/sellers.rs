//! Seller onboarding.

use axum::{Json, extract::State, http::StatusCode};
use tower_sessions::Session;

use crate::error::{AppError, Result};
use crate::forms::{FormErrors, FormJson, SellerApplicationForm};
use crate::middleware::{RequireAuth, set_current_user};
use crate::models::{CurrentUser, SellerApplication};
use crate::state::AppState;

/// Submit a seller application for the logged-in account.
///
/// The category, department and city must exist in the catalogs and the
/// city must belong to the department. On success the account becomes a
/// seller and the session is refreshed.
pub async fn apply(
    State(state): State<AppState>,
    session: Session,
    RequireAuth(user): RequireAuth,
    FormJson(form): FormJson<SellerApplicationForm>,
) -> Result<(StatusCode, Json<SellerApplication>)> {
    let application = form.into_application(user.id)?;

    let errors = check_catalog_references(&state, &application).await?;
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    state.sellers().submit(application.clone()).await?;
    let account = state.auth().promote_to_seller(user.id).await?;
    set_current_user(&session, &CurrentUser::from(&account)).await?;

    Ok((StatusCode::CREATED, Json(application)))
}

/// The logged-in account's seller application.
pub async fn mine(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Result<Json<SellerApplication>> {
    state
        .sellers()
        .for_account(user.id)
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound("solicitud de vendedor".to_string()))
}

async fn check_catalog_references(
    state: &AppState,
    application: &SellerApplication,
) -> Result<FormErrors> {
    let mut errors = FormErrors::new();

    if state
        .categories()
        .category(&application.category_id)
        .await?
        .is_none()
    {
        errors.add("categoryId", "Selecciona una categoría válida");
    }

    let departments = state.geo().departments().await?;
    if !departments.iter().any(|d| d.id == application.department_id) {
        errors.add("departmentId", "Selecciona un departamento válido");
        return Ok(errors);
    }

    let cities = state.geo().cities(&application.department_id).await?;
    let city_in_department = cities
        .iter()
        .any(|c| c.id == application.city_id && c.belongs_to(&application.department_id));
    if !city_in_department {
        errors.add("cityId", "La ciudad no pertenece al departamento seleccionado");
    }

    Ok(errors)
}
