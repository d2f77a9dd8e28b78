//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                           - Health check
//! GET  /api/navigation                   - Site menus
//!
//! # Catalogs (Resource<T> bodies)
//! GET  /api/geo/departments              - Departments
//! GET  /api/geo/departments/{id}/cities  - Cities of a department
//! GET  /api/store-categories             - Store categories
//!
//! # Auth
//! POST /api/auth/register                - Register and log in
//! POST /api/auth/login                   - Login
//! POST /api/auth/logout                  - Logout
//! GET  /api/auth/me                      - Current user (requires auth)
//!
//! # Sellers (requires auth)
//! POST /api/sellers/applications         - Submit seller application
//! GET  /api/sellers/applications/me      - Own application
//! ```

pub mod auth;
pub mod categories;
pub mod geo;
pub mod paths;
pub mod sellers;

use axum::{
    Json, Router,
    extract::Request,
    http::{HeaderName, HeaderValue, Method, header},
    middleware::from_fn,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::middleware::{REQUEST_ID_HEADER, create_session_layer, request_id_middleware};
use crate::state::AppState;

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/me", get(auth::me))
}

/// Create the geographic catalog routes router.
pub fn geo_routes() -> Router<AppState> {
    Router::new()
        .route("/departments", get(geo::departments))
        .route("/departments/{id}/cities", get(geo::cities))
}

/// Create all API routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/navigation", get(navigation))
        .route("/store-categories", get(categories::index))
        .route("/sellers/applications", post(sellers::apply))
        .route("/sellers/applications/me", get(sellers::mine))
        .nest("/geo", geo_routes())
        .nest("/auth", auth_routes())
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .nest("/api", api_routes())
}

/// Build the complete application with its middleware stack.
pub fn app(state: AppState) -> Router {
    let session_layer = create_session_layer(state.config());
    let cors = cors_layer(&state);

    let middleware = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http().make_span_with(|request: &Request| {
            tracing::info_span!(
                "request",
                method = %request.method(),
                uri = %request.uri(),
                request_id = tracing::field::Empty,
            )
        }))
        .layer(from_fn(request_id_middleware))
        .layer(cors)
        .layer(session_layer);

    routes()
        .layer(middleware)
        .with_state(state)
        // Sentry layers (outermost for full request coverage)
        .layer(sentry_tower::NewSentryLayer::new_from_top())
        .layer(sentry_tower::SentryHttpLayer::new().enable_transaction())
}

/// Allow credentialed requests from the public site origin.
fn cors_layer(state: &AppState) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE, HeaderName::from_static(REQUEST_ID_HEADER)])
        .expose_headers([HeaderName::from_static(REQUEST_ID_HEADER)])
        .allow_credentials(true);

    let origin = state.config().site_url.origin().ascii_serialization();
    match HeaderValue::from_str(&origin) {
        Ok(origin) => cors.allow_origin(origin),
        Err(e) => {
            tracing::warn!(
                error = %e,
                origin = %origin,
                "site origin is not a valid header, CORS disabled"
            );
            cors
        }
    }
}

/// Liveness health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Site menus.
async fn navigation() -> Json<paths::Navigation> {
    Json(paths::navigation())
}
