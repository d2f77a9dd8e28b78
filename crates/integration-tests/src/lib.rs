//! Integration tests for Full Colombiano.
//!
//! The storefront router runs in-process behind `axum_test::TestServer`,
//! which keeps the session cookie between requests like a browser would.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p full-colombiano-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `storefront_catalog` - Department, city and category resources
//! - `storefront_auth` - Registration, login, session and logout
//! - `storefront_sellers` - Seller onboarding

use std::sync::Arc;
use std::time::Duration;

use axum_test::TestServer;
use serde_json::{Value, json};

use full_colombiano_storefront::config::StorefrontConfig;
use full_colombiano_storefront::routes;
use full_colombiano_storefront::services::{
    CategoryService, GeoService, MockCategoryService, MockGeoService, MockLatency,
};
use full_colombiano_storefront::state::AppState;

/// Configuration with every variable at its default and the given mock delay.
///
/// # Panics
///
/// Panics if the default configuration does not load.
#[must_use]
pub fn test_config(mock_latency: Duration) -> StorefrontConfig {
    let mut config =
        StorefrontConfig::from_lookup(|_| None).expect("default configuration is valid");
    config.mock_latency = mock_latency;
    config
}

/// Test server for the full application, saving cookies between requests.
///
/// # Panics
///
/// Panics if the test server cannot be built.
#[must_use]
pub fn server(state: AppState) -> TestServer {
    TestServer::builder()
        .save_cookies()
        .build(routes::app(state))
        .expect("test server builds")
}

/// Storefront with mock services that answer immediately.
#[must_use]
pub fn mock_server() -> TestServer {
    server(AppState::new(test_config(Duration::ZERO)))
}

/// Storefront whose geo service always fails.
#[must_use]
pub fn failing_geo_server() -> TestServer {
    let geo: Arc<dyn GeoService> =
        Arc::new(MockGeoService::failing(MockLatency::NONE, "geo backend down"));
    let categories: Arc<dyn CategoryService> =
        Arc::new(MockCategoryService::new(MockLatency::NONE));
    server(AppState::with_services(
        test_config(Duration::ZERO),
        geo,
        categories,
    ))
}

/// A registration body that passes every rule.
#[must_use]
pub fn registration(email: &str) -> Value {
    json!({
        "firstName": "Valentina",
        "lastName": "Ospina",
        "email": email,
        "phone": "310 555 1234",
        "password": "bandeja2024",
        "passwordConfirmation": "bandeja2024",
        "acceptTerms": true
    })
}

/// A seller application body that passes every rule.
#[must_use]
pub fn seller_application() -> Value {
    json!({
        "storeName": "Mochilas Wayuu del Cabo",
        "ownerName": "Luz Marina Epiayú",
        "email": "ventas@mochilaswayuu.co",
        "phone": "3205551234",
        "categoryId": "3",
        "departmentId": "44",
        "cityId": "44001",
        "address": {
            "street": "Calle 2 # 5-10",
            "city": "Riohacha",
            "state": "La Guajira"
        },
        "description": "Mochilas tejidas a mano"
    })
}
