//! Catalog resources served by the storefront API.

#![allow(clippy::unwrap_used)]

use std::time::Duration;

use axum::http::StatusCode;
use full_colombiano_integration_tests::{failing_geo_server, mock_server, server, test_config};
use full_colombiano_storefront::state::AppState;
use serde_json::{Value, json};

#[tokio::test]
async fn test_health() {
    let server = mock_server();
    let response = server.get("/health").await;

    response.assert_status_ok();
    assert_eq!(response.text(), "ok");
}

#[tokio::test]
async fn test_departments_resource() {
    let server = mock_server();
    let response = server.get("/api/geo/departments").await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["loading"], false);
    assert!(json["error"].is_null());

    let departments = json["data"].as_array().unwrap();
    assert_eq!(departments.len(), 24);
    assert!(
        departments
            .iter()
            .any(|d| d["id"] == "05" && d["name"] == "Antioquia")
    );
}

#[tokio::test]
async fn test_cities_of_department() {
    let server = mock_server();
    let json = server
        .get("/api/geo/departments/05/cities")
        .await
        .json::<Value>();

    let cities = json["data"].as_array().unwrap();
    assert!(!cities.is_empty());
    assert!(cities.iter().all(|c| c["departmentId"] == "05"));
    assert!(cities.iter().any(|c| c["name"] == "Medellín"));
}

#[tokio::test]
async fn test_unknown_department_has_no_cities() {
    let server = mock_server();
    let response = server.get("/api/geo/departments/999/cities").await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["data"], json!([]));
    assert!(json["error"].is_null());
}

#[tokio::test]
async fn test_failing_service_falls_back_to_empty_with_notice() {
    let server = failing_geo_server();
    let response = server.get("/api/geo/departments").await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["data"], json!([]));
    assert_eq!(json["loading"], false);
    assert_eq!(json["error"], "No se pudieron cargar los departamentos");
}

#[tokio::test]
async fn test_store_categories() {
    let server = mock_server();
    let json = server.get("/api/store-categories").await.json::<Value>();

    let categories = json["data"].as_array().unwrap();
    assert_eq!(categories.len(), 10);
    assert!(categories.iter().all(|c| c["slug"].is_string()));
}

#[tokio::test(start_paused = true)]
async fn test_mock_latency_applies_to_requests() {
    let server = server(AppState::new(test_config(Duration::from_millis(500))));

    let start = tokio::time::Instant::now();
    let response = server.get("/api/geo/departments").await;

    response.assert_status_ok();
    assert!(start.elapsed() >= Duration::from_millis(500));
}

#[tokio::test]
async fn test_navigation_menus() {
    let server = mock_server();
    let response = server.get("/api/navigation").await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    let dashboard: Vec<&str> = json["dashboard"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|l| l["href"].as_str())
        .collect();
    assert_eq!(dashboard, ["/d/products", "/d/orders", "/d/store"]);
}

#[tokio::test]
async fn test_request_id_is_generated_or_reused() {
    let server = mock_server();

    let response = server.get("/health").await;
    let generated = response.header("x-request-id");
    assert_eq!(generated.to_str().unwrap().len(), 36);

    let response = server
        .get("/health")
        .add_header("x-request-id", "edge-1234")
        .await;
    assert_eq!(response.header("x-request-id"), "edge-1234");
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let server = mock_server();
    server
        .get("/api/nope")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}
