//! Registration, login and session handling.

#![allow(clippy::unwrap_used)]

use axum::http::StatusCode;
use full_colombiano_integration_tests::{mock_server, registration};
use serde_json::{Value, json};

#[tokio::test]
async fn test_me_requires_login() {
    let server = mock_server();
    server
        .get("/api/auth/me")
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_register_logs_in() {
    let server = mock_server();

    let response = server
        .post("/api/auth/register")
        .json(&registration("vale@example.co"))
        .await;
    response.assert_status(StatusCode::CREATED);

    let user = response.json::<Value>();
    assert_eq!(user["email"], "vale@example.co");
    assert_eq!(user["name"], "Valentina Ospina");
    assert_eq!(user["isSeller"], false);

    let me = server.get("/api/auth/me").await;
    me.assert_status_ok();
    assert_eq!(me.json::<Value>()["id"], user["id"]);
}

#[tokio::test]
async fn test_register_validation_errors() {
    let server = mock_server();

    let mut body = registration("not-an-email");
    body["passwordConfirmation"] = json!("otra");
    body["acceptTerms"] = json!(false);

    let response = server.post("/api/auth/register").json(&body).await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

    let json = response.json::<Value>();
    let fields = &json["fields"];
    assert_eq!(fields["email"][0], "Correo electrónico inválido");
    assert_eq!(fields["passwordConfirmation"][0], "Las contraseñas no coinciden");
    assert!(fields["acceptTerms"].is_array());
}

#[tokio::test]
async fn test_field_errors_use_submitted_names() {
    let server = mock_server();

    let mut body = registration("nombres@example.co");
    body["firstName"] = json!("X");
    body["passwordConfirmation"] = json!("otra2024");

    let json = server
        .post("/api/auth/register")
        .json(&body)
        .await
        .json::<Value>();
    let mut fields: Vec<&str> = json["fields"]
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    fields.sort_unstable();
    assert_eq!(fields, ["firstName", "passwordConfirmation"]);
}

#[tokio::test]
async fn test_unreadable_body_gets_json_error() {
    let server = mock_server();

    let mut body = registration("incompleto@example.co");
    body.as_object_mut().unwrap().remove("phone");

    let response = server.post("/api/auth/register").json(&body).await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.header("content-type"), "application/json");
    assert_eq!(
        response.json::<Value>()["error"],
        "La solicitud no tiene el formato esperado"
    );

    let response = server
        .post("/api/auth/login")
        .bytes("{not json".into())
        .content_type("application/json")
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>()["error"],
        "La solicitud no tiene el formato esperado"
    );
}

#[tokio::test]
async fn test_duplicate_registration_conflicts() {
    let mut server = mock_server();
    let body = registration("dup@example.co");

    server
        .post("/api/auth/register")
        .json(&body)
        .await
        .assert_status(StatusCode::CREATED);

    server.clear_cookies();
    let response = server.post("/api/auth/register").json(&body).await;
    response.assert_status(StatusCode::CONFLICT);
    assert_eq!(
        response.json::<Value>()["error"],
        "Ya existe una cuenta con este correo"
    );
}

#[tokio::test]
async fn test_login_logout_flow() {
    let mut server = mock_server();
    server
        .post("/api/auth/register")
        .json(&registration("flow@example.co"))
        .await
        .assert_status(StatusCode::CREATED);
    server.clear_cookies();

    server
        .post("/api/auth/login")
        .json(&json!({ "email": "flow@example.co", "password": "equivocada1" }))
        .await
        .assert_status(StatusCode::UNAUTHORIZED);

    server
        .post("/api/auth/login")
        .json(&json!({ "email": "flow@example.co", "password": "bandeja2024" }))
        .await
        .assert_status_ok();
    server.get("/api/auth/me").await.assert_status_ok();

    server
        .post("/api/auth/logout")
        .await
        .assert_status(StatusCode::NO_CONTENT);
    server
        .get("/api/auth/me")
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_unknown_email() {
    let server = mock_server();
    let response = server
        .post("/api/auth/login")
        .json(&json!({ "email": "nadie@example.co", "password": "x1" }))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.json::<Value>()["error"],
        "Correo o contraseña incorrectos"
    );
}
