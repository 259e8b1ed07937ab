//! HTTP-level tests for bearer-token authentication on the note endpoints.

mod common;

use axum::http::{header, Method, StatusCode};
use common::{body_json, build_test_app, send};
use sqlx::PgPool;
use teachnotes_api::auth::jwt::{generate_access_token, JwtConfig};

#[sqlx::test(migrations = "../db/migrations")]
async fn missing_header_returns_401(pool: PgPool) {
    let app = build_test_app(pool);
    let response = send(app, Method::GET, "/api/v1/teachernotes", None, None).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["code"], "UNAUTHORIZED");
    assert_eq!(json["error"], "Missing Authorization header");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn wrong_scheme_returns_401(pool: PgPool) {
    let app = build_test_app(pool);
    let request = axum::http::Request::builder()
        .uri("/api/v1/teachernotes/recommend")
        .header(header::AUTHORIZATION, "Basic dXNlcjpwYXNz")
        .body(axum::body::Body::empty())
        .unwrap();
    let response = tower::ServiceExt::oneshot(app, request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn token_signed_with_other_secret_returns_401(pool: PgPool) {
    let foreign = JwtConfig {
        secret: "someone-elses-secret".to_string(),
        access_token_expiry_mins: 15,
    };
    let token = generate_access_token(1, &foreign).unwrap();

    let app = build_test_app(pool);
    let response = send(app, Method::GET, "/api/v1/teachernotes", Some(&token), None).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["error"], "Invalid or expired token");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn every_owner_route_requires_auth(pool: PgPool) {
    let routes = [
        (Method::GET, "/api/v1/teachernotes"),
        (Method::POST, "/api/v1/teachernotes"),
        (Method::GET, "/api/v1/teachernotes/recommend"),
        (Method::GET, "/api/v1/teachernotes/1"),
        (Method::PUT, "/api/v1/teachernotes/1"),
        (Method::DELETE, "/api/v1/teachernotes/1"),
        (Method::GET, "/api/v1/teachernotes/1/export"),
    ];

    for (method, uri) in routes {
        let app = build_test_app(pool.clone());
        let body = matches!(method, Method::POST | Method::PUT).then(|| serde_json::json!({}));
        let response = send(app, method.clone(), uri, None, body).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{method} {uri}");
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn public_listing_ignores_missing_token(pool: PgPool) {
    let app = build_test_app(pool);
    let response = send(app, Method::GET, "/api/v1/teachernotes/public", None, None).await;

    assert_eq!(response.status(), StatusCode::OK);
}
