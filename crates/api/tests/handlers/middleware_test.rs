use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum::response::IntoResponse;
use axum::{Router, routing::get};
use axum_test::TestServer;
use fitslot_api::middleware::{
    error_handling::{AppError, map_error},
    logging::with_request_tracing,
};
use fitslot_core::errors::{BookingError, RangeViolation, RuleViolation};
use serde_json::{Value, json};

use crate::test_utils::TestContext;

#[tokio::test]
async fn test_error_handling_rule_violation() {
    let response = map_error(BookingError::Rule(RuleViolation::NotBusinessDay));
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_error_handling_range_violation() {
    let response = map_error(BookingError::Range(RangeViolation::Inverted));
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_error_handling_conflict() {
    let response = map_error(BookingError::Conflict);
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_error_handling_storage() {
    // eyre reports convert into storage failures
    let response = AppError::from(eyre::eyre!("Database error")).into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_request_id_is_generated() {
    let ctx = TestContext::new().await;

    let response = ctx.server.get("/health").await;

    let request_id = response.header("x-request-id");
    assert!(!request_id.is_empty());
}

#[tokio::test]
async fn test_request_id_is_propagated() {
    let ctx = TestContext::new().await;

    let response = ctx
        .server
        .get("/health")
        .add_header(
            HeaderName::from_static("x-request-id"),
            HeaderValue::from_static("booking-42"),
        )
        .await;

    assert_eq!(response.header("x-request-id"), "booking-42");
}

async fn explode() -> &'static str {
    panic!("handler exploded")
}

#[test_log::test(tokio::test)]
async fn test_panicking_handler_answers_500() {
    let app = with_request_tracing(Router::new().route("/explode", get(explode)));
    let server = TestServer::new(app).unwrap();

    let response = server
        .get("/explode")
        .add_header(
            HeaderName::from_static("x-request-id"),
            HeaderValue::from_static("crash-1"),
        )
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "Internal server error" })
    );
    assert_eq!(response.header("x-request-id"), "crash-1");
}

#[tokio::test]
async fn test_server_keeps_serving_after_a_panic() {
    let app = with_request_tracing(
        Router::new()
            .route("/explode", get(explode))
            .route("/calm", get(|| async { "still here" })),
    );
    let server = TestServer::new(app).unwrap();

    server
        .get("/explode")
        .await
        .assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let response = server.get("/calm").await;

    response.assert_status_ok();
    response.assert_text("still here");
}
