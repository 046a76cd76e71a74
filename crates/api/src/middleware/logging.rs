//! Per-request spans keyed by `x-request-id`.
//!
//! A missing id is generated, the id is recorded on the request span, and the
//! same id is echoed on the response. A panicking handler is answered with a
//! 500 inside the span, so the panic is logged against its request id.

use std::any::Any;

use axum::{
    Router,
    body::Body,
    http::{HeaderName, Request},
    response::{IntoResponse, Response},
};
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::{DefaultOnResponse, TraceLayer},
};
use tracing::{Level, error, info_span};

use crate::middleware::error_handling::AppError;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

pub fn with_request_tracing(router: Router) -> Router {
    let header = HeaderName::from_static(REQUEST_ID_HEADER);

    let trace = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            let request_id = request
                .headers()
                .get(REQUEST_ID_HEADER)
                .and_then(|value| value.to_str().ok())
                .unwrap_or("-");

            info_span!(
                "request",
                method = %request.method(),
                uri = %request.uri(),
                request_id = %request_id,
            )
        })
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    // Outermost first: the id must exist before the span is made.
    router.layer(
        ServiceBuilder::new()
            .layer(SetRequestIdLayer::new(header.clone(), MakeRequestUuid))
            .layer(trace)
            .layer(PropagateRequestIdLayer::new(header))
            .layer(CatchPanicLayer::custom(panic_response)),
    )
}

fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    };
    error!("Handler panicked: {}", detail);

    AppError::Internal.into_response()
}
