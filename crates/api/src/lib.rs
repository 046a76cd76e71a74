//! # Fitslot API
//!
//! HTTP surface of the fitslot booking service: book a half-hour session with
//! a trainer, list a trainer's appointments and ask for open slots.
//!
//! ## Architecture
//!
//! - **Routes**: URL structure, one module per resource
//! - **Handlers**: Extract the request, call [`BookingService`], wrap the result
//! - **Middleware**: Error-to-status mapping, panic recovery and request tracing
//! - **Config**: Environment-driven settings
//!
//! All booking rules live in `fitslot-core`; this crate only translates.

/// Configuration module for API settings
pub mod config;
/// Request extractors with JSON error bodies
pub mod extract;
/// Request handlers
pub mod handlers;
/// Error mapping and request tracing
pub mod middleware;
/// Route definitions
pub mod routes;

use std::{sync::Arc, time::Duration};

use axum::{
    Router,
    http::{HeaderValue, Method, header},
};
use eyre::{Result, WrapErr};
use fitslot_core::{
    rules::AppointmentValidator,
    service::BookingService,
    time::{Clock, SystemClock},
};
use fitslot_db::{DbPool, SqlAppointmentStore};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer};
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use crate::config::ApiConfig;

/// Shared application state handed to every request handler.
pub struct ApiState {
    pub bookings: BookingService,
}

impl ApiState {
    /// Wires a SQLite-backed booking service around `clock`.
    pub fn new(pool: DbPool, clock: Arc<dyn Clock>) -> Self {
        let store = SqlAppointmentStore::new(pool);
        let bookings = BookingService::new(Arc::new(store), AppointmentValidator::new(clock));
        Self { bookings }
    }
}

/// Installs the global `tracing` subscriber. Call once, from a binary.
pub fn init_tracing(level: Level) -> Result<()> {
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

/// Builds the application router with every route and layer attached.
pub fn build_router(state: Arc<ApiState>, config: &ApiConfig) -> Result<Router> {
    let app = Router::new()
        .merge(routes::health::routes())
        .merge(routes::appointments::routes())
        .merge(routes::trainers::routes())
        .with_state(state);

    let app = match &config.cors_origins {
        Some(origins) => {
            let origins = origins
                .iter()
                .map(|origin| {
                    origin
                        .parse::<HeaderValue>()
                        .wrap_err_with(|| format!("Invalid CORS origin: {}", origin))
                })
                .collect::<Result<Vec<_>>>()?;

            let cors = CorsLayer::new()
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
                .allow_origin(origins);

            app.layer(cors)
        }
        None => app,
    };

    let app = app.layer(TimeoutLayer::new(Duration::from_secs(
        config.request_timeout,
    )));

    Ok(middleware::logging::with_request_tracing(app))
}

/// Starts the API server on `config.server_addr()` over `db_pool`.
pub async fn start_server(config: ApiConfig, db_pool: DbPool) -> Result<()> {
    let state = Arc::new(ApiState::new(db_pool, Arc::new(SystemClock)));
    let app = build_router(state, &config)?;

    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .wrap_err_with(|| format!("Failed to bind {}", addr))?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
