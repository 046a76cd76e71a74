use axum::{Router, routing::get};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/trainers/:trainer_id/appointments",
            get(handlers::appointments::list_trainer_appointments),
        )
        .route(
            "/trainers/:trainer_id/availability",
            get(handlers::availability::get_trainer_availability),
        )
}
