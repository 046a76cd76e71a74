//! # Availability Handlers
//!
//! `GET /trainers/:trainer_id/availability?starts_at=..&ends_at=..` returns
//! every open half-hour slot of the trainer inside business hours, Monday to
//! Friday, over whole days of the requested range. Both bounds are required
//! and must lie in the future; the range may span at most 90 days.

use axum::{Json, extract::State};
use fitslot_core::models::{appointment::RangeQuery, timeslot::Timeslot};
use std::sync::Arc;
use tracing::info;

use crate::{
    ApiState,
    extract::{Path, Query},
    middleware::error_handling::AppError,
};

#[axum::debug_handler]
pub async fn get_trainer_availability(
    State(state): State<Arc<ApiState>>,
    Path(trainer_id): Path<i64>,
    Query(query): Query<RangeQuery>,
) -> Result<Json<Vec<Timeslot>>, AppError> {
    let slots = state.bookings.availability(trainer_id, &query).await?;

    info!("Trainer {} has {} open slots", trainer_id, slots.len());

    Ok(Json(slots))
}
