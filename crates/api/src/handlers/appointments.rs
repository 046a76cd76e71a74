use axum::{Json, extract::State, http::StatusCode};
use fitslot_core::models::appointment::{Appointment, CreateAppointmentRequest, RangeQuery};
use std::sync::Arc;

use crate::{
    ApiState,
    extract::{self, Path, Query},
    middleware::error_handling::AppError,
};

/// `POST /appointments`: books a slot and answers 201 with the stored
/// appointment.
#[axum::debug_handler]
pub async fn create_appointment(
    State(state): State<Arc<ApiState>>,
    extract::Json(payload): extract::Json<CreateAppointmentRequest>,
) -> Result<(StatusCode, Json<Appointment>), AppError> {
    let appointment = state.bookings.book(&payload).await?;

    Ok((StatusCode::CREATED, Json(appointment)))
}

/// `GET /trainers/:trainer_id/appointments[?starts_at=..&ends_at=..]`
#[axum::debug_handler]
pub async fn list_trainer_appointments(
    State(state): State<Arc<ApiState>>,
    Path(trainer_id): Path<i64>,
    Query(query): Query<RangeQuery>,
) -> Result<Json<Vec<Appointment>>, AppError> {
    let appointments = state.bookings.appointments(trainer_id, &query).await?;

    Ok(Json(appointments))
}
