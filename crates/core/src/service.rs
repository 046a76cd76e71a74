//! # Booking service
//!
//! Ties the rule validator, the conflict check, the availability walk and a
//! store together. One instance is built by the service root and shared by
//! every request; it holds no per-request state.

use std::sync::Arc;

use tracing::info;

use crate::{
    availability::compute_availability,
    conflict::ensure_slot_available,
    errors::{BookingError, BookingResult, RuleViolation},
    models::{
        appointment::{Appointment, CreateAppointmentRequest, RangeQuery},
        timeslot::Timeslot,
    },
    range::parse_listing_range,
    rules::AppointmentValidator,
    store::AppointmentStore,
};

#[derive(Clone)]
pub struct BookingService {
    store: Arc<dyn AppointmentStore>,
    validator: AppointmentValidator,
}

impl BookingService {
    pub fn new(store: Arc<dyn AppointmentStore>, validator: AppointmentValidator) -> Self {
        Self { store, validator }
    }

    pub fn validator(&self) -> &AppointmentValidator {
        &self.validator
    }

    /// Validates, conflict-checks and stores a new appointment.
    ///
    /// The store's insert is guarded as well, so a booking that slips past
    /// the conflict check concurrently still ends in [`BookingError::Conflict`].
    pub async fn book(&self, request: &CreateAppointmentRequest) -> BookingResult<Appointment> {
        let candidate = self.validator.validate_and_build_appointment(
            request.user_id,
            request.trainer_id,
            &request.starts_at,
            &request.ends_at,
        )?;

        ensure_slot_available(self.store.as_ref(), &candidate).await?;

        let appointment = self
            .store
            .insert(&candidate)
            .await?
            .ok_or(BookingError::Conflict)?;

        info!(
            "Appointment {} booked: user={}, trainer={}, starts_at={}",
            appointment.id, appointment.user_id, appointment.trainer_id, appointment.starts_at
        );

        Ok(appointment)
    }

    /// A trainer's appointments, optionally limited to a range.
    pub async fn appointments(
        &self,
        trainer_id: i64,
        query: &RangeQuery,
    ) -> BookingResult<Vec<Appointment>> {
        if trainer_id < 1 {
            return Err(RuleViolation::InvalidTrainer.into());
        }

        let appointments = match parse_listing_range(query)? {
            Some(range) => {
                self.store
                    .fetch_by_trainer_and_range(trainer_id, &range)
                    .await?
            }
            None => self.store.fetch_by_trainer(trainer_id).await?,
        };

        Ok(appointments)
    }

    /// A trainer's open slots over a future range.
    pub async fn availability(
        &self,
        trainer_id: i64,
        query: &RangeQuery,
    ) -> BookingResult<Vec<Timeslot>> {
        compute_availability(
            self.store.as_ref(),
            trainer_id,
            query,
            self.validator.now(),
        )
        .await
    }
}
