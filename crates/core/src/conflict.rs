//! Double-booking check.
//!
//! Every valid appointment is a half-hour-aligned 30-minute slot, so two
//! appointments overlap exactly when their start and end are equal. The
//! check therefore asks the store for exact matches only.

use tracing::debug;

use crate::{
    errors::{BookingError, BookingResult},
    models::appointment::NewAppointment,
    store::AppointmentStore,
};

/// Fails with [`BookingError::Conflict`] when the user or the trainer
/// already holds this exact slot.
pub async fn ensure_slot_available(
    store: &dyn AppointmentStore,
    candidate: &NewAppointment,
) -> BookingResult<()> {
    let conflicts = store
        .count_conflicts(
            candidate.user_id,
            candidate.trainer_id,
            candidate.starts_at,
            candidate.ends_at,
        )
        .await?;

    if conflicts > 0 {
        debug!(
            "Slot {} taken: user={}, trainer={}, conflicts={}",
            candidate.starts_at, candidate.user_id, candidate.trainer_id, conflicts
        );
        return Err(BookingError::Conflict);
    }

    Ok(())
}
