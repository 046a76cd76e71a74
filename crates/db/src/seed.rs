//! Bulk import of appointments from a JSON array.
//!
//! Imported rows keep their ids and skip the booking rules; the unique
//! indexes still reject duplicates.

use std::path::Path;

use eyre::{Result, WrapErr};
use fitslot_core::models::appointment::Appointment;
use tracing::info;

use crate::{DbPool, repositories::appointment::insert_appointment_with_id};

pub fn load_appointments(path: impl AsRef<Path>) -> Result<Vec<Appointment>> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read seed file {}", path.display()))?;
    let appointments: Vec<Appointment> = serde_json::from_str(&raw)
        .wrap_err_with(|| format!("Failed to parse seed file {}", path.display()))?;

    Ok(appointments)
}

/// Inserts every appointment in one transaction and returns how many were
/// written.
pub async fn seed_appointments(pool: &DbPool, appointments: &[Appointment]) -> Result<usize> {
    let mut tx = pool.begin().await?;

    for appointment in appointments {
        insert_appointment_with_id(&mut *tx, appointment)
            .await
            .wrap_err_with(|| format!("Failed to import appointment {}", appointment.id))?;
    }

    tx.commit().await?;

    info!("Seeded {} appointments", appointments.len());
    Ok(appointments.len())
}
