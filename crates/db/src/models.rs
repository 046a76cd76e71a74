use chrono::{DateTime, FixedOffset, SecondsFormat};
use eyre::{Result, WrapErr};
use fitslot_core::{models::appointment::Appointment, time::normalize};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row of the `appointments` table with its timestamps still as text.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbAppointment {
    pub id: i64,
    pub user_id: i64,
    pub trainer_id: i64,
    pub starts_at: String,
    pub ends_at: String,
}

/// Column encoding for timestamps: whole seconds, business offset, no `Z`.
pub fn encode_timestamp(at: &DateTime<FixedOffset>) -> String {
    normalize(at).to_rfc3339_opts(SecondsFormat::Secs, false)
}

pub fn decode_timestamp(raw: &str) -> Result<DateTime<FixedOffset>> {
    let parsed = DateTime::parse_from_rfc3339(raw)
        .wrap_err_with(|| format!("Stored timestamp is not RFC3339: {}", raw))?;
    Ok(normalize(&parsed))
}

impl TryFrom<DbAppointment> for Appointment {
    type Error = eyre::Report;

    fn try_from(row: DbAppointment) -> Result<Self> {
        Ok(Appointment {
            id: row.id,
            user_id: row.user_id,
            trainer_id: row.trainer_id,
            starts_at: decode_timestamp(&row.starts_at)?,
            ends_at: decode_timestamp(&row.ends_at)?,
        })
    }
}

pub fn into_appointments(rows: Vec<DbAppointment>) -> Result<Vec<Appointment>> {
    rows.into_iter().map(Appointment::try_from).collect()
}
