use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};

use crate::{
    models::appointment::{Appointment, NewAppointment},
    range::DateRange,
};

/// What the scheduling core needs from persistence.
///
/// Failures are opaque [`eyre::Report`]s; the core never interprets them.
#[async_trait]
pub trait AppointmentStore: Send + Sync {
    /// A trainer's appointments overlapping `range`, ascending by start.
    async fn fetch_by_trainer_and_range(
        &self,
        trainer_id: i64,
        range: &DateRange,
    ) -> eyre::Result<Vec<Appointment>>;

    /// Every appointment of a trainer, ascending by start.
    async fn fetch_by_trainer(&self, trainer_id: i64) -> eyre::Result<Vec<Appointment>>;

    /// Appointments sharing the user or the trainer with exactly this
    /// start and end.
    async fn count_conflicts(
        &self,
        user_id: i64,
        trainer_id: i64,
        starts_at: DateTime<FixedOffset>,
        ends_at: DateTime<FixedOffset>,
    ) -> eyre::Result<i64>;

    /// Stores the candidate and assigns its id. Returns `None` when the slot
    /// was taken by the time the insert ran.
    async fn insert(&self, appointment: &NewAppointment) -> eyre::Result<Option<Appointment>>;
}
