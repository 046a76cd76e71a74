use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};
use fitslot_core::{
    models::appointment::{Appointment, NewAppointment},
    range::DateRange,
    store::AppointmentStore,
};

use crate::{DbPool, repositories::appointment};

/// [`AppointmentStore`] over a SQLite pool.
#[derive(Debug, Clone)]
pub struct SqlAppointmentStore {
    pool: DbPool,
}

impl SqlAppointmentStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

#[async_trait]
impl AppointmentStore for SqlAppointmentStore {
    async fn fetch_by_trainer_and_range(
        &self,
        trainer_id: i64,
        range: &DateRange,
    ) -> eyre::Result<Vec<Appointment>> {
        appointment::get_appointments_by_trainer_id_in_range(
            &self.pool,
            trainer_id,
            range.start,
            range.end,
        )
        .await
    }

    async fn fetch_by_trainer(&self, trainer_id: i64) -> eyre::Result<Vec<Appointment>> {
        appointment::get_appointments_by_trainer_id(&self.pool, trainer_id).await
    }

    async fn count_conflicts(
        &self,
        user_id: i64,
        trainer_id: i64,
        starts_at: DateTime<FixedOffset>,
        ends_at: DateTime<FixedOffset>,
    ) -> eyre::Result<i64> {
        appointment::count_conflicts(&self.pool, user_id, trainer_id, starts_at, ends_at).await
    }

    async fn insert(&self, candidate: &NewAppointment) -> eyre::Result<Option<Appointment>> {
        appointment::create_appointment(&self.pool, candidate).await
    }
}
