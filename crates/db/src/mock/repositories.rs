use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};
use fitslot_core::{
    models::appointment::{Appointment, NewAppointment},
    range::DateRange,
    store::AppointmentStore,
};
use mockall::mock;

// Mock store for service and handler tests
mock! {
    pub AppointmentRepo {}

    #[async_trait]
    impl AppointmentStore for AppointmentRepo {
        async fn fetch_by_trainer_and_range(
            &self,
            trainer_id: i64,
            range: &DateRange,
        ) -> eyre::Result<Vec<Appointment>>;

        async fn fetch_by_trainer(&self, trainer_id: i64) -> eyre::Result<Vec<Appointment>>;

        async fn count_conflicts(
            &self,
            user_id: i64,
            trainer_id: i64,
            starts_at: DateTime<FixedOffset>,
            ends_at: DateTime<FixedOffset>,
        ) -> eyre::Result<i64>;

        async fn insert(&self, appointment: &NewAppointment) -> eyre::Result<Option<Appointment>>;
    }
}
