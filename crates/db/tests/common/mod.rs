use chrono::{DateTime, Duration, FixedOffset, TimeZone};
use fitslot_core::{models::appointment::NewAppointment, time::business_offset};
use fitslot_db::{DbPool, create_memory_pool, schema::initialize_database};

pub async fn test_pool() -> DbPool {
    let pool = create_memory_pool()
        .await
        .expect("Failed to open in-memory database");
    initialize_database(&pool)
        .await
        .expect("Failed to initialize test database schema");
    pool
}

/// `hour:minute` on 2030-07-`day` in the business offset.
pub fn at(day: u32, hour: u32, minute: u32) -> DateTime<FixedOffset> {
    business_offset()
        .with_ymd_and_hms(2030, 7, day, hour, minute, 0)
        .unwrap()
}

pub fn candidate(user_id: i64, trainer_id: i64, starts_at: DateTime<FixedOffset>) -> NewAppointment {
    NewAppointment {
        user_id,
        trainer_id,
        starts_at,
        ends_at: starts_at + Duration::minutes(30),
    }
}
