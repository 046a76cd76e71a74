use chrono::{DateTime, FixedOffset};
use eyre::Result;
use fitslot_core::models::appointment::{Appointment, NewAppointment};

use crate::{
    DbPool,
    models::{DbAppointment, encode_timestamp, into_appointments},
};

/// Inserts `appointment` unless its user or trainer already holds the same
/// start and end. Returns `None` when nothing was inserted.
pub async fn create_appointment(
    pool: &DbPool,
    appointment: &NewAppointment,
) -> Result<Option<Appointment>> {
    let starts_at = encode_timestamp(&appointment.starts_at);
    let ends_at = encode_timestamp(&appointment.ends_at);

    tracing::debug!(
        "Creating appointment: user_id={}, trainer_id={}, starts_at={}, ends_at={}",
        appointment.user_id,
        appointment.trainer_id,
        starts_at,
        ends_at
    );

    let inserted = sqlx::query_as::<_, DbAppointment>(
        r#"
        INSERT INTO appointments (user_id, trainer_id, starts_at, ends_at)
        SELECT ?1, ?2, ?3, ?4
        WHERE NOT EXISTS (
            SELECT 1 FROM appointments
            WHERE (user_id = ?1 OR trainer_id = ?2)
              AND starts_at = ?3
              AND ends_at = ?4
        )
        RETURNING id, user_id, trainer_id, starts_at, ends_at
        "#,
    )
    .bind(appointment.user_id)
    .bind(appointment.trainer_id)
    .bind(&starts_at)
    .bind(&ends_at)
    .fetch_optional(pool)
    .await;

    let row = match inserted {
        Ok(row) => row,
        Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
            tracing::debug!("Appointment rejected by unique index: {}", e);
            None
        }
        Err(e) => return Err(e.into()),
    };

    match row {
        Some(row) => {
            tracing::debug!("Appointment created successfully: id={}", row.id);
            Ok(Some(row.try_into()?))
        }
        None => {
            tracing::debug!("Appointment slot already taken");
            Ok(None)
        }
    }
}

/// Inserts an appointment with a caller-chosen id. No guard: used for bulk
/// imports that were validated elsewhere.
pub async fn insert_appointment_with_id<'e, E>(executor: E, appointment: &Appointment) -> Result<()>
where
    E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
{
    tracing::debug!("Importing appointment: id={}", appointment.id);

    sqlx::query(
        r#"
        INSERT INTO appointments (id, user_id, trainer_id, starts_at, ends_at)
        VALUES (?1, ?2, ?3, ?4, ?5)
        "#,
    )
    .bind(appointment.id)
    .bind(appointment.user_id)
    .bind(appointment.trainer_id)
    .bind(encode_timestamp(&appointment.starts_at))
    .bind(encode_timestamp(&appointment.ends_at))
    .execute(executor)
    .await?;

    Ok(())
}

pub async fn count_conflicts(
    pool: &DbPool,
    user_id: i64,
    trainer_id: i64,
    starts_at: DateTime<FixedOffset>,
    ends_at: DateTime<FixedOffset>,
) -> Result<i64> {
    let count = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(*)
        FROM appointments
        WHERE (user_id = ?1 OR trainer_id = ?2)
          AND starts_at = ?3
          AND ends_at = ?4
        "#,
    )
    .bind(user_id)
    .bind(trainer_id)
    .bind(encode_timestamp(&starts_at))
    .bind(encode_timestamp(&ends_at))
    .fetch_one(pool)
    .await?;

    tracing::debug!(
        "Conflicts for user_id={}, trainer_id={}: {}",
        user_id,
        trainer_id,
        count
    );

    Ok(count)
}

pub async fn get_appointments_by_trainer_id(
    pool: &DbPool,
    trainer_id: i64,
) -> Result<Vec<Appointment>> {
    tracing::debug!("Getting appointments for trainer: {}", trainer_id);

    let rows = sqlx::query_as::<_, DbAppointment>(
        r#"
        SELECT id, user_id, trainer_id, starts_at, ends_at
        FROM appointments
        WHERE trainer_id = ?1
        ORDER BY starts_at ASC, id ASC
        "#,
    )
    .bind(trainer_id)
    .fetch_all(pool)
    .await?;

    into_appointments(rows)
}

/// Appointments of a trainer that overlap `[starts_at, ends_at)`.
pub async fn get_appointments_by_trainer_id_in_range(
    pool: &DbPool,
    trainer_id: i64,
    starts_at: DateTime<FixedOffset>,
    ends_at: DateTime<FixedOffset>,
) -> Result<Vec<Appointment>> {
    let starts_at = encode_timestamp(&starts_at);
    let ends_at = encode_timestamp(&ends_at);

    tracing::debug!(
        "Getting appointments for trainer {} between {} and {}",
        trainer_id,
        starts_at,
        ends_at
    );

    let rows = sqlx::query_as::<_, DbAppointment>(
        r#"
        SELECT id, user_id, trainer_id, starts_at, ends_at
        FROM appointments
        WHERE trainer_id = ?1
          AND starts_at < ?3
          AND ends_at > ?2
        ORDER BY starts_at ASC, id ASC
        "#,
    )
    .bind(trainer_id)
    .bind(&starts_at)
    .bind(&ends_at)
    .fetch_all(pool)
    .await?;

    into_appointments(rows)
}
