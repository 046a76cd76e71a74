use eyre::Result;
use tracing::info;

use crate::DbPool;

pub async fn initialize_database(pool: &DbPool) -> Result<()> {
    info!("Initializing database schema...");

    // Timestamps are RFC3339 text in the business offset, so comparing the
    // text compares the instants.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS appointments (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id INTEGER NOT NULL CHECK (user_id > 0),
            trainer_id INTEGER NOT NULL CHECK (trainer_id > 0),
            starts_at TEXT NOT NULL,
            ends_at TEXT NOT NULL,
            CONSTRAINT valid_time_range CHECK (ends_at > starts_at)
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_appointments_trainer_id ON appointments(trainer_id);
        CREATE INDEX IF NOT EXISTS idx_appointments_user_id ON appointments(user_id);
        CREATE INDEX IF NOT EXISTS idx_appointments_starts_at ON appointments(starts_at);
        CREATE UNIQUE INDEX IF NOT EXISTS uq_appointments_trainer_slot
            ON appointments(trainer_id, starts_at, ends_at);
        CREATE UNIQUE INDEX IF NOT EXISTS uq_appointments_user_slot
            ON appointments(user_id, starts_at, ends_at);
        "#,
    )
    .execute(pool)
    .await?;

    info!("Database schema initialized successfully.");
    Ok(())
}
