pub mod models;
pub mod repositories;
pub mod schema;
pub mod seed;
pub mod store;

pub mod mock;

use eyre::Result;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Pool, Sqlite};

pub use store::SqlAppointmentStore;

pub type DbPool = Pool<Sqlite>;

pub async fn create_pool(database_url: &str) -> Result<DbPool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await?;

    Ok(pool)
}

/// A pool over a private in-memory database.
///
/// Every SQLite connection to `:memory:` opens its own database, so the pool
/// is pinned to one connection that is never recycled.
pub async fn create_memory_pool() -> Result<DbPool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await?;

    Ok(pool)
}
