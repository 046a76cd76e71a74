use color_eyre::eyre::Result;
use dotenv::dotenv;
use fitslot_api::{config::ApiConfig, init_tracing};
use fitslot_db::{
    create_pool,
    schema::initialize_database,
    seed::{load_appointments, seed_appointments},
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    dotenv().ok();

    let config = ApiConfig::from_env()?;
    init_tracing(config.log_level)?;

    info!("Loading appointments from {}", config.seed_file.display());
    let appointments = load_appointments(&config.seed_file)?;

    let db_pool = create_pool(&config.database_url).await?;
    initialize_database(&db_pool).await?;
    seed_appointments(&db_pool, &appointments).await?;

    Ok(())
}
