//! Bootstrap binary: provisions the database for the pricing library.
//!
//! Creates the schema and seeds the default costs configuration so a
//! fresh installation can price jobs immediately. Safe to run repeatedly.

use dotenvy::dotenv;
use printbudget::{config, core, errors::Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; env vars can also be set externally
    dotenv().ok();

    // 3. Load the application configuration (built-in defaults if no config.toml)
    let app_config = config::costs::load_default_config()?;
    info!("Loaded application configuration.");

    // 4. Connect and create tables
    let db = config::database::create_connection().await?;
    config::database::create_tables(&db).await?;
    info!(url = %config::database::get_database_url(), "Database initialized.");

    // 5. Seed the default costs configuration when none exists
    if core::costs::seed_default_costs_config(&db, &app_config.costs)
        .await?
        .is_none()
    {
        info!("Costs configuration already present; nothing to seed.");
    }

    let current = core::costs::get_costs_config(&db)
        .await?
        .ok_or(printbudget::errors::Error::ConfigurationMissing)?;
    info!(
        electricity_cost_per_kwh = current.electricity_cost_per_kwh,
        waste_percentage = current.waste_percentage,
        error_percentage = current.error_percentage,
        "Ready to price jobs."
    );

    Ok(())
}
