//! Database configuration module.
//!
//! Handles `SQLite` connection and table creation using `SeaORM`. Table
//! creation uses `Schema::create_table_from_entity` so the database schema
//! is generated from the entity definitions without manual SQL; statements
//! are idempotent (`IF NOT EXISTS`) so bootstrap can run on an existing
//! database.

use crate::entities::{Budget, CostsConfig, Filament, Printer};
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};

/// Gets the database URL from environment variable or returns the default
/// local `SQLite` path.
pub fn get_database_url() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://data/printbudget.sqlite".to_string())
}

/// Establishes a connection to the `SQLite` database using the
/// `DATABASE_URL` environment variable.
///
/// Falls back to a default local `SQLite` file if no environment variable
/// is set.
pub async fn create_connection() -> Result<DatabaseConnection> {
    Database::connect(get_database_url()).await.map_err(Into::into)
}

/// Creates all necessary database tables from the entity definitions.
///
/// Creates tables for printers, filaments, the costs configuration, and
/// budgets. Existing tables are left untouched.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut printer_table = schema.create_table_from_entity(Printer);
    let mut filament_table = schema.create_table_from_entity(Filament);
    let mut costs_config_table = schema.create_table_from_entity(CostsConfig);
    let mut budget_table = schema.create_table_from_entity(Budget);

    db.execute(builder.build(printer_table.if_not_exists()))
        .await?;
    db.execute(builder.build(filament_table.if_not_exists()))
        .await?;
    db.execute(builder.build(costs_config_table.if_not_exists()))
        .await?;
    db.execute(builder.build(budget_table.if_not_exists())).await?;

    Ok(())
}
