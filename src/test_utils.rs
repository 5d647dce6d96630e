//! Shared test utilities for `PrintBudget`.
//!
//! This module provides common helper functions for setting up test
//! databases and creating test entities with sensible defaults. The
//! defaults mirror the reference pricing fixture used across the
//! calculator and budget tests.

use crate::{
    core::{budget, budget::BudgetInput, costs, costs::CostsConfigInput, filament, printer},
    entities,
    errors::Result,
};
use sea_orm::DatabaseConnection;

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Creates a test printer with sensible defaults.
///
/// # Defaults
/// * `power_consumption`: 100.0 W
/// * `print_speed`: 60.0
/// * `profit_percentage`: 20.0 (markup on cost)
pub async fn create_test_printer(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entities::printer::Model> {
    printer::create_printer(db, name.to_string(), 100.0, 60.0, 20.0).await
}

/// Creates a test filament with sensible defaults.
///
/// # Defaults
/// * `brand`: "Prusament"
/// * `material_type`: "PLA"
/// * `color`: "Black"
/// * `cost_per_kg`: 25.0
/// * `density`: 1.24
pub async fn create_test_filament(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entities::filament::Model> {
    filament::create_filament(
        db,
        name.to_string(),
        "Prusament".to_string(),
        "PLA".to_string(),
        "Black".to_string(),
        25.0,
        1.24,
    )
    .await
}

/// Reference costs configuration input used by the pricing fixture:
/// 0.15/kWh, 1000 rent, 2000 employee, 300 maintenance, 5% waste, 2% error.
#[must_use]
pub fn test_costs_input() -> CostsConfigInput {
    CostsConfigInput {
        electricity_cost_per_kwh: 0.15,
        rent_cost_per_month: 1000.0,
        employee_cost_per_month: 2000.0,
        maintenance_cost_per_month: 300.0,
        waste_percentage: 5.0,
        error_percentage: 2.0,
    }
}

/// Builds a budget input with the reference job: 2 h, 50 g, 1 piece.
#[must_use]
pub fn test_budget_input(name: &str, printer_id: i64, filament_id: i64) -> BudgetInput {
    BudgetInput {
        name: name.to_string(),
        printer_id,
        filament_id,
        print_time_hours: 2.0,
        material_weight_g: 50.0,
        pieces_quantity: 1,
    }
}

/// Creates a test budget with the reference job parameters.
/// Requires a stored costs configuration (see [`setup_with_catalog`]).
pub async fn create_test_budget(
    db: &DatabaseConnection,
    name: &str,
    printer_id: i64,
    filament_id: i64,
) -> Result<entities::budget::Model> {
    budget::create_budget(db, test_budget_input(name, printer_id, filament_id)).await
}

/// Sets up a complete test environment: database with one printer, one
/// filament, and the reference costs configuration stored.
/// Returns (db, printer, filament) for budget-related tests.
pub async fn setup_with_catalog() -> Result<(
    DatabaseConnection,
    entities::printer::Model,
    entities::filament::Model,
)> {
    let db = setup_test_db().await?;
    let printer = create_test_printer(&db, "Test Printer").await?;
    let filament = create_test_filament(&db, "Test PLA").await?;
    costs::update_costs_config(&db, test_costs_input()).await?;
    Ok((db, printer, filament))
}
