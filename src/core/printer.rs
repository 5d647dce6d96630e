//! Printer business logic - Handles all printer-related operations.
//!
//! Provides functions for creating, retrieving, updating, and deleting
//! printers. Deletion is guarded: a printer referenced by any budget
//! cannot be removed until those budgets are deleted first.

use crate::{
    entities::{Budget, Printer, budget, printer},
    errors::{Error, Result},
};
use sea_orm::{PaginatorTrait, QueryOrder, Set, prelude::*};
use tracing::warn;

/// Partial update for a printer. Fields left as `None` are retained.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdatePrinter {
    /// New name, if changing
    pub name: Option<String>,
    /// New power consumption in watts, if changing
    pub power_consumption: Option<f64>,
    /// New print speed, if changing
    pub print_speed: Option<f64>,
    /// New markup percentage, if changing
    pub profit_percentage: Option<f64>,
}

fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::InvalidInput {
            message: "Printer name cannot be empty".to_string(),
        });
    }
    Ok(())
}

fn validate_positive(value: f64, field: &str) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(Error::InvalidInput {
            message: format!("Printer {field} must be a positive number, got {value}"),
        });
    }
    Ok(())
}

fn validate_profit_percentage(value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(Error::InvalidInput {
            message: format!("Printer profit percentage must be non-negative, got {value}"),
        });
    }
    Ok(())
}

/// Creates a new printer with the specified parameters, performing input validation.
///
/// Power consumption and print speed must be strictly positive; the profit
/// percentage must be non-negative (it is a markup on cost and may exceed 100).
pub async fn create_printer(
    db: &DatabaseConnection,
    name: String,
    power_consumption: f64,
    print_speed: f64,
    profit_percentage: f64,
) -> Result<printer::Model> {
    validate_name(&name)?;
    validate_positive(power_consumption, "power consumption")?;
    validate_positive(print_speed, "print speed")?;
    validate_profit_percentage(profit_percentage)?;

    let now = chrono::Utc::now();
    let model = printer::ActiveModel {
        name: Set(name.trim().to_string()),
        power_consumption: Set(power_consumption),
        print_speed: Set(print_speed),
        profit_percentage: Set(profit_percentage),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    model.insert(db).await.map_err(Into::into)
}

/// Finds a printer by its unique ID, returning None if not found.
pub async fn get_printer_by_id(
    db: &DatabaseConnection,
    printer_id: i64,
) -> Result<Option<printer::Model>> {
    Printer::find_by_id(printer_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Retrieves all printers, ordered alphabetically by name.
pub async fn get_all_printers(db: &DatabaseConnection) -> Result<Vec<printer::Model>> {
    Printer::find()
        .order_by_asc(printer::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Applies a partial update to an existing printer.
///
/// Only the fields set in `update` are written; unset fields keep their
/// stored values. The `updated_at` timestamp is always refreshed.
pub async fn update_printer(
    db: &DatabaseConnection,
    printer_id: i64,
    update: UpdatePrinter,
) -> Result<printer::Model> {
    let existing = Printer::find_by_id(printer_id)
        .one(db)
        .await?
        .ok_or(Error::PrinterNotFound { id: printer_id })?;

    let mut model: printer::ActiveModel = existing.into();

    if let Some(name) = update.name {
        validate_name(&name)?;
        model.name = Set(name.trim().to_string());
    }
    if let Some(power) = update.power_consumption {
        validate_positive(power, "power consumption")?;
        model.power_consumption = Set(power);
    }
    if let Some(speed) = update.print_speed {
        validate_positive(speed, "print speed")?;
        model.print_speed = Set(speed);
    }
    if let Some(profit) = update.profit_percentage {
        validate_profit_percentage(profit)?;
        model.profit_percentage = Set(profit);
    }
    model.updated_at = Set(chrono::Utc::now());

    model.update(db).await.map_err(Into::into)
}

/// Deletes a printer, refusing while any budget still references it.
///
/// The referential guard is an explicit count query against budgets, not a
/// database-level cascade, so the failure carries the exact reference count.
pub async fn delete_printer(db: &DatabaseConnection, printer_id: i64) -> Result<()> {
    let printer = Printer::find_by_id(printer_id)
        .one(db)
        .await?
        .ok_or(Error::PrinterNotFound { id: printer_id })?;

    let budget_count = Budget::find()
        .filter(budget::Column::PrinterId.eq(printer_id))
        .count(db)
        .await?;

    if budget_count > 0 {
        warn!(
            printer_id,
            budget_count, "refusing to delete printer still referenced by budgets"
        );
        return Err(Error::ReferentialIntegrity {
            entity: "printer",
            id: printer_id,
            budget_count,
        });
    }

    printer::ActiveModel::from(printer).delete(db).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_create_printer_validation() -> Result<()> {
        let db = setup_test_db().await?;

        // Empty name
        let result = create_printer(&db, String::new(), 100.0, 60.0, 20.0).await;
        assert!(matches!(result.unwrap_err(), Error::InvalidInput { .. }));

        // Whitespace-only name
        let result = create_printer(&db, "   ".to_string(), 100.0, 60.0, 20.0).await;
        assert!(matches!(result.unwrap_err(), Error::InvalidInput { .. }));

        // Non-positive power consumption
        let result = create_printer(&db, "Ender 3".to_string(), 0.0, 60.0, 20.0).await;
        assert!(matches!(result.unwrap_err(), Error::InvalidInput { .. }));

        // Negative print speed
        let result = create_printer(&db, "Ender 3".to_string(), 100.0, -1.0, 20.0).await;
        assert!(matches!(result.unwrap_err(), Error::InvalidInput { .. }));

        // Negative profit percentage
        let result = create_printer(&db, "Ender 3".to_string(), 100.0, 60.0, -5.0).await;
        assert!(matches!(result.unwrap_err(), Error::InvalidInput { .. }));

        // NaN is rejected everywhere
        let result = create_printer(&db, "Ender 3".to_string(), f64::NAN, 60.0, 20.0).await;
        assert!(matches!(result.unwrap_err(), Error::InvalidInput { .. }));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_printer_integration() -> Result<()> {
        let db = setup_test_db().await?;

        let printer = create_test_printer(&db, "Ender 3 V2").await?;

        assert_eq!(printer.name, "Ender 3 V2");
        assert_eq!(printer.power_consumption, 100.0);
        assert_eq!(printer.print_speed, 60.0);
        assert_eq!(printer.profit_percentage, 20.0);

        let found = get_printer_by_id(&db, printer.id).await?;
        assert_eq!(found.unwrap(), printer);

        Ok(())
    }

    #[tokio::test]
    async fn test_create_printer_trims_name() -> Result<()> {
        let db = setup_test_db().await?;

        let printer = create_printer(&db, "  Prusa MK4  ".to_string(), 120.0, 200.0, 25.0).await?;
        assert_eq!(printer.name, "Prusa MK4");

        Ok(())
    }

    #[tokio::test]
    async fn test_get_all_printers_ordered() -> Result<()> {
        let db = setup_test_db().await?;

        create_test_printer(&db, "Voron 2.4").await?;
        create_test_printer(&db, "Bambu X1").await?;
        create_test_printer(&db, "Ender 3").await?;

        let printers = get_all_printers(&db).await?;
        let names: Vec<&str> = printers.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Bambu X1", "Ender 3", "Voron 2.4"]);

        Ok(())
    }

    #[tokio::test]
    async fn test_update_printer_partial() -> Result<()> {
        let db = setup_test_db().await?;
        let printer = create_test_printer(&db, "Ender 3").await?;

        let updated = update_printer(
            &db,
            printer.id,
            UpdatePrinter {
                power_consumption: Some(150.0),
                ..Default::default()
            },
        )
        .await?;

        // Only the provided field changed
        assert_eq!(updated.power_consumption, 150.0);
        assert_eq!(updated.name, printer.name);
        assert_eq!(updated.print_speed, printer.print_speed);
        assert_eq!(updated.profit_percentage, printer.profit_percentage);
        assert!(updated.updated_at >= printer.updated_at);

        Ok(())
    }

    #[tokio::test]
    async fn test_update_printer_not_found() -> Result<()> {
        let db = setup_test_db().await?;

        let result = update_printer(&db, 999, UpdatePrinter::default()).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::PrinterNotFound { id: 999 }
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_printer_rejects_invalid_field() -> Result<()> {
        let db = setup_test_db().await?;
        let printer = create_test_printer(&db, "Ender 3").await?;

        let result = update_printer(
            &db,
            printer.id,
            UpdatePrinter {
                power_consumption: Some(-10.0),
                ..Default::default()
            },
        )
        .await;
        assert!(matches!(result.unwrap_err(), Error::InvalidInput { .. }));

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_printer() -> Result<()> {
        let db = setup_test_db().await?;
        let printer = create_test_printer(&db, "Ender 3").await?;

        delete_printer(&db, printer.id).await?;

        assert!(get_printer_by_id(&db, printer.id).await?.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_printer_not_found() -> Result<()> {
        let db = setup_test_db().await?;

        let result = delete_printer(&db, 42).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::PrinterNotFound { id: 42 }
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_printer_referenced_by_budget() -> Result<()> {
        let (db, printer, filament) = setup_with_catalog().await?;
        create_test_budget(&db, "Quote", printer.id, filament.id).await?;

        let result = delete_printer(&db, printer.id).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::ReferentialIntegrity {
                entity: "printer",
                budget_count: 1,
                ..
            }
        ));

        // Printer is untouched
        assert!(get_printer_by_id(&db, printer.id).await?.is_some());

        Ok(())
    }
}
