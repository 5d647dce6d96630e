//! Costs configuration business logic.
//!
//! The shop keeps one logical costs configuration: updates upsert a single
//! row, and reads resolve the "current" configuration as the most recently
//! updated record. The calculator never reads this table itself; callers
//! resolve a configuration here and pass it in explicitly.

use crate::{
    entities::{CostsConfig, costs_config},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Validated input for creating or replacing the costs configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostsConfigInput {
    /// Electricity rate per kWh
    pub electricity_cost_per_kwh: f64,
    /// Monthly rent overhead
    pub rent_cost_per_month: f64,
    /// Monthly employee overhead
    pub employee_cost_per_month: f64,
    /// Monthly maintenance overhead
    pub maintenance_cost_per_month: f64,
    /// Material waste surcharge percentage (0-100)
    pub waste_percentage: f64,
    /// Failed-print surcharge percentage (0-100)
    pub error_percentage: f64,
}

fn validate_non_negative(value: f64, field: &str) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(Error::InvalidInput {
            message: format!("Costs {field} must be non-negative, got {value}"),
        });
    }
    Ok(())
}

fn validate_percentage(value: f64, field: &str) -> Result<()> {
    if !value.is_finite() || !(0.0..=100.0).contains(&value) {
        return Err(Error::InvalidInput {
            message: format!("Costs {field} must be between 0 and 100, got {value}"),
        });
    }
    Ok(())
}

fn validate(input: &CostsConfigInput) -> Result<()> {
    validate_non_negative(input.electricity_cost_per_kwh, "electricity cost per kWh")?;
    validate_non_negative(input.rent_cost_per_month, "rent cost per month")?;
    validate_non_negative(input.employee_cost_per_month, "employee cost per month")?;
    validate_non_negative(input.maintenance_cost_per_month, "maintenance cost per month")?;
    validate_percentage(input.waste_percentage, "waste percentage")?;
    validate_percentage(input.error_percentage, "error percentage")?;
    Ok(())
}

/// Retrieves the current costs configuration, or None when none is stored.
///
/// "Current" is the most recently updated row; the id breaks ties so the
/// result is deterministic even within one timestamp granule.
pub async fn get_costs_config(db: &DatabaseConnection) -> Result<Option<costs_config::Model>> {
    CostsConfig::find()
        .order_by_desc(costs_config::Column::UpdatedAt)
        .order_by_desc(costs_config::Column::Id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Retrieves the current costs configuration, falling back to the
/// implementation-defined defaults when none is stored.
///
/// The fallback model is ephemeral (id 0, epoch timestamps) and is never
/// persisted; only its rate and percentage fields are meaningful.
pub async fn get_costs_config_or_default(
    db: &DatabaseConnection,
) -> Result<costs_config::Model> {
    if let Some(config) = get_costs_config(db).await? {
        return Ok(config);
    }
    let defaults = crate::config::costs::CostsDefaults::default();
    Ok(costs_config::Model {
        id: 0,
        electricity_cost_per_kwh: defaults.electricity_cost_per_kwh,
        rent_cost_per_month: defaults.rent_cost_per_month,
        employee_cost_per_month: defaults.employee_cost_per_month,
        maintenance_cost_per_month: defaults.maintenance_cost_per_month,
        waste_percentage: defaults.waste_percentage,
        error_percentage: defaults.error_percentage,
        created_at: chrono::DateTime::default(),
        updated_at: chrono::DateTime::default(),
    })
}

/// Creates or replaces the costs configuration (upsert).
///
/// With no stored configuration this inserts the first row; otherwise the
/// existing row's fields are fully replaced and `updated_at` is bumped.
/// All monetary fields must be non-negative and both percentages in [0, 100].
pub async fn update_costs_config(
    db: &DatabaseConnection,
    input: CostsConfigInput,
) -> Result<costs_config::Model> {
    validate(&input)?;

    let now = chrono::Utc::now();

    if let Some(existing) = get_costs_config(db).await? {
        let mut model: costs_config::ActiveModel = existing.into();
        model.electricity_cost_per_kwh = Set(input.electricity_cost_per_kwh);
        model.rent_cost_per_month = Set(input.rent_cost_per_month);
        model.employee_cost_per_month = Set(input.employee_cost_per_month);
        model.maintenance_cost_per_month = Set(input.maintenance_cost_per_month);
        model.waste_percentage = Set(input.waste_percentage);
        model.error_percentage = Set(input.error_percentage);
        model.updated_at = Set(now);
        model.update(db).await.map_err(Into::into)
    } else {
        let model = costs_config::ActiveModel {
            electricity_cost_per_kwh: Set(input.electricity_cost_per_kwh),
            rent_cost_per_month: Set(input.rent_cost_per_month),
            employee_cost_per_month: Set(input.employee_cost_per_month),
            maintenance_cost_per_month: Set(input.maintenance_cost_per_month),
            waste_percentage: Set(input.waste_percentage),
            error_percentage: Set(input.error_percentage),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };
        model.insert(db).await.map_err(Into::into)
    }
}

/// Seeds the default costs configuration when the table is empty.
///
/// Used at bootstrap so a fresh installation can price jobs immediately.
/// Does nothing when a configuration already exists.
pub async fn seed_default_costs_config(
    db: &DatabaseConnection,
    defaults: &crate::config::costs::CostsDefaults,
) -> Result<Option<costs_config::Model>> {
    if get_costs_config(db).await?.is_some() {
        return Ok(None);
    }
    let seeded = update_costs_config(db, defaults.as_input()).await?;
    info!(config_id = seeded.id, "seeded default costs configuration");
    Ok(Some(seeded))
}
