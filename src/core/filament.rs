//! Filament business logic - Handles all filament-related operations.
//!
//! Mirrors the printer operations: create, retrieve, partial update, and
//! guarded delete. A filament referenced by any budget cannot be removed.

use crate::{
    entities::{Budget, Filament, budget, filament},
    errors::{Error, Result},
};
use sea_orm::{PaginatorTrait, QueryOrder, Set, prelude::*};
use tracing::warn;

/// Partial update for a filament. Fields left as `None` are retained.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateFilament {
    /// New name, if changing
    pub name: Option<String>,
    /// New brand, if changing
    pub brand: Option<String>,
    /// New material type, if changing
    pub material_type: Option<String>,
    /// New color, if changing
    pub color: Option<String>,
    /// New cost per kilogram, if changing
    pub cost_per_kg: Option<f64>,
    /// New density in g/cm³, if changing
    pub density: Option<f64>,
}

fn validate_text(value: &str, field: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::InvalidInput {
            message: format!("Filament {field} cannot be empty"),
        });
    }
    Ok(())
}

fn validate_positive(value: f64, field: &str) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(Error::InvalidInput {
            message: format!("Filament {field} must be a positive number, got {value}"),
        });
    }
    Ok(())
}

/// Creates a new filament with the specified parameters, performing input validation.
///
/// All text fields must be non-empty; cost per kilogram and density must be
/// strictly positive and finite.
pub async fn create_filament(
    db: &DatabaseConnection,
    name: String,
    brand: String,
    material_type: String,
    color: String,
    cost_per_kg: f64,
    density: f64,
) -> Result<filament::Model> {
    validate_text(&name, "name")?;
    validate_text(&brand, "brand")?;
    validate_text(&material_type, "material type")?;
    validate_text(&color, "color")?;
    validate_positive(cost_per_kg, "cost per kg")?;
    validate_positive(density, "density")?;

    let now = chrono::Utc::now();
    let model = filament::ActiveModel {
        name: Set(name.trim().to_string()),
        brand: Set(brand.trim().to_string()),
        material_type: Set(material_type.trim().to_string()),
        color: Set(color.trim().to_string()),
        cost_per_kg: Set(cost_per_kg),
        density: Set(density),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    model.insert(db).await.map_err(Into::into)
}

/// Finds a filament by its unique ID, returning None if not found.
pub async fn get_filament_by_id(
    db: &DatabaseConnection,
    filament_id: i64,
) -> Result<Option<filament::Model>> {
    Filament::find_by_id(filament_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Retrieves all filaments, ordered alphabetically by name.
pub async fn get_all_filaments(db: &DatabaseConnection) -> Result<Vec<filament::Model>> {
    Filament::find()
        .order_by_asc(filament::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Applies a partial update to an existing filament.
///
/// Only the fields set in `update` are written; unset fields keep their
/// stored values. The `updated_at` timestamp is always refreshed.
pub async fn update_filament(
    db: &DatabaseConnection,
    filament_id: i64,
    update: UpdateFilament,
) -> Result<filament::Model> {
    let existing = Filament::find_by_id(filament_id)
        .one(db)
        .await?
        .ok_or(Error::FilamentNotFound { id: filament_id })?;

    let mut model: filament::ActiveModel = existing.into();

    if let Some(name) = update.name {
        validate_text(&name, "name")?;
        model.name = Set(name.trim().to_string());
    }
    if let Some(brand) = update.brand {
        validate_text(&brand, "brand")?;
        model.brand = Set(brand.trim().to_string());
    }
    if let Some(material_type) = update.material_type {
        validate_text(&material_type, "material type")?;
        model.material_type = Set(material_type.trim().to_string());
    }
    if let Some(color) = update.color {
        validate_text(&color, "color")?;
        model.color = Set(color.trim().to_string());
    }
    if let Some(cost) = update.cost_per_kg {
        validate_positive(cost, "cost per kg")?;
        model.cost_per_kg = Set(cost);
    }
    if let Some(density) = update.density {
        validate_positive(density, "density")?;
        model.density = Set(density);
    }
    model.updated_at = Set(chrono::Utc::now());

    model.update(db).await.map_err(Into::into)
}

/// Deletes a filament, refusing while any budget still references it.
pub async fn delete_filament(db: &DatabaseConnection, filament_id: i64) -> Result<()> {
    let filament = Filament::find_by_id(filament_id)
        .one(db)
        .await?
        .ok_or(Error::FilamentNotFound { id: filament_id })?;

    let budget_count = Budget::find()
        .filter(budget::Column::FilamentId.eq(filament_id))
        .count(db)
        .await?;

    if budget_count > 0 {
        warn!(
            filament_id,
            budget_count, "refusing to delete filament still referenced by budgets"
        );
        return Err(Error::ReferentialIntegrity {
            entity: "filament",
            id: filament_id,
            budget_count,
        });
    }

    filament::ActiveModel::from(filament).delete(db).await?;
    Ok(())
}
