//! Filament entity - Represents a spool/material option for printing.
//!
//! The cost per kilogram drives material cost in the calculator. Density
//! is stored for slicer-side volume estimates but is not used in pricing.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Filament database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "filaments")]
pub struct Model {
    /// Unique identifier for the filament
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Human-readable name of the filament (e.g., "Galaxy Black")
    pub name: String,
    /// Manufacturer brand
    pub brand: String,
    /// Material type: `"PLA"`, `"ABS"`, `"PETG"`, etc.
    pub material_type: String,
    /// Color of the filament
    pub color: String,
    /// Cost per kilogram, drives material cost
    pub cost_per_kg: f64,
    /// Density in g/cm³; informational, not used by the calculator
    pub density: f64,
    /// When the filament was registered
    pub created_at: DateTimeUtc,
    /// When the filament was last modified
    pub updated_at: DateTimeUtc,
}

/// Defines relationships between Filament and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One filament has many budgets
    #[sea_orm(has_many = "super::budget::Entity")]
    Budgets,
}

impl Related<super::budget::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Budgets.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
