//! Printer entity - Represents a 3D printer owned by the shop.
//!
//! Each printer carries the physical parameters that feed the cost
//! calculator (power draw) plus the shop's markup for jobs run on it.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Printer database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "printers")]
pub struct Model {
    /// Unique identifier for the printer
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Human-readable name of the printer (e.g., "Ender 3 V2")
    pub name: String,
    /// Power consumption in watts, used for electricity cost
    pub power_consumption: f64,
    /// Nominal print speed (mm/s); informational, not used by the calculator
    pub print_speed: f64,
    /// Markup applied to total cost when pricing jobs (0-100+)
    pub profit_percentage: f64,
    /// When the printer was registered
    pub created_at: DateTimeUtc,
    /// When the printer was last modified
    pub updated_at: DateTimeUtc,
}

/// Defines relationships between Printer and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One printer has many budgets
    #[sea_orm(has_many = "super::budget::Entity")]
    Budgets,
}

impl Related<super::budget::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Budgets.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
