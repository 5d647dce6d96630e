//! Costs configuration entity - Shop-wide overhead and rate settings.
//!
//! The table is singleton-or-latest: updates upsert a single logical row,
//! and reads take the most recently updated record as "current".

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Costs configuration database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "costs_config")]
pub struct Model {
    /// Unique identifier
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Electricity rate per kWh
    pub electricity_cost_per_kwh: f64,
    /// Monthly rent overhead
    pub rent_cost_per_month: f64,
    /// Monthly employee overhead
    pub employee_cost_per_month: f64,
    /// Monthly maintenance overhead
    pub maintenance_cost_per_month: f64,
    /// Material waste surcharge as a percentage of material cost (0-100)
    pub waste_percentage: f64,
    /// Failed-print surcharge as a percentage of material + electricity (0-100)
    pub error_percentage: f64,
    /// When this configuration was first stored
    pub created_at: DateTimeUtc,
    /// When this configuration was last modified
    pub updated_at: DateTimeUtc,
}

/// Costs configuration has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
