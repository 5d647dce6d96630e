//! Budget entity - A persisted quote for one print job.
//!
//! A budget snapshots the job parameters together with the computed
//! `total_cost`, `sale_price`, and `profit_margin` at calculation time.
//! The full breakdown is recomputed on demand rather than stored.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Budget database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "budgets")]
pub struct Model {
    /// Unique identifier for the budget
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Human-readable name of the quote (e.g., "Lithophane batch for Ana")
    pub name: String,
    /// Printer the job is priced for
    pub printer_id: i64,
    /// Filament the job is priced with
    pub filament_id: i64,
    /// Total print time for the whole job, in hours
    pub print_time_hours: f64,
    /// Total material weight for the whole job, in grams
    pub material_weight_g: f64,
    /// Number of pieces in the job (≥ 1)
    pub pieces_quantity: i32,
    /// Computed total cost at calculation time
    pub total_cost: f64,
    /// Computed sale price at calculation time
    pub sale_price: f64,
    /// Computed profit margin (% of sale price) at calculation time
    pub profit_margin: f64,
    /// When the budget was created
    pub created_at: DateTimeUtc,
    /// When the budget was last recalculated
    pub updated_at: DateTimeUtc,
}

/// Defines relationships between Budget and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each budget is priced for one printer
    #[sea_orm(
        belongs_to = "super::printer::Entity",
        from = "Column::PrinterId",
        to = "super::printer::Column::Id"
    )]
    Printer,
    /// Each budget is priced with one filament
    #[sea_orm(
        belongs_to = "super::filament::Entity",
        from = "Column::FilamentId",
        to = "super::filament::Column::Id"
    )]
    Filament,
}

impl Related<super::printer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Printer.def()
    }
}

impl Related<super::filament::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Filament.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
