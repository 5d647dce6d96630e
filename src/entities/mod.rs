//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod budget;
pub mod costs_config;
pub mod filament;
pub mod printer;

// Re-export specific types to avoid conflicts
pub use budget::{Column as BudgetColumn, Entity as Budget, Model as BudgetModel};
pub use costs_config::{
    Column as CostsConfigColumn, Entity as CostsConfig, Model as CostsConfigModel,
};
pub use filament::{Column as FilamentColumn, Entity as Filament, Model as FilamentModel};
pub use printer::{Column as PrinterColumn, Entity as Printer, Model as PrinterModel};
