//! Unified error types for the pricing system.
//!
//! All fallible operations in the crate return [`Result`], built on a single
//! [`Error`] enum. Entity-resolution failures carry the offending id so the
//! caller can report exactly which record was missing.

use thiserror::Error;

/// Crate-wide error type
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration loading or validation failed
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description of what went wrong
        message: String,
    },

    /// Underlying database operation failed
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// I/O error while reading configuration files
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// No printer exists with the given id
    #[error("Printer with id {id} not found")]
    PrinterNotFound {
        /// The id that failed to resolve
        id: i64,
    },

    /// No filament exists with the given id
    #[error("Filament with id {id} not found")]
    FilamentNotFound {
        /// The id that failed to resolve
        id: i64,
    },

    /// No budget exists with the given id
    #[error("Budget with id {id} not found")]
    BudgetNotFound {
        /// The id that failed to resolve
        id: i64,
    },

    /// No costs configuration has been stored yet
    #[error("Costs configuration not found")]
    ConfigurationMissing,

    /// Attempted to delete a printer or filament still referenced by budgets
    #[error("Cannot delete {entity} with id {id}: referenced by {budget_count} budget(s)")]
    ReferentialIntegrity {
        /// Entity kind being deleted ("printer" or "filament")
        entity: &'static str,
        /// Id of the record the delete was attempted on
        id: i64,
        /// Number of budgets still referencing it
        budget_count: u64,
    },

    /// Input failed validation before reaching the calculator
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// Human-readable description of the rejected field
        message: String,
    },

    /// Piece count below the minimum of one
    #[error("Invalid pieces quantity: {quantity} (must be at least 1)")]
    InvalidQuantity {
        /// The rejected piece count
        quantity: i32,
    },
}

// Convenience `Result` type
/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, Error>;
