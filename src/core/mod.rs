//! Core business logic - framework-agnostic pricing and entity operations.
//!
//! Everything in this module works against a plain `DatabaseConnection`
//! and returns structured data, so it can sit behind any transport.
//! The calculator itself is pure and does no I/O at all.

/// Budget operations: quoting, persistence, listing, and detail views
pub mod budget;
/// Pure cost calculation engine
pub mod calculator;
/// Costs configuration read/upsert operations
pub mod costs;
/// Filament CRUD operations
pub mod filament;
/// Printer CRUD operations
pub mod printer;
