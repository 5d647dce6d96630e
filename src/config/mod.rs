/// Database connection and table creation
pub mod database;

/// Default shop costs loading from config.toml
pub mod costs;
