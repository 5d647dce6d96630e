//! Default shop costs loading from config.toml
//!
//! A fresh installation has no stored costs configuration. The defaults
//! defined here (optionally overridden by a `[costs]` section in
//! config.toml) are used to seed the database at bootstrap and as the
//! fallback configuration for budget detail views when the table is empty.

use crate::core::costs::CostsConfigInput;
use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    /// Default shop costs, seeded when no configuration exists
    #[serde(default)]
    pub costs: CostsDefaults,
}

/// Default values for the shop costs configuration.
///
/// Every field has a default, so a partial (or absent) `[costs]` section
/// is fine.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct CostsDefaults {
    /// Electricity rate per kWh
    #[serde(default = "default_electricity")]
    pub electricity_cost_per_kwh: f64,
    /// Monthly rent overhead
    #[serde(default = "default_rent")]
    pub rent_cost_per_month: f64,
    /// Monthly employee overhead
    #[serde(default = "default_employee")]
    pub employee_cost_per_month: f64,
    /// Monthly maintenance overhead
    #[serde(default = "default_maintenance")]
    pub maintenance_cost_per_month: f64,
    /// Material waste surcharge percentage
    #[serde(default = "default_waste")]
    pub waste_percentage: f64,
    /// Failed-print surcharge percentage
    #[serde(default = "default_error")]
    pub error_percentage: f64,
}

const fn default_electricity() -> f64 {
    0.15
}
const fn default_rent() -> f64 {
    1000.0
}
const fn default_employee() -> f64 {
    3000.0
}
const fn default_maintenance() -> f64 {
    500.0
}
const fn default_waste() -> f64 {
    5.0
}
const fn default_error() -> f64 {
    3.0
}

impl Default for CostsDefaults {
    fn default() -> Self {
        Self {
            electricity_cost_per_kwh: default_electricity(),
            rent_cost_per_month: default_rent(),
            employee_cost_per_month: default_employee(),
            maintenance_cost_per_month: default_maintenance(),
            waste_percentage: default_waste(),
            error_percentage: default_error(),
        }
    }
}

impl CostsDefaults {
    /// Converts the defaults into a costs configuration input for seeding.
    #[must_use]
    pub const fn as_input(&self) -> CostsConfigInput {
        CostsConfigInput {
            electricity_cost_per_kwh: self.electricity_cost_per_kwh,
            rent_cost_per_month: self.rent_cost_per_month,
            employee_cost_per_month: self.employee_cost_per_month,
            maintenance_cost_per_month: self.maintenance_cost_per_month,
            waste_percentage: self.waste_percentage,
            error_percentage: self.error_percentage,
        }
    }
}

/// Loads configuration from a TOML file
///
/// # Errors
/// Returns an error if the file exists but cannot be read, the TOML syntax
/// is invalid, or a field has the wrong type.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read config file: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// Loads configuration from the default location (./config.toml),
/// falling back to built-in defaults when the file does not exist.
pub fn load_default_config() -> Result<Config> {
    if Path::new("config.toml").exists() {
        load_config("config.toml")
    } else {
        Ok(Config::default())
    }
}
