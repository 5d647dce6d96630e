//! Cost calculation engine - the pricing core of the crate.
//!
//! [`calculate`] is a pure function from (printer, filament, costs
//! configuration, job parameters) to a [`CostBreakdown`]. It performs no
//! I/O, holds no state, and is deterministic: identical inputs produce
//! bit-identical outputs. All resolution of database records happens in
//! the callers ([`crate::core::budget`]); the configuration is always an
//! explicit argument, never read from ambient state.
//!
//! No rounding is applied here. Formatting for display is a presentation
//! concern outside this module.

use crate::{
    entities::{costs_config, filament, printer},
    errors::{Error, Result},
};
use serde::{Deserialize, Serialize};

/// Hours in the amortization month used for fixed-cost allocation.
///
/// Monthly overhead (rent, employees, maintenance) is spread over a fixed
/// 30-day, 24-hour month. Not calendar-accurate; the constant is part of
/// the numeric contract and must not vary between call paths.
pub const MONTHLY_HOURS: f64 = 30.0 * 24.0;

/// Parameters describing one print job.
///
/// `print_time_hours` and `material_weight_g` are totals for the whole
/// job, all pieces combined. Callers that track per-piece figures must
/// scale by `pieces_quantity` before building a `JobParams`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JobParams {
    /// Total print time for the whole job, in hours
    pub print_time_hours: f64,
    /// Total material weight for the whole job, in grams
    pub material_weight_g: f64,
    /// Number of pieces in the job (must be ≥ 1)
    pub pieces_quantity: i32,
}

/// Structured cost/price decomposition for one job.
///
/// All monetary fields cover the whole job; only `cost_per_piece` and
/// `price_per_piece` are per-piece. The field set is a stable contract:
/// any transport serializing a breakdown must carry all eleven fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    /// Filament cost for the job's total material weight
    pub material_cost: f64,
    /// Electricity cost for the job's total print time
    pub electricity_cost: f64,
    /// Monthly overhead amortized over the job's print time
    pub fixed_costs: f64,
    /// Waste surcharge (percentage of material cost)
    pub waste_cost: f64,
    /// Failed-print surcharge (percentage of material + electricity)
    pub error_cost: f64,
    /// Sum of the five cost components above
    pub total_cost: f64,
    /// Markup amount derived from the printer's profit percentage
    pub profit_amount: f64,
    /// Total cost plus profit amount
    pub sale_price: f64,
    /// Profit as a percentage of sale price (0 when sale price is 0)
    pub profit_margin_percentage: f64,
    /// Total cost divided by piece count
    pub cost_per_piece: f64,
    /// Sale price divided by piece count
    pub price_per_piece: f64,
}

/// Computes the full cost/price breakdown for a print job.
///
/// The composition order is fixed:
/// 1. material cost: `(material_weight_g / 1000) * cost_per_kg`
/// 2. electricity cost: `print_time_hours * (power_consumption / 1000) * rate`
/// 3. fixed costs: monthly overhead amortized over [`MONTHLY_HOURS`]
/// 4. waste cost: percentage of material cost
/// 5. error cost: percentage of material + electricity (fixed and waste
///    costs deliberately excluded)
/// 6. total cost: sum of the five components
/// 7. profit amount: markup on total cost from the printer
/// 8. sale price: total cost + profit amount
/// 9. profit margin: profit as a share of sale price, 0 for a zero price
/// 10. per-piece figures: total cost / pieces, sale price / pieces
///
/// # Errors
/// Returns [`Error::InvalidQuantity`] if `pieces_quantity < 1`. Upstream
/// validation guarantees this for resolved budget operations; the guard
/// exists for callers invoking the calculator directly.
pub fn calculate(
    printer: &printer::Model,
    filament: &filament::Model,
    config: &costs_config::Model,
    job: &JobParams,
) -> Result<CostBreakdown> {
    if job.pieces_quantity < 1 {
        return Err(Error::InvalidQuantity {
            quantity: job.pieces_quantity,
        });
    }

    // 1. Material cost: grams -> kilograms, whole job
    let material_cost = (job.material_weight_g / 1000.0) * filament.cost_per_kg;

    // 2. Electricity cost: watts -> kilowatts, whole job
    let electricity_cost =
        job.print_time_hours * (printer.power_consumption / 1000.0) * config.electricity_cost_per_kwh;

    // 3. Fixed costs: monthly overhead amortized into an hourly rate
    let total_monthly_costs = config.rent_cost_per_month
        + config.employee_cost_per_month
        + config.maintenance_cost_per_month;
    let fixed_costs = (job.print_time_hours / MONTHLY_HOURS) * total_monthly_costs;

    // 4. Waste cost
    let waste_cost = material_cost * (config.waste_percentage / 100.0);

    // 5. Error cost: material + electricity only
    let error_cost = (material_cost + electricity_cost) * (config.error_percentage / 100.0);

    // 6. Total cost
    let total_cost = material_cost + electricity_cost + fixed_costs + waste_cost + error_cost;

    // 7. Profit: markup on cost, not margin on sale price
    let profit_amount = total_cost * (printer.profit_percentage / 100.0);

    // 8. Sale price
    let sale_price = total_cost + profit_amount;

    // 9. Margin on sale price; a zero sale price yields exactly 0, never NaN
    let profit_margin_percentage = if sale_price > 0.0 {
        (profit_amount / sale_price) * 100.0
    } else {
        0.0
    };

    // 10. Per-piece values
    let pieces = f64::from(job.pieces_quantity);
    let cost_per_piece = total_cost / pieces;
    let price_per_piece = sale_price / pieces;

    Ok(CostBreakdown {
        material_cost,
        electricity_cost,
        fixed_costs,
        waste_cost,
        error_cost,
        total_cost,
        profit_amount,
        sale_price,
        profit_margin_percentage,
        cost_per_piece,
        price_per_piece,
    })
}
