//! Budget business logic - quoting, persistence, and detail views.
//!
//! A budget is a persisted snapshot of one calculation plus its job
//! parameters. The operations here follow a read-compute-write pattern:
//! resolve printer, filament, and the current costs configuration, run the
//! pure calculator, then persist the subset of outputs the snapshot keeps
//! (`total_cost`, `sale_price`, `profit_margin`). The detail view
//! recomputes a live breakdown against the *current* configuration rather
//! than returning the stored one.

use crate::{
    core::calculator::{self, CostBreakdown, JobParams},
    entities::{Budget, Filament, Printer, budget, costs_config, filament, printer},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Input for creating, updating, or quoting a budget.
///
/// `print_time_hours` and `material_weight_g` are whole-job totals, all
/// pieces combined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetInput {
    /// Human-readable name for the quote
    pub name: String,
    /// Printer to price the job on
    pub printer_id: i64,
    /// Filament to price the job with
    pub filament_id: i64,
    /// Total print time for the whole job, in hours
    pub print_time_hours: f64,
    /// Total material weight for the whole job, in grams
    pub material_weight_g: f64,
    /// Number of pieces in the job (≥ 1)
    pub pieces_quantity: i32,
}

/// A budget joined with its printer, filament, and a live recalculation.
///
/// `calculation` is computed against the current costs configuration at
/// read time; `budget` keeps the snapshot stored when the budget was last
/// written. The two diverge when the configuration changed in between.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetWithDetails {
    /// The stored budget snapshot
    pub budget: budget::Model,
    /// The referenced printer
    pub printer: printer::Model,
    /// The referenced filament
    pub filament: filament::Model,
    /// Breakdown recomputed against the current costs configuration
    pub calculation: CostBreakdown,
}

fn validate_input(input: &BudgetInput) -> Result<()> {
    if input.name.trim().is_empty() {
        return Err(Error::InvalidInput {
            message: "Budget name cannot be empty".to_string(),
        });
    }
    if !input.print_time_hours.is_finite() || input.print_time_hours <= 0.0 {
        return Err(Error::InvalidInput {
            message: format!(
                "Print time must be a positive number of hours, got {}",
                input.print_time_hours
            ),
        });
    }
    if !input.material_weight_g.is_finite() || input.material_weight_g <= 0.0 {
        return Err(Error::InvalidInput {
            message: format!(
                "Material weight must be a positive number of grams, got {}",
                input.material_weight_g
            ),
        });
    }
    if input.pieces_quantity < 1 {
        return Err(Error::InvalidQuantity {
            quantity: input.pieces_quantity,
        });
    }
    Ok(())
}

const fn job_params(input: &BudgetInput) -> JobParams {
    JobParams {
        print_time_hours: input.print_time_hours,
        material_weight_g: input.material_weight_g,
        pieces_quantity: input.pieces_quantity,
    }
}

/// Resolves the three records a calculation needs, failing with the
/// specific not-found error before the calculator is ever invoked.
async fn resolve_inputs(
    db: &DatabaseConnection,
    input: &BudgetInput,
) -> Result<(printer::Model, filament::Model, costs_config::Model)> {
    let printer = Printer::find_by_id(input.printer_id)
        .one(db)
        .await?
        .ok_or(Error::PrinterNotFound {
            id: input.printer_id,
        })?;

    let filament = Filament::find_by_id(input.filament_id)
        .one(db)
        .await?
        .ok_or(Error::FilamentNotFound {
            id: input.filament_id,
        })?;

    let config = crate::core::costs::get_costs_config(db)
        .await?
        .ok_or(Error::ConfigurationMissing)?;

    Ok((printer, filament, config))
}

/// Computes a full breakdown for the given input without persisting anything.
///
/// This is the quoting operation: the same resolution and validation as
/// [`create_budget`], but the result is only returned, never stored.
pub async fn calculate_budget(
    db: &DatabaseConnection,
    input: &BudgetInput,
) -> Result<CostBreakdown> {
    validate_input(input)?;
    let (printer, filament, config) = resolve_inputs(db, input).await?;
    calculator::calculate(&printer, &filament, &config, &job_params(input))
}

/// Creates a budget: computes the breakdown and persists the snapshot.
///
/// The stored fields are `total_cost`, `sale_price`, and `profit_margin`
/// (the margin-on-sale-price percentage), alongside the job parameters.
pub async fn create_budget(db: &DatabaseConnection, input: BudgetInput) -> Result<budget::Model> {
    validate_input(&input)?;
    let (printer, filament, config) = resolve_inputs(db, &input).await?;
    let breakdown = calculator::calculate(&printer, &filament, &config, &job_params(&input))?;

    let now = chrono::Utc::now();
    let model = budget::ActiveModel {
        name: Set(input.name.trim().to_string()),
        printer_id: Set(input.printer_id),
        filament_id: Set(input.filament_id),
        print_time_hours: Set(input.print_time_hours),
        material_weight_g: Set(input.material_weight_g),
        pieces_quantity: Set(input.pieces_quantity),
        total_cost: Set(breakdown.total_cost),
        sale_price: Set(breakdown.sale_price),
        profit_margin: Set(breakdown.profit_margin_percentage),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    let created = model.insert(db).await?;
    info!(
        budget_id = created.id,
        total_cost = created.total_cost,
        sale_price = created.sale_price,
        "created budget"
    );
    Ok(created)
}

/// Recomputes and overwrites an existing budget from new job parameters.
///
/// The whole snapshot is replaced: name, printer/filament references, job
/// parameters, and the recomputed cost fields against the current costs
/// configuration. `created_at` is preserved, `updated_at` is bumped.
pub async fn update_budget(
    db: &DatabaseConnection,
    budget_id: i64,
    input: BudgetInput,
) -> Result<budget::Model> {
    let existing = Budget::find_by_id(budget_id)
        .one(db)
        .await?
        .ok_or(Error::BudgetNotFound { id: budget_id })?;

    validate_input(&input)?;
    let (printer, filament, config) = resolve_inputs(db, &input).await?;
    let breakdown = calculator::calculate(&printer, &filament, &config, &job_params(&input))?;

    let mut model: budget::ActiveModel = existing.into();
    model.name = Set(input.name.trim().to_string());
    model.printer_id = Set(input.printer_id);
    model.filament_id = Set(input.filament_id);
    model.print_time_hours = Set(input.print_time_hours);
    model.material_weight_g = Set(input.material_weight_g);
    model.pieces_quantity = Set(input.pieces_quantity);
    model.total_cost = Set(breakdown.total_cost);
    model.sale_price = Set(breakdown.sale_price);
    model.profit_margin = Set(breakdown.profit_margin_percentage);
    model.updated_at = Set(chrono::Utc::now());

    let updated = model.update(db).await?;
    info!(budget_id = updated.id, "recalculated and updated budget");
    Ok(updated)
}

/// Finds a budget by its unique ID, returning None if not found.
pub async fn get_budget_by_id(
    db: &DatabaseConnection,
    budget_id: i64,
) -> Result<Option<budget::Model>> {
    Budget::find_by_id(budget_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Retrieves budgets, newest first, optionally filtered by a name search.
///
/// The query is a case-insensitive substring match on the budget name.
pub async fn get_all_budgets(
    db: &DatabaseConnection,
    query: Option<&str>,
) -> Result<Vec<budget::Model>> {
    let mut find = Budget::find()
        .order_by_desc(budget::Column::CreatedAt)
        .order_by_desc(budget::Column::Id);

    if let Some(q) = query {
        let q = q.trim();
        if !q.is_empty() {
            find = find.filter(budget::Column::Name.contains(q));
        }
    }

    find.all(db).await.map_err(Into::into)
}

/// Retrieves a budget together with its printer, filament, and a live
/// breakdown recomputed against the current costs configuration.
///
/// When no configuration is stored, the recalculation uses the
/// implementation-defined defaults; the stored snapshot fields are
/// returned unchanged either way.
pub async fn get_budget_with_details(
    db: &DatabaseConnection,
    budget_id: i64,
) -> Result<Option<BudgetWithDetails>> {
    let Some(stored) = Budget::find_by_id(budget_id).one(db).await? else {
        return Ok(None);
    };

    let printer = Printer::find_by_id(stored.printer_id)
        .one(db)
        .await?
        .ok_or(Error::PrinterNotFound {
            id: stored.printer_id,
        })?;

    let filament = Filament::find_by_id(stored.filament_id)
        .one(db)
        .await?
        .ok_or(Error::FilamentNotFound {
            id: stored.filament_id,
        })?;

    let config = crate::core::costs::get_costs_config_or_default(db).await?;

    let calculation = calculator::calculate(
        &printer,
        &filament,
        &config,
        &JobParams {
            print_time_hours: stored.print_time_hours,
            material_weight_g: stored.material_weight_g,
            pieces_quantity: stored.pieces_quantity,
        },
    )?;

    Ok(Some(BudgetWithDetails {
        budget: stored,
        printer,
        filament,
        calculation,
    }))
}

/// Deletes a budget by id.
///
/// Budgets are leaves in the reference graph, so no guard is needed;
/// deleting one also releases its printer and filament for deletion.
pub async fn delete_budget(db: &DatabaseConnection, budget_id: i64) -> Result<()> {
    let existing = Budget::find_by_id(budget_id)
        .one(db)
        .await?
        .ok_or(Error::BudgetNotFound { id: budget_id })?;

    budget::ActiveModel::from(existing).delete(db).await?;
    info!(budget_id, "deleted budget");
    Ok(())
}
