use super::catalog::{CatalogError, CostCatalog};
use super::domain::{BreakdownLine, CategorySelection, DimeInputs, EstimateResult, ServiceType};
use super::recommendation::recommend;

/// Stateless estimator over an injected cost catalog. Both calculator
/// variants reduce to the same shape: a weighted category sum plus an
/// optional list of deductions.
pub struct EstimatorEngine {
    catalog: CostCatalog,
}

impl EstimatorEngine {
    pub fn new(catalog: CostCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &CostCatalog {
        &self.catalog
    }

    /// Final-expense estimate for a service type and region.
    ///
    /// The regional multiplier is applied per category and rounded half-up
    /// to whole dollars before summing. Rounding once after the sum can
    /// differ at the dollar level; the per-category behavior is the
    /// published one and is pinned by the scenario tests.
    pub fn final_expense(
        &self,
        service_type: ServiceType,
        region_key: &str,
        selection: &CategorySelection,
    ) -> Result<EstimateResult, CatalogError> {
        let categories = self.catalog.categories(service_type);

        // A selection key naming no category in the active set means the
        // calling form is wired against the wrong table.
        for key in selection.keys() {
            if !categories.iter().any(|category| category.id == key) {
                return Err(CatalogError::UnknownCategory {
                    service_type,
                    id: key.to_string(),
                });
            }
        }

        let region = self.catalog.region(region_key)?;

        let lines: Vec<BreakdownLine> = categories
            .iter()
            .filter(|category| selection.includes(&category.id))
            .map(|category| BreakdownLine {
                label: category.label.clone(),
                amount: (f64::from(category.base_cost) * region.multiplier).round() as i64,
            })
            .collect();

        Ok(compose(lines, Vec::new()))
    }

    /// DIME estimate: Debt + Income replacement + Mortgage + Education,
    /// less existing coverage and savings, clamped at zero.
    pub fn dime(&self, inputs: &DimeInputs) -> EstimateResult {
        let income_replacement =
            i64::from(inputs.annual_income) * i64::from(inputs.years_to_replace);

        let lines = vec![
            line("Outstanding debt", i64::from(inputs.debt)),
            line("Income replacement", income_replacement),
            line("Mortgage balance", i64::from(inputs.mortgage_balance)),
            line("Education costs", i64::from(inputs.education_costs)),
        ];
        let deductions = vec![
            line("Existing coverage", i64::from(inputs.existing_coverage)),
            line("Savings", i64::from(inputs.savings)),
        ];

        compose(lines, deductions)
    }
}

fn line(label: &str, amount: i64) -> BreakdownLine {
    BreakdownLine {
        label: label.to_string(),
        amount,
    }
}

/// Shared composition step: sum the positive lines, subtract deductions
/// (clamped at zero), and render deductions as negative breakdown entries
/// after the positive ones.
fn compose(lines: Vec<BreakdownLine>, deductions: Vec<BreakdownLine>) -> EstimateResult {
    let gross: i64 = lines.iter().map(|entry| entry.amount).sum();
    let deducted: i64 = deductions.iter().map(|entry| entry.amount).sum();

    let total = if deductions.is_empty() {
        gross
    } else {
        (gross - deducted).max(0)
    };

    let mut breakdown = lines;
    breakdown.extend(deductions.into_iter().map(|entry| BreakdownLine {
        label: entry.label,
        amount: -entry.amount,
    }));

    let recommended_coverage = recommend(total).rounded_coverage;

    EstimateResult {
        total,
        breakdown,
        recommended_coverage,
    }
}
