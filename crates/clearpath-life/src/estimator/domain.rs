use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Service families with distinct expense category sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceType {
    Burial,
    Cremation,
}

impl ServiceType {
    pub const fn label(self) -> &'static str {
        match self {
            ServiceType::Burial => "burial",
            ServiceType::Cremation => "cremation",
        }
    }
}

/// A single line of the static cost table: a national-average figure in
/// whole dollars. Insertion order in the catalog is the display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseCategory {
    pub id: String,
    pub label: String,
    pub base_cost: u32,
}

/// Regional cost adjustment applied to the national averages. The
/// `average_cost` figure is precomputed for display on the region selector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub key: String,
    pub display_name: String,
    pub multiplier: f64,
    pub average_cost: u32,
}

/// Category id -> included flag with opt-out semantics: a category is part
/// of the estimate unless its id is explicitly mapped to `false`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategorySelection(pub BTreeMap<String, bool>);

impl CategorySelection {
    /// Empty selection, meaning every category is included.
    pub fn all_included() -> Self {
        Self::default()
    }

    pub fn exclude(mut self, id: &str) -> Self {
        self.0.insert(id.to_string(), false);
        self
    }

    pub fn include(mut self, id: &str) -> Self {
        self.0.insert(id.to_string(), true);
        self
    }

    pub fn includes(&self, id: &str) -> bool {
        self.0.get(id).copied().unwrap_or(true)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

/// One labeled dollar amount of an estimate breakdown. Deductions carry
/// negative amounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownLine {
    pub label: String,
    pub amount: i64,
}

/// Derived estimate output. Recomputed on demand, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimateResult {
    pub total: i64,
    pub breakdown: Vec<BreakdownLine>,
    pub recommended_coverage: i64,
}

/// Inputs to the DIME (Debt, Income, Mortgage, Education) estimator. All
/// values arrive from bounded sliders, so the engine treats them as trusted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimeInputs {
    pub debt: u32,
    pub annual_income: u32,
    pub years_to_replace: u8,
    pub mortgage_balance: u32,
    pub education_costs: u32,
    pub existing_coverage: u32,
    pub savings: u32,
}
