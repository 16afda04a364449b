//! Coverage/cost estimation engine shared by the final-expense planning
//! pages and the DIME coverage calculator. Everything here is pure and
//! synchronous: the presentation layers hand in plain inputs and render the
//! returned breakdowns, so estimates stay deterministic and testable.

pub mod catalog;
pub mod domain;
pub mod engine;
pub mod format;
pub mod recommendation;

pub use catalog::{CatalogError, CostCatalog};
pub use domain::{
    BreakdownLine, CategorySelection, DimeInputs, EstimateResult, ExpenseCategory, Region,
    ServiceType,
};
pub use engine::EstimatorEngine;
pub use format::format_currency;
pub use recommendation::{recommend, CoverageRecommendation, COVERAGE_INCREMENT};
