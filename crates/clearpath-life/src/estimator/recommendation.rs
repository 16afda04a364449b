use serde::Serialize;

/// Recommended coverage is always rounded up to the next marketing-friendly
/// increment so the suggestion never lands below the computed need.
pub const COVERAGE_INCREMENT: i64 = 5_000;

const UNDER_HALF_MILLION: &str =
    "A term or final expense policy in this range fits most family budgets.";
const UNDER_ONE_MILLION: &str =
    "Consider a term policy with living benefit riders at this coverage level.";
const ONE_MILLION_AND_UP: &str =
    "Coverage at this level usually pairs term with permanent protection; an agent can help structure it.";

/// Coverage suggestion derived from an estimate total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoverageRecommendation {
    pub rounded_coverage: i64,
    pub message: &'static str,
}

/// Map a computed need onto a suggested coverage amount and guidance line.
/// Message tiers switch at exactly 500,000 and 1,000,000, strictly less
/// than for the lower tiers.
pub fn recommend(total: i64) -> CoverageRecommendation {
    let message = if total < 500_000 {
        UNDER_HALF_MILLION
    } else if total < 1_000_000 {
        UNDER_ONE_MILLION
    } else {
        ONE_MILLION_AND_UP
    };

    CoverageRecommendation {
        rounded_coverage: round_up_to_increment(total, COVERAGE_INCREMENT),
        message,
    }
}

fn round_up_to_increment(total: i64, increment: i64) -> i64 {
    if total <= 0 {
        return 0;
    }
    ((total + increment - 1) / increment) * increment
}
