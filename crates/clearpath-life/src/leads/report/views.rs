use chrono::NaiveDate;
use serde::Serialize;

use super::super::domain::{LeadKind, LeadStatus};
use super::super::repository::{LeadRecord, LeadStatusView};
use super::insights::generate_insights;

#[derive(Debug, Clone, Serialize)]
pub struct KindBreakdownEntry {
    pub kind: LeadKind,
    pub kind_label: &'static str,
    pub total: usize,
    pub open: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusBreakdownEntry {
    pub status: LeadStatus,
    pub status_label: &'static str,
    pub total: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct DailyVolumeEntry {
    pub date: NaiveDate,
    pub total: usize,
}

/// Aggregated dashboard view over the leads received in the reporting
/// window.
#[derive(Debug, Clone, Serialize)]
pub struct LeadFunnelSummary {
    pub kind_breakdown: Vec<KindBreakdownEntry>,
    pub status_breakdown: Vec<StatusBreakdownEntry>,
    pub daily_volume: Vec<DailyVolumeEntry>,
    pub open_leads: Vec<LeadStatusView>,
}

impl LeadFunnelSummary {
    pub fn insights(&self, records: &[LeadRecord], today: NaiveDate) -> PipelineInsights {
        generate_insights(self, records, today)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelinePressure {
    Steady,
    Building,
    Backlogged,
}

impl PipelinePressure {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Steady => "Steady",
            Self::Building => "Building",
            Self::Backlogged => "Backlogged",
        }
    }
}

/// Derived signals for the staff dashboard header.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineInsights {
    pub conversion_rate: f32,
    pub pressure: PipelinePressure,
    pub open_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_requested_coverage: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub busiest_day: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub observations: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recommended_actions: Vec<String>,
}
