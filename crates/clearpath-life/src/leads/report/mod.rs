mod insights;
mod summary;
pub mod views;

pub use summary::summarize;
pub use views::{
    DailyVolumeEntry, KindBreakdownEntry, LeadFunnelSummary, PipelineInsights, PipelinePressure,
    StatusBreakdownEntry,
};
