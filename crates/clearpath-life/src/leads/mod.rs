//! Lead intake behind the site's forms: quote requests, contact messages,
//! and job applications flow through validation, an injected repository,
//! and staff notifications, with dashboard aggregation on top.

pub mod domain;
pub mod export;
pub mod report;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    ContactMessage, JobApplication, LeadId, LeadKind, LeadStatus, LeadSubmission,
    LeadValidationError, ProductLine, QuoteRequest,
};
pub use export::write_leads_csv;
pub use report::{summarize, LeadFunnelSummary, PipelineInsights, PipelinePressure};
pub use repository::{
    LeadRecord, LeadRepository, LeadStatusView, NotificationError, NotificationPublisher,
    RepositoryError, StaffNotification,
};
pub use router::lead_router;
pub use service::{LeadIntakeService, LeadServiceError};
