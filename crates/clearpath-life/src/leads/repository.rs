use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::domain::{LeadId, LeadKind, LeadStatus, LeadSubmission};
use crate::estimator::format_currency;

/// Repository record for a stored lead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadRecord {
    pub id: LeadId,
    pub submission: LeadSubmission,
    pub status: LeadStatus,
    pub received_on: NaiveDate,
}

impl LeadRecord {
    pub fn kind(&self) -> LeadKind {
        self.submission.kind()
    }

    /// Requested coverage, present only for quote leads.
    pub fn requested_coverage(&self) -> Option<i64> {
        match &self.submission {
            LeadSubmission::Quote(quote) => Some(quote.coverage_amount),
            _ => None,
        }
    }

    pub fn summary(&self) -> String {
        match &self.submission {
            LeadSubmission::Quote(quote) => format!(
                "{} quote requested at {}",
                quote.product.label(),
                format_currency(quote.coverage_amount)
            ),
            LeadSubmission::Contact(message) => format!("message: {}", message.subject),
            LeadSubmission::JobApplication(application) => {
                format!("application for {}", application.position)
            }
        }
    }

    pub fn status_view(&self) -> LeadStatusView {
        LeadStatusView {
            lead_id: self.id.clone(),
            kind: self.kind().label(),
            status: self.status.label(),
            summary: self.summary(),
            received_on: self.received_on,
            requested_coverage: self.requested_coverage(),
        }
    }
}

/// Storage abstraction so the intake service can be exercised in isolation.
pub trait LeadRepository: Send + Sync {
    fn insert(&self, record: LeadRecord) -> Result<LeadRecord, RepositoryError>;
    fn update(&self, record: LeadRecord) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &LeadId) -> Result<Option<LeadRecord>, RepositoryError>;
    fn list(&self) -> Result<Vec<LeadRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Outbound hook alerting staff to new work (e-mail or CRM adapters).
pub trait NotificationPublisher: Send + Sync {
    fn publish(&self, notification: StaffNotification) -> Result<(), NotificationError>;
}

/// Notification payload so routes/tests can assert integration boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffNotification {
    pub template: String,
    pub lead_id: LeadId,
    pub details: BTreeMap<String, String>,
}

/// Notification dispatch error.
#[derive(Debug, thiserror::Error)]
pub enum NotificationError {
    #[error("notification transport unavailable: {0}")]
    Transport(String),
}

/// Sanitized representation of a lead's exposed status.
#[derive(Debug, Clone, Serialize)]
pub struct LeadStatusView {
    pub lead_id: LeadId,
    pub kind: &'static str,
    pub status: &'static str,
    pub summary: String,
    pub received_on: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requested_coverage: Option<i64>,
}
