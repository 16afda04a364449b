use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::NaiveDate;
use tracing::info;

use super::domain::{LeadId, LeadStatus, LeadSubmission, LeadValidationError};
use super::repository::{
    LeadRecord, LeadRepository, NotificationError, NotificationPublisher, RepositoryError,
    StaffNotification,
};
use crate::estimator::format_currency;

/// Service composing intake validation, the repository, and staff
/// notifications.
pub struct LeadIntakeService<R, N> {
    repository: Arc<R>,
    notifications: Arc<N>,
}

static LEAD_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_lead_id() -> LeadId {
    let id = LEAD_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    LeadId(format!("lead-{id:06}"))
}

impl<R, N> LeadIntakeService<R, N>
where
    R: LeadRepository + 'static,
    N: NotificationPublisher + 'static,
{
    pub fn new(repository: Arc<R>, notifications: Arc<N>) -> Self {
        Self {
            repository,
            notifications,
        }
    }

    /// Accept a form submission, returning the repository-backed record.
    /// New quote requests alert staff so response-time goals hold.
    pub fn submit(
        &self,
        submission: LeadSubmission,
        received_on: NaiveDate,
    ) -> Result<LeadRecord, LeadServiceError> {
        submission.validate()?;

        let record = LeadRecord {
            id: next_lead_id(),
            submission,
            status: LeadStatus::Received,
            received_on,
        };

        let stored = self.repository.insert(record)?;
        info!(
            lead_id = %stored.id.0,
            kind = stored.kind().label(),
            "lead accepted"
        );

        if let LeadSubmission::Quote(quote) = &stored.submission {
            let mut details = BTreeMap::new();
            details.insert("product".to_string(), quote.product.label().to_string());
            details.insert(
                "requested_coverage".to_string(),
                format_currency(quote.coverage_amount),
            );
            self.notifications.publish(StaffNotification {
                template: "quote_requested".to_string(),
                lead_id: stored.id.clone(),
                details,
            })?;
        }

        Ok(stored)
    }

    /// Fetch a lead and current status for API responses.
    pub fn get(&self, id: &LeadId) -> Result<LeadRecord, LeadServiceError> {
        let record = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    /// Staff status change along the received/contacted/converted/closed
    /// lifecycle.
    pub fn transition(
        &self,
        id: &LeadId,
        status: LeadStatus,
    ) -> Result<LeadRecord, LeadServiceError> {
        let mut record = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;

        record.status = status;
        self.repository.update(record.clone())?;

        Ok(record)
    }

    pub fn list(&self) -> Result<Vec<LeadRecord>, LeadServiceError> {
        Ok(self.repository.list()?)
    }
}

/// Error raised by the intake service.
#[derive(Debug, thiserror::Error)]
pub enum LeadServiceError {
    #[error(transparent)]
    Validation(#[from] LeadValidationError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Notification(#[from] NotificationError),
}
