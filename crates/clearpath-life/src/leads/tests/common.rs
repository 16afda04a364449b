use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::leads::domain::{
    ContactMessage, JobApplication, LeadId, LeadSubmission, ProductLine, QuoteRequest,
};
use crate::leads::repository::{
    LeadRecord, LeadRepository, NotificationError, NotificationPublisher, RepositoryError,
    StaffNotification,
};
use crate::leads::router::lead_router;
use crate::leads::service::LeadIntakeService;

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    records: Arc<Mutex<HashMap<LeadId, LeadRecord>>>,
}

impl LeadRepository for MemoryRepository {
    fn insert(&self, record: LeadRecord) -> Result<LeadRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: LeadRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.id) {
            guard.insert(record.id.clone(), record);
            Ok(())
        } else {
            Err(RepositoryError::NotFound)
        }
    }

    fn fetch(&self, id: &LeadId) -> Result<Option<LeadRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn list(&self) -> Result<Vec<LeadRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.values().cloned().collect())
    }
}

/// Repository that rejects every insert, for conflict-path tests.
pub(super) struct ConflictRepository;

impl LeadRepository for ConflictRepository {
    fn insert(&self, _record: LeadRecord) -> Result<LeadRecord, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn update(&self, _record: LeadRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::NotFound)
    }

    fn fetch(&self, _id: &LeadId) -> Result<Option<LeadRecord>, RepositoryError> {
        Ok(None)
    }

    fn list(&self) -> Result<Vec<LeadRecord>, RepositoryError> {
        Ok(Vec::new())
    }
}

/// Repository that fails every call, for outage-path tests.
pub(super) struct UnavailableRepository;

impl LeadRepository for UnavailableRepository {
    fn insert(&self, _record: LeadRecord) -> Result<LeadRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("backing store offline".to_string()))
    }

    fn update(&self, _record: LeadRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("backing store offline".to_string()))
    }

    fn fetch(&self, _id: &LeadId) -> Result<Option<LeadRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("backing store offline".to_string()))
    }

    fn list(&self) -> Result<Vec<LeadRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("backing store offline".to_string()))
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryNotifications {
    events: Arc<Mutex<Vec<StaffNotification>>>,
}

impl NotificationPublisher for MemoryNotifications {
    fn publish(&self, notification: StaffNotification) -> Result<(), NotificationError> {
        let mut guard = self.events.lock().expect("notification mutex poisoned");
        guard.push(notification);
        Ok(())
    }
}

impl MemoryNotifications {
    pub(super) fn events(&self) -> Vec<StaffNotification> {
        self.events.lock().expect("notification mutex poisoned").clone()
    }
}

pub(super) fn received_on() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 9).expect("valid date")
}

pub(super) fn quote_submission() -> LeadSubmission {
    LeadSubmission::Quote(QuoteRequest {
        first_name: "Avery".to_string(),
        last_name: "Holt".to_string(),
        email: Some("avery@example.com".to_string()),
        phone: Some("515-555-0138".to_string()),
        region: Some("midwest".to_string()),
        product: ProductLine::FinalExpense,
        coverage_amount: 15_000,
        notes: Some("Prefers evening calls".to_string()),
    })
}

pub(super) fn contact_submission() -> LeadSubmission {
    LeadSubmission::Contact(ContactMessage {
        name: "Rowan Ellis".to_string(),
        email: "rowan@example.com".to_string(),
        subject: "Policy review".to_string(),
        body: "Could someone walk me through my current term policy?".to_string(),
    })
}

pub(super) fn job_submission() -> LeadSubmission {
    LeadSubmission::JobApplication(JobApplication {
        name: "Sam Okafor".to_string(),
        email: "sam@example.com".to_string(),
        phone: None,
        position: "Licensed agent".to_string(),
        years_experience: 4,
        licensed: true,
        resume_key: Some("uploads/resumes/sam-okafor.pdf".to_string()),
    })
}

pub(super) fn unreachable_quote_submission() -> LeadSubmission {
    LeadSubmission::Quote(QuoteRequest {
        first_name: "Noah".to_string(),
        last_name: "Vale".to_string(),
        email: None,
        phone: Some("   ".to_string()),
        region: None,
        product: ProductLine::Term,
        coverage_amount: 250_000,
        notes: None,
    })
}

pub(super) fn build_service() -> (
    LeadIntakeService<MemoryRepository, MemoryNotifications>,
    MemoryRepository,
    MemoryNotifications,
) {
    let repository = MemoryRepository::default();
    let notifications = MemoryNotifications::default();
    let service = LeadIntakeService::new(
        Arc::new(repository.clone()),
        Arc::new(notifications.clone()),
    );
    (service, repository, notifications)
}

pub(super) fn lead_router_with_service(
    service: LeadIntakeService<MemoryRepository, MemoryNotifications>,
) -> axum::Router {
    lead_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body reads");
    serde_json::from_slice(&bytes).expect("body is json")
}
