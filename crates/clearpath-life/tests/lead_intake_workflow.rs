use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::NaiveDate;
use clearpath_life::estimator::{
    CategorySelection, CostCatalog, EstimatorEngine, ServiceType,
};
use clearpath_life::leads::{
    summarize, write_leads_csv, ContactMessage, LeadId, LeadIntakeService, LeadRecord,
    LeadRepository, LeadStatus, LeadSubmission, NotificationError, NotificationPublisher,
    ProductLine, QuoteRequest, RepositoryError, StaffNotification,
};

#[derive(Default, Clone)]
struct MemoryRepository {
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

#[derive(Default, Clone)]
struct MemoryNotifications {
    events: Arc<Mutex<Vec<StaffNotification>>>,
}

impl NotificationPublisher for MemoryNotifications {
    fn publish(&self, notification: StaffNotification) -> Result<(), NotificationError> {
        let mut guard = self.events.lock().expect("notification mutex poisoned");
        guard.push(notification);
        Ok(())
    }
}

fn day(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 4, day).expect("valid date")
}

/// The site's end-to-end flow: estimate, submit the "Get Quote" handoff
/// with the recommended coverage prefilled, review, and roll the result up
/// into the staff dashboard.
#[test]
fn estimate_to_dashboard_walkthrough() {
    let engine = EstimatorEngine::new(CostCatalog::standard());
    let estimate = engine
        .final_expense(
            ServiceType::Burial,
            "midwest",
            &CategorySelection::all_included(),
        )
        .expect("estimate builds");

    let repository = MemoryRepository::default();
    let notifications = MemoryNotifications::default();
    let service = LeadIntakeService::new(
        Arc::new(repository.clone()),
        Arc::new(notifications.clone()),
    );

    let quote = service
        .submit(
            LeadSubmission::Quote(QuoteRequest {
                first_name: "June".to_string(),
                last_name: "Park".to_string(),
                email: Some("june@example.com".to_string()),
                phone: None,
                region: Some("midwest".to_string()),
                product: ProductLine::FinalExpense,
                coverage_amount: estimate.recommended_coverage,
                notes: None,
            }),
            day(6),
        )
        .expect("quote stores");

    service
        .submit(
            LeadSubmission::Contact(ContactMessage {
                name: "Omar Reyes".to_string(),
                email: "omar@example.com".to_string(),
                subject: "Beneficiary change".to_string(),
                body: "How do I update the beneficiary on my policy?".to_string(),
            }),
            day(7),
        )
        .expect("contact stores");

    let events = notifications.events.lock().expect("events lock");
    assert_eq!(events.len(), 1, "only the quote should notify staff");
    drop(events);

    service
        .transition(&quote.id, LeadStatus::Contacted)
        .expect("transition succeeds");

    let records = repository.list().expect("list succeeds");
    let summary = summarize(&records, day(8), 30);
    let insights = summary.insights(&records, day(8));

    assert_eq!(summary.open_leads.len(), 2);
    assert_eq!(insights.open_count, 2);
    assert_eq!(
        insights.average_requested_coverage,
        Some(estimate.recommended_coverage)
    );

    let mut buffer = Vec::new();
    write_leads_csv(&records, &mut buffer).expect("export writes");
    let exported = String::from_utf8(buffer).expect("utf8 output");
    assert_eq!(exported.lines().count(), 3);
    assert!(exported.contains("June Park"));
}
