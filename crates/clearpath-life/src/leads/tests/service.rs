use std::sync::Arc;

use super::common::*;
use crate::leads::domain::{LeadId, LeadStatus, LeadValidationError};
use crate::leads::repository::{LeadRepository, RepositoryError};
use crate::leads::service::{LeadIntakeService, LeadServiceError};

#[test]
fn submit_rejects_quotes_without_reachable_contact() {
    let (service, repository, notifications) = build_service();

    match service.submit(unreachable_quote_submission(), received_on()) {
        Err(LeadServiceError::Validation(LeadValidationError::MissingContact)) => {}
        other => panic!("expected missing contact rejection, got {other:?}"),
    }

    assert!(repository.list().expect("list succeeds").is_empty());
    assert!(notifications.events().is_empty());
}

#[test]
fn submit_stores_quote_and_notifies_staff() {
    let (service, repository, notifications) = build_service();

    let record = service
        .submit(quote_submission(), received_on())
        .expect("quote stores");

    assert_eq!(record.status, LeadStatus::Received);
    assert_eq!(record.received_on, received_on());
    assert!(record.id.0.starts_with("lead-"));

    let stored = repository
        .fetch(&record.id)
        .expect("fetch succeeds")
        .expect("record present");
    assert_eq!(stored, record);

    let events = notifications.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].template, "quote_requested");
    assert_eq!(events[0].lead_id, record.id);
    assert_eq!(
        events[0].details.get("requested_coverage").map(String::as_str),
        Some("$15K")
    );
}

#[test]
fn submit_does_not_notify_for_contact_messages() {
    let (service, _, notifications) = build_service();

    service
        .submit(contact_submission(), received_on())
        .expect("contact stores");

    assert!(
        notifications.events().is_empty(),
        "contact messages should not page staff"
    );
}

#[test]
fn transition_updates_stored_status() {
    let (service, repository, _) = build_service();

    let record = service
        .submit(job_submission(), received_on())
        .expect("application stores");
    let updated = service
        .transition(&record.id, LeadStatus::Contacted)
        .expect("transition succeeds");

    assert_eq!(updated.status, LeadStatus::Contacted);
    let stored = repository
        .fetch(&record.id)
        .expect("fetch succeeds")
        .expect("record present");
    assert_eq!(stored.status, LeadStatus::Contacted);
}

#[test]
fn get_propagates_not_found() {
    let (service, _, _) = build_service();

    match service.get(&LeadId("missing".to_string())) {
        Err(LeadServiceError::Repository(RepositoryError::NotFound)) => {}
        other => panic!("expected not found error, got {other:?}"),
    }
}

#[test]
fn submit_propagates_repository_outages() {
    let service = LeadIntakeService::new(
        Arc::new(UnavailableRepository),
        Arc::new(MemoryNotifications::default()),
    );

    match service.submit(quote_submission(), received_on()) {
        Err(LeadServiceError::Repository(RepositoryError::Unavailable(_))) => {}
        other => panic!("expected unavailable error, got {other:?}"),
    }
}

#[test]
fn status_view_summarizes_quotes_with_formatted_coverage() {
    let (service, _, _) = build_service();

    let record = service
        .submit(quote_submission(), received_on())
        .expect("quote stores");
    let view = record.status_view();

    assert_eq!(view.kind, "quote");
    assert_eq!(view.status, "received");
    assert_eq!(view.requested_coverage, Some(15_000));
    assert!(view.summary.contains("final expense"));
    assert!(view.summary.contains("$15K"));
}
