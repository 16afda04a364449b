use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;

use super::common::*;
use crate::leads::router;
use crate::leads::service::LeadIntakeService;

#[tokio::test]
async fn submit_handler_returns_unprocessable_for_invalid_submissions() {
    let (service, _, _) = build_service();
    let service = Arc::new(service);

    let response = router::submit_handler::<MemoryRepository, MemoryNotifications>(
        State(service),
        axum::Json(unreachable_quote_submission()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    assert!(payload
        .get("error")
        .and_then(serde_json::Value::as_str)
        .unwrap_or_default()
        .contains("quote request"));
}

#[tokio::test]
async fn submit_handler_returns_conflict_on_duplicate() {
    let service = Arc::new(LeadIntakeService::new(
        Arc::new(ConflictRepository),
        Arc::new(MemoryNotifications::default()),
    ));

    let response = router::submit_handler::<ConflictRepository, MemoryNotifications>(
        State(service),
        axum::Json(quote_submission()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn submit_handler_returns_internal_error_on_repository_failure() {
    let service = Arc::new(LeadIntakeService::new(
        Arc::new(UnavailableRepository),
        Arc::new(MemoryNotifications::default()),
    ));

    let response = router::submit_handler::<UnavailableRepository, MemoryNotifications>(
        State(service),
        axum::Json(quote_submission()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn submit_route_accepts_payloads() {
    let (service, _, _) = build_service();
    let router = lead_router_with_service(service);

    let response = router
        .oneshot(
            axum::http::Request::post("/api/v1/leads")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(
                    serde_json::to_vec(&quote_submission()).unwrap(),
                ))
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::ACCEPTED);
    let payload = read_json_body(response).await;
    assert!(payload.get("lead_id").is_some());
    assert_eq!(payload.get("status"), Some(&json!("received")));
}

#[tokio::test]
async fn status_handler_returns_found_records() {
    let (service, _, notifications) = build_service();
    let service = Arc::new(service);

    let record = service
        .submit(contact_submission(), received_on())
        .expect("submission succeeds");

    let response = router::status_handler::<MemoryRepository, MemoryNotifications>(
        State(service),
        axum::extract::Path(record.id.0.clone()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(
        payload.get("lead_id").and_then(serde_json::Value::as_str),
        Some(record.id.0.as_str())
    );
    assert_eq!(payload.get("kind"), Some(&json!("contact")));

    assert!(
        notifications.events().is_empty(),
        "status check should not emit notifications"
    );
}

#[tokio::test]
async fn status_handler_returns_not_found_for_missing_records() {
    let (service, _, _) = build_service();
    let service = Arc::new(service);

    let response = router::status_handler::<MemoryRepository, MemoryNotifications>(
        State(service),
        axum::extract::Path("lead-999999".to_string()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn transition_route_updates_status() {
    let (service, _, _) = build_service();
    let service_handle = Arc::new(service);
    let record = service_handle
        .submit(quote_submission(), received_on())
        .expect("submission succeeds");

    let router = crate::leads::router::lead_router(service_handle);
    let response = router
        .oneshot(
            axum::http::Request::post(format!("/api/v1/leads/{}/status", record.id.0))
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(
                    serde_json::to_vec(&json!({ "status": "contacted" })).unwrap(),
                ))
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload.get("status"), Some(&json!("contacted")));
}
