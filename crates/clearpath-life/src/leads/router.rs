use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::Local;
use serde::Deserialize;
use serde_json::json;

use super::domain::{LeadId, LeadStatus, LeadSubmission};
use super::repository::{LeadRepository, NotificationPublisher, RepositoryError};
use super::service::{LeadIntakeService, LeadServiceError};

/// Router builder exposing HTTP endpoints for lead intake and review.
pub fn lead_router<R, N>(service: Arc<LeadIntakeService<R, N>>) -> Router
where
    R: LeadRepository + 'static,
    N: NotificationPublisher + 'static,
{
    Router::new()
        .route("/api/v1/leads", post(submit_handler::<R, N>))
        .route("/api/v1/leads/:lead_id", get(status_handler::<R, N>))
        .route(
            "/api/v1/leads/:lead_id/status",
            post(transition_handler::<R, N>),
        )
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct StatusUpdateRequest {
    pub(crate) status: LeadStatus,
}

pub(crate) async fn submit_handler<R, N>(
    State(service): State<Arc<LeadIntakeService<R, N>>>,
    axum::Json(submission): axum::Json<LeadSubmission>,
) -> Response
where
    R: LeadRepository + 'static,
    N: NotificationPublisher + 'static,
{
    let received_on = Local::now().date_naive();
    match service.submit(submission, received_on) {
        Ok(record) => {
            let view = record.status_view();
            (StatusCode::ACCEPTED, axum::Json(view)).into_response()
        }
        Err(LeadServiceError::Validation(error)) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(LeadServiceError::Repository(RepositoryError::Conflict)) => {
            let payload = json!({
                "error": "lead already exists",
            });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn status_handler<R, N>(
    State(service): State<Arc<LeadIntakeService<R, N>>>,
    Path(lead_id): Path<String>,
) -> Response
where
    R: LeadRepository + 'static,
    N: NotificationPublisher + 'static,
{
    let id = LeadId(lead_id);
    match service.get(&id) {
        Ok(record) => {
            let view = record.status_view();
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(LeadServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "lead_id": id.0,
                "error": "lead not found",
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn transition_handler<R, N>(
    State(service): State<Arc<LeadIntakeService<R, N>>>,
    Path(lead_id): Path<String>,
    axum::Json(request): axum::Json<StatusUpdateRequest>,
) -> Response
where
    R: LeadRepository + 'static,
    N: NotificationPublisher + 'static,
{
    let id = LeadId(lead_id);
    match service.transition(&id, request.status) {
        Ok(record) => {
            let view = record.status_view();
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(LeadServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "lead_id": id.0,
                "error": "lead not found",
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
