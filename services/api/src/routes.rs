use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use chrono::{Local, NaiveDate};
use clearpath_life::error::AppError;
use clearpath_life::estimator::{
    format_currency, recommend, BreakdownLine, CategorySelection, CostCatalog, DimeInputs,
    EstimateResult, EstimatorEngine, ExpenseCategory, Region, ServiceType,
};
use clearpath_life::leads::{
    lead_router, summarize, write_leads_csv, LeadIntakeService, LeadRepository,
    NotificationPublisher, PipelineInsights,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::infra::AppState;

#[derive(Debug, Deserialize)]
pub(crate) struct FinalExpenseEstimateRequest {
    pub(crate) service_type: ServiceType,
    pub(crate) region: String,
    #[serde(default)]
    pub(crate) categories: CategorySelection,
}

#[derive(Debug, Serialize)]
pub(crate) struct EstimateResponse {
    pub(crate) total: i64,
    pub(crate) display_total: String,
    pub(crate) breakdown: Vec<BreakdownLine>,
    pub(crate) recommended_coverage: i64,
    pub(crate) display_recommended: String,
    pub(crate) recommendation: &'static str,
}

impl EstimateResponse {
    fn from_result(result: EstimateResult) -> Self {
        let suggestion = recommend(result.total);
        Self {
            total: result.total,
            display_total: format_currency(result.total),
            breakdown: result.breakdown,
            recommended_coverage: result.recommended_coverage,
            display_recommended: format_currency(result.recommended_coverage),
            recommendation: suggestion.message,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct CatalogResponse {
    pub(crate) burial_categories: Vec<ExpenseCategory>,
    pub(crate) cremation_categories: Vec<ExpenseCategory>,
    pub(crate) regions: Vec<Region>,
}

#[derive(Debug, Serialize)]
pub(crate) struct LeadDashboardResponse {
    pub(crate) today: NaiveDate,
    pub(crate) window_days: i64,
    #[serde(flatten)]
    pub(crate) summary: clearpath_life::leads::LeadFunnelSummary,
    pub(crate) insights: PipelineInsights,
}

pub(crate) struct DashboardState<R, N> {
    pub(crate) service: Arc<LeadIntakeService<R, N>>,
    pub(crate) window_days: i64,
}

impl<R, N> Clone for DashboardState<R, N> {
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
            window_days: self.window_days,
        }
    }
}

pub(crate) fn with_site_routes<R, N>(
    service: Arc<LeadIntakeService<R, N>>,
    window_days: i64,
) -> axum::Router
where
    R: LeadRepository + 'static,
    N: NotificationPublisher + 'static,
{
    lead_router(service.clone())
        .merge(dashboard_router(DashboardState {
            service,
            window_days,
        }))
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/estimates/final-expense",
            axum::routing::post(final_expense_estimate_endpoint),
        )
        .route(
            "/api/v1/estimates/dime",
            axum::routing::post(dime_estimate_endpoint),
        )
        .route(
            "/api/v1/estimates/catalog",
            axum::routing::get(catalog_endpoint),
        )
}

fn dashboard_router<R, N>(state: DashboardState<R, N>) -> axum::Router
where
    R: LeadRepository + 'static,
    N: NotificationPublisher + 'static,
{
    axum::Router::new()
        .route(
            "/api/v1/dashboard/leads",
            axum::routing::get(lead_dashboard_endpoint::<R, N>),
        )
        .route(
            "/api/v1/dashboard/leads.csv",
            axum::routing::get(lead_export_endpoint::<R, N>),
        )
        .with_state(state)
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn final_expense_estimate_endpoint(
    Json(payload): Json<FinalExpenseEstimateRequest>,
) -> Result<Json<EstimateResponse>, AppError> {
    let FinalExpenseEstimateRequest {
        service_type,
        region,
        categories,
    } = payload;

    let engine = EstimatorEngine::new(CostCatalog::standard());
    let result = engine.final_expense(service_type, &region, &categories)?;

    Ok(Json(EstimateResponse::from_result(result)))
}

pub(crate) async fn dime_estimate_endpoint(Json(inputs): Json<DimeInputs>) -> Json<EstimateResponse> {
    let engine = EstimatorEngine::new(CostCatalog::standard());
    let result = engine.dime(&inputs);

    Json(EstimateResponse::from_result(result))
}

pub(crate) async fn catalog_endpoint() -> Json<CatalogResponse> {
    let catalog = CostCatalog::standard();

    Json(CatalogResponse {
        burial_categories: catalog.categories(ServiceType::Burial).to_vec(),
        cremation_categories: catalog.categories(ServiceType::Cremation).to_vec(),
        regions: catalog.regions().to_vec(),
    })
}

pub(crate) async fn lead_dashboard_endpoint<R, N>(
    State(state): State<DashboardState<R, N>>,
) -> axum::response::Response
where
    R: LeadRepository + 'static,
    N: NotificationPublisher + 'static,
{
    let records = match state.service.list() {
        Ok(records) => records,
        Err(error) => {
            let payload = json!({ "error": error.to_string() });
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response();
        }
    };

    let today = Local::now().date_naive();
    let summary = summarize(&records, today, state.window_days);
    let insights = summary.insights(&records, today);

    (
        StatusCode::OK,
        Json(LeadDashboardResponse {
            today,
            window_days: state.window_days,
            summary,
            insights,
        }),
    )
        .into_response()
}

pub(crate) async fn lead_export_endpoint<R, N>(
    State(state): State<DashboardState<R, N>>,
) -> axum::response::Response
where
    R: LeadRepository + 'static,
    N: NotificationPublisher + 'static,
{
    let mut records = match state.service.list() {
        Ok(records) => records,
        Err(error) => {
            let payload = json!({ "error": error.to_string() });
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response();
        }
    };
    records.sort_by(|a, b| a.received_on.cmp(&b.received_on).then(a.id.0.cmp(&b.id.0)));

    let mut buffer = Vec::new();
    if let Err(error) = write_leads_csv(&records, &mut buffer) {
        let payload = json!({ "error": error.to_string() });
        return (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response();
    }

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/csv")],
        buffer,
    )
        .into_response()
}
