use std::sync::atomic::Ordering;
use std::sync::Arc;

use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use clearpath_life::config::AppConfig;
use clearpath_life::error::AppError;
use clearpath_life::leads::LeadIntakeService;
use clearpath_life::telemetry;
use tracing::info;

use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryLeadRepository, InMemoryNotificationPublisher};
use crate::routes::with_site_routes;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let repository = Arc::new(InMemoryLeadRepository::default());
    let notifications = Arc::new(InMemoryNotificationPublisher::default());
    let lead_service = Arc::new(LeadIntakeService::new(repository, notifications));

    let app = with_site_routes(lead_service, config.dashboard.window_days)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "coverage estimation and lead intake service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
