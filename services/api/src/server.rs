use std::sync::atomic::Ordering;
use std::sync::Arc;

use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use decision_engine::config::AppConfig;
use decision_engine::error::AppError;
use decision_engine::telemetry;
use decision_engine::workflows::interview::InterviewService;
use decision_engine::workflows::portfolio::{CompatibilityEngine, EvaluationConfig};
use tracing::info;

use crate::cli::ServeArgs;
use crate::infra::{load_catalog, AppState, DecisionState, InMemorySessionRepository};
use crate::routes::with_decision_routes;

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

    let catalog = load_catalog(args.portfolio_csv.as_deref())?;
    let repository = Arc::new(InMemorySessionRepository::default());
    let interview_service = Arc::new(InterviewService::new(repository));
    let decision_state = DecisionState {
        catalog: Arc::new(catalog),
        engine: Arc::new(CompatibilityEngine::new(EvaluationConfig::default())),
        uf_rate: config.market.uf_rate,
    };

    let app = with_decision_routes(interview_service, decision_state)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        uf_rate = config.market.uf_rate,
        "property decision engine ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
