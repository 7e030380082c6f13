use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryLeadNotifier, InMemoryLeadRepository};
use crate::routes::with_service_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;
use vpp_eligibility::config::AppConfig;
use vpp_eligibility::eligibility::{EligibilityEngine, ReferenceData};
use vpp_eligibility::error::AppError;
use vpp_eligibility::leads::LeadService;
use vpp_eligibility::resolver::resolver_from_config;
use vpp_eligibility::telemetry;

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

    let reference = ReferenceData::load(&config.reference)?;
    let summary = reference.summary();
    info!(
        counties = summary.county_count,
        territories = summary.utility_territories.len(),
        source = %summary.county_source.source,
        "reference tables loaded"
    );

    let engine = Arc::new(EligibilityEngine::new(Arc::new(reference)));
    let resolver = resolver_from_config(&config.geocoder)?;
    let lead_service = Arc::new(LeadService::new(
        Arc::new(InMemoryLeadRepository::default()),
        Arc::new(InMemoryLeadNotifier::default()),
        engine.clone(),
    ));

    let app = with_service_routes(engine, resolver, lead_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        geocoder = ?config.geocoder.provider,
        %addr,
        "eligibility service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
