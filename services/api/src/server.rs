use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryProfileRepository};
use crate::routes::with_rating_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use nutriscore::config::AppConfig;
use nutriscore::error::AppError;
use nutriscore::rating::{MealRatingService, RatingConfig};
use nutriscore::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

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

    let repository = Arc::new(InMemoryProfileRepository::default());
    let rating_service = Arc::new(MealRatingService::new(repository, RatingConfig::default()));

    let app = with_rating_routes(rating_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "nutrition rating service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
