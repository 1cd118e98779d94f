//! Front desk entry-point: loads settings, initialises logging, and serves
//! the booking page, form handlers, CSV export, and health probes.

mod server;

use std::sync::Arc;

use actix_web::web;
#[cfg(feature = "metrics")]
use actix_web_prom::{PrometheusMetrics, PrometheusMetricsBuilder};
use mockable::DefaultClock;
use ortho_config::OrthoConfig;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use frontdesk::domain::FrontDeskService;
use frontdesk::inbound::http::health::HealthState;
use frontdesk::inbound::http::state::HttpState;
use server::{ServerConfig, ServerSettings, create_server};

/// Build Prometheus middleware, logging and continuing without it on failure.
#[cfg(feature = "metrics")]
fn initialize_metrics<F, E>(make_metrics: F) -> Option<PrometheusMetrics>
where
    F: FnOnce() -> Result<PrometheusMetrics, E>,
    E: std::fmt::Display,
{
    match make_metrics() {
        Ok(metrics) => Some(metrics),
        Err(error) => {
            warn!(%error, "Prometheus metrics disabled");
            None
        }
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load_from_iter(std::env::args_os())
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;
    let bind_addr = settings
        .bind_addr()
        .map_err(|e| std::io::Error::other(format!("invalid server settings: {e}")))?;

    let config = ServerConfig::new(bind_addr);
    #[cfg(feature = "metrics")]
    let config = config.with_metrics(initialize_metrics(|| {
        PrometheusMetricsBuilder::new("frontdesk")
            .endpoint("/metrics")
            .build()
    }));

    let front_desk = Arc::new(FrontDeskService::with_defaults(Arc::new(DefaultClock)));
    let health_state = web::Data::new(HealthState::new());
    let server = create_server(
        health_state,
        HttpState::from_service(front_desk),
        config,
    )?;
    server.await
}
