//! Server construction and middleware wiring.

mod config;
#[cfg(feature = "metrics")]
mod metrics;

pub use config::{ConfigError, ServerConfig, ServerSettings};

#[cfg(feature = "metrics")]
use metrics::MetricsLayer;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;

use frontdesk::Trace;
#[cfg(debug_assertions)]
use frontdesk::doc::ApiDoc;
use frontdesk::inbound::http::front_desk::{check_in, check_out, export_history, front_desk_page};
use frontdesk::inbound::http::health::{HealthState, live, ready};
use frontdesk::inbound::http::state::HttpState;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[derive(Clone)]
pub(crate) struct AppDependencies {
    pub(crate) health_state: web::Data<HealthState>,
    pub(crate) http_state: web::Data<HttpState>,
}

pub(crate) fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
    } = deps;

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .service(front_desk_page)
        .service(check_in)
        .service(check_out)
        .service(export_history)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server serving the front desk.
///
/// # Parameters
/// - `health_state`: readiness state, marked ready once the listener is bound.
/// - `http_state`: booking ports shared by every worker.
/// - `config`: bind address and optional metrics middleware.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    http_state: HttpState,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let http_state = web::Data::new(http_state);
    let ServerConfig {
        bind_addr,
        #[cfg(feature = "metrics")]
        prometheus,
    } = config;

    #[cfg(feature = "metrics")]
    let metrics_layer = MetricsLayer::new(prometheus);

    let server = HttpServer::new(move || {
        let app = build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
        });

        #[cfg(feature = "metrics")]
        let app = app.wrap(metrics_layer.clone());

        app
    })
    .bind(bind_addr)?;

    for addr in server.addrs() {
        info!(%addr, "front desk listening");
    }
    let server = server.run();

    health_state.mark_ready();
    Ok(server)
}
