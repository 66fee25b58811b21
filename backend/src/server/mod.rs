//! Server construction and middleware wiring.

mod config;
mod settings;

pub use config::ServerConfig;
pub use settings::ServerSettings;

use std::net::{SocketAddr, ToSocketAddrs};
use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;

use region_server::Trace;
#[cfg(debug_assertions)]
use region_server::doc::ApiDoc;
use region_server::inbound::http;
use region_server::inbound::http::health::HealthState;
use region_server::inbound::http::state::HttpState;
use region_server::outbound::memory::RegionStore;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

impl ServerSettings {
    /// Resolve the settings into a runtime [`ServerConfig`].
    ///
    /// # Errors
    /// Returns [`std::io::Error`] when the host and port do not resolve to a
    /// socket address.
    pub fn server_config(&self) -> std::io::Result<ServerConfig> {
        let bind_addr = resolve(self.host(), self.port())?;
        Ok(ServerConfig::new(bind_addr)
            .with_keep_alive(self.keep_alive())
            .with_client_request_timeout(self.client_request_timeout())
            .with_shutdown_timeout_secs(self.shutdown_timeout_secs()))
    }
}

fn resolve(host: &str, port: u16) -> std::io::Result<SocketAddr> {
    (host, port).to_socket_addrs()?.next().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::AddrNotAvailable,
            format!("no address for {host}:{port}"),
        )
    })
}

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .configure(http::configure);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an actix server over an empty region store.
///
/// Readiness is marked once the socket is bound. Signal handling is left to
/// the caller, which stops the server through its handle.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: &ServerConfig,
) -> std::io::Result<Server> {
    let http_state = web::Data::new(HttpState::new(Arc::new(RegionStore::new())));
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || {
        build_app(server_health_state.clone(), http_state.clone())
    })
    .keep_alive(config.keep_alive)
    .client_request_timeout(config.client_request_timeout)
    .shutdown_timeout(config.shutdown_timeout_secs)
    .disable_signals()
    .bind(config.bind_addr())?
    .run();

    info!(addr = %config.bind_addr(), "region server listening");
    health_state.mark_ready();
    Ok(server)
}
