//! HTTP inbound adapter exposing REST endpoints.

pub mod error;
pub mod geojson;
pub mod health;
pub mod location;
pub mod regions;
pub mod schemas;
pub mod state;
pub mod validation;

use actix_web::web;

pub use error::ApiResult;

/// Register the location lookup, the `/api/v1` region routes and the health
/// probes, together with the JSON and form extractor error handlers.
///
/// Callers provide `web::Data<HttpState>` and `web::Data<HealthState>`.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use actix_web::{App, web};
/// use region_server::inbound::http::{self, health::HealthState, state::HttpState};
/// use region_server::outbound::memory::RegionStore;
///
/// let _app = App::new()
///     .app_data(web::Data::new(HttpState::new(Arc::new(RegionStore::new()))))
///     .app_data(web::Data::new(HealthState::new()))
///     .configure(http::configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(validation::json_config())
        .app_data(validation::form_config())
        .service(location::locate)
        .service(
            web::scope("/api/v1")
                .service(regions::list_regions)
                .service(regions::create_region)
                .service(regions::get_region)
                .service(regions::delete_region),
        )
        .service(health::ready)
        .service(health::live);
}
