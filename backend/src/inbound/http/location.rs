//! Point-in-region lookup.
//!
//! ```text
//! POST / (application/x-www-form-urlencoded: longitude, latitude)
//! ```

use actix_web::{HttpResponse, post, web};
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;

use crate::domain::{Coordinate, Error, regions_containing};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_required_f64};

const LONGITUDE_FIELD: FieldName = FieldName::new("longitude");
const LATITUDE_FIELD: FieldName = FieldName::new("latitude");

/// Form fields for a location query. Values arrive as text and are parsed
/// by the handler so that bad numbers yield a JSON error.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct LocationForm {
    /// Decimal degrees east.
    #[schema(example = "-77.036133")]
    pub longitude: Option<String>,
    /// Decimal degrees north.
    #[schema(example = "40.513799")]
    pub latitude: Option<String>,
}

impl LocationForm {
    fn point(&self) -> Result<Coordinate, Error> {
        let lng = parse_required_f64(self.longitude.as_deref(), LONGITUDE_FIELD)?;
        let lat = parse_required_f64(self.latitude.as_deref(), LATITUDE_FIELD)?;
        Ok(Coordinate::lat_lng(lat, lng))
    }
}

/// Name every region whose border contains the submitted point.
#[utoipa::path(
    post,
    path = "/",
    request_body(content = LocationForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Names of containing regions, sorted", body = Vec<String>, example = json!(["Pennsylvania"])),
        (status = 400, description = "Missing or non-numeric coordinate", body = ErrorSchema),
        (status = 404, description = "Point lies outside every region", body = ErrorSchema)
    ),
    tags = ["location"],
    operation_id = "locatePoint"
)]
#[post("/")]
pub async fn locate(
    state: web::Data<HttpState>,
    form: web::Form<LocationForm>,
) -> ApiResult<HttpResponse> {
    let point = form.point()?;
    let regions = state.regions.list_regions().await;
    let names = regions_containing(&regions, point);
    debug!(%point, matches = names.len(), "located point");
    if names.is_empty() {
        return Err(Error::not_found(format!("{point} not within any state")));
    }
    Ok(HttpResponse::Ok().json(names))
}

#[cfg(test)]
mod tests;
