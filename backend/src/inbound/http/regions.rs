//! Region CRUD endpoints.
//!
//! ```text
//! GET    /api/v1/state
//! POST   /api/v1/state
//! GET    /api/v1/state/{name}
//! DELETE /api/v1/state/{name}
//! ```

use actix_web::{HttpResponse, delete, get, post, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, info, warn};
use utoipa::ToSchema;

use crate::domain::ports::RegionRepositoryError;
use crate::domain::{Coordinate, Error, Region};
use crate::inbound::http::ApiResult;
use crate::inbound::http::geojson::{Feature, FeatureCollection};
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, invalid_region_error, missing_fields_error};

const STATE_FIELD: FieldName = FieldName::new("state");
const BORDER_FIELD: FieldName = FieldName::new("border");

/// Request payload for creating a region.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct CreateRegionRequest {
    /// Region name; stored title-cased.
    #[schema(example = "Pennsylvania")]
    pub state: Option<String>,
    /// Closed ring of `[longitude, latitude]` positions.
    #[schema(value_type = Option<Vec<Vec<f64>>>, example = json!([[-80.52, 39.72], [-80.52, 41.98], [-74.70, 41.37], [-80.52, 39.72]]))]
    pub border: Option<Vec<Coordinate>>,
}

impl CreateRegionRequest {
    fn into_region(self) -> Result<Region, Error> {
        let Self { state, border } = self;
        let (name, border) = match (state, border) {
            (Some(name), Some(border)) => (name, border),
            (name, border) => {
                let missing: Vec<FieldName> = [
                    name.is_none().then_some(STATE_FIELD),
                    border.is_none().then_some(BORDER_FIELD),
                ]
                .into_iter()
                .flatten()
                .collect();
                return Err(missing_fields_error(&missing));
            }
        };
        Region::new(name, border).map_err(|err| invalid_region_error(&err))
    }
}

/// Translate repository failures into client-facing errors.
pub(crate) fn map_repository_error(error: RegionRepositoryError) -> Error {
    match &error {
        RegionRepositoryError::NotFound { name } => {
            Error::not_found(error.to_string()).with_details(json!({ "state": name }))
        }
        RegionRepositoryError::Duplicate { name } => Error::conflict(error.to_string())
            .with_details(json!({ "state": name, "code": "duplicate_state" })),
        RegionRepositoryError::Invalid(reason) => invalid_region_error(reason),
    }
}

/// List every region as a GeoJSON feature collection.
#[utoipa::path(
    get,
    path = "/api/v1/state",
    description = "Return all regions as a GeoJSON FeatureCollection ordered by name.",
    responses(
        (status = 200, description = "All regions", body = FeatureCollection),
    ),
    tags = ["regions"],
    operation_id = "listRegions"
)]
#[get("/state")]
pub async fn list_regions(state: web::Data<HttpState>) -> ApiResult<web::Json<FeatureCollection>> {
    let regions = state.regions.list_regions().await;
    debug!(count = regions.len(), "listing regions");
    Ok(web::Json(FeatureCollection::from_regions(&regions)))
}

/// Create a region from a name and border ring.
#[utoipa::path(
    post,
    path = "/api/v1/state",
    description = "Create a region. Counter-clockwise borders are reversed before storage.",
    request_body = CreateRegionRequest,
    responses(
        (status = 201, description = "Region created", body = Feature),
        (status = 400, description = "Missing field or invalid region", body = ErrorSchema),
        (status = 409, description = "A region with this name exists", body = ErrorSchema)
    ),
    tags = ["regions"],
    operation_id = "createRegion"
)]
#[post("/state")]
pub async fn create_region(
    state: web::Data<HttpState>,
    payload: web::Json<CreateRegionRequest>,
) -> ApiResult<HttpResponse> {
    let region = payload.into_inner().into_region().inspect_err(|err| {
        warn!(error = %err, "rejected region payload");
    })?;
    let created = state
        .regions
        .create_region(region)
        .await
        .map_err(map_repository_error)?;
    info!(state = created.name(), "region created");
    Ok(HttpResponse::Created().json(Feature::from(&created)))
}

/// Fetch one region by name, ignoring case.
#[utoipa::path(
    get,
    path = "/api/v1/state/{name}",
    params(("name" = String, Path, description = "Region name, any case")),
    responses(
        (status = 200, description = "Region found", body = Feature),
        (status = 404, description = "No region with this name", body = ErrorSchema)
    ),
    tags = ["regions"],
    operation_id = "getRegion"
)]
#[get("/state/{name}")]
pub async fn get_region(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Feature>> {
    let name = path.into_inner();
    debug!(state = %name, "looking up region");
    let region = state
        .regions
        .get_region(&name)
        .await
        .map_err(map_repository_error)?;
    Ok(web::Json(Feature::from(&region)))
}

/// Delete a region by name. Unknown names succeed.
#[utoipa::path(
    delete,
    path = "/api/v1/state/{name}",
    params(("name" = String, Path, description = "Region name, any case")),
    responses(
        (status = 200, description = "Region removed or never existed")
    ),
    tags = ["regions"],
    operation_id = "deleteRegion"
)]
#[delete("/state/{name}")]
pub async fn delete_region(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let name = path.into_inner();
    if state.regions.delete_region(&name).await {
        info!(state = %name, "region deleted");
    } else {
        debug!(state = %name, "delete of absent region ignored");
    }
    Ok(HttpResponse::Ok().finish())
}
