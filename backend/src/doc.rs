//! OpenAPI documentation for the REST API.
//!
//! Registers every handler in the inbound HTTP layer together with the
//! GeoJSON DTOs and the schema wrappers for domain error types. The
//! document is served by Swagger UI in debug builds and printed by the
//! `openapi-dump` binary.

use utoipa::OpenApi;

use crate::inbound::http::geojson::{
    Feature, FeatureCollection, FeatureCollectionType, FeatureProperties, FeatureType,
    GeometryType, PolygonGeometry,
};
use crate::inbound::http::location::LocationForm;
use crate::inbound::http::regions::CreateRegionRequest;
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};

/// OpenAPI document for the region server.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Region server API",
        description = "Store named polygonal regions and find the regions containing a point."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::location::locate,
        crate::inbound::http::regions::list_regions,
        crate::inbound::http::regions::create_region,
        crate::inbound::http::regions::get_region,
        crate::inbound::http::regions::delete_region,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        LocationForm,
        CreateRegionRequest,
        Feature,
        FeatureCollection,
        FeatureProperties,
        PolygonGeometry,
        FeatureType,
        FeatureCollectionType,
        GeometryType,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "location", description = "Point-in-region lookup"),
        (name = "regions", description = "Create, read and delete regions"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
