//! RFC 7946 GeoJSON shapes used by the region endpoints.
//!
//! Each region is rendered as a `Feature` whose geometry is a single-ring
//! `Polygon` and whose properties carry the region name under `state`.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::Region;

/// Discriminator for [`Feature`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum FeatureType {
    /// The only accepted value.
    Feature,
}

/// Discriminator for [`FeatureCollection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum FeatureCollectionType {
    /// The only accepted value.
    FeatureCollection,
}

/// Discriminator for [`PolygonGeometry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum GeometryType {
    /// The only accepted value.
    Polygon,
}

/// Feature properties identifying the region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FeatureProperties {
    /// Title-cased region name.
    #[schema(example = "Pennsylvania")]
    pub state: String,
}

/// Polygon geometry holding the exterior ring only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PolygonGeometry {
    /// Always `Polygon`.
    #[serde(rename = "type")]
    pub kind: GeometryType,
    /// One ring of `[longitude, latitude]` positions, wound clockwise.
    #[schema(value_type = Vec<Vec<Vec<f64>>>, example = json!([[[-80.52, 39.72], [-80.52, 41.98], [-74.70, 41.37], [-80.52, 39.72]]]))]
    pub coordinates: Vec<Vec<[f64; 2]>>,
}

/// A single region rendered as GeoJSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Feature {
    /// Always `Feature`.
    #[serde(rename = "type")]
    pub kind: FeatureType,
    /// Region name.
    pub properties: FeatureProperties,
    /// Region border.
    pub geometry: PolygonGeometry,
}

impl From<&Region> for Feature {
    fn from(region: &Region) -> Self {
        let ring = region
            .border()
            .coordinates()
            .iter()
            .map(|coordinate| coordinate.as_array())
            .collect();
        Self {
            kind: FeatureType::Feature,
            properties: FeatureProperties {
                state: region.name().to_owned(),
            },
            geometry: PolygonGeometry {
                kind: GeometryType::Polygon,
                coordinates: vec![ring],
            },
        }
    }
}

/// Every stored region rendered as GeoJSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FeatureCollection {
    /// Always `FeatureCollection`.
    #[serde(rename = "type")]
    pub kind: FeatureCollectionType,
    /// One feature per region, ordered by name.
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    /// Build a collection ordered by region name.
    #[must_use]
    pub fn from_regions(regions: &[Region]) -> Self {
        let mut features: Vec<Feature> = regions.iter().map(Feature::from).collect();
        features.sort_by(|a, b| a.properties.state.cmp(&b.properties.state));
        Self {
            kind: FeatureCollectionType::FeatureCollection,
            features,
        }
    }
}
