//! GeoJSON document model.
//!
//! Only the parts of RFC 7946 needed for measuring paths are modelled; point and
//! polygon geometries are accepted but their coordinates are not kept.

use std::str::FromStr;
use serde::de::{Deserializer, Error};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::common::errors::*;
use crate::common::types::*;


/// GeoJSON root object
#[derive(Debug, Clone, PartialEq)]
pub enum GeoJson {
    FeatureCollection(FeatureCollection),
    Feature(Feature),
    Geometry(Geometry),
}

// Dispatches on "type" first so that errors inside a collection or feature are kept
impl<'de> Deserialize<'de> for GeoJson {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let kind = value.get("type")
            .and_then(Value::as_str)
            .ok_or_else(|| D::Error::missing_field("type"))?;

        match kind {
            "FeatureCollection" => FeatureCollection::deserialize(value).map(GeoJson::FeatureCollection),
            "Feature" => Feature::deserialize(value).map(GeoJson::Feature),
            _ => Geometry::deserialize(value).map(GeoJson::Geometry),
        }.map_err(D::Error::custom)
    }
}

/// GeoJSON feature collection
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FeatureCollection {
    #[serde(deserialize_with = "tagged_features")]
    pub features: Vec<Feature>,
}

/// GeoJSON feature
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Feature {
    pub geometry: Option<Geometry>,
    #[serde(default)]
    pub properties: Option<Map<String, Value>>,
}

/// Collection member, which must be tagged "Feature"
#[derive(Deserialize)]
#[serde(tag = "type")]
enum TaggedFeature {
    Feature(Feature),
}

fn tagged_features<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Feature>, D::Error> {
    let features = Vec::<TaggedFeature>::deserialize(deserializer)?;
    Ok(features.into_iter().map(|TaggedFeature::Feature(f)| f).collect())
}

impl Feature {
    /// Value of the "name" property, if it is a string
    pub fn name(&self) -> Option<&str> {
        self.properties.as_ref()?.get("name")?.as_str()
    }
}

/// GeoJSON geometry
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    LineString(LineString),
    MultiLineString(MultiLineString),
    GeometryCollection(GeometryCollection),
    /// Non-linear geometry, never measured
    #[serde(rename = "Point", alias = "MultiPoint", alias = "Polygon", alias = "MultiPolygon")]
    Other,
}

/// GeoJSON list of positions
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LineString {
    pub coordinates: Vec<Position>,
}

/// GeoJSON list of lists of positions
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MultiLineString {
    pub coordinates: Vec<Vec<Position>>,
}

/// GeoJSON geometry collection
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GeometryCollection {
    pub geometries: Vec<Geometry>,
}

impl GeoJson {
    /// Decodes an already parsed JSON value
    pub fn from_value(value: Value) -> Result<Self, LengthError> {
        serde_json::from_value(value)
            .map_err(|err| LengthError::MalformedDocument(err.to_string()))
    }
}

impl FromStr for GeoJson {
    type Err = LengthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s)
            .map_err(|err| LengthError::MalformedDocument(err.to_string()))
    }
}

impl From<LineString> for GeoJson {
    fn from(line_string: LineString) -> Self {
        GeoJson::Geometry(Geometry::LineString(line_string))
    }
}
