//! Path length of GeoJSON line geometries.
//!
//! A document is reduced to an ordered list of rings (coordinate sequences): a
//! LineString is one ring, a MultiLineString one ring per member line, features and
//! collections contribute the rings of everything they wrap. The length is the sum of
//! great-circle distances between consecutive positions of every ring.

use tracing::trace;

use crate::common::errors::*;
use crate::common::types::*;
use crate::input::geojson::*;
use crate::measure::haversine::distance;


#[derive(Debug, Clone, Copy, PartialEq, Default)]
/// Calculator options
pub struct LengthOptions {
    /// sphere radius for segment distances
    pub radius: EarthRadius,
    /// join the last position of every ring back to its first
    pub close_loop: bool,
}

#[derive(Debug, Clone, PartialEq)]
/// Length of a single feature
pub struct FeatureLength {
    /// position of the feature in its collection
    pub index: usize,
    pub name: Option<String>,
    pub meters: Meters,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PathLengthCalculator {
    options: LengthOptions,
}

/// Total length in meters using the mean Earth radius
pub fn compute_length(doc: &GeoJson) -> Result<Meters, LengthError> {
    PathLengthCalculator::default().length(doc)
}

/// Rings of the document in traversal order
pub fn rings(doc: &GeoJson) -> Result<Vec<&[Position]>, LengthError> {
    let mut rings = vec![];
    if collect_rings(doc, &mut rings) {
        Ok(rings)
    } else {
        Err(LengthError::UnsupportedGeometry)
    }
}

/// Collects rings of the document, returns false if it has no line geometry
fn collect_rings<'a>(doc: &'a GeoJson, rings: &mut Vec<&'a [Position]>) -> bool {
    match doc {
        GeoJson::FeatureCollection(fc) =>
            fc.features.iter().fold(false, |found, f| feature_rings(f, rings) || found),
        GeoJson::Feature(f) => feature_rings(f, rings),
        GeoJson::Geometry(g) => geometry_rings(g, rings),
    }
}

fn feature_rings<'a>(feature: &'a Feature, rings: &mut Vec<&'a [Position]>) -> bool {
    feature.geometry.as_ref().is_some_and(|g| geometry_rings(g, rings))
}

fn geometry_rings<'a>(geometry: &'a Geometry, rings: &mut Vec<&'a [Position]>) -> bool {
    match geometry {
        Geometry::LineString(ls) => {
            rings.push(&ls.coordinates);
            true
        },
        Geometry::MultiLineString(mls) => {
            rings.extend(mls.coordinates.iter().map(|line| line.as_slice()));
            true
        },
        Geometry::GeometryCollection(gc) =>
            gc.geometries.iter().fold(false, |found, g| geometry_rings(g, rings) || found),
        Geometry::Other => false,
    }
}

/// Coordinate for error messages; huge values in exponent form
fn format_coord(value: f64) -> String {
    if value.abs() < 1e6 {
        value.to_string()
    } else {
        format!("{:e}", value)
    }
}

/// Converts a raw position to a validated geopoint
fn to_geo_point(index: usize, position: &[f64]) -> Result<GeoPoint, LengthError> {
    let invalid = |reason: String| LengthError::InvalidCoordinate {index, reason};

    let (lon, lat) = match position {
        [lon, lat, ..] => (*lon, *lat),
        _ => return Err(invalid(format!("expected at least 2 components, got {}", position.len()))),
    };
    if !(MIN_LONGITUDE..=MAX_LONGITUDE).contains(&lon) {
        return Err(invalid(format!("longitude {} is not within -180 and 180", format_coord(lon))));
    }
    if !(MIN_LATITUDE..=MAX_LATITUDE).contains(&lat) {
        return Err(invalid(format!("latitude {} is not within -90 and 90", format_coord(lat))));
    }
    Ok(GeoPoint {lon, lat})
}

impl PathLengthCalculator {
    pub fn new(options: LengthOptions) -> Self {
        PathLengthCalculator {options}
    }

    pub fn options(&self) -> &LengthOptions {
        &self.options
    }

    /// Total length in meters of every ring in the document
    pub fn length(&self, doc: &GeoJson) -> Result<Meters, LengthError> {
        let mut total = 0.0;
        for ring in rings(doc)? {
            total += self.ring_length(ring)?;
        }
        Ok(total)
    }

    /// Length of one ring; rings with fewer than 2 positions measure 0
    pub fn ring_length(&self, ring: &[Position]) -> Result<Meters, LengthError> {
        let points = ring.iter().enumerate()
            .map(|(i, p)| to_geo_point(i, p))
            .collect::<Result<Vec<_>, _>>()?;

        let radius = self.options.radius;
        let mut meters: Meters = points.windows(2)
            .map(|pair| distance(&pair[0], &pair[1], radius))
            .sum();

        if self.options.close_loop {
            if let (Some(first), Some(last)) = (points.first(), points.last()) {
                if points.len() > 1 && first != last {
                    trace!(from = %last, to = %first, "closing ring");
                    meters += distance(last, first, radius);
                }
            }
        }
        Ok(meters)
    }

    /// Length of every feature holding line geometry
    pub fn feature_lengths(&self, doc: &GeoJson) -> Result<Vec<FeatureLength>, LengthError> {
        let features: Vec<(usize, Option<&str>, Vec<&[Position]>)> = match doc {
            GeoJson::FeatureCollection(fc) => fc.features.iter().enumerate()
                .filter_map(|(index, f)| {
                    let mut rings = vec![];
                    feature_rings(f, &mut rings).then(|| (index, f.name(), rings))
                })
                .collect(),
            GeoJson::Feature(f) => {
                let mut rings = vec![];
                if feature_rings(f, &mut rings) {vec![(0, f.name(), rings)]} else {vec![]}
            },
            GeoJson::Geometry(g) => {
                let mut rings = vec![];
                if geometry_rings(g, &mut rings) {vec![(0, None, rings)]} else {vec![]}
            },
        };

        if features.is_empty() {
            return Err(LengthError::UnsupportedGeometry);
        }

        features.into_iter()
            .map(|(index, name, rings)| -> Result<FeatureLength, LengthError> {
                let mut meters = 0.0;
                for ring in rings {
                    meters += self.ring_length(ring)?;
                }
                Ok(FeatureLength {index, name: name.map(String::from), meters})
            })
            .collect()
    }
}
