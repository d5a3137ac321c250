use std::fmt;
use std::str::FromStr;


/// Coordinate (decimal degrees)
pub type Coord = f64;

/// Distance in meters
pub type Meters = f64;

/// Raw GeoJSON position: longitude, latitude and optional elevation
pub type Position = Vec<f64>;

pub const MIN_LONGITUDE: Coord = -180.0;
pub const MAX_LONGITUDE: Coord = 180.0;
pub const MIN_LATITUDE: Coord = -90.0;
pub const MAX_LATITUDE: Coord = 90.0;

/// IUGG mean Earth radius
pub const MEAN_EARTH_RADIUS: Meters = 6_371_008.8;
/// Volumetric Earth radius rounded to a whole kilometre
pub const VOLUMETRIC_EARTH_RADIUS: Meters = 6_371_000.0;
/// WGS84 semi-major axis
pub const EQUATORIAL_EARTH_RADIUS: Meters = 6_378_137.0;

pub const METERS_PER_KILOMETER: f64 = 1000.0;
pub const METERS_PER_MILE: f64 = 1609.344;


#[derive(Debug, Clone, Copy, PartialEq)]
/// Geopoint as longitude and latitude
pub struct GeoPoint {
    pub lon: Coord,
    pub lat: Coord,
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.lon, self.lat)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
/// Sphere radius used for great-circle distances
pub enum EarthRadius {
    #[default]
    Mean,
    Volumetric,
    Equatorial,
    Custom(Meters),
}

impl EarthRadius {
    pub fn meters(&self) -> Meters {
        match self {
            EarthRadius::Mean => MEAN_EARTH_RADIUS,
            EarthRadius::Volumetric => VOLUMETRIC_EARTH_RADIUS,
            EarthRadius::Equatorial => EQUATORIAL_EARTH_RADIUS,
            EarthRadius::Custom(r) => *r,
        }
    }
}

impl FromStr for EarthRadius {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "mean" => Ok(EarthRadius::Mean),
            "volumetric" => Ok(EarthRadius::Volumetric),
            "equatorial" | "wgs84" => Ok(EarthRadius::Equatorial),
            _ => match value.parse::<Meters>() {
                Ok(r) if r.is_finite() && r > 0.0 => Ok(EarthRadius::Custom(r)),
                _ => Err(format!("Unknown earth radius: {}", value)),
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Output distance unit
pub enum Unit {
    Meters,
    #[default]
    Kilometers,
    Miles,
}

impl Unit {
    /// Converts meters to this unit
    pub fn from_meters(&self, meters: Meters) -> f64 {
        match self {
            Unit::Meters => meters,
            Unit::Kilometers => meters / METERS_PER_KILOMETER,
            Unit::Miles => meters / METERS_PER_MILE,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Unit::Meters => "m",
            Unit::Kilometers => "km",
            Unit::Miles => "mi",
        }
    }
}

impl FromStr for Unit {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "m" | "meters" => Ok(Unit::Meters),
            "km" | "kilometers" => Ok(Unit::Kilometers),
            "mi" | "miles" => Ok(Unit::Miles),
            _ => Err(format!("Unknown unit: {}", value)),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn earth_radius_from_str_t0() {
        assert_eq!("mean".parse::<EarthRadius>(), Ok(EarthRadius::Mean));
        assert_eq!("wgs84".parse::<EarthRadius>(), Ok(EarthRadius::Equatorial));
        assert_eq!("6371000".parse::<EarthRadius>(), Ok(EarthRadius::Custom(6371000.0)));
        assert!("-1".parse::<EarthRadius>().is_err());
        assert!("moon".parse::<EarthRadius>().is_err());
    }

    #[test]
    fn unit_from_meters_t0() {
        assert_eq!(Unit::Kilometers.from_meters(5891.0), 5.891);
        assert_eq!(Unit::Miles.from_meters(1609.344), 1.0);
        assert_eq!(Unit::Meters.from_meters(12.5), 12.5);
    }
}
