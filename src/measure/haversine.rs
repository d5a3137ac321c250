use num_traits::Float;

use crate::common::types::*;


/// Great-circle distance between two (longitude, latitude) pairs given in degrees.
///
/// Uses the [haversine formula] on a sphere of the given radius; the result is in
/// the radius' units.
///
/// [haversine formula]: https://en.wikipedia.org/wiki/Haversine_formula
pub fn haversine<T: Float>(from: (T, T), to: (T, T), radius: T) -> T {
    let (lon1, lat1) = from;
    let (lon2, lat2) = to;
    let two = T::one() + T::one();

    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();
    let a = (d_lat / two).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / two).sin().powi(2);

    // rounding may push `a` slightly above 1 for antipodal points
    two * radius * a.sqrt().min(T::one()).asin()
}

/// Distance in meters between two geopoints
pub fn distance(from: &GeoPoint, to: &GeoPoint, radius: EarthRadius) -> Meters {
    haversine((from.lon, from.lat), (to.lon, to.lat), radius.meters())
}


#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn haversine_one_degree_t0() {
        let d = distance(&GeoPoint {lon: 0.0, lat: 0.0}, &GeoPoint {lon: 0.0, lat: 1.0}, EarthRadius::Mean);
        assert!((d - 111_195.08).abs() < 1.0, "got {}", d);
    }

    #[test]
    fn haversine_silverstone_t0() {
        let start = GeoPoint {lon: -1.0241639614105225, lat: 52.067695316642116};
        let end = GeoPoint {lon: -1.019829511642456, lat: 52.071236872409735};
        let d = distance(&start, &end, EarthRadius::Volumetric);
        assert!((d - 492.80434203770757).abs() < 1e-6, "got {}", d);
        assert_eq!(d, distance(&end, &start, EarthRadius::Volumetric));
    }

    #[test]
    fn haversine_antipodal_t0() {
        let d = haversine((0.0, 0.0), (180.0, 0.0), MEAN_EARTH_RADIUS);
        assert!((d - std::f64::consts::PI * MEAN_EARTH_RADIUS).abs() < 1e-3);
    }

    #[test]
    fn haversine_f32_t0() {
        let d = haversine((0.0f32, 0.0f32), (0.0f32, 1.0f32), 6371.0088f32);
        assert!((d - 111.195).abs() < 0.01);
    }

    #[test]
    fn haversine_same_point_t0() {
        assert_eq!(haversine((-1.02, 52.06), (-1.02, 52.06), MEAN_EARTH_RADIUS), 0.0);
    }

    proptest! {
        #[test]
        fn haversine_symmetric(lon1 in -180.0f64..=180.0, lat1 in -90.0f64..=90.0,
                lon2 in -180.0f64..=180.0, lat2 in -90.0f64..=90.0) {
            let ab = haversine((lon1, lat1), (lon2, lat2), MEAN_EARTH_RADIUS);
            let ba = haversine((lon2, lat2), (lon1, lat1), MEAN_EARTH_RADIUS);
            prop_assert!(ab >= 0.0);
            prop_assert!((ab - ba).abs() < 1e-6);
            prop_assert!(ab <= std::f64::consts::PI * MEAN_EARTH_RADIUS + 1e-6);
        }
    }
}
