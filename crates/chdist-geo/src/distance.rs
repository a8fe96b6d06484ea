//! Great-circle distance on a spherical Earth.

use chdist_core::Coordinate;

/// Mean Earth radius used by [`haversine_km`].
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between two points in kilometres.
///
/// Symmetric, zero for identical points, and always finite and non-negative
/// for validated coordinates.
#[must_use]
pub fn haversine_km(a: Coordinate, b: Coordinate) -> f64 {
    let lat1 = a.latitude().to_radians();
    let lat2 = b.latitude().to_radians();
    let delta_lat = lat2 - lat1;
    let delta_lon = (b.longitude() - a.longitude()).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
    // Rounding can push h fractionally past 1 for antipodal points.
    let h = h.clamp(0.0, 1.0);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(lat: f64, lon: f64) -> Coordinate {
        Coordinate::new(lat, lon).expect("test coordinate should be valid")
    }

    #[test]
    fn distance_to_self_is_zero() {
        for (lat, lon) in [
            (0.0, 0.0),
            (51.5074, -0.1278),
            (-33.8688, 151.2093),
            (90.0, 180.0),
            (-90.0, -180.0),
        ] {
            let p = coord(lat, lon);
            assert!(
                haversine_km(p, p).abs() < 1e-9,
                "expected zero distance for ({lat}, {lon})"
            );
        }
    }

    #[test]
    fn distance_is_symmetric() {
        let pairs = [
            (coord(51.5074, -0.1278), coord(55.9533, -3.1883)),
            (coord(40.7128, -74.006), coord(-33.8688, 151.2093)),
            (coord(0.0, 179.9), coord(0.0, -179.9)),
        ];
        for (a, b) in pairs {
            let ab = haversine_km(a, b);
            let ba = haversine_km(b, a);
            assert!((ab - ba).abs() < 1e-9, "asymmetric: {ab} vs {ba}");
        }
    }

    #[test]
    fn london_to_edinburgh_is_about_534_km() {
        let london = coord(51.5074, -0.1278);
        let edinburgh = coord(55.9533, -3.1883);
        let d = haversine_km(london, edinburgh);
        assert!((d - 534.0).abs() <= 5.0, "got {d} km");
    }

    #[test]
    fn short_hop_across_westminster_is_about_300_metres() {
        let reference = coord(51.5, -0.12);
        let palace = coord(51.5007, -0.1246);
        let d = haversine_km(reference, palace);
        assert!((d - 0.33).abs() < 0.05, "got {d} km");
    }

    #[test]
    fn antipodal_points_are_half_circumference_and_finite() {
        let d = haversine_km(coord(0.0, 0.0), coord(0.0, 180.0));
        assert!(d.is_finite());
        assert!((d - std::f64::consts::PI * EARTH_RADIUS_KM).abs() < 1e-6);
    }

    #[test]
    fn distance_grows_with_separation() {
        let origin = coord(0.0, 0.0);
        let near = haversine_km(origin, coord(0.0, 1.0));
        let mid = haversine_km(origin, coord(0.0, 10.0));
        let far = haversine_km(origin, coord(0.0, 100.0));
        assert!(near < mid && mid < far);
    }
}
