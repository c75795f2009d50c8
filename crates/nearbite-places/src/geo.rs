//! Great-circle distance and unit conversion.

use nearbite_core::Coordinate;

/// Mean Earth radius in miles.
pub const EARTH_RADIUS_MILES: f64 = 3958.8;

pub const METERS_PER_MILE: f64 = 1609.34;

/// Haversine great-circle distance between two coordinates, in miles.
///
/// Symmetric, non-negative, and zero for identical points. Out-of-range
/// coordinates are not rejected.
#[must_use]
pub fn haversine_miles(a: Coordinate, b: Coordinate) -> f64 {
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.latitude.to_radians().cos()
            * b.latitude.to_radians().cos()
            * (d_lon / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_MILES * h.sqrt().atan2((1.0 - h).sqrt())
}

#[must_use]
pub fn miles_to_meters(miles: f64) -> f64 {
    miles * METERS_PER_MILE
}

#[must_use]
pub fn meters_to_miles(meters: f64) -> f64 {
    meters / METERS_PER_MILE
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    #[test]
    fn distance_to_self_is_zero() {
        for coord in [
            Coordinate::new(0.0, 0.0),
            Coordinate::new(40.0, -73.0),
            Coordinate::new(-33.8688, 151.2093),
            Coordinate::new(89.9, 179.9),
        ] {
            assert!(haversine_miles(coord, coord).abs() < TOLERANCE);
        }
    }

    #[test]
    fn distance_is_symmetric() {
        let nyc = Coordinate::new(40.7128, -74.0060);
        let la = Coordinate::new(34.0522, -118.2437);
        let ab = haversine_miles(nyc, la);
        let ba = haversine_miles(la, nyc);
        assert!((ab - ba).abs() < TOLERANCE);
    }

    #[test]
    fn nyc_to_la_is_about_2445_miles() {
        let nyc = Coordinate::new(40.7128, -74.0060);
        let la = Coordinate::new(34.0522, -118.2437);
        let d = haversine_miles(nyc, la);
        assert!((d - 2445.0).abs() < 5.0, "got {d}");
    }

    #[test]
    fn hundredth_degree_of_latitude_is_about_0_69_miles() {
        let d = haversine_miles(Coordinate::new(40.0, -73.0), Coordinate::new(40.01, -73.0));
        assert!((d - 0.691).abs() < 0.001, "got {d}");
    }

    #[test]
    fn distances_along_a_meridian_add_up() {
        let a = Coordinate::new(40.0, -73.0);
        let b = Coordinate::new(40.5, -73.0);
        let c = Coordinate::new(41.0, -73.0);
        let direct = haversine_miles(a, c);
        let via_b = haversine_miles(a, b) + haversine_miles(b, c);
        assert!((direct - via_b).abs() < 1e-6);
    }

    #[test]
    fn distance_grows_with_separation() {
        let origin = Coordinate::new(40.0, -73.0);
        let near = haversine_miles(origin, Coordinate::new(40.1, -73.0));
        let far = haversine_miles(origin, Coordinate::new(40.2, -73.0));
        assert!(near > 0.0);
        assert!(far > near);
    }

    #[test]
    fn unit_conversion_round_trips() {
        assert!((miles_to_meters(5.0) - 8046.7).abs() < 1e-6);
        assert!((meters_to_miles(miles_to_meters(12.5)) - 12.5).abs() < TOLERANCE);
    }
}
