//! Spherical geometry on the unit sphere and on the Earth.
//!
//! Latitudes and longitudes are in degrees everywhere in this module unless a
//! name says otherwise.

use glam::DVec3;
use std::f64::consts::PI;

/// Mean radius of the Earth in km, used for all distance computations.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A point on the Earth's surface in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Project onto the unit sphere.
    #[inline]
    pub fn to_cartesian(self) -> DVec3 {
        project(self.lat, self.lng)
    }
}

impl From<(f64, f64)> for GeoPoint {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self::new(lat, lng)
    }
}

#[inline(always)]
pub fn degrees_to_radians(d: f64) -> f64 {
    PI * d / 180.0
}

#[inline(always)]
pub fn radians_to_degrees(r: f64) -> f64 {
    180.0 * r / PI
}

/// Wrap a longitude into [-180, 180).
#[inline(always)]
pub fn normalize_lng(lng: f64) -> f64 {
    (lng + 180.0).rem_euclid(360.0) - 180.0
}

#[inline(always)]
fn sin_deg(d: f64) -> f64 {
    degrees_to_radians(d).sin()
}

#[inline(always)]
fn cos_deg(d: f64) -> f64 {
    degrees_to_radians(d).cos()
}

/// Map (lat, lng) to a point on the unit sphere.
///
/// The z axis points to the south pole (`z = -sin(lat)`). `Globe::center_on`
/// relies on this sign; change both together or neither.
#[inline(always)]
pub fn project(lat: f64, lng: f64) -> DVec3 {
    DVec3::new(
        cos_deg(lat) * cos_deg(lng),
        cos_deg(lat) * sin_deg(lng),
        -sin_deg(lat),
    )
}

/// Haversine distance in km.
pub fn great_circle_distance(p1: GeoPoint, p2: GeoPoint) -> f64 {
    let dlat = p2.lat - p1.lat;
    let dlng = p2.lng - p1.lng;
    let a = sin_deg(dlat / 2.0).powi(2)
        + cos_deg(p1.lat) * cos_deg(p2.lat) * sin_deg(dlng / 2.0).powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

/// Point `fraction` of the way along the shorter great circle arc from `p1`
/// to `p2` (slerp).
///
/// Not defined when `p1 == p2`: the arc has no direction and the result is
/// NaN. Callers skip interpolation for zero-length arcs.
pub fn great_circle_interpolate(p1: GeoPoint, p2: GeoPoint, fraction: f64) -> GeoPoint {
    let dr = great_circle_distance(p1, p2) / EARTH_RADIUS_KM;
    let a = ((1.0 - fraction) * dr).sin() / dr.sin();
    let b = (fraction * dr).sin() / dr.sin();

    // North-up embedding, independent of the z sign used by `project`.
    let x = a * cos_deg(p1.lat) * cos_deg(p1.lng) + b * cos_deg(p2.lat) * cos_deg(p2.lng);
    let y = a * cos_deg(p1.lat) * sin_deg(p1.lng) + b * cos_deg(p2.lat) * sin_deg(p2.lng);
    let z = a * sin_deg(p1.lat) + b * sin_deg(p2.lat);

    let phi = z.atan2((x * x + y * y).sqrt());
    let lambda = y.atan2(x);
    GeoPoint::new(radians_to_degrees(phi), radians_to_degrees(lambda))
}

/// Point reached by travelling `distance_km` from `origin` on the initial
/// compass bearing `bearing_deg`.
pub fn destination_point(origin: GeoPoint, distance_km: f64, bearing_deg: f64) -> GeoPoint {
    let dr = distance_km / EARTH_RADIUS_KM;
    let phi = (sin_deg(origin.lat) * dr.cos()
        + cos_deg(origin.lat) * dr.sin() * cos_deg(bearing_deg))
    .asin();
    let lambda = degrees_to_radians(origin.lng)
        + (sin_deg(bearing_deg) * dr.sin() * cos_deg(origin.lat))
            .atan2(dr.cos() - sin_deg(origin.lat) * phi.sin());
    GeoPoint::new(radians_to_degrees(phi), normalize_lng(radians_to_degrees(lambda)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    const BRISTOL: GeoPoint = GeoPoint::new(51.453349, -2.588323);
    const NEW_YORK: GeoPoint = GeoPoint::new(40.645423, -73.903879);
    const LONDON: GeoPoint = GeoPoint::new(51.5074, -0.1278);
    const PARIS: GeoPoint = GeoPoint::new(48.8566, 2.3522);
    const SYDNEY: GeoPoint = GeoPoint::new(-33.8688, 151.2093);

    fn assert_close(a: f64, b: f64, tol: f64) {
        assert!((a - b).abs() <= tol, "{a} != {b} (tolerance {tol})");
    }

    #[test]
    fn test_degree_conversion() {
        assert_close(degrees_to_radians(180.0), PI, EPS);
        assert_close(radians_to_degrees(PI / 2.0), 90.0, EPS);
        assert_close(radians_to_degrees(degrees_to_radians(-37.25)), -37.25, EPS);
    }

    #[test]
    fn test_project_origin() {
        let p = project(0.0, 0.0);
        assert_close(p.x, 1.0, EPS);
        assert_close(p.y, 0.0, EPS);
        assert_close(p.z, 0.0, EPS);
    }

    #[test]
    fn test_project_poles_and_unit_norm() {
        let north = project(90.0, 0.0);
        assert_close(north.z, -1.0, EPS);
        let south = project(-90.0, 123.0);
        assert_close(south.z, 1.0, EPS);

        for lat in [-80.0, -12.5, 0.0, 33.3, 89.0] {
            for lng in [-180.0, -45.0, 0.0, 91.0, 179.0, 400.0] {
                assert_close(project(lat, lng).length(), 1.0, EPS);
            }
        }
    }

    #[test]
    fn test_distance_zero_and_symmetric() {
        for p in [BRISTOL, NEW_YORK, SYDNEY, GeoPoint::new(90.0, 0.0)] {
            assert_eq!(great_circle_distance(p, p), 0.0);
        }
        let d1 = great_circle_distance(LONDON, SYDNEY);
        let d2 = great_circle_distance(SYDNEY, LONDON);
        assert_close(d1, d2, EPS);
    }

    #[test]
    fn test_distance_reference_pairs() {
        // Published great circle distances: London-Paris 343.5 km,
        // London-Sydney 16,994 km.
        let lp = great_circle_distance(LONDON, PARIS);
        assert_close(lp, 343.5, 343.5 * 0.005);
        let ls = great_circle_distance(LONDON, SYDNEY);
        assert_close(ls, 16_994.0, 16_994.0 * 0.005);
    }

    #[test]
    fn test_distance_antipodal_is_half_circumference() {
        let d = great_circle_distance(GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 180.0));
        assert_close(d, PI * EARTH_RADIUS_KM, 1e-6);
    }

    #[test]
    fn test_interpolate_endpoints() {
        for (a, b) in [(BRISTOL, NEW_YORK), (LONDON, SYDNEY), (PARIS, BRISTOL)] {
            let start = great_circle_interpolate(a, b, 0.0);
            assert_close(start.lat, a.lat, 1e-9);
            assert_close(start.lng, a.lng, 1e-9);
            let end = great_circle_interpolate(a, b, 1.0);
            assert_close(end.lat, b.lat, 1e-9);
            assert_close(end.lng, b.lng, 1e-9);
        }
    }

    #[test]
    fn test_interpolate_midpoint_along_equator() {
        let mid = great_circle_interpolate(GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 90.0), 0.5);
        assert_close(mid.lat, 0.0, EPS);
        assert_close(mid.lng, 45.0, EPS);
    }

    #[test]
    fn test_interpolate_splits_distance() {
        let d = great_circle_distance(BRISTOL, NEW_YORK);
        let q = great_circle_interpolate(BRISTOL, NEW_YORK, 0.25);
        assert_close(great_circle_distance(BRISTOL, q), d * 0.25, 1e-6);
        assert_close(great_circle_distance(q, NEW_YORK), d * 0.75, 1e-6);
    }

    #[test]
    fn test_destination_point() {
        let east = destination_point(GeoPoint::new(0.0, 0.0), PI * EARTH_RADIUS_KM / 2.0, 90.0);
        assert_close(east.lat, 0.0, 1e-9);
        assert_close(east.lng, 90.0, 1e-9);

        let north = destination_point(GeoPoint::new(10.0, 20.0), 1000.0, 0.0);
        assert_close(north.lng, 20.0, 1e-9);
        assert_close(great_circle_distance(GeoPoint::new(10.0, 20.0), north), 1000.0, 1e-6);
    }

    #[test]
    fn test_destination_wraps_longitude() {
        let p = destination_point(GeoPoint::new(0.0, 170.0), PI * EARTH_RADIUS_KM / 9.0, 90.0);
        assert_close(p.lng, -170.0, 1e-9);
    }

    #[test]
    fn test_normalize_lng() {
        assert_close(normalize_lng(190.0), -170.0, EPS);
        assert_close(normalize_lng(-180.0), -180.0, EPS);
        assert_close(normalize_lng(180.0), -180.0, EPS);
        assert_close(normalize_lng(45.0), 45.0, EPS);
    }
}
