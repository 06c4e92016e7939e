//! Spherical-Earth math shared by the router, interpolator and visibility engine.

use crate::models::GeoPoint;

/// Mean Earth radius used for distances and great-circle interpolation.
pub const EARTH_RADIUS_KM: f64 = 6371.0;
pub const EARTH_RADIUS_M: f64 = EARTH_RADIUS_KM * 1000.0;

/// Conversion factor: feet to meters
pub const FEET_TO_METERS: f64 = 0.3048;

/// Normalize an angle in degrees into [0, 360).
pub fn normalize_degrees(deg: f64) -> f64 {
    let wrapped = deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Haversine central angle between two points, in radians.
pub fn central_angle_rad(a: &GeoPoint, b: &GeoPoint) -> f64 {
    let phi1 = a.lat.to_radians();
    let phi2 = b.lat.to_radians();
    let dphi = (b.lat - a.lat).to_radians();
    let dlambda = (b.lon - a.lon).to_radians();
    let h = (dphi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (dlambda / 2.0).sin().powi(2);
    2.0 * h.clamp(0.0, 1.0).sqrt().asin()
}

/// Calculate great-circle distance between two points in kilometers using
/// the Haversine formula.
///
/// # Arguments
/// * `a`, `b` - Point coordinates in decimal degrees
///
/// # Returns
/// Distance in kilometers
pub fn haversine_distance_km(a: &GeoPoint, b: &GeoPoint) -> f64 {
    EARTH_RADIUS_KM * central_angle_rad(a, b)
}

/// Forward azimuth from `from` to `to` on the sphere.
/// Returns degrees in [0, 360), 0 = north, clockwise.
pub fn spherical_bearing(from: &GeoPoint, to: &GeoPoint) -> f64 {
    let phi1 = from.lat.to_radians();
    let phi2 = to.lat.to_radians();
    let delta_lambda = (to.lon - from.lon).to_radians();

    let y = delta_lambda.sin() * phi2.cos();
    let x = phi1.cos() * phi2.sin() - phi1.sin() * phi2.cos() * delta_lambda.cos();

    normalize_degrees(y.atan2(x).to_degrees())
}

/// Heading from `from` to `to` treating lat/lon as a flat plane:
/// `atan2(Δlon, Δlat)`, in [0, 360).
///
/// This is not a true bearing: the longitude term is not weighted by
/// `cos(lat)`, so it is only accurate near the equator or over short segments.
/// Aircraft heading uses this convention; POI azimuths use
/// [`spherical_bearing`]. Keep them separate.
pub fn planar_heading(from: &GeoPoint, to: &GeoPoint) -> f64 {
    let dlat = to.lat - from.lat;
    let dlon = to.lon - from.lon;

    if dlat.abs() < 1e-12 && dlon.abs() < 1e-12 {
        return 0.0;
    }

    normalize_degrees(dlon.atan2(dlat).to_degrees())
}

/// Unit-sphere Cartesian vector for a lat/lon point.
pub fn to_unit_vector(point: &GeoPoint) -> [f64; 3] {
    let phi = point.lat.to_radians();
    let lambda = point.lon.to_radians();
    [
        phi.cos() * lambda.cos(),
        phi.cos() * lambda.sin(),
        phi.sin(),
    ]
}

/// Lat/lon for a (not necessarily normalized) Cartesian vector.
pub fn from_unit_vector(v: [f64; 3]) -> GeoPoint {
    let [x, y, z] = v;
    let lat = z.atan2((x * x + y * y).sqrt());
    let lon = y.atan2(x);
    GeoPoint::new(lat.to_degrees(), lon.to_degrees())
}

#[cfg(test)]
mod tests {
    use super::*;

    const GENEVA: GeoPoint = GeoPoint::new(46.2381, 6.1080);
    const ATHENS: GeoPoint = GeoPoint::new(37.9364, 23.9445);

    #[test]
    fn test_haversine_known_distance() {
        // ~111km between these points (1 degree latitude)
        let dist = haversine_distance_km(&GeoPoint::new(0.0, 0.0), &GeoPoint::new(1.0, 0.0));
        assert!((dist - 111.19).abs() < 0.1);
    }

    #[test]
    fn test_haversine_same_point() {
        assert!(haversine_distance_km(&GENEVA, &GENEVA) < 1e-9);
    }

    #[test]
    fn haversine_is_symmetric() {
        let points = [
            GENEVA,
            ATHENS,
            GeoPoint::new(-33.9, 151.2),
            GeoPoint::new(64.1, -21.9),
            GeoPoint::new(0.0, 179.9),
            GeoPoint::new(0.0, -179.9),
        ];
        for p in &points {
            for q in &points {
                let pq = haversine_distance_km(p, q);
                let qp = haversine_distance_km(q, p);
                assert!((pq - qp).abs() < 1e-9, "{p} -> {q}: {pq} vs {qp}");
            }
        }
    }

    #[test]
    fn geneva_athens_distance_is_about_1700_km() {
        let dist = haversine_distance_km(&GENEVA, &ATHENS);
        assert!((1650.0..1750.0).contains(&dist), "got {dist}");
    }

    #[test]
    fn spherical_bearing_cardinal_directions() {
        let origin = GeoPoint::new(0.0, 0.0);
        assert!(spherical_bearing(&origin, &GeoPoint::new(1.0, 0.0)).abs() < 1e-9);
        assert!((spherical_bearing(&origin, &GeoPoint::new(0.0, 1.0)) - 90.0).abs() < 1e-9);
        assert!((spherical_bearing(&origin, &GeoPoint::new(-1.0, 0.0)) - 180.0).abs() < 1e-9);
        assert!((spherical_bearing(&origin, &GeoPoint::new(0.0, -1.0)) - 270.0).abs() < 1e-9);
    }

    #[test]
    fn planar_heading_differs_from_spherical_bearing_at_high_latitude() {
        let from = GeoPoint::new(60.0, 10.0);
        let to = GeoPoint::new(61.0, 12.0);
        let planar = planar_heading(&from, &to);
        let spherical = spherical_bearing(&from, &to);
        // planar ignores cos(lat) shrinking of longitude degrees
        assert!((planar - spherical).abs() > 5.0, "{planar} vs {spherical}");
    }

    #[test]
    fn planar_heading_of_degenerate_segment_is_zero() {
        assert_eq!(planar_heading(&GENEVA, &GENEVA), 0.0);
    }

    #[test]
    fn normalize_degrees_wraps_into_range() {
        assert_eq!(normalize_degrees(-90.0), 270.0);
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(725.0), 5.0);
        let tiny = normalize_degrees(-1e-15);
        assert!((0.0..360.0).contains(&tiny));
    }

    #[test]
    fn unit_vector_round_trip_preserves_position() {
        let back = from_unit_vector(to_unit_vector(&ATHENS));
        assert!((back.lat - ATHENS.lat).abs() < 1e-9);
        assert!((back.lon - ATHENS.lon).abs() < 1e-9);
    }
}
