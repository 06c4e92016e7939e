//! Great-circle route generation.
//!
//! Builds an evenly parameterized polyline between two endpoints using
//! spherical linear interpolation, with the synthetic flight profile attached
//! to each sample.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};
use crate::models::{GeoPoint, RouteSample};
use crate::profile::evaluate_profile;
use crate::spatial::{central_angle_rad, from_unit_vector, to_unit_vector, EARTH_RADIUS_KM};

/// Placeholder spacing of the synthetic time axis.
const SAMPLE_INTERVAL_SECS: i64 = 60;

/// Below this central angle the endpoints are treated as identical.
const DEGENERATE_ANGLE_RAD: f64 = 1e-12;

/// An immutable, densely sampled route from origin to destination.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Route {
    pub origin: GeoPoint,
    pub destination: GeoPoint,
    /// Great-circle length in kilometers
    pub distance_km: f64,
    samples: Vec<RouteSample>,
}

impl Route {
    pub fn samples(&self) -> &[RouteSample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn first(&self) -> Option<&RouteSample> {
        self.samples.first()
    }

    pub fn last(&self) -> Option<&RouteSample> {
        self.samples.last()
    }

    /// Sample positions in route order.
    pub fn waypoints(&self) -> Vec<GeoPoint> {
        self.samples.iter().map(|s| s.point).collect()
    }
}

/// Compute a great-circle route with `sample_count` samples, timestamps
/// starting now.
pub fn compute_route(
    origin: GeoPoint,
    destination: GeoPoint,
    sample_count: usize,
) -> Result<Route> {
    compute_route_at(origin, destination, sample_count, Utc::now())
}

/// Compute a great-circle route with an explicit start of the time axis.
///
/// Sample `i` sits at fraction `f = i / (n - 1)` of the arc. Identical
/// endpoints yield `n` copies of the origin, still carrying the profile.
pub fn compute_route_at(
    origin: GeoPoint,
    destination: GeoPoint,
    sample_count: usize,
    start: DateTime<Utc>,
) -> Result<Route> {
    if sample_count < 2 {
        return Err(EngineError::invalid(format!(
            "sample_count must be at least 2, got {sample_count}"
        )));
    }
    if !origin.is_finite() || !destination.is_finite() {
        return Err(EngineError::invalid(format!(
            "route endpoints must be finite, got ({origin}) -> ({destination})"
        )));
    }

    let c = central_angle_rad(&origin, &destination);
    let sin_c = c.sin();
    let degenerate = c < DEGENERATE_ANGLE_RAD;
    let v1 = to_unit_vector(&origin);
    let v2 = to_unit_vector(&destination);

    // Unit tangent at the origin pointing along the arc
    let tangent = if degenerate {
        tracing::debug!(%origin, %destination, "degenerate route, repeating origin");
        [0.0; 3]
    } else if sin_c.abs() < DEGENERATE_ANGLE_RAD {
        tracing::debug!(%origin, %destination, "antipodal route, flying east from origin");
        antipodal_tangent(v1)
    } else {
        let cos_c = c.cos();
        [
            (v2[0] - v1[0] * cos_c) / sin_c,
            (v2[1] - v1[1] * cos_c) / sin_c,
            (v2[2] - v1[2] * cos_c) / sin_c,
        ]
    };
    let last = sample_count - 1;

    let samples = (0..sample_count)
        .map(|i| {
            let f = i as f64 / last as f64;
            let point = if degenerate || i == 0 {
                origin
            } else if i == last {
                destination
            } else {
                let (sin_t, cos_t) = (f * c).sin_cos();
                from_unit_vector([
                    cos_t * v1[0] + sin_t * tangent[0],
                    cos_t * v1[1] + sin_t * tangent[1],
                    cos_t * v1[2] + sin_t * tangent[2],
                ])
            };
            let profile = evaluate_profile(f);
            RouteSample {
                point,
                altitude_ft: profile.altitude_ft,
                speed_kt: profile.speed_kt,
                timestamp: start + Duration::seconds(i as i64 * SAMPLE_INTERVAL_SECS),
            }
        })
        .collect();

    let distance_km = EARTH_RADIUS_KM * c;
    tracing::debug!(sample_count, distance_km, "computed great-circle route");

    Ok(Route {
        origin,
        destination,
        distance_km,
        samples,
    })
}

/// Due-east unit tangent at `v`, or along the prime meridian at a pole.
fn antipodal_tangent(v: [f64; 3]) -> [f64; 3] {
    let [x, y, _] = v;
    let norm = (x * x + y * y).sqrt();
    if norm < DEGENERATE_ANGLE_RAD {
        [1.0, 0.0, 0.0]
    } else {
        [-y / norm, x / norm, 0.0]
    }
}
