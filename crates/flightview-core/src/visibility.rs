//! POI visibility from the aircraft.
//!
//! For each catalog entry within range this computes the great-circle
//! distance, the elevation angle at which the passenger sees it, its true
//! azimuth and which side of the cabin it falls on.

use std::cmp::Ordering;

use crate::error::{EngineError, Result};
use crate::models::{AircraftState, GeoPoint, Poi, Side, VisibilityResult};
use crate::spatial::{haversine_distance_km, normalize_degrees, spherical_bearing, FEET_TO_METERS};

/// Elevation below which a POI is hidden by the horizon.
pub const HORIZON_DIP_DEG: f64 = -5.0;

/// Default search radius around the aircraft.
pub const DEFAULT_RANGE_KM: f64 = 500.0;

/// Elevation angle of a target seen from the aircraft, in degrees.
///
/// Flat-Earth beyond the great-circle horizontal distance, which is fine for
/// the few hundred kilometers considered here.
pub fn elevation_angle_deg(distance_km: f64, observer_altitude_ft: f64, target_altitude_m: f64) -> f64 {
    let observer_altitude_m = observer_altitude_ft * FEET_TO_METERS;
    let height_diff_m = target_altitude_m - observer_altitude_m;
    height_diff_m.atan2(distance_km * 1000.0).to_degrees()
}

/// Azimuth of a POI relative to the aircraft heading, in [0, 360).
pub fn relative_bearing(azimuth_deg: f64, heading_deg: f64) -> f64 {
    normalize_degrees(azimuth_deg - heading_deg + 360.0)
}

/// Side of the cabin for a relative bearing.
///
/// Half-open split: `[270, 360) ∪ [0, 90)` is left, `[90, 270)` is right,
/// so every bearing maps to exactly one side.
pub fn side_of(relative_deg: f64) -> Side {
    let relative = normalize_degrees(relative_deg);
    if (90.0..270.0).contains(&relative) {
        Side::Right
    } else {
        Side::Left
    }
}

/// Whether a POI at `poi_azimuth_deg` is on `side` for an aircraft heading
/// `heading_deg`.
pub fn is_on_side(poi_azimuth_deg: f64, heading_deg: f64, side: Side) -> bool {
    side_of(relative_bearing(poi_azimuth_deg, heading_deg)) == side
}

/// Visibility of every POI within `range_km` of the observer, nearest first.
///
/// `heading_deg` only drives the side classification; distance, elevation and
/// azimuth do not depend on it.
pub fn visible_pois(
    observer: &GeoPoint,
    observer_altitude_ft: f64,
    catalog: &[Poi],
    range_km: f64,
    heading_deg: f64,
) -> Result<Vec<VisibilityResult>> {
    if range_km.is_nan() || range_km < 0.0 {
        return Err(EngineError::invalid(format!(
            "range_km must be a non-negative number, got {range_km}"
        )));
    }
    if !observer.is_finite() {
        return Err(EngineError::invalid(format!(
            "observer position must be finite, got {observer}"
        )));
    }

    let mut results: Vec<VisibilityResult> = catalog
        .iter()
        .filter_map(|poi| {
            let distance_km = haversine_distance_km(observer, &poi.location);
            if distance_km > range_km {
                return None;
            }
            let elevation_angle_deg =
                elevation_angle_deg(distance_km, observer_altitude_ft, poi.altitude_m);
            let azimuth_deg = spherical_bearing(observer, &poi.location);
            let relative_bearing_deg = relative_bearing(azimuth_deg, heading_deg);

            Some(VisibilityResult {
                poi: poi.clone(),
                distance_km,
                elevation_angle_deg,
                azimuth_deg,
                is_above_horizon: elevation_angle_deg > HORIZON_DIP_DEG,
                relative_bearing_deg,
                side: side_of(relative_bearing_deg),
            })
        })
        .collect();

    results.sort_by(|a, b| {
        a.distance_km
            .partial_cmp(&b.distance_km)
            .unwrap_or(Ordering::Equal)
    });

    tracing::trace!(
        candidates = catalog.len(),
        in_range = results.len(),
        range_km,
        "computed POI visibility"
    );

    Ok(results)
}

/// Visibility from an aircraft state, using its live heading.
pub fn visible_from_state(
    state: &AircraftState,
    catalog: &[Poi],
    range_km: f64,
) -> Result<Vec<VisibilityResult>> {
    visible_pois(
        &state.position,
        state.altitude_ft,
        catalog,
        range_km,
        state.heading_deg,
    )
}

/// Above-horizon results on one side, nearest first, at most `limit`.
///
/// Truncation is a display policy; `visible_pois` itself never truncates.
pub fn nearest_on_side(results: &[VisibilityResult], side: Side, limit: usize) -> Vec<VisibilityResult> {
    results
        .iter()
        .filter(|r| r.side == side && r.is_above_horizon)
        .take(limit)
        .cloned()
        .collect()
}
