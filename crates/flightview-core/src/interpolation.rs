//! Aircraft state along a waypoint list.
//!
//! Position is interpolated linearly in lat/lon between neighbouring
//! waypoints, which is only acceptable because routes are densely sampled.
//! Sparse or unevenly spaced waypoint lists degrade both position and heading.

use crate::error::{EngineError, Result};
use crate::models::{AircraftState, GeoPoint};
use crate::profile::evaluate_profile;
use crate::route::Route;
use crate::spatial::{normalize_degrees, planar_heading};

struct Segment {
    lo: usize,
    hi: usize,
    frac: f64,
}

fn locate(percent: f64, len: usize) -> Segment {
    let percent = if percent.is_nan() {
        0.0
    } else {
        percent.clamp(0.0, 100.0)
    };
    let idx = (percent / 100.0) * (len - 1) as f64;
    let lo = (idx.floor() as usize).min(len - 1);
    let hi = (lo + 1).min(len - 1);
    Segment {
        lo,
        hi,
        frac: idx - lo as f64,
    }
}

/// Position at `percent` in [0, 100] along `waypoints`.
///
/// Returns `None` when fewer than two waypoints are available.
pub fn position_at(percent: f64, waypoints: &[GeoPoint]) -> Option<GeoPoint> {
    if waypoints.len() < 2 {
        return None;
    }
    let seg = locate(percent, waypoints.len());
    let a = &waypoints[seg.lo];
    let b = &waypoints[seg.hi];
    Some(GeoPoint::new(
        a.lat + (b.lat - a.lat) * seg.frac,
        a.lon + (b.lon - a.lon) * seg.frac,
    ))
}

/// Planar heading of the segment containing `percent`, in [0, 360).
///
/// At the final waypoint the last segment is used. Returns `None` when fewer
/// than two waypoints are available.
pub fn heading_at(percent: f64, waypoints: &[GeoPoint]) -> Option<f64> {
    if waypoints.len() < 2 {
        return None;
    }
    let seg = locate(percent, waypoints.len());
    let (from, to) = if seg.lo == seg.hi {
        (seg.lo - 1, seg.hi)
    } else {
        (seg.lo, seg.hi)
    };
    Some(planar_heading(&waypoints[from], &waypoints[to]))
}

/// Aircraft state at `progress` in [0, 1] along a generated route.
pub fn aircraft_state(route: &Route, progress: f64) -> Result<AircraftState> {
    aircraft_state_from_waypoints(progress * 100.0, &route.waypoints())
}

/// Aircraft state at `percent` in [0, 100] along an arbitrary waypoint list.
pub fn aircraft_state_from_waypoints(percent: f64, waypoints: &[GeoPoint]) -> Result<AircraftState> {
    let (Some(position), Some(heading_deg)) =
        (position_at(percent, waypoints), heading_at(percent, waypoints))
    else {
        return Err(EngineError::invalid(format!(
            "at least 2 waypoints required, got {}",
            waypoints.len()
        )));
    };

    let progress = if percent.is_nan() {
        0.0
    } else {
        (percent / 100.0).clamp(0.0, 1.0)
    };
    let profile = evaluate_profile(progress);

    Ok(AircraftState {
        position,
        heading_deg,
        altitude_ft: profile.altitude_ft,
        speed_kt: profile.speed_kt,
        phase: profile.phase,
        progress,
    })
}

/// Heading snapped to the nearest multiple of `step_deg`, in [0, 360).
///
/// Used to pick one of a fixed set of pre-rotated aircraft sprites.
pub fn sprite_heading(heading_deg: f64, step_deg: f64) -> f64 {
    if step_deg <= 0.0 || !step_deg.is_finite() {
        return normalize_degrees(heading_deg);
    }
    normalize_degrees((heading_deg / step_deg).round() * step_deg)
}
