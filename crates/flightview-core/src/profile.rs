//! Synthetic climb / cruise / descent profile.
//!
//! One curve, two parameterizations: progress in [0, 1] and percent in
//! [0, 100]. Out-of-range inputs saturate.

use serde::{Deserialize, Serialize};

use crate::models::FlightPhase;

pub const CRUISE_ALTITUDE_FT: f64 = 35_000.0;
pub const CLIMB_END: f64 = 0.1;
pub const DESCENT_START: f64 = 0.9;

const TAKEOFF_SPEED_KT: f64 = 280.0;
const CRUISE_SPEED_KT: f64 = 500.0;
const LANDING_SPEED_KT: f64 = 300.0;

/// Altitude and speed at one point of the profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfilePoint {
    pub altitude_ft: f64,
    pub speed_kt: f64,
    pub phase: FlightPhase,
}

fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Phase for a progress fraction (clamped).
pub fn phase_at(progress: f64) -> FlightPhase {
    let p = clamp_unit(progress);
    if p < CLIMB_END {
        FlightPhase::Climb
    } else if p <= DESCENT_START {
        FlightPhase::Cruise
    } else {
        FlightPhase::Descent
    }
}

/// Evaluate the profile at `progress` in [0, 1].
///
/// Climb below 0.1 (0 -> 35 000 ft, 280 -> 500 kt), cruise up to and including
/// 0.9, then descent (35 000 -> 0 ft, 500 -> 300 kt).
pub fn evaluate_profile(progress: f64) -> ProfilePoint {
    let p = clamp_unit(progress);
    let phase = phase_at(p);

    let (altitude_ft, speed_kt) = match phase {
        FlightPhase::Climb => {
            let t = p / CLIMB_END;
            (
                CRUISE_ALTITUDE_FT * t,
                TAKEOFF_SPEED_KT + t * (CRUISE_SPEED_KT - TAKEOFF_SPEED_KT),
            )
        }
        FlightPhase::Cruise => (CRUISE_ALTITUDE_FT, CRUISE_SPEED_KT),
        FlightPhase::Descent => {
            let t = (p - DESCENT_START) / (1.0 - DESCENT_START);
            (
                CRUISE_ALTITUDE_FT * (1.0 - t),
                CRUISE_SPEED_KT - t * (CRUISE_SPEED_KT - LANDING_SPEED_KT),
            )
        }
    };

    ProfilePoint {
        altitude_ft: altitude_ft.max(0.0),
        speed_kt,
        phase,
    }
}

/// Same curve parameterized on percent in [0, 100].
pub fn profile_at_percent(percent: f64) -> ProfilePoint {
    evaluate_profile(percent / 100.0)
}

pub fn altitude_at_percent(percent: f64) -> f64 {
    profile_at_percent(percent).altitude_ft
}

pub fn speed_at_percent(percent: f64) -> f64 {
    profile_at_percent(percent).speed_kt
}
