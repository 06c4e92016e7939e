//! Window viewport projection.
//!
//! Turns an aircraft state and a cabin side into the map parameters of a
//! porthole view: an offset viewpoint, a zoom level and bounds limiting how
//! far the map may pan.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::EngineError;
use crate::models::{AircraftState, BoundingBox, GeoPoint, Side, ViewportSpec};
use crate::spatial::FEET_TO_METERS;

/// Equatorial radius used by the web-map projection math.
pub const VIEWPORT_EARTH_RADIUS_M: f64 = 6_378_137.0;

/// Map tile edge in pixels.
const TILE_SIZE_PX: f64 = 256.0;

/// Lateral window offset of the inline porthole view (2 x 30 m).
pub const WINDOW_LATERAL_OFFSET_M: f64 = 60.0;
/// Lateral window offset of the full-screen porthole view (0.8 x 30 m).
pub const MODAL_LATERAL_OFFSET_M: f64 = 24.0;

const MIN_VIEW_ANGLE_DEG: f64 = 45.0;
const MAX_VIEW_ANGLE_DEG: f64 = 75.0;
const VIEW_ANGLE_MAX_ALT_FT: f64 = 40_000.0;
const LOW_BAND_ALT_FT: f64 = 10_000.0;
const LOW_BAND_ANGLE_DEG: f64 = 35.0;
const HIGH_BAND_ALT_FT: f64 = 30_000.0;
const HIGH_BAND_ANGLE_DEG: f64 = 80.0;

/// How the raw zoom is derived from the ground distance in view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ZoomFormula {
    /// `base - log2(view_distance_km)`
    FixedBase { base: f64 },
    /// `log2(cos(lat) * 2πR / (256 * view_distance_m))`
    Mercator,
}

/// Tuning for [`ZoomPreset::zoom`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomPreset {
    /// Horizontal field of view of the passenger, degrees
    pub fov_deg: f64,
    pub formula: ZoomFormula,
    pub min_zoom: f64,
    pub max_zoom: f64,
    /// Above this altitude the zoom is raised by `altitude_step`
    pub high_altitude_ft: f64,
    /// Below this altitude the zoom is lowered by `altitude_step`
    pub low_altitude_ft: f64,
    pub altitude_step: f64,
    /// Added for the left window, subtracted for the right one
    pub side_step: f64,
}

impl ZoomPreset {
    /// Inline porthole view.
    pub const WINDOW: ZoomPreset = ZoomPreset {
        fov_deg: 60.0,
        formula: ZoomFormula::FixedBase { base: 16.0 },
        min_zoom: 10.0,
        max_zoom: 16.0,
        high_altitude_ft: 30_000.0,
        low_altitude_ft: 15_000.0,
        altitude_step: 1.0,
        side_step: 0.2,
    };

    /// Full-screen porthole view.
    pub const MODAL: ZoomPreset = ZoomPreset {
        fov_deg: 60.0,
        formula: ZoomFormula::Mercator,
        min_zoom: 10.0,
        max_zoom: 16.0,
        high_altitude_ft: 30_000.0,
        low_altitude_ft: 15_000.0,
        altitude_step: 1.0,
        side_step: 0.0,
    };

    /// Ground distance covered by half the field of view, in meters.
    pub fn view_distance_m(&self, altitude_ft: f64) -> f64 {
        let altitude_m = altitude_ft.max(0.0) * FEET_TO_METERS;
        altitude_m * (self.fov_deg.to_radians() / 2.0).tan()
    }

    /// Rounded zoom level for an altitude, latitude and optional side.
    ///
    /// The altitude and side adjustments are applied after clamping, so the
    /// result may leave `[min_zoom, max_zoom]` by up to one step.
    pub fn zoom(&self, altitude_ft: f64, lat_deg: f64, side: Option<Side>) -> f64 {
        let view_distance_m = self.view_distance_m(altitude_ft);

        // log2 of a zero distance is -inf; the clamp turns it into max_zoom
        let raw = match self.formula {
            ZoomFormula::FixedBase { base } => base - (view_distance_m / 1000.0).log2(),
            ZoomFormula::Mercator => {
                let circumference = lat_deg.to_radians().cos() * 2.0 * std::f64::consts::PI
                    * VIEWPORT_EARTH_RADIUS_M;
                (circumference / (TILE_SIZE_PX * view_distance_m)).log2()
            }
        };
        let mut zoom = if raw.is_nan() {
            self.min_zoom
        } else {
            raw.clamp(self.min_zoom, self.max_zoom)
        };

        if altitude_ft > self.high_altitude_ft {
            zoom += self.altitude_step;
        } else if altitude_ft < self.low_altitude_ft {
            zoom -= self.altitude_step;
        }

        match side {
            Some(Side::Left) => zoom += self.side_step,
            Some(Side::Right) => zoom -= self.side_step,
            None => {}
        }

        zoom.round()
    }
}

/// Named zoom / offset configurations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewPreset {
    #[default]
    Window,
    Modal,
}

impl ViewPreset {
    pub fn zoom(self) -> ZoomPreset {
        match self {
            ViewPreset::Window => ZoomPreset::WINDOW,
            ViewPreset::Modal => ZoomPreset::MODAL,
        }
    }

    pub fn lateral_offset_m(self) -> f64 {
        match self {
            ViewPreset::Window => WINDOW_LATERAL_OFFSET_M,
            ViewPreset::Modal => MODAL_LATERAL_OFFSET_M,
        }
    }
}

impl FromStr for ViewPreset {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "window" | "inline" => Ok(ViewPreset::Window),
            "modal" | "fullscreen" => Ok(ViewPreset::Modal),
            other => Err(EngineError::invalid(format!("unknown view preset {other:?}"))),
        }
    }
}

/// Zoom for an altitude using the inline window preset, side-neutral.
pub fn zoom_from_altitude(altitude_ft: f64) -> f64 {
    ZoomPreset::WINDOW.zoom(altitude_ft, 0.0, None)
}

/// Shift `position` sideways from the track by `lateral_offset_m`.
///
/// Left is 90° counter-clockwise of the heading, right 90° clockwise. The
/// offset is converted to degrees with a plain radius ratio and split along
/// the perpendicular heading, without any longitude scaling.
pub fn offset_viewpoint(
    position: &GeoPoint,
    heading_deg: f64,
    side: Side,
    lateral_offset_m: f64,
) -> GeoPoint {
    let perpendicular = match side {
        Side::Left => heading_deg - 90.0,
        Side::Right => heading_deg + 90.0,
    };
    let perpendicular_rad = perpendicular.to_radians();
    let offset_deg = (lateral_offset_m / VIEWPORT_EARTH_RADIUS_M).to_degrees();

    GeoPoint {
        lat: position.lat + offset_deg * perpendicular_rad.cos(),
        lon: position.lon + offset_deg * perpendicular_rad.sin(),
        altitude_m: position.altitude_m,
    }
}

/// Square box around `center` sized by the ground distance seen at
/// `view_angle_deg` from `altitude_ft`.
pub fn bounds_from_altitude_and_view_angle(
    center: &GeoPoint,
    altitude_ft: f64,
    view_angle_deg: f64,
) -> BoundingBox {
    let altitude_m = altitude_ft.max(0.0) * FEET_TO_METERS;
    let view_distance_m = altitude_m * view_angle_deg.to_radians().tan();
    let half_deg = (view_distance_m / VIEWPORT_EARTH_RADIUS_M).to_degrees() * 0.5;

    BoundingBox {
        south: center.lat - half_deg,
        west: center.lon - half_deg,
        north: center.lat + half_deg,
        east: center.lon + half_deg,
    }
}

/// Downward viewing angle for an altitude, in degrees.
///
/// A linear ramp from 45° at the ground to 75° at 40 000 ft, overridden to 35°
/// below 10 000 ft and 80° above 30 000 ft.
pub fn view_angle_from_altitude(altitude_ft: f64) -> f64 {
    let alt = if altitude_ft.is_nan() {
        0.0
    } else {
        altitude_ft.clamp(0.0, VIEW_ANGLE_MAX_ALT_FT)
    };

    if alt < LOW_BAND_ALT_FT {
        LOW_BAND_ANGLE_DEG
    } else if alt > HIGH_BAND_ALT_FT {
        HIGH_BAND_ANGLE_DEG
    } else {
        MIN_VIEW_ANGLE_DEG + (alt / VIEW_ANGLE_MAX_ALT_FT) * (MAX_VIEW_ANGLE_DEG - MIN_VIEW_ANGLE_DEG)
    }
}

/// Full viewport for one side of the cabin.
pub fn viewport_for(
    state: &AircraftState,
    side: Side,
    preset: &ZoomPreset,
    lateral_offset_m: f64,
) -> ViewportSpec {
    let viewpoint = offset_viewpoint(&state.position, state.heading_deg, side, lateral_offset_m);
    let zoom_level = preset.zoom(state.altitude_ft, state.position.lat, Some(side));
    let view_angle_deg = view_angle_from_altitude(state.altitude_ft);
    let bounds = bounds_from_altitude_and_view_angle(&viewpoint, state.altitude_ft, view_angle_deg);

    ViewportSpec {
        side,
        viewpoint,
        zoom_level,
        view_angle_deg,
        bounds,
    }
}

/// Overview map zoom: linear from 13 on the ground to 6 at 40 000 ft.
pub fn map_zoom_from_altitude(altitude_ft: f64) -> f64 {
    const MAX_ALT_FT: f64 = 40_000.0;
    const MIN_ZOOM: f64 = 6.0;
    const MAX_ZOOM: f64 = 13.0;

    let alt = if altitude_ft.is_nan() {
        0.0
    } else {
        altitude_ft.clamp(0.0, MAX_ALT_FT)
    };
    (MAX_ZOOM - (alt / MAX_ALT_FT) * (MAX_ZOOM - MIN_ZOOM)).round()
}

/// Zoom used when focusing a single POI card.
pub fn poi_detail_zoom(altitude_ft: f64) -> f64 {
    if altitude_ft < 10_000.0 {
        13.0
    } else if altitude_ft < 20_000.0 {
        11.0
    } else if altitude_ft < 30_000.0 {
        9.0
    } else {
        8.0
    }
}
