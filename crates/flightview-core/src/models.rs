//! Core data models for the flight view engine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::EngineError;

/// A position on the sphere in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
    /// Altitude in meters, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub altitude_m: Option<f64>,
}

impl GeoPoint {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self {
            lat,
            lon,
            altitude_m: None,
        }
    }

    pub fn with_altitude(mut self, altitude_m: f64) -> Self {
        self.altitude_m = Some(altitude_m);
        self
    }

    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lon.is_finite()
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}, {:.4}", self.lat, self.lon)
    }
}

/// Parses `"lat,lon"`.
impl FromStr for GeoPoint {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<_> = s.split(',').map(|p| p.trim()).collect();
        if parts.len() != 2 {
            return Err(EngineError::invalid(format!(
                "expected \"lat,lon\", got {s:?}"
            )));
        }
        let lat: f64 = parts[0]
            .parse()
            .map_err(|_| EngineError::invalid(format!("bad latitude {:?}", parts[0])))?;
        let lon: f64 = parts[1]
            .parse()
            .map_err(|_| EngineError::invalid(format!("bad longitude {:?}", parts[1])))?;
        Ok(Self::new(lat, lon))
    }
}

/// One sample of a generated route.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteSample {
    pub point: GeoPoint,
    pub altitude_ft: f64,
    pub speed_kt: f64,
    /// Synthetic time axis, one minute between samples
    pub timestamp: DateTime<Utc>,
}

/// Phase of the synthetic flight profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlightPhase {
    Climb,
    Cruise,
    Descent,
}

/// Instantaneous aircraft state at some progress along a route.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AircraftState {
    pub position: GeoPoint,
    /// Planar heading in [0, 360)
    pub heading_deg: f64,
    pub altitude_ft: f64,
    pub speed_kt: f64,
    pub phase: FlightPhase,
    /// Progress fraction in [0, 1]
    pub progress: f64,
}

/// Cabin side a passenger looks out of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];

    pub fn as_str(self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Side {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" | "l" => Ok(Side::Left),
            "right" | "r" => Ok(Side::Right),
            other => Err(EngineError::invalid(format!("unknown side {other:?}"))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PoiCategory {
    Nature,
    Mountain,
    City,
    Historic,
    Water,
    Park,
    Beach,
    Valley,
    Archipelago,
    Port,
    District,
    Hill,
    Other,
}

/// A static point-of-interest catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Poi {
    pub name: String,
    pub description: String,
    pub link: String,
    pub location: GeoPoint,
    /// Ground altitude in meters
    #[serde(default)]
    pub altitude_m: f64,
    pub preferred_side: Side,
    pub category: PoiCategory,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Visibility of one POI from one aircraft state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisibilityResult {
    pub poi: Poi,
    pub distance_km: f64,
    pub elevation_angle_deg: f64,
    /// Spherical bearing from the observer, [0, 360)
    pub azimuth_deg: f64,
    pub is_above_horizon: bool,
    /// Azimuth relative to the heading, [0, 360)
    pub relative_bearing_deg: f64,
    pub side: Side,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl BoundingBox {
    pub fn contains(&self, point: &GeoPoint) -> bool {
        point.lat >= self.south
            && point.lat <= self.north
            && point.lon >= self.west
            && point.lon <= self.east
    }

    pub fn center(&self) -> GeoPoint {
        GeoPoint::new(
            (self.south + self.north) / 2.0,
            (self.west + self.east) / 2.0,
        )
    }
}

/// Map viewport parameters for one window side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportSpec {
    pub side: Side,
    pub viewpoint: GeoPoint,
    pub zoom_level: f64,
    pub view_angle_deg: f64,
    pub bounds: BoundingBox,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geo_point_parses_lat_lon_pair() {
        let point: GeoPoint = "46.2381, 6.1080".parse().unwrap();
        assert_eq!(point, GeoPoint::new(46.2381, 6.1080));
        assert!("46.2381".parse::<GeoPoint>().is_err());
        assert!("north,6.1".parse::<GeoPoint>().is_err());
    }

    #[test]
    fn side_round_trips_through_serde_and_str() {
        assert_eq!(serde_json::to_string(&Side::Left).unwrap(), "\"left\"");
        assert_eq!("RIGHT".parse::<Side>().unwrap(), Side::Right);
        assert!("up".parse::<Side>().is_err());
    }

    #[test]
    fn geo_point_skips_missing_altitude() {
        let json = serde_json::to_value(GeoPoint::new(1.0, 2.0)).unwrap();
        assert!(json.get("altitude_m").is_none());

        let json = serde_json::to_value(GeoPoint::new(1.0, 2.0).with_altitude(156.0)).unwrap();
        assert_eq!(json["altitude_m"], 156.0);
    }
}
