//! Geometry engine for an in-flight window view.
//!
//! Generates a great-circle route, derives the aircraft state at any progress
//! along it, and computes which points of interest a passenger can see and
//! how each window's map should be framed. Spherical Earth throughout.

pub mod config;
pub mod error;
pub mod interpolation;
pub mod models;
pub mod poi;
pub mod profile;
pub mod route;
pub mod simulation;
pub mod spatial;
pub mod viewport;
pub mod visibility;

pub use config::EngineConfig;
pub use error::EngineError;
pub use interpolation::{
    aircraft_state, aircraft_state_from_waypoints, heading_at, position_at, sprite_heading,
};
pub use models::{
    AircraftState, BoundingBox, FlightPhase, GeoPoint, Poi, PoiCategory, RouteSample, Side,
    ViewportSpec, VisibilityResult,
};
pub use poi::PoiCatalog;
pub use profile::{
    altitude_at_percent, evaluate_profile, profile_at_percent, speed_at_percent, ProfilePoint,
};
pub use route::{compute_route, compute_route_at, Route};
pub use simulation::{FlightSimulation, FlightSnapshot, WindowView};
pub use spatial::{haversine_distance_km, planar_heading, spherical_bearing};
pub use viewport::{
    bounds_from_altitude_and_view_angle, map_zoom_from_altitude, offset_viewpoint,
    poi_detail_zoom, view_angle_from_altitude, viewport_for, zoom_from_altitude, ViewPreset,
    ZoomFormula, ZoomPreset,
};
pub use visibility::{is_on_side, nearest_on_side, visible_pois, HORIZON_DIP_DEG};
