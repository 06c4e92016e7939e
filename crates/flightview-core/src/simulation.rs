//! One progress tick of a simulated flight.
//!
//! Runs route -> aircraft state -> {visibility, viewport} for both windows.
//! Every call recomputes from scratch; nothing is cached between ticks.

use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::error::Result;
use crate::interpolation::aircraft_state;
use crate::models::{AircraftState, GeoPoint, Poi, Side, ViewportSpec, VisibilityResult};
use crate::poi::PoiCatalog;
use crate::route::{compute_route, Route};
use crate::viewport::viewport_for;
use crate::visibility::{nearest_on_side, visible_from_state};

/// What one window shows at a given tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowView {
    pub viewport: ViewportSpec,
    pub pois: Vec<VisibilityResult>,
}

/// Everything the rendering layer needs for one progress value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightSnapshot {
    pub state: AircraftState,
    pub left: WindowView,
    pub right: WindowView,
}

impl FlightSnapshot {
    pub fn window(&self, side: Side) -> &WindowView {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }
}

/// A route and POI catalog shared by every tick of one flight.
#[derive(Debug, Clone)]
pub struct FlightSimulation<'a> {
    route: Route,
    catalog: &'a [Poi],
    config: EngineConfig,
}

impl FlightSimulation<'static> {
    /// Build the route between two endpoints and use the built-in catalog.
    pub fn between(origin: GeoPoint, destination: GeoPoint, config: EngineConfig) -> Result<Self> {
        config.validate()?;
        let route = compute_route(origin, destination, config.sample_count)?;
        Ok(Self::new(route, PoiCatalog::builtin().as_slice(), config))
    }
}

impl<'a> FlightSimulation<'a> {
    pub fn new(route: Route, catalog: &'a [Poi], config: EngineConfig) -> Self {
        Self {
            route,
            catalog,
            config,
        }
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn state(&self, progress: f64) -> Result<AircraftState> {
        aircraft_state(&self.route, progress)
    }

    /// Visibility list at `progress`, nearest first, not truncated.
    pub fn visible(&self, progress: f64) -> Result<Vec<VisibilityResult>> {
        let state = self.state(progress)?;
        visible_from_state(&state, self.catalog, self.config.visibility_range_km)
    }

    pub fn viewport(&self, progress: f64, side: Side) -> Result<ViewportSpec> {
        let state = self.state(progress)?;
        Ok(self.viewport_from_state(&state, side))
    }

    fn viewport_from_state(&self, state: &AircraftState, side: Side) -> ViewportSpec {
        viewport_for(
            state,
            side,
            &self.config.zoom_preset(),
            self.config.lateral_offset_m,
        )
    }

    /// Full snapshot at `progress` in [0, 1].
    pub fn snapshot(&self, progress: f64) -> Result<FlightSnapshot> {
        let state = self.state(progress)?;
        let visible = visible_from_state(&state, self.catalog, self.config.visibility_range_km)?;
        let limit = self.config.max_pois_per_side;

        let window = |side: Side| WindowView {
            viewport: self.viewport_from_state(&state, side),
            pois: nearest_on_side(&visible, side, limit),
        };
        let [left, right] = Side::BOTH.map(window);

        tracing::trace!(
            progress = state.progress,
            heading = state.heading_deg,
            altitude_ft = state.altitude_ft,
            left = left.pois.len(),
            right = right.pois.len(),
            "flight snapshot"
        );

        Ok(FlightSnapshot { state, left, right })
    }
}
