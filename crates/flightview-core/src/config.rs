//! Engine configuration.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};
use crate::viewport::{ViewPreset, ZoomPreset};
use crate::visibility::DEFAULT_RANGE_KM;

/// Tunables for a simulated flight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Number of samples on the generated great-circle route
    pub sample_count: usize,
    /// POIs farther than this from the aircraft are ignored
    pub visibility_range_km: f64,
    /// Sideways distance from the track to the window, meters
    pub lateral_offset_m: f64,
    /// Zoom tuning of the porthole view
    pub view_preset: ViewPreset,
    /// Display cap per window side
    pub max_pois_per_side: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            sample_count: 200,
            visibility_range_km: DEFAULT_RANGE_KM,
            lateral_offset_m: ViewPreset::Window.lateral_offset_m(),
            view_preset: ViewPreset::Window,
            max_pois_per_side: 5,
        }
    }
}

impl EngineConfig {
    /// Default configuration for a named view preset, including its offset.
    pub fn for_preset(preset: ViewPreset) -> Self {
        Self {
            lateral_offset_m: preset.lateral_offset_m(),
            view_preset: preset,
            ..Self::default()
        }
    }

    pub fn zoom_preset(&self) -> ZoomPreset {
        self.view_preset.zoom()
    }

    pub fn validate(&self) -> Result<()> {
        if self.sample_count < 2 {
            return Err(EngineError::invalid(format!(
                "sample_count must be at least 2, got {}",
                self.sample_count
            )));
        }
        if self.visibility_range_km.is_nan() || self.visibility_range_km < 0.0 {
            return Err(EngineError::invalid(format!(
                "visibility_range_km must be non-negative, got {}",
                self.visibility_range_km
            )));
        }
        if !self.lateral_offset_m.is_finite() {
            return Err(EngineError::invalid(format!(
                "lateral_offset_m must be finite, got {}",
                self.lateral_offset_m
            )));
        }
        Ok(())
    }
}
