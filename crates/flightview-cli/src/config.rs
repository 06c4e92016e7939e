//! CLI configuration from environment.

use std::env;
use std::str::FromStr;

use flightview_core::{EngineConfig, ViewPreset};

/// Engine settings read from `FLIGHTVIEW_*` variables.
///
/// Unset variables fall back to the engine defaults; values that fail to
/// parse are logged and ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub sample_count: usize,
    pub visibility_range_km: f64,
    /// `None` means "use the offset of the selected preset"
    pub lateral_offset_m: Option<f64>,
    pub view_preset: ViewPreset,
    pub max_pois_per_side: usize,
}

impl Default for Config {
    fn default() -> Self {
        let engine = EngineConfig::default();
        Self {
            sample_count: engine.sample_count,
            visibility_range_km: engine.visibility_range_km,
            lateral_offset_m: None,
            view_preset: engine.view_preset,
            max_pois_per_side: engine.max_pois_per_side,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            sample_count: parse_var(&lookup, "FLIGHTVIEW_SAMPLES")
                .unwrap_or(defaults.sample_count),
            visibility_range_km: parse_var(&lookup, "FLIGHTVIEW_RANGE_KM")
                .unwrap_or(defaults.visibility_range_km),
            lateral_offset_m: parse_var(&lookup, "FLIGHTVIEW_LATERAL_OFFSET_M"),
            view_preset: parse_var(&lookup, "FLIGHTVIEW_ZOOM_PRESET")
                .unwrap_or(defaults.view_preset),
            max_pois_per_side: parse_var(&lookup, "FLIGHTVIEW_MAX_POIS")
                .unwrap_or(defaults.max_pois_per_side),
        }
    }

    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            sample_count: self.sample_count,
            visibility_range_km: self.visibility_range_km,
            lateral_offset_m: self
                .lateral_offset_m
                .unwrap_or_else(|| self.view_preset.lateral_offset_m()),
            view_preset: self.view_preset,
            max_pois_per_side: self.max_pois_per_side,
        }
    }
}

fn parse_var<F, T>(lookup: &F, key: &str) -> Option<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(key, value = %raw, "ignoring unparsable environment value");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_gives_engine_defaults() {
        let config = Config::from_lookup(lookup(&[]));
        assert_eq!(config, Config::default());
        assert_eq!(config.engine_config(), EngineConfig::default());
    }

    #[test]
    fn variables_override_defaults() {
        let config = Config::from_lookup(lookup(&[
            ("FLIGHTVIEW_SAMPLES", "50"),
            ("FLIGHTVIEW_RANGE_KM", "250.5"),
            ("FLIGHTVIEW_MAX_POIS", "3"),
        ]));
        assert_eq!(config.sample_count, 50);
        assert_eq!(config.visibility_range_km, 250.5);
        assert_eq!(config.max_pois_per_side, 3);
    }

    #[test]
    fn preset_brings_its_offset_unless_overridden() {
        let config = Config::from_lookup(lookup(&[("FLIGHTVIEW_ZOOM_PRESET", "modal")]));
        assert_eq!(config.engine_config().lateral_offset_m, 24.0);

        let config = Config::from_lookup(lookup(&[
            ("FLIGHTVIEW_ZOOM_PRESET", "modal"),
            ("FLIGHTVIEW_LATERAL_OFFSET_M", "100"),
        ]));
        assert_eq!(config.engine_config().lateral_offset_m, 100.0);
    }

    #[test]
    fn invalid_values_fall_back() {
        let config = Config::from_lookup(lookup(&[
            ("FLIGHTVIEW_SAMPLES", "lots"),
            ("FLIGHTVIEW_ZOOM_PRESET", "panoramic"),
        ]));
        assert_eq!(config.sample_count, 200);
        assert_eq!(config.view_preset, ViewPreset::Window);
    }
}
