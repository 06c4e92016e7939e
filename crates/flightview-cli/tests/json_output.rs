//! JSON emitted by the CLI helpers for engine types.

use chrono::{TimeZone, Utc};
use flightview_cli::{progress_steps, to_json, Config};
use flightview_core::{compute_route_at, FlightSimulation, GeoPoint, PoiCatalog};
use serde_json::Value;

const GENEVA: GeoPoint = GeoPoint::new(46.2381, 6.1080);
const ATHENS: GeoPoint = GeoPoint::new(37.9364, 23.9445);

fn simulation(config: &Config) -> FlightSimulation<'static> {
    let engine = config.engine_config();
    let start = Utc.with_ymd_and_hms(2026, 6, 1, 8, 0, 0).unwrap();
    let route = compute_route_at(GENEVA, ATHENS, engine.sample_count, start).unwrap();
    FlightSimulation::new(route, PoiCatalog::builtin().as_slice(), engine)
}

#[test]
fn snapshot_json_has_both_windows() {
    let sim = simulation(&Config::default());
    let json = to_json(&sim.snapshot(0.5).unwrap(), false).unwrap();
    let value: Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["state"]["phase"], "cruise");
    assert_eq!(value["left"]["viewport"]["side"], "left");
    assert_eq!(value["right"]["viewport"]["side"], "right");
    assert!(value["left"]["pois"].is_array());
}

#[test]
fn route_json_starts_at_departure_time() {
    let sim = simulation(&Config {
        sample_count: 5,
        ..Config::default()
    });
    let value: Value = serde_json::from_str(&to_json(sim.route(), true).unwrap()).unwrap();

    let samples = value["samples"].as_array().unwrap();
    assert_eq!(samples.len(), 5);
    assert_eq!(samples[0]["timestamp"], "2026-06-01T08:00:00Z");
    assert_eq!(samples[1]["timestamp"], "2026-06-01T08:01:00Z");
}

#[test]
fn replay_sweep_never_fails() {
    let sim = simulation(&Config::default());
    for progress in progress_steps(25) {
        let snapshot = sim.snapshot(progress).unwrap();
        assert!((0.0..360.0).contains(&snapshot.state.heading_deg));
    }
}
