//! End-to-end scenarios over the Geneva -> Athens demo flight.

use flightview_core::{
    compute_route, evaluate_profile, heading_at, is_on_side, visible_pois, zoom_from_altitude,
    EngineConfig, FlightSimulation, GeoPoint, Poi, PoiCatalog, PoiCategory, Side, HORIZON_DIP_DEG,
};

const GENEVA: GeoPoint = GeoPoint::new(46.2381, 6.1080);
const ATHENS: GeoPoint = GeoPoint::new(37.9364, 23.9445);

#[test]
fn geneva_to_athens_in_three_samples() {
    let route = compute_route(GENEVA, ATHENS, 3).unwrap();
    let samples = route.samples();

    assert_eq!(samples.len(), 3);
    assert!((samples[0].point.lat - GENEVA.lat).abs() < 1e-6);
    assert!((samples[0].point.lon - GENEVA.lon).abs() < 1e-6);
    assert!((samples[2].point.lat - ATHENS.lat).abs() < 1e-6);
    assert!((samples[2].point.lon - ATHENS.lon).abs() < 1e-6);
    assert_eq!(samples[1].altitude_ft, 35_000.0);
}

#[test]
fn acropolis_seen_from_directly_overhead() {
    let catalog = vec![Poi {
        name: "Acropole".to_string(),
        description: String::new(),
        link: String::new(),
        location: GeoPoint::new(37.9715, 23.7267),
        altitude_m: 156.0,
        preferred_side: Side::Right,
        category: PoiCategory::Historic,
        image_url: None,
    }];

    let results = visible_pois(&GeoPoint::new(37.9715, 23.7267), 100.0, &catalog, 500.0, 0.0).unwrap();

    assert_eq!(results.len(), 1);
    assert!(results[0].distance_km < 1e-6);
    assert!(results[0].elevation_angle_deg > 0.0);
    assert!(results[0].is_above_horizon);
}

#[test]
fn lower_altitude_gives_larger_zoom() {
    assert!(zoom_from_altitude(5000.0) > zoom_from_altitude(35_000.0));
}

#[test]
fn eastbound_side_assignment() {
    assert!(is_on_side(0.0, 90.0, Side::Left));
    assert!(is_on_side(180.0, 90.0, Side::Right));
}

#[test]
fn profile_sweep_is_well_formed() {
    assert_eq!(evaluate_profile(0.0).altitude_ft, 0.0);
    assert_eq!(evaluate_profile(1.0).altitude_ft, 0.0);
    for i in 10..=90 {
        assert_eq!(evaluate_profile(i as f64 / 100.0).altitude_ft, 35_000.0);
    }
}

#[test]
fn headings_and_azimuths_stay_in_range_over_the_whole_flight() {
    let route = compute_route(GENEVA, ATHENS, 120).unwrap();
    let waypoints = route.waypoints();
    let catalog = PoiCatalog::builtin();

    for step in 0..=100 {
        let percent = step as f64;
        let heading = heading_at(percent, &waypoints).unwrap();
        assert!((0.0..360.0).contains(&heading), "heading {heading} at {percent}%");

        let observer = flightview_core::position_at(percent, &waypoints).unwrap();
        let results = visible_pois(&observer, 35_000.0, catalog.as_slice(), 500.0, heading).unwrap();
        for r in &results {
            assert!((0.0..360.0).contains(&r.azimuth_deg));
            assert_eq!(r.is_above_horizon, r.elevation_angle_deg > HORIZON_DIP_DEG);
        }
        assert!(results.windows(2).all(|w| w[0].distance_km <= w[1].distance_km));
    }
}

#[test]
fn full_flight_replay_produces_snapshots() {
    let sim = FlightSimulation::between(GENEVA, ATHENS, EngineConfig::default()).unwrap();
    let mut saw_pois = false;

    for step in 0..=20 {
        let snapshot = sim.snapshot(step as f64 / 20.0).unwrap();
        assert!(snapshot.left.viewport.bounds.contains(&snapshot.left.viewport.viewpoint));
        assert!(snapshot.right.viewport.bounds.contains(&snapshot.right.viewport.viewpoint));
        saw_pois |= !snapshot.left.pois.is_empty() || !snapshot.right.pois.is_empty();
    }

    assert!(saw_pois, "expected some POIs along Geneva -> Athens");
}
