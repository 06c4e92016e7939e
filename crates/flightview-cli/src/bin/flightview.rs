//! flightview - inspect the window view of a simulated flight.
//!
//! Usage:
//!   cargo run -p flightview-cli --bin flightview -- snapshot --progress 0.5 --pretty
//!   RUST_LOG=flightview=debug cargo run -p flightview-cli --bin flightview -- replay --steps 20

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use flightview_cli::{log_filter, progress_steps, to_json, Config};
use flightview_core::{
    compute_route_at, sprite_heading, viewport_for, FlightSimulation, GeoPoint, PoiCatalog, Side,
    ViewPreset,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Geneva Cointrin
const DEFAULT_ORIGIN: &str = "46.2381,6.1080";
/// Athens Eleftherios Venizelos
const DEFAULT_DESTINATION: &str = "37.9364,23.9445";

/// Aircraft sprites are drawn every 15 degrees
const SPRITE_STEP_DEG: f64 = 15.0;

#[derive(Parser, Debug)]
#[command(author, version, about = "Window view geometry for a simulated flight")]
struct Args {
    /// Departure as "lat,lon"
    #[arg(long, global = true, default_value = DEFAULT_ORIGIN, allow_hyphen_values = true)]
    from: GeoPoint,

    /// Arrival as "lat,lon"
    #[arg(long, global = true, default_value = DEFAULT_DESTINATION, allow_hyphen_values = true)]
    to: GeoPoint,

    /// Start of the route time axis (RFC 3339), defaults to now
    #[arg(long, global = true)]
    departure: Option<DateTime<Utc>>,

    /// Route samples, overrides FLIGHTVIEW_SAMPLES
    #[arg(long, global = true)]
    samples: Option<usize>,

    /// Pretty-print JSON output
    #[arg(long, global = true, default_value_t = false)]
    pretty: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the generated great-circle route
    Route,

    /// Print the aircraft state at a progress value
    State {
        /// Progress along the route, 0 to 1
        #[arg(long)]
        progress: f64,
    },

    /// List the points of interest in range, nearest first
    Visible {
        #[arg(long)]
        progress: f64,

        /// Only POIs on this side, above the horizon
        #[arg(long)]
        side: Option<Side>,

        /// Visibility range in km, overrides FLIGHTVIEW_RANGE_KM
        #[arg(long)]
        range: Option<f64>,

        /// Keep at most this many results
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Print the map viewport of one window
    Viewport {
        #[arg(long)]
        progress: f64,

        #[arg(long)]
        side: Side,

        /// window or modal, overrides FLIGHTVIEW_ZOOM_PRESET
        #[arg(long)]
        preset: Option<ViewPreset>,
    },

    /// Print state, POIs and viewports for both windows
    Snapshot {
        #[arg(long)]
        progress: f64,
    },

    /// Sweep the whole flight and log one line per step
    Replay {
        #[arg(long, default_value_t = 10)]
        steps: usize,
    },
}

fn main() -> Result<()> {
    // Logs on stderr, JSON on stdout
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(log_filter(
            std::env::var(tracing_subscriber::EnvFilter::DEFAULT_ENV)
                .ok()
                .as_deref(),
        ))
        .init();

    let args = Args::parse();
    let mut config = Config::from_env();
    if let Some(samples) = args.samples {
        config.sample_count = samples;
    }

    tracing::debug!(?config, from = %args.from, to = %args.to, "starting");

    match args.command {
        Command::Route => {
            let engine = config.engine_config();
            engine.validate().context("invalid configuration")?;
            let route = compute_route_at(
                args.from,
                args.to,
                engine.sample_count,
                args.departure.unwrap_or_else(Utc::now),
            )
            .context("failed to compute route")?;
            tracing::info!(
                samples = route.len(),
                distance_km = route.distance_km,
                "computed route"
            );
            println!("{}", to_json(&route, args.pretty)?);
        }
        Command::State { progress } => {
            let sim = simulation(&args.from, &args.to, args.departure, &config)?;
            let state = sim.state(progress)?;
            tracing::info!(
                progress = state.progress,
                phase = ?state.phase,
                sprite = sprite_heading(state.heading_deg, SPRITE_STEP_DEG),
                "aircraft state"
            );
            println!("{}", to_json(&state, args.pretty)?);
        }
        Command::Visible {
            progress,
            side,
            range,
            limit,
        } => {
            if let Some(range) = range {
                config.visibility_range_km = range;
            }
            let sim = simulation(&args.from, &args.to, args.departure, &config)?;
            let mut results = sim.visible(progress)?;
            if let Some(side) = side {
                results.retain(|r| r.side == side && r.is_above_horizon);
            }
            if let Some(limit) = limit {
                results.truncate(limit);
            }
            tracing::info!(count = results.len(), "visible points of interest");
            println!("{}", to_json(&results, args.pretty)?);
        }
        Command::Viewport {
            progress,
            side,
            preset,
        } => {
            if let Some(preset) = preset {
                config.view_preset = preset;
            }
            let engine = config.engine_config();
            let sim = simulation(&args.from, &args.to, args.departure, &config)?;
            let state = sim.state(progress)?;
            let viewport = viewport_for(&state, side, &engine.zoom_preset(), engine.lateral_offset_m);
            tracing::info!(
                %side,
                zoom = viewport.zoom_level,
                view_angle = viewport.view_angle_deg,
                "viewport"
            );
            println!("{}", to_json(&viewport, args.pretty)?);
        }
        Command::Snapshot { progress } => {
            let sim = simulation(&args.from, &args.to, args.departure, &config)?;
            let snapshot = sim.snapshot(progress)?;
            tracing::info!(
                left = snapshot.left.pois.len(),
                right = snapshot.right.pois.len(),
                "snapshot"
            );
            println!("{}", to_json(&snapshot, args.pretty)?);
        }
        Command::Replay { steps } => {
            let sim = simulation(&args.from, &args.to, args.departure, &config)?;
            tracing::info!(
                steps,
                distance_km = sim.route().distance_km,
                "replaying flight"
            );
            for progress in progress_steps(steps) {
                let snapshot = sim.snapshot(progress)?;
                let names = |side: Side| {
                    snapshot
                        .window(side)
                        .pois
                        .iter()
                        .map(|r| r.poi.name.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                };
                tracing::info!(
                    progress = %format!("{:.0}%", progress * 100.0),
                    position = %snapshot.state.position,
                    heading = %format!("{:.1}", snapshot.state.heading_deg),
                    altitude_ft = snapshot.state.altitude_ft.round(),
                    phase = ?snapshot.state.phase,
                    left = %names(Side::Left),
                    right = %names(Side::Right),
                    "tick"
                );
            }
        }
    }

    Ok(())
}

/// Route plus built-in catalog, with the configured time axis.
fn simulation(
    from: &GeoPoint,
    to: &GeoPoint,
    departure: Option<DateTime<Utc>>,
    config: &Config,
) -> Result<FlightSimulation<'static>> {
    let engine = config.engine_config();
    engine.validate().context("invalid configuration")?;
    let route = compute_route_at(
        *from,
        *to,
        engine.sample_count,
        departure.unwrap_or_else(Utc::now),
    )
    .context("failed to compute route")?;
    tracing::debug!(
        samples = route.len(),
        distance_km = route.distance_km,
        "computed route"
    );
    Ok(FlightSimulation::new(
        route,
        PoiCatalog::builtin().as_slice(),
        engine,
    ))
}
