//! main.rs — sailing simulator entry point
//!
//! Single-threaded loop, paced by real-time sleeps:
//!   1. sleep the nominal timestep
//!   2. measure Δt (wall clock, or the nominal step with --fixed-step)
//!   3. once per simulated second: diagnostics, PNG frame, optional JSON of
//!      the state about to be stepped (tick 0 shows the boat at rest)
//!   4. wind → autopilot → forces → integrator
//!
//! Runs until Ctrl-C or `max_ticks`. Frame and telemetry write failures are
//! logged and the frame is skipped; the simulation never stops for them.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, warn};

use sail_simulator::clock::{frame_interval, SimClock};
use sail_simulator::config::FullConfig;
use sail_simulator::render::{render_frame, write_frame, RenderConfig};
use sail_simulator::scenarios::Preset;
use sail_simulator::telemetry::{log_diagnostics, write_snapshot};
use sail_simulator::BoatSim;

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "sail-sim", about = "Real-time sailboat physics simulator")]
struct Args {
    /// Config file path
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,
    /// Scenario preset: default, gusty, dead_run, beam_reach, becalmed
    #[arg(short, long, default_value = "default")]
    preset: String,
    /// Simulation speed multiplier (1.0 = real-time)
    #[arg(long)]
    speed: Option<f64>,
    /// Integrate the nominal timestep instead of measured wall time
    #[arg(long)]
    fixed_step: bool,
    /// Stop after this many ticks
    #[arg(long)]
    max_ticks: Option<u64>,
    /// Seed for the wind random walk
    #[arg(long)]
    seed: Option<u64>,
    /// Skip PNG output
    #[arg(long)]
    no_render: bool,
    /// PNG output path
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl Args {
    fn apply(&self, cfg: &mut FullConfig) {
        if let Some(speed) = self.speed {
            cfg.simulation.speed = speed;
        }
        if self.fixed_step {
            cfg.simulation.fixed_step = true;
        }
        if self.max_ticks.is_some() {
            cfg.simulation.max_ticks = self.max_ticks;
        }
        if self.seed.is_some() {
            cfg.simulation.seed = self.seed;
        }
        if self.no_render {
            cfg.render.enabled = false;
        }
        if let Some(output) = &self.output {
            cfg.render.output_path = output.clone();
        }
    }
}

// ── Main ──────────────────────────────────────────────────────────────────────

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sail_simulator=info,sail_sim=info".into()),
        )
        .init();

    let args = Args::parse();

    let mut cfg = FullConfig::load(&args.config)
        .with_context(|| format!("loading {}", args.config.display()))?;
    args.apply(&mut cfg);

    let preset: Preset = args.preset.parse()?;
    cfg.scenario = preset.apply(&cfg.scenario);

    cfg.simulation.validate()?;

    info!(
        "⛵ Sailing simulator starting — preset {:?}, wind {:.0}° @ {:.1}, target {:.0}°",
        preset,
        cfg.scenario.wind_direction_deg,
        cfg.scenario.wind_speed,
        cfg.scenario.target_heading_deg,
    );

    let mut rng = match cfg.simulation.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let sim = BoatSim::new(&cfg.scenario, cfg.autopilot.autopilot(), cfg.physics);

    tokio::select! {
        _ = sim_loop(sim, &cfg, &mut rng) => {}
        res = tokio::signal::ctrl_c() => {
            if let Err(e) = res {
                warn!("Ctrl-C handler failed: {e}");
            }
            info!("⚓ Interrupted, stopping");
        }
    }

    Ok(())
}

// ── Simulation loop ───────────────────────────────────────────────────────────

async fn sim_loop(mut sim: BoatSim, cfg: &FullConfig, rng: &mut StdRng) {
    let dt = cfg.simulation.timestep_s;
    let frame_every = frame_interval(dt);
    let nominal = Duration::from_secs_f64(dt);
    let mut clock = if cfg.simulation.fixed_step {
        SimClock::fixed(dt, cfg.simulation.speed)
    } else {
        SimClock::wall(cfg.simulation.speed)
    };

    info!(
        "⏱ Sim loop running at {:.0} Hz ({}ms tick, {} clock), frame every {frame_every} ticks",
        1.0 / dt,
        nominal.as_millis(),
        if cfg.simulation.fixed_step { "fixed" } else { "wall" },
    );

    let mut tick: u64 = 0;
    loop {
        if cfg.simulation.max_ticks.is_some_and(|max| tick >= max) {
            info!("🏁 Reached {tick} ticks, stopping");
            break;
        }

        tokio::time::sleep(nominal).await;
        let elapsed = clock.elapsed();

        if tick % frame_every == 0 {
            publish_frame(&sim, &cfg.render);
        }
        sim.tick(elapsed, rng);
        tick += 1;
    }
}

/// Diagnostics, PNG and telemetry for the current state. Write failures
/// drop the frame.
fn publish_frame(sim: &BoatSim, cfg: &RenderConfig) {
    let snapshot = sim.snapshot();
    log_diagnostics(&snapshot);

    if cfg.enabled {
        let img = render_frame(&sim.boat, &sim.wind, &sim.controls, cfg);
        if let Err(e) = write_frame(&img, &cfg.output_path) {
            warn!("🖼 Frame dropped: {e}");
        }
    }

    if let Some(path) = &cfg.telemetry_path {
        if let Err(e) = write_snapshot(path, &snapshot) {
            warn!("Telemetry dropped: {e}");
        }
    }
}
