//! demosim: the reference single-port, single-terminal haul scenario.
//!
//! Two identical trains shuttle 40 km between one port and one terminal at
//! 40 km/h, loading for 8 h and unloading for 4 h, over one simulated day.
//!
//! ```text
//! demosim [--config FILE.json] [--out DIR] [--horizon-hours H] [--fixed]
//! ```
//!
//! `--config` replaces the built-in scenario with a JSON `StaticConfig`;
//! `--out` writes `trace.csv`, `productivity.csv` and `queue.csv` to `DIR`.
//! Set `RUST_LOG=trace` to see every transition.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use rh_core::{Hms, Matrix, PortId, StaticConfig};
use rh_model::{DispatchPolicy, ModelBuilder, RunStatistics};
use rh_output::{CsvWriter, SimOutputObserver};
use rh_sim::{NoopObserver, Simulator};

// ── Constants ─────────────────────────────────────────────────────────────────

const DISTANCE_KM:     f64 = 40.0;
const UNLOADING_HOURS: f64 = 4.0;
const LOADING_HOURS:   f64 = 8.0;
const TRAIN_COUNT:     u32 = 2;
const SPEED_KMH:       f64 = 40.0;
const PAYLOAD_TONNES:  f64 = 5_000.0;
const HORIZON_HOURS:   f64 = 24.0;

// ── Arguments ─────────────────────────────────────────────────────────────────

/// Simulate trains shuttling between ports and terminals.
#[derive(Parser, Debug)]
#[command(name = "demosim")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON `StaticConfig` replacing the built-in scenario
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Directory for trace.csv, productivity.csv and queue.csv
    #[arg(long, value_name = "DIR")]
    out: Option<PathBuf>,

    /// Simulated horizon in hours
    #[arg(long, default_value_t = HORIZON_HOURS)]
    horizon_hours: f64,

    /// Always dispatch to port 0 and terminal 0
    #[arg(long)]
    fixed: bool,
}

impl Args {
    fn horizon(&self) -> f64 {
        self.horizon_hours * 3_600.0
    }

    fn policy(&self) -> DispatchPolicy {
        if self.fixed { DispatchPolicy::Fixed } else { DispatchPolicy::EarliestForecast }
    }
}

/// The built-in scenario, converted from physical units to m, s, m/s, kg.
fn reference_config() -> StaticConfig {
    StaticConfig {
        distance:       Matrix::filled(1, 1, DISTANCE_KM * 1_000.0),
        unloading_time: Matrix::filled(1, 1, UNLOADING_HOURS * 3_600.0),
        loading_time:   Matrix::filled(1, 1, LOADING_HOURS * 3_600.0),
        train_speed:    vec![SPEED_KMH / 3.6],
        train_load:     vec![PAYLOAD_TONNES * 1_000.0],
        train_count:    vec![TRAIN_COUNT],
        initial_port:   PortId(0),
    }
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config: StaticConfig = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))?
        }
        None => reference_config(),
    };

    println!("=== demosim: railhaul logistics ===");
    println!(
        "Ports: {}  |  Terminals: {}  |  Trains: {}  |  Horizon: {}",
        config.port_count(),
        config.terminal_count(),
        config.fleet_size(),
        Hms(args.horizon())
    );
    println!();

    let mut model = ModelBuilder::new(config).policy(args.policy()).build()?;
    let mut sim = Simulator::new();

    let t0 = Instant::now();
    match &args.out {
        Some(dir) => {
            fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
            let mut obs = SimOutputObserver::new(CsvWriter::new(dir)?);
            sim.simulate_with(&mut model, args.horizon(), &mut obs)?;
            if let Some(e) = obs.take_error() {
                eprintln!("output error: {e}");
            }
            info!("wrote CSV output to {}", dir.display());
        }
        None => sim.simulate_with(&mut model, args.horizon(), &mut NoopObserver)?,
    }
    let elapsed = t0.elapsed();

    let stats = RunStatistics::from_model(&model);
    println!(
        "Simulated {} events in {:.3} ms (final time {})",
        sim.events_executed(),
        elapsed.as_secs_f64() * 1_000.0,
        Hms(sim.time())
    );
    println!();

    println!("{:<14} {:>16}", "Delivered at", "Cumulative (t)");
    println!("{}", "-".repeat(31));
    for (time, mass) in &stats.productivity {
        println!("{:<14} {:>16.1}", Hms(*time).to_string(), mass / 1_000.0);
    }
    println!();

    println!("Total delivered:        {:.1} t", stats.total_delivered / 1_000.0);
    println!("Average queue time:     {}", Hms(stats.average_queue_time));
    println!("  at terminals:         {}", Hms(stats.average_terminal_queue_time));
    println!("  at ports:             {}", Hms(stats.average_port_queue_time));
    for (i, (wait, cycles)) in stats
        .queue_time_by_train
        .iter()
        .zip(&stats.cycles_by_train)
        .enumerate()
    {
        println!("  train {i}: {cycles} cycles, queued {}", Hms(*wait));
    }
    Ok(())
}
