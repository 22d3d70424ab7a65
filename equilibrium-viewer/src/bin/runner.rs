//! Headless runner: steps a simulation and prints population counts.
//!
//! Usage: `equilibrium-runner --ticks 5000 --temperature 450 --report-every 250`

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use equilibrium::prelude::*;
use equilibrium_viewer::{init_tracing, load_config, ParamOverrides};

#[derive(Parser, Debug)]
#[command(
    name = "equilibrium-runner",
    version,
    about = "Run the A + B <=> AB particle simulation without a window"
)]
struct Cli {
    /// JSON configuration file.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Number of ticks to simulate.
    #[arg(long, default_value_t = 3000)]
    ticks: u64,
    /// Print a population line every N ticks (0 prints only the summary).
    #[arg(long, default_value_t = 100)]
    report_every: u64,
    /// Print a single JSON summary instead of text lines.
    #[arg(long)]
    json: bool,
    #[command(flatten)]
    overrides: ParamOverrides,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let config = cli.overrides.apply(load_config(cli.config.as_deref())?)?;
    tracing::info!(ticks = cli.ticks, seed = ?config.seed, "starting headless run");

    let mut sim = Simulation::new(config);
    sim.set_running(true);

    if !cli.json {
        println!("{:>8} {:>5} {:>5} {:>5}", "tick", "A", "B", "AB");
        print_counts(0, sim.counts());
    }

    let mut totals = TickReport::default();
    for _ in 0..cli.ticks {
        let report = sim.step(1.0);
        totals.collisions += report.collisions;
        totals.reactions += report.reactions;
        totals.dissociations += report.dissociations;

        if !cli.json && cli.report_every > 0 && sim.tick() % cli.report_every == 0 {
            print_counts(sim.tick(), sim.counts());
        }
    }

    let counts = sim.counts();
    if cli.json {
        let summary = serde_json::json!({
            "ticks": sim.tick(),
            "params": sim.params(),
            "population": counts,
            "collisions": totals.collisions,
            "reactions": totals.reactions,
            "dissociations": totals.dissociations,
        });
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!();
        println!(
            "{} reactions, {} dissociations, {} collisions over {} ticks",
            totals.reactions,
            totals.dissociations,
            totals.collisions,
            sim.tick()
        );
    }

    tracing::info!(a = counts.a, b = counts.b, ab = counts.ab, "run finished");
    Ok(())
}

fn print_counts(tick: u64, counts: Population) {
    println!("{:>8} {:>5} {:>5} {:>5}", tick, counts.a, counts.b, counts.ab);
}
