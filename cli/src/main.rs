//! Command-line frontend.
//!
//! Simulates elementary cellular automata from random initial states and plots
//! how statistics of their trajectories evolve over time.

#![warn(missing_docs)]

use anyhow::{anyhow, Result};
use clap::Parser;
use log::{debug, info};
use std::path::PathBuf;

use eca_core::prelude::*;

mod colors;
mod config;
mod experiment;
mod math;
mod plot;

use config::Config;

/// Simulate elementary cellular automata and plot trajectory statistics.
#[derive(Parser, Debug)]
#[command(name = "eca", version)]
struct Args {
    /// Wolfram rule numbers to simulate, from 0 to 255.
    #[arg(required = true, allow_negative_numbers = true)]
    rules: Vec<ElementaryRule>,

    /// Number of runs per rule.
    #[arg(long)]
    repeats: Option<usize>,
    /// Number of states in each run, including the initial state.
    #[arg(long)]
    steps: Option<usize>,
    /// Number of cells in each state.
    #[arg(long)]
    width: Option<usize>,
    /// Seed for the initial state of the first run.
    #[arg(long)]
    seed: Option<u64>,
    /// Treat cells past either end as dead instead of wrapping around.
    #[arg(long)]
    fixed_boundary: bool,

    /// Print every state of every run.
    #[arg(long)]
    print: bool,
    /// Do not save any images.
    #[arg(long)]
    no_plot: bool,
    /// Directory to save images in.
    #[arg(long, short)]
    output_dir: Option<PathBuf>,

    /// Log debug messages.
    #[arg(long, short)]
    verbose: bool,
}
impl Args {
    fn to_config(&self) -> Config {
        let mut config = Config::default();
        let sim = &mut config.sim;
        if let Some(repeats) = self.repeats {
            sim.repeats = repeats;
        }
        if let Some(steps) = self.steps {
            sim.steps = steps;
        }
        if let Some(width) = self.width {
            sim.width = width;
        }
        if let Some(seed) = self.seed {
            sim.seed = seed;
        }
        if self.fixed_boundary {
            sim.boundary = Boundary::Dead;
        }
        let plot = &mut config.plot;
        plot.enabled = !self.no_plot;
        if let Some(output_dir) = &self.output_dir {
            plot.output_dir = output_dir.clone();
        }
        config
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let level = if args.verbose {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    simple_logger::init_with_level(level)
        .map_err(|e| anyhow!("Unable to initialize logger: {}", e))?;
    info!("Starting eca v{} ...", env!("CARGO_PKG_VERSION"));

    let config = args.to_config();
    debug!("{:?}", config);

    let results = experiment::run(&config.sim, &args.rules, |_, _, trajectory| {
        if args.print {
            for state in trajectory {
                println!("{}", state);
            }
        }
    })?;

    if config.plot.enabled {
        for metric_results in &results {
            plot::save(metric_results, &config.plot)?;
        }
    }

    Ok(())
}
