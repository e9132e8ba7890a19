use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

use levelset_walk::logging::init_logging;
use levelset_walk::walk::run_simulation;
use levelset_walk::SimulationConfig;

#[derive(Parser, Debug)]
#[command(name = "levelset-walk")]
#[command(about = "Random walks on the zero level set of a sphere field")]
struct Cli {
    /// JSON file with simulation parameters; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of independent walkers
    #[arg(long)]
    walkers: Option<usize>,

    /// Number of steps per walker
    #[arg(long)]
    steps: Option<usize>,

    /// Length of one lattice step
    #[arg(long)]
    step_size: Option<f64>,

    /// Grid spacing of the surface sampling
    #[arg(long)]
    grid_h: Option<f64>,

    /// Snap walkers to the sampling grid after each projection
    #[arg(long, conflicts_with = "no_snap")]
    snap: bool,

    /// Disable snapping even if the config file enables it
    #[arg(long)]
    no_snap: bool,

    /// Directory for trajectory dumps
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Seed for the walkers' random streams
    #[arg(long)]
    seed: Option<u64>,

    /// Dump all positions every N steps (0 disables)
    #[arg(long)]
    dump_every: Option<usize>,
}

impl Cli {
    fn resolve(self) -> anyhow::Result<SimulationConfig> {
        let mut config = match &self.config {
            Some(path) => SimulationConfig::load(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => SimulationConfig::default(),
        };

        if let Some(walkers) = self.walkers {
            config.walkers = walkers;
        }
        if let Some(steps) = self.steps {
            config.steps = steps;
        }
        if let Some(step_size) = self.step_size {
            config.step_size = step_size;
        }
        if let Some(grid_h) = self.grid_h {
            config.grid_h = grid_h;
        }
        if self.snap {
            config.snap = true;
        } else if self.no_snap {
            config.snap = false;
        }
        if let Some(output_dir) = self.output_dir {
            config.output_dir = output_dir;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(dump_every) = self.dump_every {
            config.dump_every = dump_every;
        }

        config.validate()?;
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    init_logging();

    let config = Cli::parse().resolve()?;

    let started = Instant::now();
    let outcome = run_simulation(&config).context("simulation failed")?;

    info!(
        "{} walkers finished {} steps in {:.2?} ({} snapshots)",
        outcome.final_positions.len(),
        outcome.steps,
        started.elapsed(),
        outcome.snapshots_written
    );

    Ok(())
}
