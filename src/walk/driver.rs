// Lockstep walker loop
// Every walker owns its own RNG stream, so a run is reproducible from the seed
// regardless of how rayon schedules the walkers

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use std::path::PathBuf;
use tracing::{debug, info, warn};

use crate::analysis::angular_variance;
use crate::error::Result;
use crate::settings::SimulationConfig;
use crate::surface::{Pt3, Surface, SurfaceError};
use crate::walk::direction::Direction;
use crate::walk::output::TrajectoryWriter;

#[derive(Debug, Clone)]
pub struct Walker {
    pub position: Pt3,
    rng: ChaCha8Rng,
}

impl Walker {
    /// Walker `index` of a run seeded with `seed`
    pub fn new(position: Pt3, seed: u64, index: usize) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        rng.set_stream(index as u64);
        Self { position, rng }
    }

    fn step(&mut self, surface: &Surface, step_size: f64, snap: bool) -> std::result::Result<(), SurfaceError> {
        let direction: Direction = self.rng.gen();
        self.position = step_position(surface, self.position, direction, step_size, snap)?;
        Ok(())
    }
}

/// Displace by one lattice step, project once, then optionally snap to the grid
pub fn step_position(
    surface: &Surface,
    position: Pt3,
    direction: Direction,
    step_size: f64,
    snap: bool,
) -> std::result::Result<Pt3, SurfaceError> {
    let moved = surface.project(position + direction.displacement(step_size))?;
    if snap {
        surface.snap(moved)
    } else {
        Ok(moved)
    }
}

#[derive(Debug, Clone)]
pub struct WalkOutcome {
    pub final_positions: Vec<Pt3>,
    pub steps: usize,
    pub snapshots_written: usize,
    pub final_path: Option<PathBuf>,
}

/// Walkers sharing one read-only surface
pub struct WalkSimulation<'a> {
    surface: &'a Surface,
    config: &'a SimulationConfig,
    walkers: Vec<Walker>,
    step: usize,
}

impl<'a> WalkSimulation<'a> {
    /// All walkers start at `config.start`
    pub fn new(surface: &'a Surface, config: &'a SimulationConfig) -> Self {
        let walkers = (0..config.walkers)
            .map(|index| Walker::new(config.start, config.seed, index))
            .collect();

        Self {
            surface,
            config,
            walkers,
            step: 0,
        }
    }

    pub fn positions(&self) -> Vec<Pt3> {
        self.walkers.iter().map(|w| w.position).collect()
    }

    pub fn current_step(&self) -> usize {
        self.step
    }

    /// Move every walker by one step in parallel
    pub fn advance(&mut self) -> Result<()> {
        let surface = self.surface;
        let step_size = self.config.step_size;
        let snap = self.config.snap;

        self.walkers
            .par_iter_mut()
            .try_for_each(|walker| walker.step(surface, step_size, snap))?;

        self.step += 1;
        Ok(())
    }

    /// Run `config.steps` steps, dumping positions through `writer` if given
    pub fn run(mut self, writer: Option<&TrajectoryWriter>) -> Result<WalkOutcome> {
        let dump_every = self.config.dump_every;
        let mut snapshots_written = 0;

        for _ in 0..self.config.steps {
            self.advance()?;

            if let Some(writer) = writer {
                if dump_every > 0 && self.step % dump_every == 0 {
                    let path = writer.write_snapshot(self.step, &self.positions())?;
                    debug!("Wrote step {} to {}", self.step, path.display());
                    snapshots_written += 1;
                }
            }
        }

        let final_positions = self.positions();
        let final_path = match writer {
            Some(writer) => Some(writer.write_final(&final_positions)?),
            None => None,
        };

        Ok(WalkOutcome {
            final_positions,
            steps: self.step,
            snapshots_written,
            final_path,
        })
    }
}

/// Sample the configured sphere into a surface
pub fn build_surface(config: &SimulationConfig) -> Result<Surface> {
    let surface = Surface::from_domain(config.sphere, &config.domain, config.grid_h)?;
    info!("Surface created with {} points", surface.n_points());
    Ok(surface)
}

/// Full run: sample the surface, walk, write dumps and the run manifest
pub fn run_simulation(config: &SimulationConfig) -> Result<WalkOutcome> {
    config.validate()?;

    let surface = build_surface(config)?;
    let writer = TrajectoryWriter::create(config)?;
    writer.write_manifest(config)?;

    info!(
        "Simulating {} walkers for {} steps (step size {}, snap {})",
        config.walkers, config.steps, config.step_size, config.snap
    );
    let outcome = WalkSimulation::new(&surface, config).run(Some(&writer))?;

    // Dumps are already on disk, so a failed statistic does not fail the run
    match angular_variance(&outcome.final_positions, &config.start, &config.sphere.center) {
        Ok(variance) => info!("Simulation completed, angular variance {:.6} rad^2", variance),
        Err(e) => warn!("Simulation completed, angular variance unavailable: {}", e),
    }
    if let Some(path) = &outcome.final_path {
        info!("Final positions saved to {}", path.display());
    }

    Ok(outcome)
}
