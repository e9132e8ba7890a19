// Trajectory dumps: plain text, one `x y z` row per walker, no header

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::settings::SimulationConfig;
use crate::surface::{PointRow, Pt3};

pub const MANIFEST_FILE: &str = "run.json";

/// Writes position dumps into one run directory, named after the run parameters
#[derive(Debug, Clone)]
pub struct TrajectoryWriter {
    dir: PathBuf,
    tag: String,
    snap: bool,
}

impl TrajectoryWriter {
    /// Create the output directory (and parents) if missing
    pub fn create(config: &SimulationConfig) -> Result<Self> {
        let dir = config.output_dir.clone();
        fs::create_dir_all(&dir).map_err(|e| Error::io(&dir, e))?;

        Ok(Self {
            dir,
            tag: run_tag(config),
            snap: config.snap,
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn snapshot_path(&self, step: usize) -> PathBuf {
        self.dir.join(format!("positions_{}_t{:06}.dat", self.tag, step))
    }

    /// Only the final file carries the `_snap` marker
    pub fn final_path(&self) -> PathBuf {
        let snap = if self.snap { "_snap" } else { "" };
        self.dir.join(format!("final_{}{}.dat", self.tag, snap))
    }

    pub fn write_snapshot(&self, step: usize, positions: &[Pt3]) -> Result<PathBuf> {
        let path = self.snapshot_path(step);
        write_points(&path, positions)?;
        Ok(path)
    }

    pub fn write_final(&self, positions: &[Pt3]) -> Result<PathBuf> {
        let path = self.final_path();
        write_points(&path, positions)?;
        Ok(path)
    }

    /// Record the resolved configuration next to the dumps
    pub fn write_manifest(&self, config: &SimulationConfig) -> Result<PathBuf> {
        let path = self.dir.join(MANIFEST_FILE);
        config.save(&path)?;
        Ok(path)
    }
}

/// `h{grid_h}_s{step_size}_w{walkers}`
pub fn run_tag(config: &SimulationConfig) -> String {
    format!("h{}_s{}_w{}", config.grid_h, config.step_size, config.walkers)
}

pub fn write_points(path: &Path, points: &[Pt3]) -> Result<()> {
    let file = File::create(path).map_err(|e| Error::io(path, e))?;
    let mut out = BufWriter::new(file);

    for point in points {
        writeln!(out, "{}", PointRow(point)).map_err(|e| Error::io(path, e))?;
    }
    out.flush().map_err(|e| Error::io(path, e))
}
