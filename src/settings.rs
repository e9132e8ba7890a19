use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::surface::{Domain, Pt3, Sphere};

/// Parameters of one simulation run.
/// Built once (defaults, then JSON file, then CLI overrides) and passed by
/// reference into the simulation; never mutated afterwards.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    pub walkers: usize,
    pub steps: usize,
    pub step_size: f64,
    pub grid_h: f64,
    /// Snap walkers to the grid after each projection
    pub snap: bool,
    pub output_dir: PathBuf,
    pub seed: u64,
    /// Write all walker positions every `dump_every` steps, 0 to disable
    pub dump_every: usize,
    pub start: Pt3,
    pub sphere: Sphere,
    pub domain: Domain,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            walkers: 200,
            steps: 15000,
            step_size: 0.5,
            grid_h: 0.06,
            snap: false,
            output_dir: PathBuf::from("output"),
            seed: 0,
            dump_every: 10,
            start: Pt3::new(5.0, 0.5, 5.0),
            sphere: Sphere::new(Pt3::new(5.0, 5.0, 5.0), 4.5),
            domain: Domain::cube(0.0, 10.0),
        }
    }
}

impl SimulationConfig {
    /// Read a JSON config; missing keys fall back to defaults
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        serde_json::from_str(&content).map_err(|source| Error::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self).map_err(|source| Error::Json {
            path: path.to_path_buf(),
            source,
        })?;
        fs::write(path, content).map_err(|e| Error::io(path, e))
    }

    pub fn validate(&self) -> Result<()> {
        if self.walkers == 0 {
            return Err(Error::Config("walker count must be at least 1".to_string()));
        }
        if !(self.step_size.is_finite() && self.step_size > 0.0) {
            return Err(Error::Config(format!(
                "step size must be positive, got {}",
                self.step_size
            )));
        }
        if !(self.grid_h.is_finite() && self.grid_h > 0.0) {
            return Err(Error::Config(format!(
                "grid spacing must be positive, got {}",
                self.grid_h
            )));
        }
        if !(self.sphere.radius.is_finite() && self.sphere.radius > 0.0) {
            return Err(Error::Config(format!(
                "sphere radius must be positive, got {}",
                self.sphere.radius
            )));
        }
        // Walker spread is measured as angles around the center
        if self.start == self.sphere.center {
            return Err(Error::Config(
                "start point must differ from the sphere center".to_string(),
            ));
        }
        Ok(())
    }
}
