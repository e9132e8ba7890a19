use rand::distributions::{Distribution, Standard};
use rand::Rng;

use crate::surface::Vec3;

/// One of the six axis-aligned unit moves of a lattice walker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    PosX,
    NegX,
    PosY,
    NegY,
    PosZ,
    NegZ,
}

impl Direction {
    pub const ALL: [Direction; 6] = [
        Direction::PosX,
        Direction::NegX,
        Direction::PosY,
        Direction::NegY,
        Direction::PosZ,
        Direction::NegZ,
    ];

    /// Index in `[0, 6)` to direction, ordered as `ALL`
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn unit(self) -> Vec3 {
        match self {
            Direction::PosX => Vec3::new(1.0, 0.0, 0.0),
            Direction::NegX => Vec3::new(-1.0, 0.0, 0.0),
            Direction::PosY => Vec3::new(0.0, 1.0, 0.0),
            Direction::NegY => Vec3::new(0.0, -1.0, 0.0),
            Direction::PosZ => Vec3::new(0.0, 0.0, 1.0),
            Direction::NegZ => Vec3::new(0.0, 0.0, -1.0),
        }
    }

    pub fn displacement(self, step_size: f64) -> Vec3 {
        self.unit() * step_size
    }
}

/// Uniform over the six directions
impl Distribution<Direction> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Direction {
        Direction::ALL[rng.gen_range(0..Direction::ALL.len())]
    }
}
