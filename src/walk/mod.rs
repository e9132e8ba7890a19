pub mod direction;
pub mod driver;
pub mod output;

pub use direction::Direction;
pub use driver::{build_surface, run_simulation, step_position, WalkOutcome, WalkSimulation, Walker};
pub use output::TrajectoryWriter;
