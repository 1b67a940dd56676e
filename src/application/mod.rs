mod config;
mod scheduler;
mod simulation;

pub use config::{ConfigError, SimulationConfig, DEFAULT_CELL_SIZE, DEFAULT_COLOR};
pub use scheduler::{FrameRequest, FrameScheduler};
pub use simulation::Simulation;
