mod cell;
mod color;
pub mod coupler;
mod grid;
pub mod particle;

pub use cell::Cell;
pub use color::{ColorError, HexColor};
pub use grid::{GridError, LifeGrid, INITIAL_DENSITY, MIN_CELL_SIZE};
pub use particle::{Particle, ParticleSystem};
