// Domain layer - grid, particles and the coupling between them
pub mod domain;

// Application layer - simulation context, config, frame scheduling
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, HexColor, LifeGrid, Particle, ParticleSystem};
pub use application::{FrameRequest, FrameScheduler, Simulation, SimulationConfig};
pub use rendering::{Canvas, Surface};
