//! One-way coupling from the life grid to the particles.
//!
//! The grid is only ever read here. A particle sitting over a live cell gets
//! a small random kick on each velocity component. Kicks accumulate with no
//! damping, so motion over busy regions keeps getting wilder.

use rand::Rng;

use super::{LifeGrid, Particle};

/// Each kick is uniform in `[-PERTURBATION, PERTURBATION]`.
pub const PERTURBATION: f32 = 0.25;

/// Grid coordinates of the cell containing pixel `(x, y)`.
/// May be negative or past the grid for off-screen particles.
pub fn cell_under(x: f32, y: f32, cell_size: f32) -> (isize, isize) {
    ((x / cell_size).floor() as isize, (y / cell_size).floor() as isize)
}

/// Kick `particle` if the cell under it is alive. Returns whether it was kicked.
pub fn perturb<R: Rng>(particle: &mut Particle, grid: &LifeGrid, cell_size: f32, rng: &mut R) -> bool {
    let (col, row) = cell_under(particle.x, particle.y, cell_size);
    if !grid.is_alive(col, row) {
        return false;
    }

    particle.vx += rng.random_range(-PERTURBATION..=PERTURBATION);
    particle.vy += rng.random_range(-PERTURBATION..=PERTURBATION);
    true
}
