//! Particles drifting over the life grid.
//!
//! A particle keeps moving in a straight line, bounces off the viewport
//! edges, and fades out over a randomly chosen lifetime. Once its age passes
//! that lifetime it reappears somewhere else with its velocity unchanged.

use std::ops::Range;

use rand::Rng;

use super::LifeGrid;
use super::coupler;

/// Lifetime in frames is drawn from this range.
pub const MAX_AGE_RANGE: Range<f32> = 50.0..250.0;
/// Velocity span for the initial pool, i.e. components in `[-1, 1]`.
pub const AMBIENT_SPEED_RANGE: f32 = 2.0;
/// Velocity span for click bursts, i.e. components in `[-2, 2]`.
pub const BURST_SPEED_RANGE: f32 = 4.0;
/// Particles released per click.
pub const BURST_SIZE: usize = 10;
/// Default size of the ambient pool.
pub const DEFAULT_POOL_SIZE: usize = 1000;

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    /// Frames since spawn or last respawn.
    pub age: u32,
    pub max_age: f32,
}

impl Particle {
    /// Particle at a uniformly random spot of a `width` x `height` viewport.
    pub fn random<R: Rng>(rng: &mut R, width: f32, height: f32) -> Self {
        let x = random_coord(rng, width);
        let y = random_coord(rng, height);
        Self::launched(rng, x, y, AMBIENT_SPEED_RANGE)
    }

    /// Fresh particle at `(x, y)` with each velocity component uniform in
    /// `[-speed_range / 2, speed_range / 2]`.
    pub fn launched<R: Rng>(rng: &mut R, x: f32, y: f32, speed_range: f32) -> Self {
        let half = speed_range.abs() / 2.0;
        Self {
            x,
            y,
            vx: rng.random_range(-half..=half),
            vy: rng.random_range(-half..=half),
            age: 0,
            max_age: rng.random_range(MAX_AGE_RANGE),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.age as f32 > self.max_age
    }

    /// Opacity falling linearly from 1 at birth to 0 at `max_age`.
    pub fn alpha(&self) -> f32 {
        (1.0 - self.age as f32 / self.max_age).max(0.0)
    }

    /// Move one frame and bounce off the viewport edges.
    ///
    /// Only a particle heading further out is turned around, so one that is
    /// still outside after bouncing is not flipped back on the next frame.
    /// Positions are never clamped.
    fn advance(&mut self, width: f32, height: f32) {
        self.x += self.vx;
        self.y += self.vy;

        if (self.x < 0.0 && self.vx < 0.0) || (self.x > width && self.vx > 0.0) {
            self.vx = -self.vx;
        }
        if (self.y < 0.0 && self.vy < 0.0) || (self.y > height && self.vy > 0.0) {
            self.vy = -self.vy;
        }

        self.age += 1;
    }

    fn respawn<R: Rng>(&mut self, rng: &mut R, width: f32, height: f32) {
        self.x = random_coord(rng, width);
        self.y = random_coord(rng, height);
        self.age = 0;
    }
}

/// Uniform in `[0, extent)`, or 0 when the extent is empty.
fn random_coord<R: Rng>(rng: &mut R, extent: f32) -> f32 {
    if extent > 0.0 {
        rng.random_range(0.0..extent)
    } else {
        0.0
    }
}

/// The ambient pool plus every particle released by clicks.
///
/// Burst particles are never removed; they age and respawn exactly like the
/// pool does, so the total only grows until the next reset.
#[derive(Clone, Debug, Default)]
pub struct ParticleSystem {
    ambient: Vec<Particle>,
    bursts: Vec<Particle>,
}

impl ParticleSystem {
    pub fn new<R: Rng>(rng: &mut R, pool_size: usize, width: f32, height: f32) -> Self {
        let mut system = Self::default();
        system.reset(rng, pool_size, width, height);
        system
    }

    /// Discard every particle and refill the ambient pool.
    ///
    /// A viewport with no area gets an empty pool.
    pub fn reset<R: Rng>(&mut self, rng: &mut R, pool_size: usize, width: f32, height: f32) {
        self.bursts.clear();
        self.ambient.clear();

        if !(width > 0.0 && height > 0.0) {
            return;
        }

        self.ambient
            .extend((0..pool_size).map(|_| Particle::random(rng, width, height)));
    }

    /// Release `count` particles at `(x, y)`.
    pub fn spawn_at<R: Rng>(&mut self, rng: &mut R, x: f32, y: f32, count: usize, speed_range: f32) {
        self.bursts
            .extend((0..count).map(|_| Particle::launched(rng, x, y, speed_range)));
    }

    /// One frame of motion for every particle: move and bounce, age, get
    /// jostled by a live cell underneath, respawn when expired.
    pub fn update<R: Rng>(
        &mut self,
        rng: &mut R,
        grid: &LifeGrid,
        cell_size: f32,
        width: f32,
        height: f32,
    ) {
        for particle in self.ambient.iter_mut().chain(self.bursts.iter_mut()) {
            particle.advance(width, height);
            coupler::perturb(particle, grid, cell_size, rng);

            if particle.is_expired() {
                particle.respawn(rng, width, height);
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.ambient.iter().chain(self.bursts.iter())
    }

    pub fn len(&self) -> usize {
        self.ambient.len() + self.bursts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn ambient_len(&self) -> usize {
        self.ambient.len()
    }

    pub fn burst_len(&self) -> usize {
        self.bursts.len()
    }

    #[cfg(test)]
    pub(crate) fn particles_mut(&mut self) -> impl Iterator<Item = &mut Particle> {
        self.ambient.iter_mut().chain(self.bursts.iter_mut())
    }
}
