use rand::SeedableRng;
use rand::rngs::StdRng;

use super::{FrameScheduler, SimulationConfig};
use crate::domain::particle::{BURST_SIZE, BURST_SPEED_RANGE};
use crate::domain::{HexColor, LifeGrid, ParticleSystem};
use crate::rendering::{self, Surface};

/// Everything one running visualization owns.
///
/// Input handlers and ticks take turns on the same thread, so plain
/// `&mut self` access is all the coordination needed.
pub struct Simulation {
    config: SimulationConfig,
    width: f32,
    height: f32,
    grid: LifeGrid,
    particles: ParticleSystem,
    paused: bool,
    /// Active color exactly as it was handed in.
    color: String,
    /// `color` parsed once on change; `None` makes both renderers skip.
    paint: Option<HexColor>,
    generation: u64,
    rng: StdRng,
}

impl Simulation {
    pub fn new(config: SimulationConfig, width: f32, height: f32) -> Self {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let (cols, rows) = LifeGrid::dimensions_for(width, height, config.cell_size);
        let grid = LifeGrid::random(cols, rows, &mut rng);
        let particles = ParticleSystem::new(&mut rng, config.particle_count, width, height);
        let color = config.color.clone();
        let paint = HexColor::parse(&color).ok();

        log::info!(
            "simulation started: {}x{} px, {}x{} cells, {} particles",
            width, height, cols, rows, particles.len()
        );

        Self {
            config,
            width,
            height,
            grid,
            particles,
            paused: false,
            color,
            paint,
            generation: 0,
            rng,
        }
    }

    /// One frame: fade, step the grid, draw it, move the particles, draw
    /// them. Asks `scheduler` for the next frame unless paused.
    pub fn tick<S, F>(&mut self, surface: &mut S, scheduler: &mut F)
    where
        S: Surface + ?Sized,
        F: FrameScheduler + ?Sized,
    {
        let keep_running = !self.paused;
        let cell_size = self.config.cell_size;

        surface.begin_frame();
        rendering::fade(surface, self.width, self.height);

        self.grid.step();
        rendering::draw_grid(surface, &self.grid, cell_size, self.paint);

        self.particles
            .update(&mut self.rng, &self.grid, cell_size, self.width, self.height);
        rendering::draw_particles(surface, &self.particles, self.paint);
        surface.end_frame();

        self.generation += 1;
        log::trace!(
            "generation {}: {} live cells, {} particles",
            self.generation,
            self.grid.population(),
            self.particles.len()
        );

        if keep_running {
            scheduler.request_frame();
        }
    }

    /// Flip the pause flag. Resuming runs a tick straight away, since only a
    /// running tick re-arms the scheduler. Returns the new paused state.
    pub fn on_toggle_pause<S, F>(&mut self, surface: &mut S, scheduler: &mut F) -> bool
    where
        S: Surface + ?Sized,
        F: FrameScheduler + ?Sized,
    {
        self.paused = !self.paused;
        log::info!("{}", if self.paused { "paused" } else { "resumed" });

        if !self.paused {
            self.tick(surface, scheduler);
        }
        self.paused
    }

    /// Fresh random grid and particle pool at the current viewport size.
    pub fn on_reset(&mut self) {
        let (cols, rows) = LifeGrid::dimensions_for(self.width, self.height, self.config.cell_size);
        self.grid = LifeGrid::random(cols, rows, &mut self.rng);
        self.particles.reset(
            &mut self.rng,
            self.config.particle_count,
            self.width,
            self.height,
        );
        self.generation = 0;

        log::info!(
            "reset: {}x{} cells, {} particles",
            cols, rows, self.particles.len()
        );
    }

    /// Adopt a new viewport, discarding all grid and particle state.
    pub fn on_resize(&mut self, width: f32, height: f32) {
        log::info!(
            "resize {}x{} -> {}x{}",
            self.width, self.height, width, height
        );
        self.width = width;
        self.height = height;
        self.on_reset();
    }

    /// Replace the active color. The string is kept as is; one that does
    /// not parse leaves both grid and particles undrawn until changed again.
    pub fn on_color_change(&mut self, color: &str) {
        self.paint = match HexColor::parse(color) {
            Ok(paint) => Some(paint),
            Err(err) => {
                log::warn!("{err}; nothing will be drawn in this color");
                None
            }
        };
        self.color = color.to_owned();
    }

    /// Bring the clicked cell to life and release a burst of particles from
    /// the click point. Coordinates are window pixels, used as is.
    pub fn on_canvas_click(&mut self, x: f32, y: f32) {
        let cell_size = self.config.cell_size;
        let col = (x / cell_size).floor() as isize;
        let row = (y / cell_size).floor() as isize;

        if let Err(err) = self.grid.set_alive(col, row) {
            log::debug!("click ignored for grid: {err}");
        }

        self.particles
            .spawn_at(&mut self.rng, x, y, BURST_SIZE, BURST_SPEED_RANGE);
        log::debug!("burst of {} at ({}, {})", BURST_SIZE, x, y);
    }

    pub fn grid(&self) -> &LifeGrid {
        &self.grid
    }

    pub fn particles(&self) -> &ParticleSystem {
        &self.particles
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn viewport(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    /// Ticks since the last reset.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }
}
