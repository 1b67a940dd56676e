//! Headless frame-cost benchmark: drives ticks by hand, no window needed.

use std::time::Instant;

use rand::SeedableRng;
use rand::rngs::StdRng;

use life_particles::application::{FrameRequest, Simulation, SimulationConfig};
use life_particles::domain::LifeGrid;
use life_particles::rendering::CountingSurface;

fn config() -> SimulationConfig {
    SimulationConfig {
        seed: Some(0xC0FFEE),
        ..Default::default()
    }
}

/// Mean milliseconds for a bare grid step.
fn benchmark_grid_step(width: f32, height: f32, iterations: u32) -> f64 {
    let (cols, rows) = LifeGrid::dimensions_for(width, height, config().cell_size);
    let mut rng = StdRng::seed_from_u64(1);
    let mut grid = LifeGrid::random(cols, rows, &mut rng);

    let start = Instant::now();
    for _ in 0..iterations {
        grid.step();
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

/// Mean milliseconds for a full tick, plus the surface that counted its draws.
fn benchmark_tick(width: f32, height: f32, iterations: u32) -> (f64, CountingSurface, usize) {
    let mut sim = Simulation::new(config(), width, height);
    let mut surface = CountingSurface::default();
    let mut frames = FrameRequest::new();

    // a handful of clicks so bursts are part of the load
    for i in 0..20 {
        sim.on_canvas_click(width * (i as f32 / 20.0), height / 2.0);
    }

    let start = Instant::now();
    sim.tick(&mut surface, &mut frames);
    while frames.take() && surface.frames < iterations as u64 {
        sim.tick(&mut surface, &mut frames);
    }
    let ms = start.elapsed().as_secs_f64() * 1000.0 / surface.frames.max(1) as f64;
    (ms, surface, sim.particles().len())
}

fn main() {
    env_logger::init();

    println!("=== Life + Particles Frame Benchmark ===\n");

    let viewports = [(320.0, 240.0), (800.0, 600.0), (1920.0, 1080.0), (3840.0, 2160.0)];
    let iterations = 100;

    println!(
        "{:>12} {:>12} {:>12} {:>12} {:>12} {:>10}",
        "Viewport", "Cells", "Step ms", "Tick ms", "Rects/frame", "Particles"
    );
    println!("{:-<76}", "");

    for (width, height) in viewports {
        let (cols, rows) = LifeGrid::dimensions_for(width, height, config().cell_size);
        let step_ms = benchmark_grid_step(width, height, iterations);
        let (tick_ms, surface, particles) = benchmark_tick(width, height, iterations);
        let rects_per_frame = surface.rects as f64 / surface.frames.max(1) as f64;

        println!(
            "{:>12} {:>12} {:>12.3} {:>12.3} {:>12.0} {:>10}",
            format!("{}x{}", width, height),
            cols * rows,
            step_ms,
            tick_ms,
            rects_per_frame,
            particles
        );
    }

    println!("\n=== Degenerate viewport ===\n");
    let (tick_ms, surface, particles) = benchmark_tick(0.0, 0.0, iterations);
    println!(
        "0x0: {} frames, {:.4} ms/frame, {} particles (click bursts only)",
        surface.frames, tick_ms, particles
    );
}
