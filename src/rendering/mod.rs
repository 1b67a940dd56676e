use macroquad::prelude::*;

use crate::application::Simulation;
use crate::domain::{HexColor, LifeGrid, ParticleSystem};
use crate::ui::{Button, TOOLBAR_HEIGHT, ToolbarAction};

mod canvas;

pub use canvas::Canvas;

/// Opacity of the black wash laid over the previous frame; lower means
/// longer trails.
pub const FADE_ALPHA: f32 = 0.1;
/// Particles are drawn as squares of this edge in pixels.
pub const PARTICLE_SIZE: f32 = 2.0;

/// Anything the simulation can paint on.
///
/// The drawing is cumulative: nothing is cleared between frames, older
/// content only disappears under repeated [`fade`] passes.
pub trait Surface {
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color);

    /// Called before the first rectangle of a frame.
    fn begin_frame(&mut self) {}

    /// Called after the last rectangle of a frame.
    fn end_frame(&mut self) {}
}

/// Darken the whole viewport a little instead of clearing it.
pub fn fade<S: Surface + ?Sized>(surface: &mut S, width: f32, height: f32) {
    surface.fill_rect(0.0, 0.0, width, height, Color::new(0.0, 0.0, 0.0, FADE_ALPHA));
}

/// Paint every live cell as a solid square. `None` paints nothing.
pub fn draw_grid<S: Surface + ?Sized>(
    surface: &mut S,
    grid: &LifeGrid,
    cell_size: f32,
    color: Option<HexColor>,
) {
    let Some(color) = color.map(HexColor::opaque) else {
        return;
    };

    for (col, row) in grid.iter_alive() {
        surface.fill_rect(
            col as f32 * cell_size,
            row as f32 * cell_size,
            cell_size,
            cell_size,
            color,
        );
    }
}

/// Paint every particle faded by its age. Fully transparent ones are skipped.
pub fn draw_particles<S: Surface + ?Sized>(
    surface: &mut S,
    particles: &ParticleSystem,
    color: Option<HexColor>,
) {
    let Some(color) = color else {
        return;
    };

    particles
        .iter()
        .filter(|p| p.alpha() > 0.0)
        .for_each(|p| {
            surface.fill_rect(p.x, p.y, PARTICLE_SIZE, PARTICLE_SIZE, color.with_alpha(p.alpha()));
        });
}

/// Surface that only counts what would have been drawn. Used for headless runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct CountingSurface {
    pub frames: u64,
    pub rects: u64,
}

impl Surface for CountingSurface {
    fn fill_rect(&mut self, _x: f32, _y: f32, _w: f32, _h: f32, _color: Color) {
        self.rects += 1;
    }

    fn end_frame(&mut self) {
        self.frames += 1;
    }
}

/// Surface that keeps every call, for assertions in tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingSurface {
    pub rects: Vec<(f32, f32, f32, f32, Color)>,
    pub begun: usize,
    pub ended: usize,
}

#[cfg(test)]
impl Surface for RecordingSurface {
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        self.rects.push((x, y, w, h, color));
    }

    fn begin_frame(&mut self) {
        self.begun += 1;
    }

    fn end_frame(&mut self) {
        self.ended += 1;
    }
}

/// Draw the toolbar strip and the status line on top of the canvas.
pub fn draw_toolbar(sim: &Simulation, toolbar: &[(Button, ToolbarAction)], mouse_pos: (f32, f32)) {
    draw_rectangle(0.0, 0.0, screen_width(), TOOLBAR_HEIGHT, Color::from_rgba(20, 20, 20, 220));

    toolbar.iter().for_each(|(btn, _)| btn.draw(mouse_pos));

    let status = format!(
        "Gen {}  |  Cells {}  |  Particles {}  |  {}",
        sim.generation(),
        sim.grid().population(),
        sim.particles().len(),
        if sim.is_paused() { "Paused" } else { "Running" },
    );
    let status_color = if sim.is_paused() {
        Color::from_rgba(255, 165, 0, 255)
    } else {
        Color::from_rgba(180, 180, 180, 255)
    };
    let x = toolbar
        .iter()
        .map(|(btn, _)| btn.right())
        .fold(0.0, f32::max)
        + 16.0;
    draw_text(&status, x, TOOLBAR_HEIGHT * 0.65, 18.0, status_color);
}
