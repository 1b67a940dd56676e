//! Translates window events into simulation calls.

use macroquad::prelude::*;

use crate::application::{FrameScheduler, Simulation};
use crate::rendering::{Canvas, Surface};
use crate::ui::{self, Button, PALETTE, ToolbarAction};

/// Carry out a toolbar or keyboard action.
pub fn apply<S, F>(sim: &mut Simulation, action: ToolbarAction, surface: &mut S, scheduler: &mut F)
where
    S: Surface + ?Sized,
    F: FrameScheduler + ?Sized,
{
    match action {
        ToolbarAction::Reset => sim.on_reset(),
        ToolbarAction::TogglePause => {
            sim.on_toggle_pause(surface, scheduler);
        }
        ToolbarAction::Color(hex) => sim.on_color_change(hex),
    }
}

/// Send a click to the toolbar entry under it, or to the canvas when it
/// misses every entry. Gaps in the toolbar strip belong to the canvas.
pub fn route_click<S, F>(
    sim: &mut Simulation,
    toolbar: &[(Button, ToolbarAction)],
    pos: (f32, f32),
    surface: &mut S,
    scheduler: &mut F,
) where
    S: Surface + ?Sized,
    F: FrameScheduler + ?Sized,
{
    match ui::action_at(toolbar, pos) {
        Some(action) => apply(sim, action, surface, scheduler),
        None => sim.on_canvas_click(pos.0, pos.1),
    }
}

/// Left click this frame, if any.
pub fn handle_mouse<S, F>(
    sim: &mut Simulation,
    toolbar: &[(Button, ToolbarAction)],
    mouse_pos: (f32, f32),
    surface: &mut S,
    scheduler: &mut F,
) where
    S: Surface + ?Sized,
    F: FrameScheduler + ?Sized,
{
    if is_mouse_button_pressed(MouseButton::Left) {
        route_click(sim, toolbar, mouse_pos, surface, scheduler);
    }
}

/// Space pauses or resumes, R resets, 1-6 pick a palette color.
pub fn process_keyboard_input<S, F>(sim: &mut Simulation, surface: &mut S, scheduler: &mut F)
where
    S: Surface + ?Sized,
    F: FrameScheduler + ?Sized,
{
    const COLOR_KEYS: [KeyCode; 6] = [
        KeyCode::Key1,
        KeyCode::Key2,
        KeyCode::Key3,
        KeyCode::Key4,
        KeyCode::Key5,
        KeyCode::Key6,
    ];

    let fixed = [
        (KeyCode::Space, ToolbarAction::TogglePause),
        (KeyCode::R, ToolbarAction::Reset),
    ];
    let colors = COLOR_KEYS
        .iter()
        .zip(PALETTE)
        .map(|(&key, &hex)| (key, ToolbarAction::Color(hex)));

    for (key, action) in fixed.into_iter().chain(colors) {
        if is_key_pressed(key) {
            apply(sim, action, surface, scheduler);
        }
    }
}

/// Whether the window size differs from the simulation viewport.
pub fn viewport_changed(sim: &Simulation, window: (f32, f32)) -> bool {
    sim.viewport() != window
}

/// Follow the window size. A change wipes the simulation and the canvas.
pub fn handle_resize(sim: &mut Simulation, canvas: &mut Canvas) {
    let window = (screen_width(), screen_height());
    if viewport_changed(sim, window) {
        sim.on_resize(window.0, window.1);
        canvas.resize(window.0, window.1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{FrameRequest, SimulationConfig};
    use crate::domain::particle::BURST_SIZE;
    use crate::rendering::RecordingSurface;

    fn sim() -> Simulation {
        let config = SimulationConfig { seed: Some(21), ..Default::default() };
        Simulation::new(config, 120.0, 90.0)
    }

    #[test]
    fn test_apply_toggle_pause() {
        let mut sim = sim();
        let mut surface = RecordingSurface::default();
        let mut frames = FrameRequest::new();

        apply(&mut sim, ToolbarAction::TogglePause, &mut surface, &mut frames);
        assert!(sim.is_paused());
        apply(&mut sim, ToolbarAction::TogglePause, &mut surface, &mut frames);
        assert!(!sim.is_paused());
        assert!(frames.take());
    }

    #[test]
    fn test_apply_color_and_reset() {
        let mut sim = sim();
        let mut surface = RecordingSurface::default();
        let mut frames = FrameRequest::new();

        apply(&mut sim, ToolbarAction::Color("#ff00ff"), &mut surface, &mut frames);
        assert_eq!(sim.color(), "#ff00ff");

        sim.on_canvas_click(10.0, 10.0);
        apply(&mut sim, ToolbarAction::Reset, &mut surface, &mut frames);
        assert_eq!(sim.particles().burst_len(), 0);
        assert_eq!(sim.color(), "#ff00ff");
        assert!(surface.rects.is_empty());
    }

    #[test]
    fn test_click_between_toolbar_entries_reaches_canvas() {
        let config = SimulationConfig { seed: Some(22), ..Default::default() };
        let mut sim = Simulation::new(config, 1000.0, 200.0);
        let mut surface = RecordingSurface::default();
        let mut frames = FrameRequest::new();
        let toolbar = ui::create_toolbar(false, sim.color());

        // inside the strip, right of the last swatch
        route_click(&mut sim, &toolbar, (800.0, 15.0), &mut surface, &mut frames);
        assert!(sim.grid().is_alive(80, 1));
        assert_eq!(sim.particles().burst_len(), BURST_SIZE);

        // above the Reset button
        route_click(&mut sim, &toolbar, (20.0, 2.0), &mut surface, &mut frames);
        assert!(sim.grid().is_alive(2, 0));
        assert_eq!(sim.particles().burst_len(), 2 * BURST_SIZE);
    }

    #[test]
    fn test_click_on_toolbar_entry_does_not_reach_canvas() {
        let mut sim = sim();
        let mut surface = RecordingSurface::default();
        let mut frames = FrameRequest::new();
        let toolbar = ui::create_toolbar(false, sim.color());

        route_click(&mut sim, &toolbar, (20.0, 20.0), &mut surface, &mut frames);
        assert_eq!(sim.particles().burst_len(), 0);

        let pause = toolbar[1].0.right() - 5.0;
        route_click(&mut sim, &toolbar, (pause, 20.0), &mut surface, &mut frames);
        assert!(sim.is_paused());
        assert_eq!(sim.particles().burst_len(), 0);
    }

    #[test]
    fn test_viewport_changed() {
        let sim = sim();
        assert!(!viewport_changed(&sim, (120.0, 90.0)));
        assert!(viewport_changed(&sim, (121.0, 90.0)));
    }
}
