mod button;

pub use button::Button;

use macroquad::prelude::GRAY;

use crate::domain::HexColor;

pub const TOOLBAR_HEIGHT: f32 = 40.0;
pub const BUTTON_WIDTH: f32 = 90.0;
const BUTTON_HEIGHT: f32 = 28.0;
const SWATCH_SIZE: f32 = 24.0;
const MARGIN: f32 = 6.0;

/// Colors offered by the swatch row, in key order `1`..`6`.
pub const PALETTE: &[&str] = &[
    "#00ff00",
    "#00ffff",
    "#ff00ff",
    "#ffff00",
    "#ff4500",
    "#ffffff",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToolbarAction {
    Reset,
    TogglePause,
    Color(&'static str),
}

/// Toolbar laid out left to right: Reset, Pause/Resume, then one swatch per
/// palette entry. The swatch matching `active_color` is highlighted.
pub fn create_toolbar(paused: bool, active_color: &str) -> Vec<(Button, ToolbarAction)> {
    let y = (TOOLBAR_HEIGHT - BUTTON_HEIGHT) / 2.0;
    let pause_label = if paused { "Resume" } else { "Pause" };

    let mut toolbar = vec![
        (
            Button::new(MARGIN, y, BUTTON_WIDTH, BUTTON_HEIGHT, "Reset"),
            ToolbarAction::Reset,
        ),
        (
            Button::new(2.0 * MARGIN + BUTTON_WIDTH, y, BUTTON_WIDTH, BUTTON_HEIGHT, pause_label),
            ToolbarAction::TogglePause,
        ),
    ];

    let swatch_y = (TOOLBAR_HEIGHT - SWATCH_SIZE) / 2.0;
    let first_swatch_x = 3.0 * MARGIN + 2.0 * BUTTON_WIDTH + MARGIN;
    toolbar.extend(PALETTE.iter().enumerate().map(|(i, &hex)| {
        let fill = HexColor::parse(hex).map(HexColor::opaque).unwrap_or(GRAY);
        let x = first_swatch_x + i as f32 * (SWATCH_SIZE + MARGIN);
        let swatch = Button::swatch(x, swatch_y, SWATCH_SIZE, fill)
            .highlighted(hex.eq_ignore_ascii_case(active_color));
        (swatch, ToolbarAction::Color(hex))
    }));

    toolbar
}

/// Action of the toolbar entry under `pos`, if any.
pub fn action_at(toolbar: &[(Button, ToolbarAction)], pos: (f32, f32)) -> Option<ToolbarAction> {
    toolbar
        .iter()
        .find(|(btn, _)| btn.contains(pos))
        .map(|(_, action)| *action)
}
