use macroquad::prelude::*;

/// Clickable toolbar rectangle with a text label or a solid swatch fill.
#[derive(Clone)]
pub struct Button {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    label: String,
    fill: Color,
    hover_fill: Color,
    /// Outline drawn thicker, e.g. for the active color swatch.
    highlighted: bool,
}

impl Button {
    pub fn new(x: f32, y: f32, width: f32, height: f32, label: impl Into<String>) -> Self {
        Self {
            x,
            y,
            width,
            height,
            label: label.into(),
            fill: Color::from_rgba(70, 130, 180, 255),
            hover_fill: Color::from_rgba(100, 149, 237, 255),
            highlighted: false,
        }
    }

    /// Label-less button painted in `fill`.
    pub fn swatch(x: f32, y: f32, size: f32, fill: Color) -> Self {
        Self {
            fill,
            hover_fill: fill,
            ..Self::new(x, y, size, size, "")
        }
    }

    pub fn highlighted(mut self, on: bool) -> Self {
        self.highlighted = on;
        self
    }

    pub fn contains(&self, pos: (f32, f32)) -> bool {
        pos.0 >= self.x
            && pos.0 <= self.x + self.width
            && pos.1 >= self.y
            && pos.1 <= self.y + self.height
    }

    /// X coordinate of the right edge.
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn draw(&self, mouse_pos: (f32, f32)) {
        let hovered = self.contains(mouse_pos);
        let fill = if hovered { self.hover_fill } else { self.fill };
        let outline = if self.highlighted || hovered { 3.0 } else { 1.0 };

        draw_rectangle(self.x, self.y, self.width, self.height, fill);
        draw_rectangle_lines(self.x, self.y, self.width, self.height, outline, WHITE);

        if !self.label.is_empty() {
            let size = measure_text(&self.label, None, 18, 1.0);
            draw_text(
                &self.label,
                self.x + (self.width - size.width) / 2.0,
                self.y + (self.height + size.height) / 2.0,
                18.0,
                WHITE,
            );
        }
    }

    /// Left button went down over this button during the current frame.
    pub fn is_clicked(&self, mouse_pos: (f32, f32)) -> bool {
        self.contains(mouse_pos) && is_mouse_button_pressed(MouseButton::Left)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_inclusive() {
        let btn = Button::new(10.0, 5.0, 80.0, 30.0, "Reset");
        assert!(btn.contains((10.0, 5.0)));
        assert!(btn.contains((90.0, 35.0)));
        assert!(!btn.contains((90.1, 20.0)));
        assert!(!btn.contains((50.0, 4.9)));
        assert_eq!(btn.right(), 90.0);
    }

    #[test]
    fn test_swatch_is_square() {
        let btn = Button::swatch(0.0, 0.0, 24.0, RED).highlighted(true);
        assert!(btn.contains((24.0, 24.0)));
        assert!(btn.highlighted);
        assert!(btn.label.is_empty());
    }
}
