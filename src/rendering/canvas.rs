use macroquad::prelude::*;

use super::Surface;

/// Persistent off-screen drawing surface the size of the window.
///
/// The screen itself is redrawn from scratch every host frame, so the
/// simulation paints into a render target that keeps its pixels between
/// frames. That is what lets the fade pass leave trails.
pub struct Canvas {
    width: f32,
    height: f32,
    /// `None` while the window has no area.
    target: Option<(RenderTarget, Camera2D)>,
}

impl Canvas {
    pub fn new(width: f32, height: f32) -> Self {
        let mut canvas = Self {
            width: 0.0,
            height: 0.0,
            target: None,
        };
        canvas.resize(width, height);
        canvas
    }

    /// Reallocate at a new size. Previous content is lost.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.target = None;

        if !(width >= 1.0 && height >= 1.0) {
            log::debug!("canvas has no area ({}x{}), drawing disabled", width, height);
            return;
        }

        let target = render_target(width as u32, height as u32);
        target.texture.set_filter(FilterMode::Nearest);

        let mut camera = Camera2D::from_display_rect(Rect::new(0.0, 0.0, width, height));
        camera.render_target = Some(target.clone());

        set_camera(&camera);
        clear_background(BLACK);
        set_default_camera();

        self.target = Some((target, camera));
    }

    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    /// Blit the canvas onto the screen.
    pub fn present(&self) {
        let Some((target, _)) = &self.target else {
            return;
        };

        draw_texture_ex(
            &target.texture,
            0.0,
            0.0,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(self.width, self.height)),
                flip_y: true,
                ..Default::default()
            },
        );
    }
}

impl Surface for Canvas {
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        if self.target.is_some() {
            draw_rectangle(x, y, w, h, color);
        }
    }

    fn begin_frame(&mut self) {
        if let Some((_, camera)) = &self.target {
            set_camera(camera);
        }
    }

    fn end_frame(&mut self) {
        set_default_camera();
    }
}
