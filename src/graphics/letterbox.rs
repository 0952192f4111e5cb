//! Fit the canvas inside the window.

use glam::{IVec2, Vec2};

/// Area of the window the canvas is drawn in.
///
/// The canvas is scaled with the biggest integer factor that fits, centered, with the rest of the window being the letterbox.
/// When the window is smaller than the canvas it's scaled down to fit instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Letterbox {
    /// Top-left corner in physical window pixels.
    origin: Vec2,
    /// Size in physical window pixels.
    size: Vec2,
    /// Size of the canvas in pixels.
    canvas_size: Vec2,
}

impl Letterbox {
    /// Calculate the letterbox for a canvas inside a window.
    pub(crate) fn new(canvas_width: u32, canvas_height: u32, screen_width: u32, screen_height: u32) -> Self {
        let canvas_size = Vec2::new(canvas_width.max(1) as f32, canvas_height.max(1) as f32);
        let screen_size = Vec2::new(screen_width as f32, screen_height as f32);

        // Factor at which one of the two axes fits exactly
        let fit = (screen_size / canvas_size).min_element();

        // We don't want a non-integer scale when the canvas fits
        let scale = if fit >= 1.0 { fit.floor() } else { fit };

        let size = canvas_size * scale;

        // Calculate the offset to center the scaled rectangle inside the window
        let origin = ((screen_size - size) / 2.0).floor();

        log::debug!(
            "Setting new letterbox to ({}:{} x {}:{}) with {scale} scaling",
            origin.x,
            origin.y,
            size.x,
            size.y
        );

        Self {
            origin,
            size,
            canvas_size,
        }
    }

    /// Same canvas in a window with a different size.
    pub(crate) fn resized(&self, screen_width: u32, screen_height: u32) -> Self {
        Self::new(
            self.canvas_size.x as u32,
            self.canvas_size.y as u32,
            screen_width,
            screen_height,
        )
    }

    /// Map a physical window position to a canvas pixel.
    ///
    /// Positions inside the letterbox map to pixels outside of the canvas.
    pub(crate) fn map_coordinate(&self, x: f64, y: f64) -> IVec2 {
        if self.is_empty() {
            return IVec2::ZERO;
        }

        let position = Vec2::new(x as f32, y as f32);

        ((position - self.origin) * self.canvas_size / self.size)
            .floor()
            .as_ivec2()
    }

    /// Viewport `(x, y, width, height)` to render the canvas to.
    pub(crate) fn viewport(&self) -> (f32, f32, f32, f32) {
        (self.origin.x, self.origin.y, self.size.x, self.size.y)
    }

    /// Whether nothing can be drawn, happens when the window is minimized.
    pub(crate) fn is_empty(&self) -> bool {
        self.size.x < 1.0 || self.size.y < 1.0
    }
}
