//! Platform handling.
//!
//! Every backend draws to a [`Canvas`] and collects input the same way, only the platform specific parts differ.

pub mod headless;
pub mod native;

use miette::Result;

use crate::{
    assets::{AssetSource, Assets},
    audio::Audio,
    canvas::{Canvas, Filter, Rect},
    color::Color,
    input::Input,
    key::{Key, MouseButton, MouseClick},
    window::Window,
};

/// State shared by every backend.
pub(crate) struct WindowState {
    /// Pixels everything is drawn to.
    pub(crate) canvas: Canvas,
    /// Input collected from the platform.
    pub(crate) input: Input,
    /// Image cache.
    pub(crate) assets: Assets,
    /// Sound cache and player.
    pub(crate) audio: Audio,
    /// How images are sampled when scaled or rotated.
    pub(crate) filter: Filter,
    /// Whether the update loop should stop.
    pub(crate) close_requested: bool,
}

impl WindowState {
    /// Setup the state with an empty canvas.
    pub(crate) fn new(width: u32, height: u32, asset_source: AssetSource, audio: Audio) -> Self {
        Self {
            canvas: Canvas::new(width, height),
            input: Input::new(),
            assets: Assets::new(asset_source),
            audio,
            filter: Filter::default(),
            close_requested: false,
        }
    }

    /// Prepare the canvas for the next update.
    pub(crate) fn begin_frame(&mut self, background_color: Color) {
        self.canvas.clear(background_color);
    }

    /// Forget the input that only applies to the update that just happened.
    pub(crate) fn finish_frame(&mut self) {
        self.input.finish_frame();
    }
}

/// Platform specific part of a window.
///
/// Everything else of [`Window`] is implemented on top of the shared [`WindowState`].
pub(crate) trait Platform {
    /// Shared state.
    fn state(&self) -> &WindowState;

    /// Mutable shared state.
    fn state_mut(&mut self) -> &mut WindowState;

    /// Switch between fullscreen and windowed.
    fn set_fullscreen(&mut self, fullscreen: bool);

    /// Whether the window is fullscreen.
    fn is_fullscreen(&self) -> bool;

    /// Show or hide the mouse cursor.
    fn show_cursor(&mut self, show: bool);
}

impl<T: Platform> Window for T {
    #[inline]
    fn close(&mut self) {
        log::debug!("Close requested");

        self.state_mut().close_requested = true;
    }

    #[inline]
    fn size(&self) -> (i32, i32) {
        let canvas = &self.state().canvas;

        (canvas.width() as i32, canvas.height() as i32)
    }

    #[inline]
    fn set_fullscreen(&mut self, fullscreen: bool) {
        Platform::set_fullscreen(self, fullscreen);
    }

    #[inline]
    fn is_fullscreen(&self) -> bool {
        Platform::is_fullscreen(self)
    }

    #[inline]
    fn show_cursor(&mut self, show: bool) {
        Platform::show_cursor(self, show);
    }

    #[inline]
    fn was_key_pressed(&self, key: Key) -> bool {
        self.state().input.key_pressed(key)
    }

    #[inline]
    fn is_key_down(&self, key: Key) -> bool {
        self.state().input.key_held(key)
    }

    #[inline]
    fn characters(&self) -> &str {
        self.state().input.characters()
    }

    #[inline]
    fn is_mouse_down(&self, button: MouseButton) -> bool {
        self.state().input.mouse_held(button)
    }

    #[inline]
    fn clicks(&self) -> &[MouseClick] {
        self.state().input.clicks()
    }

    #[inline]
    fn mouse_position(&self) -> (i32, i32) {
        self.state().input.mouse().into()
    }

    #[inline]
    fn mouse_wheel_x(&self) -> f32 {
        self.state().input.scroll_delta_x()
    }

    #[inline]
    fn mouse_wheel_y(&self) -> f32 {
        self.state().input.scroll_delta_y()
    }

    #[inline]
    fn draw_point(&mut self, x: i32, y: i32, color: Color) {
        self.state_mut().canvas.draw_point(x, y, color);
    }

    #[inline]
    fn draw_line(&mut self, from_x: i32, from_y: i32, to_x: i32, to_y: i32, color: Color) {
        self.state_mut()
            .canvas
            .draw_line(from_x, from_y, to_x, to_y, color);
    }

    #[inline]
    fn draw_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color) {
        self.state_mut().canvas.draw_rect(x, y, width, height, color);
    }

    #[inline]
    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color) {
        self.state_mut().canvas.fill_rect(x, y, width, height, color);
    }

    #[inline]
    fn draw_ellipse(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color) {
        self.state_mut()
            .canvas
            .draw_ellipse(x, y, width, height, color);
    }

    #[inline]
    fn fill_ellipse(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color) {
        self.state_mut()
            .canvas
            .fill_ellipse(x, y, width, height, color);
    }

    fn image_size(&mut self, path: &str) -> Result<(i32, i32)> {
        let image = self.state_mut().assets.image(path)?;

        Ok((image.width() as i32, image.height() as i32))
    }

    fn draw_image_file_part(
        &mut self,
        path: &str,
        source_x: i32,
        source_y: i32,
        source_width: i32,
        source_height: i32,
        dest_x: i32,
        dest_y: i32,
        dest_width: i32,
        dest_height: i32,
        degrees: i32,
    ) -> Result<()> {
        let WindowState {
            canvas,
            assets,
            filter,
            ..
        } = self.state_mut();

        let image = assets.image(path)?;
        canvas.draw_image(
            image,
            Rect::new(source_x, source_y, source_width, source_height),
            Rect::new(dest_x, dest_y, dest_width, dest_height),
            degrees,
            *filter,
        );

        Ok(())
    }

    #[inline]
    fn blur_images(&mut self, blur: bool) {
        self.state_mut().filter = if blur {
            Filter::Bilinear
        } else {
            Filter::Nearest
        };
    }

    #[inline]
    fn draw_scaled_text(&mut self, text: &str, x: i32, y: i32, scale: f32, color: Color) {
        self.state_mut()
            .canvas
            .draw_text(text, x, y, scale, color);
    }

    fn play_sound_file(&mut self, path: &str) -> Result<()> {
        let WindowState { assets, audio, .. } = self.state_mut();

        audio.play(path, assets.source())
    }
}
