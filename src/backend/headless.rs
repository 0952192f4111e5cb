//! Window without a platform, driven by simulated input.

use std::path::Path;

use glam::IVec2;
use miette::Result;

use crate::{
    assets::{AssetSource, Image},
    audio::Audio,
    canvas::Canvas,
    color::Color,
    key::{Key, MouseButton},
    window::Window,
};

use super::{Platform, WindowState};

/// Off-screen window, mostly useful for testing and for rendering frames to image files.
///
/// Input is simulated with methods such as [`HeadlessWindow::press_key`], it applies to the next update.
/// Sounds are decoded but never played.
///
/// # Example
///
/// ```
/// use pixdraw::{Color, HeadlessWindow, Key, Window};
///
/// let mut window = HeadlessWindow::new(32, 32);
/// window.press_key(Key::Space);
///
/// window.run_frames(1, |window| {
///     if window.was_key_pressed(Key::Space) {
///         window.fill_rect(0, 0, 4, 4, Color::RED);
///     }
/// });
///
/// assert_eq!(window.canvas().pixel(0, 0), Some(Color::RED.to_rgba8()));
/// ```
pub struct HeadlessWindow {
    /// Shared window state.
    state: WindowState,
    /// Whether fullscreen was requested.
    fullscreen: bool,
    /// Whether the cursor should be shown.
    cursor_visible: bool,
    /// Color the canvas is cleared with before every update.
    background_color: Color,
}

impl HeadlessWindow {
    /// Create a window with a black canvas, reading files from the current directory.
    #[inline]
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_asset_source(width, height, AssetSource::new())
    }

    /// Create a window with a black canvas, reading files from the asset source.
    #[inline]
    #[must_use]
    pub fn with_asset_source(width: u32, height: u32, asset_source: AssetSource) -> Self {
        Self {
            state: WindowState::new(width, height, asset_source, Audio::muted()),
            fullscreen: false,
            cursor_visible: true,
            background_color: Color::BLACK,
        }
    }

    /// Set the color the canvas is cleared with before every update.
    #[inline]
    #[must_use]
    pub fn with_background_color(mut self, background_color: Color) -> Self {
        self.background_color = background_color;

        self
    }

    /// Call the update function for a fixed amount of frames.
    ///
    /// Every frame the canvas is cleared to the background color, the update is called and the input of that frame is reset.
    /// Stops early when [`Window::close`] is called, returning the amount of frames that ran.
    pub fn run_frames(&mut self, frames: usize, mut update: impl FnMut(&mut dyn Window)) -> usize {
        for frame in 0..frames {
            if self.state.close_requested {
                return frame;
            }

            self.state.begin_frame(self.background_color);
            update(self);
            self.finish_frame();
        }

        frames
    }

    /// Reset the input that only applies to a single frame, such as clicks and typed text.
    ///
    /// Called by [`HeadlessWindow::run_frames`] after every update.
    #[inline]
    pub fn finish_frame(&mut self) {
        self.state.finish_frame();
    }

    /// Press a key, it stays down until [`HeadlessWindow::release_key`] is called.
    #[inline]
    pub fn press_key(&mut self, key: Key) {
        self.state.input.key_event(key, true);
    }

    /// Release a key.
    #[inline]
    pub fn release_key(&mut self, key: Key) {
        self.state.input.key_event(key, false);
    }

    /// Type a character.
    #[inline]
    pub fn type_char(&mut self, ch: char) {
        let mut buffer = [0; 4];
        self.state.input.type_text(ch.encode_utf8(&mut buffer));
    }

    /// Type a text.
    #[inline]
    pub fn type_text(&mut self, text: &str) {
        self.state.input.type_text(text);
    }

    /// Move the mouse to a pixel of the canvas.
    #[inline]
    pub fn move_mouse(&mut self, x: i32, y: i32) {
        self.state.input.mouse_moved(IVec2::new(x, y));
    }

    /// Press a mouse button at the current mouse position.
    #[inline]
    pub fn press_mouse(&mut self, button: MouseButton) {
        self.state.input.mouse_button_event(button, true);
    }

    /// Release a mouse button.
    #[inline]
    pub fn release_mouse(&mut self, button: MouseButton) {
        self.state.input.mouse_button_event(button, false);
    }

    /// Move the mouse to a pixel, then press and release a button.
    #[inline]
    pub fn click(&mut self, x: i32, y: i32, button: MouseButton) {
        self.move_mouse(x, y);
        self.press_mouse(button);
        self.release_mouse(button);
    }

    /// Scroll the mouse wheel in notches, positive `y` is up and positive `x` is left.
    #[inline]
    pub fn scroll(&mut self, x: f32, y: f32) {
        self.state.input.scroll(x, y);
    }

    /// Make an image available under a path without reading a file.
    #[inline]
    pub fn insert_image(&mut self, path: &str, image: Image) {
        self.state.assets.insert_image(path, image);
    }

    /// Pixels drawn so far.
    #[inline]
    #[must_use]
    pub const fn canvas(&self) -> &Canvas {
        &self.state.canvas
    }

    /// Whether [`Window::close`] was called.
    #[inline]
    #[must_use]
    pub const fn close_requested(&self) -> bool {
        self.state.close_requested
    }

    /// Whether the cursor would be visible.
    #[inline]
    #[must_use]
    pub const fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    /// Save the canvas as a PNG file.
    ///
    /// # Errors
    ///
    /// - When the file can't be written.
    #[inline]
    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<()> {
        self.state.canvas.save_png(path)
    }
}

impl Platform for HeadlessWindow {
    #[inline]
    fn state(&self) -> &WindowState {
        &self.state
    }

    #[inline]
    fn state_mut(&mut self) -> &mut WindowState {
        &mut self.state
    }

    #[inline]
    fn set_fullscreen(&mut self, fullscreen: bool) {
        self.fullscreen = fullscreen;
    }

    #[inline]
    fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    #[inline]
    fn show_cursor(&mut self, show: bool) {
        self.cursor_visible = show;
    }
}

#[cfg(test)]
mod tests {
    use super::HeadlessWindow;
    use crate::{
        color::Color,
        key::{Key, MouseButton, MouseClick},
        window::Window,
    };

    #[test]
    fn canvas_is_cleared_every_frame() {
        let mut window = HeadlessWindow::new(4, 4).with_background_color(Color::BLUE);
        let mut frame = 0;

        window.run_frames(2, |window| {
            if frame == 0 {
                window.draw_point(1, 1, Color::RED);
            }
            frame += 1;
        });

        assert_eq!(window.canvas().pixel(1, 1), Some(Color::BLUE.to_rgba8()));
    }

    #[test]
    fn close_stops_the_frames() {
        let mut window = HeadlessWindow::new(4, 4);

        let frames = window.run_frames(10, |window| window.close());

        assert_eq!(frames, 1);
        assert!(window.close_requested());
    }

    #[test]
    fn input_only_lasts_one_frame() {
        let mut window = HeadlessWindow::new(8, 8);
        window.press_key(Key::A);
        window.type_char('a');
        window.click(3, 4, MouseButton::Left);

        let mut seen = Vec::new();
        window.run_frames(2, |window| {
            seen.push((
                window.was_key_pressed(Key::A),
                window.is_key_down(Key::A),
                window.was_char_typed('a'),
                window.clicks().to_vec(),
            ));
        });

        assert_eq!(
            seen[0],
            (
                true,
                true,
                true,
                vec![MouseClick {
                    x: 3,
                    y: 4,
                    button: MouseButton::Left
                }]
            )
        );
        assert_eq!(seen[1], (false, true, false, Vec::new()));
    }

    #[test]
    fn fullscreen_and_cursor_are_remembered() {
        let mut window = HeadlessWindow::new(1, 1);

        Window::set_fullscreen(&mut window, true);
        Window::show_cursor(&mut window, false);

        assert!(Window::is_fullscreen(&window));
        assert!(!window.cursor_visible());
    }

    #[test]
    fn missing_files_are_errors() {
        let mut window = HeadlessWindow::new(1, 1);

        assert!(window.image_size("does/not/exist.png").is_err());
        assert!(window.draw_image_file("does/not/exist.png", 0, 0).is_err());
        assert!(window.play_sound_file("does/not/exist.ogg").is_err());
    }
}
