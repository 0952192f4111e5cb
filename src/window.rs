//! The interface every backend implements.

use miette::Result;

use crate::{
    color::Color,
    key::{Key, MouseButton, MouseClick},
};

/// Draw simple primitives and images, handle keyboard and mouse events and play sounds.
///
/// Passed to the update function every frame, see [`crate::run`].
/// All positions are in pixels of the canvas, with `(0, 0)` being the top-left corner.
///
/// Everything that is drawn is gone at the start of the next frame, the canvas is cleared to the background color before every update.
///
/// # Example
///
/// ```
/// use pixdraw::{Color, Key, Window};
///
/// fn update(window: &mut dyn Window) {
///     if window.was_key_pressed(Key::Escape) {
///         window.close();
///     }
///
///     let (mouse_x, mouse_y) = window.mouse_position();
///     window.fill_ellipse(mouse_x - 5, mouse_y - 5, 11, 11, Color::YELLOW);
///     window.draw_text("Hello!", 10, 10, Color::WHITE);
/// }
/// ```
pub trait Window {
    /// Close the window, the update loop stops after the current frame.
    fn close(&mut self);

    /// Size of the canvas in pixels.
    fn size(&self) -> (i32, i32);

    /// Switch between a borderless fullscreen window and a regular one.
    fn set_fullscreen(&mut self, fullscreen: bool);

    /// Whether the window is fullscreen.
    fn is_fullscreen(&self) -> bool;

    /// Show or hide the mouse cursor while it's over the window.
    fn show_cursor(&mut self, show: bool);

    /// Whether a key was pressed at any time during the last frame.
    ///
    /// Pressing and releasing a key within the same frame also counts.
    fn was_key_pressed(&self, key: Key) -> bool;

    /// Whether a key is being held down.
    fn is_key_down(&self, key: Key) -> bool;

    /// Whether a character was typed during the last frame.
    ///
    /// Typing a character can take multiple keys, such as `Shift + K` for `'K'`.
    #[inline]
    fn was_char_typed(&self, ch: char) -> bool {
        self.characters().contains(ch)
    }

    /// All text typed during the last frame.
    fn characters(&self) -> &str;

    /// Whether a mouse button is being held down.
    fn is_mouse_down(&self, button: MouseButton) -> bool;

    /// All mouse clicks during the last frame, in the order they happened.
    fn clicks(&self) -> &[MouseClick];

    /// Position of the mouse on the canvas.
    fn mouse_position(&self) -> (i32, i32);

    /// Horizontal mouse wheel movement during the last frame.
    ///
    /// A single notch is `1.0`, positive values scroll to the left.
    fn mouse_wheel_x(&self) -> f32;

    /// Vertical mouse wheel movement during the last frame.
    ///
    /// A single notch is `1.0`, positive values scroll up.
    fn mouse_wheel_y(&self) -> f32;

    /// Draw a single pixel.
    fn draw_point(&mut self, x: i32, y: i32, color: Color);

    /// Draw a one pixel wide line, both end points are included.
    fn draw_line(&mut self, from_x: i32, from_y: i32, to_x: i32, to_y: i32, color: Color);

    /// Draw a one pixel wide rectangle outline.
    ///
    /// Nothing is drawn when the width or height is zero or negative.
    fn draw_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color);

    /// Draw a filled rectangle.
    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color);

    /// Draw a one pixel wide ellipse outline fitting inside the rectangle.
    fn draw_ellipse(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color);

    /// Draw a filled ellipse fitting inside the rectangle.
    fn fill_ellipse(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color);

    /// Size of an image file in pixels.
    ///
    /// # Errors
    ///
    /// - When the file can't be found or is not a valid PNG.
    fn image_size(&mut self, path: &str) -> Result<(i32, i32)>;

    /// Draw an image file untransformed with its top-left corner at the position.
    ///
    /// # Errors
    ///
    /// - When the file can't be found or is not a valid PNG.
    #[inline]
    fn draw_image_file(&mut self, path: &str, x: i32, y: i32) -> Result<()> {
        self.draw_image_file_rotated(path, x, y, 0)
    }

    /// Draw an image file scaled into a rectangle and rotated around the center of the rectangle.
    ///
    /// # Arguments
    ///
    /// * `path` - Path of the PNG file.
    /// * `x` - Left of the rectangle.
    /// * `y` - Top of the rectangle.
    /// * `width` - Width the image is scaled to, negative flips the image horizontally.
    /// * `height` - Height the image is scaled to, negative flips the image vertically.
    /// * `degrees` - Counterclockwise rotation.
    ///
    /// # Errors
    ///
    /// - When the file can't be found or is not a valid PNG.
    #[inline]
    fn draw_image_file_to(
        &mut self,
        path: &str,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        degrees: i32,
    ) -> Result<()> {
        let (image_width, image_height) = self.image_size(path)?;

        self.draw_image_file_part(
            path,
            0,
            0,
            image_width,
            image_height,
            x,
            y,
            width,
            height,
            degrees,
        )
    }

    /// Draw an image file unscaled, rotated counterclockwise around its center.
    ///
    /// # Errors
    ///
    /// - When the file can't be found or is not a valid PNG.
    #[inline]
    fn draw_image_file_rotated(&mut self, path: &str, x: i32, y: i32, degrees: i32) -> Result<()> {
        let (width, height) = self.image_size(path)?;

        self.draw_image_file_to(path, x, y, width, height, degrees)
    }

    /// Draw a rectangular part of an image file scaled into a rectangle and rotated around the center of that rectangle.
    ///
    /// Negative destination sizes flip the image on that axis.
    ///
    /// # Errors
    ///
    /// - When the file can't be found or is not a valid PNG.
    #[allow(clippy::too_many_arguments)]
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
    ) -> Result<()>;

    /// Interpolate pixels when images are drawn scaled or rotated.
    ///
    /// Disabled by default, which keeps pixel-art sharp.
    fn blur_images(&mut self, blur: bool);

    /// Size of a text when drawn with [`Window::draw_text`].
    #[inline]
    fn get_text_size(&self, text: &str) -> (i32, i32) {
        self.get_scaled_text_size(text, 1.0)
    }

    /// Size of a text when drawn with [`Window::draw_scaled_text`].
    ///
    /// Empty text or a scale of zero or less is `(0, 0)`.
    #[inline]
    fn get_scaled_text_size(&self, text: &str, scale: f32) -> (i32, i32) {
        crate::font::text_size(text, scale).into()
    }

    /// Draw text with the built-in font.
    ///
    /// A `'\n'` is not drawn but continues the text on the next line starting at `x` again.
    #[inline]
    fn draw_text(&mut self, text: &str, x: i32, y: i32, color: Color) {
        self.draw_scaled_text(text, x, y, 1.0, color);
    }

    /// Draw scaled text with the built-in font.
    ///
    /// Behaves as [`Window::draw_text`], every glyph is scaled by the factor.
    fn draw_scaled_text(&mut self, text: &str, x: i32, y: i32, scale: f32, color: Color);

    /// Play a WAV or OGG sound file.
    ///
    /// Sounds are decoded once and can overlap.
    ///
    /// # Errors
    ///
    /// - When the file can't be found or is not a valid sound.
    /// - When no audio device is available.
    fn play_sound_file(&mut self, path: &str) -> Result<()>;
}
