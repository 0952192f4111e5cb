//! Software pixel buffer every primitive is rasterized into.

use std::{ops::Range, path::Path};

use glam::{IVec2, Vec2};
use miette::{IntoDiagnostic, Result, WrapErr};
use rgb::RGBA8;

use crate::{
    assets::Image,
    color::{blend, Color},
    ellipse, font,
};

/// How image pixels are sampled when drawn scaled or rotated.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::exhaustive_enums)]
pub enum Filter {
    /// Take the closest pixel, keeps pixel-art crisp.
    #[default]
    Nearest,
    /// Interpolate between the four closest pixels.
    Bilinear,
}

/// Rectangle with a position and a size in pixels.
///
/// A negative size means the rectangle is mirrored on that axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::exhaustive_structs)]
pub struct Rect {
    /// Horizontal position.
    pub x: i32,
    /// Vertical position.
    pub y: i32,
    /// Width, negative flips horizontally.
    pub width: i32,
    /// Height, negative flips vertically.
    pub height: i32,
}

impl Rect {
    /// Construct a new rectangle.
    #[inline]
    #[must_use]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Pixel buffer with the drawing operations of a window.
///
/// Drawing outside of the canvas is ignored, colors are alpha blended onto the existing pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    /// Width in pixels.
    width: u32,
    /// Height in pixels.
    height: u32,
    /// Pixels row by row.
    pixels: Vec<RGBA8>,
}

impl Canvas {
    /// Create a new canvas filled with opaque black.
    #[inline]
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        let pixels = vec![Color::BLACK.to_rgba8(); width as usize * height as usize];

        Self {
            width,
            height,
            pixels,
        }
    }

    /// Width in pixels.
    #[inline]
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[inline]
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// All pixels, row by row.
    #[inline]
    #[must_use]
    pub fn pixels(&self) -> &[RGBA8] {
        &self.pixels
    }

    /// All pixels as raw RGBA bytes, ready to be uploaded to a texture.
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Get a single pixel, `None` when outside of the canvas.
    #[inline]
    #[must_use]
    pub fn pixel(&self, x: i32, y: i32) -> Option<RGBA8> {
        self.index(x, y).map(|index| self.pixels[index])
    }

    /// Resize the canvas, the contents are cleared to black.
    #[inline]
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == self.width && height == self.height {
            return;
        }

        log::debug!("Resizing canvas to {width}x{height}");

        self.width = width;
        self.height = height;
        self.pixels.clear();
        self.pixels
            .resize(width as usize * height as usize, Color::BLACK.to_rgba8());
    }

    /// Replace every pixel with a color, without blending.
    #[inline]
    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color.to_rgba8());
    }

    /// Draw a single pixel.
    #[inline]
    pub fn draw_point(&mut self, x: i32, y: i32, color: Color) {
        self.blend_pixel(x, y, color.to_rgba8());
    }

    /// Draw a one pixel wide line, both end points are included.
    ///
    /// Only the steps inside of the canvas are visited, so lines far outside cost nothing.
    pub fn draw_line(&mut self, from_x: i32, from_y: i32, to_x: i32, to_y: i32, color: Color) {
        let color = color.to_rgba8();

        let (from_x, from_y) = (i64::from(from_x), i64::from(from_y));
        let (dx, dy) = (i64::from(to_x) - from_x, i64::from(to_y) - from_y);

        // Walk along the axis with the most pixels
        if dx.abs() >= dy.abs() {
            for (x, y) in line_steps(from_x, from_y, dx, dy, i64::from(self.width)) {
                self.blend_pixel_wide(x, y, color);
            }
        } else {
            for (y, x) in line_steps(from_y, from_x, dy, dx, i64::from(self.height)) {
                self.blend_pixel_wide(x, y, color);
            }
        }
    }

    /// Draw a one pixel wide rectangle outline.
    ///
    /// Nothing is drawn when the width or height is zero or negative.
    pub fn draw_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color) {
        if width <= 0 || height <= 0 {
            return;
        }

        let color = color.to_rgba8();
        let (left, top) = (i64::from(x), i64::from(y));
        let (right, bottom) = (left + i64::from(width), top + i64::from(height));

        self.fill_area(left, top, right, top + 1, color);
        if height > 1 {
            self.fill_area(left, bottom - 1, right, bottom, color);
        }

        // Sides without the corners, so no pixel is blended twice
        if height > 2 {
            self.fill_area(left, top + 1, left + 1, bottom - 1, color);
            if width > 1 {
                self.fill_area(right - 1, top + 1, right, bottom - 1, color);
            }
        }
    }

    /// Draw a filled rectangle.
    ///
    /// Nothing is drawn when the width or height is zero or negative.
    #[inline]
    pub fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color) {
        if width <= 0 || height <= 0 {
            return;
        }

        let (left, top) = (i64::from(x), i64::from(y));
        self.fill_area(
            left,
            top,
            left + i64::from(width),
            top + i64::from(height),
            color.to_rgba8(),
        );
    }

    /// Draw a one pixel wide ellipse outline inside a rectangle.
    pub fn draw_ellipse(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color) {
        if !self.overlaps(x, y, width, height) {
            return;
        }

        let color = color.to_rgba8();

        // Only the rows that can be seen are calculated
        for row in self.visible_rows(y, height) {
            let span = ellipse::row_span(width, height, row);
            let above = (row > 0).then(|| ellipse::row_span(width, height, row - 1));
            let below = (row + 1 < height).then(|| ellipse::row_span(width, height, row + 1));

            let top = i64::from(y) + i64::from(row);
            for (from, to) in ellipse::outline_row(span, above, below) {
                self.fill_area(
                    i64::from(x) + i64::from(from),
                    top,
                    i64::from(x) + i64::from(to) + 1,
                    top + 1,
                    color,
                );
            }
        }
    }

    /// Draw a filled ellipse inside a rectangle.
    pub fn fill_ellipse(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color) {
        if !self.overlaps(x, y, width, height) {
            return;
        }

        let color = color.to_rgba8();

        for row in self.visible_rows(y, height) {
            let (left, right) = ellipse::row_span(width, height, row);

            let top = i64::from(y) + i64::from(row);
            self.fill_area(
                i64::from(x) + i64::from(left),
                top,
                i64::from(x) + i64::from(right) + 1,
                top + 1,
                color,
            );
        }
    }

    /// Draw a part of an image into a rectangle, rotated counterclockwise around the center of the rectangle.
    ///
    /// # Arguments
    ///
    /// * `image` - Image to take the pixels from.
    /// * `source` - Part of the image to draw, nothing is drawn when it's empty.
    /// * `target` - Rectangle on the canvas the part is scaled into, negative sizes mirror the image.
    /// * `degrees` - Counterclockwise rotation around the center of the target.
    /// * `filter` - How pixels are sampled.
    pub fn draw_image(
        &mut self,
        image: &Image,
        source: Rect,
        target: Rect,
        degrees: i32,
        filter: Filter,
    ) {
        if source.width <= 0 || source.height <= 0 || target.width == 0 || target.height == 0 {
            return;
        }

        profiling::scope!("Draw image");

        let target_size = Vec2::new(target.width.abs() as f32, target.height.abs() as f32);
        let half_size = target_size / 2.0;
        let center = Vec2::new(target.x as f32, target.y as f32)
            + Vec2::new(target.width as f32, target.height as f32) / 2.0;
        let (sin, cos) = sin_cos_degrees(degrees);

        // Bounding box of the rotated target on the canvas
        let extent = Vec2::new(
            half_size.x * cos.abs() + half_size.y * sin.abs(),
            half_size.x * sin.abs() + half_size.y * cos.abs(),
        );
        let min = (center - extent).floor().max(Vec2::ZERO);
        let max = (center + extent)
            .ceil()
            .min(Vec2::new(self.width as f32, self.height as f32));
        if min.x >= max.x || min.y >= max.y {
            return;
        }

        let scale = Vec2::new(
            source.width as f32 / target_size.x,
            source.height as f32 / target_size.y,
        );

        for y in (min.y as i32)..(max.y as i32) {
            for x in (min.x as i32)..(max.x as i32) {
                // Undo the rotation to find the position inside of the unrotated target
                let offset = Vec2::new(x as f32 + 0.5, y as f32 + 0.5) - center;
                let local = Vec2::new(
                    offset.x * cos - offset.y * sin,
                    offset.x * sin + offset.y * cos,
                ) + half_size;
                if local.x < 0.0 || local.y < 0.0 || local.x >= target_size.x || local.y >= target_size.y {
                    continue;
                }

                // Mirror when the target size is negative
                let local = Vec2::new(
                    if target.width < 0 { target_size.x - local.x } else { local.x },
                    if target.height < 0 { target_size.y - local.y } else { local.y },
                );
                let sample_position = Vec2::new(source.x as f32, source.y as f32) + local * scale;

                let sample = match filter {
                    Filter::Nearest => sample_nearest(image, source, sample_position),
                    Filter::Bilinear => sample_bilinear(image, source, sample_position),
                };
                if let Some(sample) = sample {
                    self.blend_pixel(x, y, sample);
                }
            }
        }
    }

    /// Draw text with the built-in font.
    ///
    /// Every `'\n'` starts a new line at `x`.
    /// Nothing is drawn when the scale is zero or negative.
    pub fn draw_text(&mut self, text: &str, x: i32, y: i32, scale: f32, color: Color) {
        if scale <= 0.0 {
            return;
        }

        let color = color.to_rgba8();
        let cell = font::cell_size(scale);
        let (cell_width, cell_height) = (i64::from(cell.x), i64::from(cell.y));
        let glyph_width = i64::from(font::GLYPH_WIDTH);
        let glyph_height = i64::from(font::GLYPH_HEIGHT);

        for (position, ch) in font::layout(text, IVec2::new(x, y), scale) {
            let (cell_x, cell_y) = (i64::from(position.x), i64::from(position.y));

            // Skip characters that can't be seen
            if cell_x >= i64::from(self.width)
                || cell_y >= i64::from(self.height)
                || cell_x + cell_width <= 0
                || cell_y + cell_height <= 0
            {
                continue;
            }

            let glyph = font::glyph(ch);

            for (row, bits) in (0..).zip(glyph.iter()) {
                // Scale every glyph pixel so the glyph exactly fills its cell
                let top = cell_y + row * cell_height / glyph_height;
                let bottom = cell_y + (row + 1) * cell_height / glyph_height;

                for column in 0..glyph_width {
                    if bits & (1 << column) == 0 {
                        continue;
                    }

                    let left = cell_x + column * cell_width / glyph_width;
                    let right = cell_x + (column + 1) * cell_width / glyph_width;

                    self.fill_area(left, top, right, bottom, color);
                }
            }
        }
    }

    /// Encode the canvas as a PNG file.
    ///
    /// # Errors
    ///
    /// - When encoding failed.
    pub fn to_png_bytes(&self) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();

        {
            let mut encoder = png::Encoder::new(&mut bytes, self.width, self.height);
            encoder.set_color(png::ColorType::Rgba);
            encoder.set_depth(png::BitDepth::Eight);

            let mut writer = encoder
                .write_header()
                .into_diagnostic()
                .wrap_err("Error writing PNG header")?;
            writer
                .write_image_data(self.as_bytes())
                .into_diagnostic()
                .wrap_err("Error writing PNG pixels")?;
        }

        Ok(bytes)
    }

    /// Write the canvas to a PNG file.
    ///
    /// # Errors
    ///
    /// - When encoding failed.
    /// - When the file could not be written.
    #[inline]
    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        std::fs::write(path, self.to_png_bytes()?)
            .into_diagnostic()
            .wrap_err_with(|| format!("Error writing PNG to '{}'", path.display()))
    }

    /// Fill the pixels from the top left up to but not including the bottom right, clipped to the canvas.
    fn fill_area(&mut self, left: i64, top: i64, right: i64, bottom: i64, color: RGBA8) {
        let (width, height) = (i64::from(self.width), i64::from(self.height));

        let (left, right) = (left.max(0), right.min(width));
        let (top, bottom) = (top.max(0), bottom.min(height));
        if left >= right || top >= bottom {
            return;
        }

        // Everything is inside of the canvas now so it fits
        for row in top..bottom {
            self.blend_span(left as i32, right as i32 - 1, row as i32, color);
        }
    }

    /// Whether a rectangle covers any pixel of the canvas.
    fn overlaps(&self, x: i32, y: i32, width: i32, height: i32) -> bool {
        width > 0
            && height > 0
            && i64::from(x) < i64::from(self.width)
            && i64::from(y) < i64::from(self.height)
            && i64::from(x) + i64::from(width) > 0
            && i64::from(y) + i64::from(height) > 0
    }

    /// Rows of a shape starting at `y` that are inside of the canvas, relative to the top of the shape.
    fn visible_rows(&self, y: i32, height: i32) -> Range<i32> {
        let y = i64::from(y);
        let first = (-y).max(0);
        let end = (i64::from(self.height) - y).min(i64::from(height));

        if first >= end {
            0..0
        } else {
            // Both are inside of `0..=height` now
            (first as i32)..(end as i32)
        }
    }

    /// Blend a horizontal run of pixels, both ends included.
    fn blend_span(&mut self, from_x: i32, to_x: i32, y: i32, color: RGBA8) {
        if y < 0 || y >= self.height as i32 {
            return;
        }

        let from_x = from_x.max(0);
        let to_x = to_x.min(self.width as i32 - 1);
        if from_x > to_x {
            return;
        }

        let row_start = y as usize * self.width as usize;
        let span = &mut self.pixels[(row_start + from_x as usize)..=(row_start + to_x as usize)];
        if color.a == 255 {
            span.fill(color);
        } else {
            span.iter_mut().for_each(|pixel| *pixel = blend(color, *pixel));
        }
    }

    /// Blend a single pixel if it's inside of the canvas.
    #[inline]
    fn blend_pixel(&mut self, x: i32, y: i32, color: RGBA8) {
        if let Some(index) = self.index(x, y) {
            self.pixels[index] = blend(color, self.pixels[index]);
        }
    }

    /// Blend a single pixel with coordinates that might not fit in an `i32`.
    #[inline]
    fn blend_pixel_wide(&mut self, x: i64, y: i64, color: RGBA8) {
        if let (Ok(x), Ok(y)) = (i32::try_from(x), i32::try_from(y)) {
            self.blend_pixel(x, y, color);
        }
    }

    /// Index of a coordinate in the pixel buffer, `None` when outside.
    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            None
        } else {
            Some(x as usize + y as usize * self.width as usize)
        }
    }
}

/// Pixels of a line as `(major, minor)` coordinates, only for the steps where the major coordinate is inside `0..size`.
///
/// The line moves `delta` along the major axis and `minor_delta` along the other, with `|minor_delta| <= |delta|`.
/// Every step the minor coordinate is rounded to the nearest pixel, halfway rounds away from the start.
fn line_steps(
    from: i64,
    minor_from: i64,
    delta: i64,
    minor_delta: i64,
    size: i64,
) -> impl Iterator<Item = (i64, i64)> {
    let length = delta.abs();
    let step = delta.signum();
    let minor_step = minor_delta.signum();
    let minor_length = i128::from(minor_delta.abs());

    // Only the steps that land inside of the canvas
    let (first, last) = if step >= 0 {
        ((-from).max(0), (size - 1 - from).min(length))
    } else {
        ((from - (size - 1)).max(0), from.min(length))
    };

    (first..=last).map(move |index| {
        let minor = if length == 0 {
            0
        } else {
            // Can't overflow because both offsets fit in 33 bits
            let length = i128::from(length);
            ((2 * i128::from(index) * minor_length + length) / (2 * length)) as i64
        };

        (from + step * index, minor_from + minor_step * minor)
    })
}

/// Sine and cosine of an angle in degrees, exact for multiples of 90 degrees.
fn sin_cos_degrees(degrees: i32) -> (f32, f32) {
    match degrees.rem_euclid(360) {
        0 => (0.0, 1.0),
        90 => (1.0, 0.0),
        180 => (0.0, -1.0),
        270 => (-1.0, 0.0),
        degrees => (degrees as f32).to_radians().sin_cos(),
    }
}

/// Take the pixel at the position, `None` when outside of the source rectangle or the image.
fn sample_nearest(image: &Image, source: Rect, position: Vec2) -> Option<RGBA8> {
    let x = (position.x.floor() as i32).clamp(source.x, source.x + source.width - 1);
    let y = (position.y.floor() as i32).clamp(source.y, source.y + source.height - 1);

    image.pixel(x, y)
}

/// Interpolate the four pixels around the position, clamped to the source rectangle.
fn sample_bilinear(image: &Image, source: Rect, position: Vec2) -> Option<RGBA8> {
    // Pixel centers are at half coordinates
    let position = position - Vec2::splat(0.5);
    let base = position.floor();
    let fraction = position - base;

    let clamp_x = |x: i32| x.clamp(source.x, source.x + source.width - 1);
    let clamp_y = |y: i32| y.clamp(source.y, source.y + source.height - 1);
    let (x0, y0) = (clamp_x(base.x as i32), clamp_y(base.y as i32));
    let (x1, y1) = (clamp_x(base.x as i32 + 1), clamp_y(base.y as i32 + 1));

    let top_left = image.pixel(x0, y0)?;
    let top_right = image.pixel(x1, y0)?;
    let bottom_left = image.pixel(x0, y1)?;
    let bottom_right = image.pixel(x1, y1)?;

    let lerp = |a: u8, b: u8, c: u8, d: u8| -> u8 {
        let top = f32::from(a) + (f32::from(b) - f32::from(a)) * fraction.x;
        let bottom = f32::from(c) + (f32::from(d) - f32::from(c)) * fraction.x;

        (top + (bottom - top) * fraction.y).round().clamp(0.0, 255.0) as u8
    };

    Some(RGBA8::new(
        lerp(top_left.r, top_right.r, bottom_left.r, bottom_right.r),
        lerp(top_left.g, top_right.g, bottom_left.g, bottom_right.g),
        lerp(top_left.b, top_right.b, bottom_left.b, bottom_right.b),
        lerp(top_left.a, top_right.a, bottom_left.a, bottom_right.a),
    ))
}

#[cfg(test)]
mod tests {
    use rgb::RGBA8;

    use super::{Canvas, Filter, Rect};
    use crate::{assets::Image, color::Color, ellipse};

    const BLACK: RGBA8 = RGBA8::new(0, 0, 0, 255);
    const WHITE: RGBA8 = RGBA8::new(255, 255, 255, 255);

    /// Render the canvas as a grid of `#` for white and `.` for anything else.
    fn ascii(canvas: &Canvas) -> Vec<String> {
        canvas
            .pixels()
            .chunks(canvas.width() as usize)
            .map(|row| {
                row.iter()
                    .map(|pixel| if *pixel == WHITE { '#' } else { '.' })
                    .collect()
            })
            .collect()
    }

    /// Count the pixels matching a color.
    fn count(canvas: &Canvas, color: RGBA8) -> usize {
        canvas.pixels().iter().filter(|pixel| **pixel == color).count()
    }

    /// 2x2 image with a different color in every corner.
    fn corners() -> Image {
        Image::from_pixels(
            2,
            2,
            vec![
                RGBA8::new(255, 0, 0, 255),
                RGBA8::new(0, 255, 0, 255),
                RGBA8::new(0, 0, 255, 255),
                WHITE,
            ],
        )
        .unwrap()
    }

    #[test]
    fn new_canvas_is_black() {
        let canvas = Canvas::new(3, 2);

        assert_eq!(canvas.pixels().len(), 6);
        assert_eq!(count(&canvas, BLACK), 6);
        assert_eq!(canvas.as_bytes().len(), 24);
    }

    #[test]
    fn points_outside_are_ignored() {
        let mut canvas = Canvas::new(2, 2);
        canvas.draw_point(-1, 0, Color::WHITE);
        canvas.draw_point(0, 2, Color::WHITE);
        canvas.draw_point(1, 1, Color::WHITE);

        assert_eq!(ascii(&canvas), ["..", ".#"]);
    }

    #[test]
    fn lines_include_both_ends() {
        let mut canvas = Canvas::new(5, 5);
        canvas.draw_line(0, 0, 4, 2, Color::WHITE);

        assert_eq!(canvas.pixel(0, 0), Some(WHITE));
        assert_eq!(canvas.pixel(4, 2), Some(WHITE));
        assert_eq!(count(&canvas, WHITE), 5);

        let mut canvas = Canvas::new(3, 3);
        canvas.draw_line(2, 2, 2, 2, Color::WHITE);
        assert_eq!(ascii(&canvas), ["...", "...", "..#"]);

        let mut canvas = Canvas::new(3, 3);
        canvas.draw_line(2, 0, 0, 2, Color::WHITE);
        assert_eq!(ascii(&canvas), ["..#", ".#.", "#.."]);
    }

    #[test]
    fn far_away_lines_are_clipped() {
        let mut canvas = Canvas::new(8, 8);
        canvas.draw_line(-500_000_000, 3, 500_000_000, 3, Color::WHITE);
        assert_eq!(ascii(&canvas)[3], "########");
        assert_eq!(count(&canvas, WHITE), 8);

        let mut canvas = Canvas::new(8, 8);
        canvas.draw_line(0, 0, i32::MAX, 0, Color::WHITE);
        canvas.draw_line(i32::MIN, i32::MIN, i32::MAX, i32::MAX, Color::WHITE);
        canvas.draw_line(i32::MAX, i32::MIN, i32::MAX, i32::MAX, Color::WHITE);
        assert_eq!(canvas.pixel(7, 0), Some(WHITE));
        assert_eq!(canvas.pixel(5, 5), Some(WHITE));
        assert_eq!(count(&canvas, WHITE), 15);
    }

    #[test]
    fn clipped_lines_keep_their_pixels() {
        for ((from_x, from_y), (to_x, to_y)) in [
            ((-3, -1), (10, 5)),
            ((9, -4), (-2, 12)),
            ((4, 9), (4, -3)),
            ((-6, 7), (11, 6)),
        ] {
            let mut clipped = Canvas::new(8, 8);
            clipped.draw_line(from_x, from_y, to_x, to_y, Color::WHITE);

            let mut full = Canvas::new(24, 24);
            full.draw_line(from_x + 8, from_y + 8, to_x + 8, to_y + 8, Color::WHITE);

            for y in 0..8 {
                for x in 0..8 {
                    assert_eq!(clipped.pixel(x, y), full.pixel(x + 8, y + 8), "({x}, {y})");
                }
            }
        }
    }

    #[test]
    fn rect_outline() {
        let mut canvas = Canvas::new(5, 4);
        canvas.draw_rect(1, 0, 3, 3, Color::WHITE);

        assert_eq!(ascii(&canvas), [".###.", ".#.#.", ".###.", "....."]);

        let mut canvas = Canvas::new(3, 3);
        canvas.draw_rect(0, 0, 0, 3, Color::WHITE);
        canvas.draw_rect(0, 0, 3, -1, Color::WHITE);
        assert_eq!(count(&canvas, WHITE), 0);

        canvas.draw_rect(1, 1, 1, 1, Color::WHITE);
        assert_eq!(ascii(&canvas), ["...", ".#.", "..."]);
    }

    #[test]
    fn rect_outline_blends_every_pixel_once() {
        let mut canvas = Canvas::new(4, 4);
        canvas.draw_rect(0, 0, 4, 4, Color::rgba(1.0, 1.0, 1.0, 0.5));

        let blended = canvas.pixel(0, 0).unwrap();
        assert_eq!(canvas.pixel(3, 3), Some(blended));
        assert_eq!(canvas.pixel(0, 2), Some(blended));
        assert_eq!(canvas.pixel(1, 1), Some(BLACK));
    }

    #[test]
    fn filled_rect_is_clipped() {
        let mut canvas = Canvas::new(3, 3);
        canvas.fill_rect(-5, 1, 7, 10, Color::WHITE);

        assert_eq!(ascii(&canvas), ["...", "##.", "##."]);
    }

    #[test]
    fn ellipses() {
        let mut canvas = Canvas::new(5, 5);
        canvas.draw_ellipse(1, 1, 3, 3, Color::WHITE);
        assert_eq!(ascii(&canvas), [".....", "..#..", ".#.#.", "..#..", "....."]);

        let mut canvas = Canvas::new(5, 5);
        canvas.fill_ellipse(1, 1, 3, 3, Color::WHITE);
        assert_eq!(ascii(&canvas), [".....", "..#..", ".###.", "..#..", "....."]);

        let mut canvas = Canvas::new(4, 4);
        canvas.fill_ellipse(0, 0, 4, 4, Color::WHITE);
        assert_eq!(ascii(&canvas), [".##.", "####", "####", ".##."]);
    }

    #[test]
    fn clipped_ellipses_match_spans() {
        let (x, y, width, height) = (-3, -2, 11, 9);

        let mut canvas = Canvas::new(6, 6);
        canvas.fill_ellipse(x, y, width, height, Color::WHITE);
        let mut expected = Canvas::new(6, 6);
        for (left, right) in ellipse::ellipse_area(x, y, width, height) {
            for px in left.x..=right.x {
                expected.draw_point(px, left.y, Color::WHITE);
            }
        }
        assert_eq!(canvas.pixels(), expected.pixels());

        let mut canvas = Canvas::new(6, 6);
        canvas.draw_ellipse(x, y, width, height, Color::WHITE);
        let mut expected = Canvas::new(6, 6);
        for point in ellipse::ellipse_outline(x, y, width, height) {
            expected.draw_point(point.x, point.y, Color::WHITE);
        }
        assert_eq!(canvas.pixels(), expected.pixels());
    }

    #[test]
    fn huge_ellipses_only_draw_visible_rows() {
        let mut canvas = Canvas::new(8, 8);
        canvas.fill_ellipse(0, 0, 10, 1 << 30, Color::WHITE);
        assert_eq!(canvas.pixel(4, 7), Some(WHITE));
        assert_eq!(canvas.pixel(0, 7), Some(BLACK));

        let mut canvas = Canvas::new(8, 8);
        canvas.draw_ellipse(i32::MIN, i32::MIN, i32::MAX, i32::MAX, Color::WHITE);
        canvas.fill_ellipse(100, 100, i32::MAX, i32::MAX, Color::WHITE);
        assert_eq!(count(&canvas, WHITE), 0);
    }

    #[test]
    fn draw_image_untransformed() {
        let mut canvas = Canvas::new(3, 3);
        canvas.draw_image(
            &corners(),
            Rect::new(0, 0, 2, 2),
            Rect::new(1, 1, 2, 2),
            0,
            Filter::Nearest,
        );

        assert_eq!(canvas.pixel(1, 1), Some(RGBA8::new(255, 0, 0, 255)));
        assert_eq!(canvas.pixel(2, 1), Some(RGBA8::new(0, 255, 0, 255)));
        assert_eq!(canvas.pixel(1, 2), Some(RGBA8::new(0, 0, 255, 255)));
        assert_eq!(canvas.pixel(2, 2), Some(WHITE));
        assert_eq!(canvas.pixel(0, 0), Some(BLACK));
    }

    #[test]
    fn draw_image_scaled_and_mirrored() {
        let mut canvas = Canvas::new(4, 4);
        canvas.draw_image(
            &corners(),
            Rect::new(0, 0, 2, 2),
            Rect::new(0, 0, 4, 4),
            0,
            Filter::Nearest,
        );
        assert_eq!(canvas.pixel(1, 1), Some(RGBA8::new(255, 0, 0, 255)));
        assert_eq!(canvas.pixel(3, 0), Some(RGBA8::new(0, 255, 0, 255)));
        assert_eq!(canvas.pixel(3, 3), Some(WHITE));

        // Negative width mirrors the image inside the rectangle from x 0 to 2
        let mut canvas = Canvas::new(2, 2);
        canvas.draw_image(
            &corners(),
            Rect::new(0, 0, 2, 2),
            Rect::new(2, 0, -2, 2),
            0,
            Filter::Nearest,
        );
        assert_eq!(canvas.pixel(0, 0), Some(RGBA8::new(0, 255, 0, 255)));
        assert_eq!(canvas.pixel(1, 0), Some(RGBA8::new(255, 0, 0, 255)));
        assert_eq!(canvas.pixel(0, 1), Some(WHITE));
    }

    #[test]
    fn draw_image_rotated_counterclockwise() {
        let mut canvas = Canvas::new(2, 2);
        canvas.draw_image(
            &corners(),
            Rect::new(0, 0, 2, 2),
            Rect::new(0, 0, 2, 2),
            90,
            Filter::Nearest,
        );

        // The top-right pixel moves to the top-left
        assert_eq!(canvas.pixel(0, 0), Some(RGBA8::new(0, 255, 0, 255)));
        assert_eq!(canvas.pixel(0, 1), Some(RGBA8::new(255, 0, 0, 255)));
        assert_eq!(canvas.pixel(1, 1), Some(RGBA8::new(0, 0, 255, 255)));
        assert_eq!(canvas.pixel(1, 0), Some(WHITE));
    }

    #[test]
    fn draw_image_part() {
        let mut canvas = Canvas::new(2, 2);
        canvas.draw_image(
            &corners(),
            Rect::new(1, 1, 1, 1),
            Rect::new(0, 0, 2, 2),
            0,
            Filter::Bilinear,
        );

        assert_eq!(count(&canvas, WHITE), 4);
    }

    #[test]
    fn bilinear_interpolates_between_pixels() {
        let image = Image::from_pixels(2, 1, vec![BLACK, WHITE]).unwrap();
        let mut canvas = Canvas::new(4, 1);
        canvas.draw_image(&image, Rect::new(0, 0, 2, 1), Rect::new(0, 0, 4, 1), 0, Filter::Bilinear);

        let grey = |value| RGBA8::new(value, value, value, 255);
        assert_eq!(canvas.pixels(), [BLACK, grey(64), grey(191), WHITE]);

        // Nearest keeps the hard edge
        let mut canvas = Canvas::new(4, 1);
        canvas.draw_image(&image, Rect::new(0, 0, 2, 1), Rect::new(0, 0, 4, 1), 0, Filter::Nearest);
        assert_eq!(canvas.pixels(), [BLACK, BLACK, WHITE, WHITE]);
    }

    #[test]
    fn draw_image_rotated_45_degrees() {
        let image = Image::from_pixels(4, 4, vec![WHITE; 16]).unwrap();
        let mut canvas = Canvas::new(8, 8);
        canvas.draw_image(&image, Rect::new(0, 0, 4, 4), Rect::new(2, 2, 4, 4), 45, Filter::Nearest);

        // The center is still covered
        assert_eq!(canvas.pixel(3, 3), Some(WHITE));
        assert_eq!(canvas.pixel(4, 4), Some(WHITE));
        assert_eq!(canvas.pixel(3, 2), Some(WHITE));

        // The corners of the unrotated square are not
        for (x, y) in [(2, 2), (5, 2), (2, 5), (5, 5)] {
            assert_eq!(canvas.pixel(x, y), Some(BLACK), "({x}, {y})");
        }
        for (x, y) in [(0, 0), (7, 0), (0, 7), (7, 7)] {
            assert_eq!(canvas.pixel(x, y), Some(BLACK), "({x}, {y})");
        }
    }

    #[test]
    fn transparent_pixels_are_not_drawn() {
        let image = Image::from_pixels(1, 1, vec![RGBA8::new(255, 255, 255, 0)]).unwrap();
        let mut canvas = Canvas::new(1, 1);
        canvas.draw_image(&image, Rect::new(0, 0, 1, 1), Rect::new(0, 0, 1, 1), 0, Filter::Nearest);

        assert_eq!(canvas.pixel(0, 0), Some(BLACK));
    }

    #[test]
    fn text_uses_font_glyphs() {
        let mut canvas = Canvas::new(16, 8);
        canvas.draw_text("|", 0, 0, 1.0, Color::WHITE);

        // The pipe glyph is two pixels wide in columns 3 and 4, with a gap in row 3
        assert_eq!(canvas.pixel(3, 0), Some(WHITE));
        assert_eq!(canvas.pixel(4, 0), Some(WHITE));
        assert_eq!(canvas.pixel(3, 3), Some(BLACK));
        assert_eq!(count(&canvas, WHITE), 12);

        let mut scaled = Canvas::new(32, 16);
        scaled.draw_text("|", 0, 0, 2.0, Color::WHITE);
        assert_eq!(count(&scaled, WHITE), 48);
    }

    #[test]
    fn huge_text_is_clipped() {
        // The top-left pixel of 'E' covers the whole canvas
        let mut canvas = Canvas::new(4, 4);
        canvas.draw_text("E\nE", 0, 0, 1.0e9, Color::WHITE);
        assert_eq!(count(&canvas, WHITE), 16);

        let mut canvas = Canvas::new(4, 4);
        canvas.draw_text("EE", i32::MAX, i32::MIN, f32::MAX, Color::WHITE);
        canvas.draw_text("|", -10, -10, 1.0e9, Color::WHITE);
        assert_eq!(count(&canvas, WHITE), 0);
    }

    #[test]
    fn clear_and_resize() {
        let mut canvas = Canvas::new(2, 2);
        canvas.clear(Color::WHITE);
        assert_eq!(count(&canvas, WHITE), 4);

        canvas.resize(3, 1);
        assert_eq!(canvas.width(), 3);
        assert_eq!(canvas.height(), 1);
        assert_eq!(count(&canvas, BLACK), 3);
    }

    #[test]
    fn png_round_trip_keeps_pixels() {
        let mut canvas = Canvas::new(3, 2);
        canvas.draw_point(2, 1, Color::RED);

        let image = Image::from_png_bytes(&canvas.to_png_bytes().unwrap()).unwrap();
        assert_eq!(image.pixels(), canvas.pixels());
    }
}
