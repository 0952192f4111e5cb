//! Decoded PNG images.

use std::io::Cursor;

use miette::{IntoDiagnostic, Result, WrapErr};
use png::{BitDepth, ColorType, Decoder, Transformations};
use rgb::RGBA8;

/// Image decoded into 8 bit RGBA pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    /// Width in pixels.
    width: u32,
    /// Height in pixels.
    height: u32,
    /// Pixels row by row.
    pixels: Vec<RGBA8>,
}

impl Image {
    /// Create an image from raw pixels.
    ///
    /// # Errors
    ///
    /// - When the amount of pixels doesn't match the size.
    #[inline]
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<RGBA8>) -> Result<Self> {
        if pixels.len() != width as usize * height as usize {
            return Err(miette::miette!(
                "Image of {width}x{height} can't be made from {} pixels",
                pixels.len()
            ));
        }

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Decode a PNG file.
    ///
    /// Indexed, grayscale and 16 bit images are converted to 8 bit RGBA.
    ///
    /// # Errors
    ///
    /// - When the bytes are not a valid PNG.
    #[inline]
    pub fn from_png_bytes(bytes: &[u8]) -> Result<Self> {
        // Decode the PNG
        let mut decoder = Decoder::new(Cursor::new(bytes));

        // Discard text chunks
        decoder.set_ignore_text_chunk(true);

        // Convert indexed and grayscale images to RGBA
        decoder.set_transformations(
            Transformations::normalize_to_color8() | Transformations::ALPHA,
        );

        // Start parsing the PNG
        let mut reader = decoder
            .read_info()
            .into_diagnostic()
            .wrap_err("Error reading PNG header")?;

        // Ensure we can use the PNG colors
        let (color_type, bits) = reader.output_color_type();
        let mut buffer = vec![0; reader.output_buffer_size()];
        let info = reader
            .next_frame(&mut buffer)
            .into_diagnostic()
            .wrap_err("Error decoding PNG frame")?;
        buffer.truncate(info.buffer_size());

        let pixels = match (color_type, bits) {
            (ColorType::Rgba, BitDepth::Eight) => bytemuck::cast_slice::<u8, RGBA8>(&buffer).to_vec(),
            // Grayscale with alpha is not expanded to RGB by the transformations
            (ColorType::GrayscaleAlpha, BitDepth::Eight) => buffer
                .chunks_exact(2)
                .map(|gray_alpha| RGBA8::new(gray_alpha[0], gray_alpha[0], gray_alpha[0], gray_alpha[1]))
                .collect(),
            (color_type, bits) => {
                return Err(miette::miette!(
                    "Unsupported PNG output format {color_type:?} with {bits:?} bits"
                ))
            }
        };

        Self::from_pixels(info.width, info.height, pixels)
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

    /// Get a single pixel, `None` when outside of the image.
    #[inline]
    #[must_use]
    pub fn pixel(&self, x: i32, y: i32) -> Option<RGBA8> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }

        self.pixels
            .get(x as usize + y as usize * self.width as usize)
            .copied()
    }
}
