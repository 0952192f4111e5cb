//! Colors with floating point channels.

use rgb::RGBA8;

/// Color consisting of four channels ranging from `0.0` to `1.0`.
///
/// Values outside of that range are clamped when drawing.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[allow(clippy::exhaustive_structs)]
pub struct Color {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
    /// Opacity, `1.0` is fully opaque and `0.0` is fully transparent.
    pub a: f32,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const GRAY: Self = Self::rgb(0.5, 0.5, 0.5);
    pub const LIGHT_GRAY: Self = Self::rgb(0.75, 0.75, 0.75);
    pub const DARK_GRAY: Self = Self::rgb(0.25, 0.25, 0.25);
    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);
    pub const LIGHT_RED: Self = Self::rgb(1.0, 0.5, 0.5);
    pub const DARK_RED: Self = Self::rgb(0.5, 0.0, 0.0);
    pub const GREEN: Self = Self::rgb(0.0, 1.0, 0.0);
    pub const LIGHT_GREEN: Self = Self::rgb(0.5, 1.0, 0.5);
    pub const DARK_GREEN: Self = Self::rgb(0.0, 0.5, 0.0);
    pub const BLUE: Self = Self::rgb(0.0, 0.0, 1.0);
    pub const LIGHT_BLUE: Self = Self::rgb(0.5, 0.5, 1.0);
    pub const DARK_BLUE: Self = Self::rgb(0.0, 0.0, 0.5);
    pub const PURPLE: Self = Self::rgb(1.0, 0.0, 1.0);
    pub const LIGHT_PURPLE: Self = Self::rgb(1.0, 0.5, 1.0);
    pub const DARK_PURPLE: Self = Self::rgb(0.5, 0.0, 0.5);
    pub const YELLOW: Self = Self::rgb(1.0, 1.0, 0.0);
    pub const LIGHT_YELLOW: Self = Self::rgb(1.0, 1.0, 0.5);
    pub const DARK_YELLOW: Self = Self::rgb(0.5, 0.5, 0.0);
    pub const CYAN: Self = Self::rgb(0.0, 1.0, 1.0);
    pub const LIGHT_CYAN: Self = Self::rgb(0.5, 1.0, 1.0);
    pub const DARK_CYAN: Self = Self::rgb(0.0, 0.5, 0.5);
    pub const BROWN: Self = Self::rgb(0.5, 0.2, 0.0);
    pub const LIGHT_BROWN: Self = Self::rgb(0.75, 0.3, 0.0);

    /// Create a fully opaque color.
    #[inline]
    #[must_use]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    /// Create a color with an opacity.
    #[inline]
    #[must_use]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Convert to 8 bits per channel, clamping every channel to `0.0..=1.0` first.
    #[inline]
    #[must_use]
    pub fn to_rgba8(self) -> RGBA8 {
        RGBA8::new(
            channel_to_u8(self.r),
            channel_to_u8(self.g),
            channel_to_u8(self.b),
            channel_to_u8(self.a),
        )
    }

    /// Draw this color on top of an existing pixel.
    ///
    /// The result stays fully opaque when the destination was opaque.
    #[inline]
    #[must_use]
    pub fn blend_over(self, dst: RGBA8) -> RGBA8 {
        blend(self.to_rgba8(), dst)
    }
}

impl From<Color> for RGBA8 {
    #[inline]
    fn from(color: Color) -> Self {
        color.to_rgba8()
    }
}

impl From<RGBA8> for Color {
    #[inline]
    fn from(pixel: RGBA8) -> Self {
        Self::rgba(
            f32::from(pixel.r) / 255.0,
            f32::from(pixel.g) / 255.0,
            f32::from(pixel.b) / 255.0,
            f32::from(pixel.a) / 255.0,
        )
    }
}

/// Source-over alpha blend of two 8 bit pixels.
#[inline]
pub(crate) fn blend(src: RGBA8, dst: RGBA8) -> RGBA8 {
    match src.a {
        // Fast paths
        255 => src,
        0 => dst,
        _ => {
            let src_a = u32::from(src.a);
            let inv_a = 255 - src_a;

            // Output alpha, scaled by 255
            let out_a = src_a * 255 + u32::from(dst.a) * inv_a;
            if out_a == 0 {
                return RGBA8::default();
            }

            let mix = |s: u8, d: u8| -> u8 {
                let value = (u32::from(s) * src_a * 255 + u32::from(d) * u32::from(dst.a) * inv_a
                    + out_a / 2)
                    / out_a;

                value.min(255) as u8
            };

            RGBA8::new(
                mix(src.r, dst.r),
                mix(src.g, dst.g),
                mix(src.b, dst.b),
                ((out_a + 127) / 255).min(255) as u8,
            )
        }
    }
}

/// Clamp a float channel and convert it to a byte.
#[inline]
fn channel_to_u8(value: f32) -> u8 {
    // NaN turns into zero with the cast
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use rgb::RGBA8;

    use super::{blend, Color};

    #[test]
    fn clamps_channels() {
        assert_eq!(
            Color::rgba(2.0, -1.0, 0.5, 1.0).to_rgba8(),
            RGBA8::new(255, 0, 128, 255)
        );
    }

    #[test]
    fn brown_constants() {
        assert_eq!(Color::BROWN.to_rgba8(), RGBA8::new(128, 51, 0, 255));
        assert_eq!(Color::LIGHT_BROWN.to_rgba8(), RGBA8::new(191, 77, 0, 255));
    }

    #[test]
    fn blending() {
        let dst = RGBA8::new(0, 0, 0, 255);

        assert_eq!(blend(RGBA8::new(200, 100, 50, 255), dst), RGBA8::new(200, 100, 50, 255));
        assert_eq!(blend(RGBA8::new(200, 100, 50, 0), dst), dst);

        let half = blend(RGBA8::new(255, 255, 255, 128), dst);
        assert_eq!(half.a, 255);
        assert!((127..=129).contains(&half.r));
    }

    #[test]
    fn blending_on_transparent() {
        let dst = RGBA8::new(0, 0, 0, 0);
        let src = RGBA8::new(10, 20, 30, 100);

        assert_eq!(blend(src, dst), src);
    }
}
