//! Present the canvas on the GPU.

pub(crate) mod gpu;
pub(crate) mod letterbox;
pub(crate) mod present;

use crate::color::Color;

/// Texture format we prefer to use for everything.
///
/// We choose sRGB since the canvas pixels are sRGB and otherwise everything will be quite dark.
pub(crate) const PREFERRED_TEXTURE_FORMAT: wgpu::TextureFormat =
    wgpu::TextureFormat::Rgba8UnormSrgb;

/// Convert a color to a WGPU [`wgpu::Color`] taking in account sRGB.
pub(crate) fn to_wgpu_color(color: Color) -> wgpu::Color {
    let Color { r, g, b, a } = color;

    if PREFERRED_TEXTURE_FORMAT.is_srgb() {
        // Convert to linear space, the surface converts it back
        let to_linear = |channel: f32| f64::from(channel.clamp(0.0, 1.0)).powf(2.2);

        wgpu::Color {
            r: to_linear(r),
            g: to_linear(g),
            b: to_linear(b),
            a: f64::from(a.clamp(0.0, 1.0)),
        }
    } else {
        wgpu::Color {
            r: f64::from(r),
            g: f64::from(g),
            b: f64::from(b),
            a: f64::from(a),
        }
    }
}
