//! Tone mapping and 8-bit quantization.

use crate::Color;
use glint_math::Interval;

/// Compress a linear channel value: `v / (v + 1)`.
///
/// Maps [0, inf) onto [0, 1), keeps 0 at 0 and is strictly increasing.
#[inline]
pub fn tone_map(v: f32) -> f32 {
    v / (v + 1.0)
}

/// Apply [`tone_map`] to every channel.
#[inline]
pub fn tone_map_color(color: Color) -> Color {
    Color::new(tone_map(color.x), tone_map(color.y), tone_map(color.z))
}

/// Convert a color to 8-bit RGB, clamping each channel to [0, 1].
pub fn quantize(color: Color) -> [u8; 3] {
    let r = (255.0 * Interval::UNIT.clamp(color.x)) as u8;
    let g = (255.0 * Interval::UNIT.clamp(color.y)) as u8;
    let b = (255.0 * Interval::UNIT.clamp(color.z)) as u8;
    [r, g, b]
}
