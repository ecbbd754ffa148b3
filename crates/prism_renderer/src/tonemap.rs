//! Mapping unbounded shaded colors into the displayable range.

use crate::Color;
use prism_math::Interval;

/// Bring a color into [0, 1] per channel.
///
/// When the brightest channel exceeds 1 the whole color is scaled down by
/// it first, which keeps the hue; clamping then removes any negatives.
pub fn tone_map(color: Color) -> Color {
    let max = color.max_element();
    let scaled = if max > 1.0 { color * (1.0 / max) } else { color };

    Color::new(
        Interval::UNIT.clamp(scaled.x),
        Interval::UNIT.clamp(scaled.y),
        Interval::UNIT.clamp(scaled.z),
    )
}

/// Convert a tone-mapped color to 8-bit RGB.
#[inline]
pub fn to_rgb8(color: Color) -> [u8; 3] {
    let channel = |c: f64| (255.0 * Interval::UNIT.clamp(c)).round() as u8;
    [channel(color.x), channel(color.y), channel(color.z)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_proportional_rescale() {
        let mapped = tone_map(Color::new(2.0, 0.5, 0.5));
        assert!((mapped - Color::new(1.0, 0.25, 0.25)).length() < 1e-12);
    }

    #[test]
    fn test_in_range_untouched() {
        let color = Color::new(0.2, 0.7, 0.8);
        assert_eq!(tone_map(color), color);
    }

    #[test]
    fn test_negative_channels_clamped() {
        let mapped = tone_map(Color::new(-0.5, 0.5, 4.0));
        assert_eq!(mapped, Color::new(0.0, 0.125, 1.0));
    }

    #[test]
    fn test_to_rgb8() {
        assert_eq!(to_rgb8(Color::new(0.0, 1.0, 0.5)), [0, 255, 128]);
        assert_eq!(to_rgb8(Color::new(0.2, 0.4, 0.8)), [51, 102, 204]);
        assert_eq!(to_rgb8(Color::new(-1.0, 2.0, 0.0)), [0, 255, 0]);
    }
}
