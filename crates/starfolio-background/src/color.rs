//! Color types and blending helpers for the pixel raster.

use ratatui::style::Color;

/// Opaque 8-bit RGB color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Composite `src` over `self` with the given alpha (0.0-1.0).
    pub fn blend(self, src: Rgb, alpha: f32) -> Rgb {
        let a = alpha.clamp(0.0, 1.0);
        let mix = |dst: u8, src: u8| -> u8 {
            (src as f32 * a + dst as f32 * (1.0 - a)).round() as u8
        };
        Rgb::new(mix(self.r, src.r), mix(self.g, src.g), mix(self.b, src.b))
    }
}

impl From<Rgb> for Color {
    fn from(c: Rgb) -> Self {
        Color::Rgb(c.r, c.g, c.b)
    }
}

/// RGB color with a straight (non-premultiplied) alpha channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub rgb: Rgb,
    pub a: f32,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0.0);

    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self {
            rgb: Rgb::new(r, g, b),
            a,
        }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 1.0)
    }

    pub fn white(alpha: f32) -> Self {
        Self::new(255, 255, 255, alpha.clamp(0.0, 1.0))
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Linear interpolation between two colors, `t` in 0.0-1.0.
    pub fn lerp(self, other: Rgba, t: f32) -> Rgba {
        let t = t.clamp(0.0, 1.0);
        let ch = |a: u8, b: u8| -> u8 { (a as f32 + (b as f32 - a as f32) * t).round() as u8 };
        Rgba {
            rgb: Rgb::new(
                ch(self.rgb.r, other.rgb.r),
                ch(self.rgb.g, other.rgb.g),
                ch(self.rgb.b, other.rgb.b),
            ),
            a: self.a + (other.a - self.a) * t,
        }
    }
}

/// A gradient color stop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    pub offset: f32,
    pub color: Rgba,
}

impl ColorStop {
    pub const fn new(offset: f32, color: Rgba) -> Self {
        Self { offset, color }
    }
}

/// Sample a list of stops (sorted by offset) at position `t`.
pub fn gradient_at(stops: &[ColorStop], t: f32) -> Rgba {
    let Some(first) = stops.first() else {
        return Rgba::TRANSPARENT;
    };
    if t <= first.offset {
        return first.color;
    }
    for pair in stops.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if t <= b.offset {
            let span = (b.offset - a.offset).max(f32::EPSILON);
            return a.color.lerp(b.color, (t - a.offset) / span);
        }
    }
    stops[stops.len() - 1].color
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blend_extremes() {
        let dst = Rgb::new(10, 20, 30);
        let src = Rgb::new(200, 100, 0);
        assert_eq!(dst.blend(src, 0.0), dst);
        assert_eq!(dst.blend(src, 1.0), src);
        assert_eq!(dst.blend(src, 2.0), src);
    }

    #[test]
    fn test_gradient_sampling() {
        let stops = [
            ColorStop::new(0.0, Rgba::white(1.0)),
            ColorStop::new(1.0, Rgba::white(0.0)),
        ];
        assert_eq!(gradient_at(&stops, -1.0).a, 1.0);
        assert!((gradient_at(&stops, 0.5).a - 0.5).abs() < 1e-6);
        assert_eq!(gradient_at(&stops, 2.0).a, 0.0);
        assert_eq!(gradient_at(&[], 0.5), Rgba::TRANSPARENT);
    }
}
