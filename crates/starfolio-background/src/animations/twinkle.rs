//! Twinkling star field with soft nebula glows (stateless in time).

use rand::Rng;

use crate::color::{ColorStop, Rgba};
use crate::surface::{Paint, RadialGradient, Surface, Viewport};

/// Number of stars in the field.
pub const STAR_COUNT: usize = 150;

/// Lowest opacity reached during a twinkle.
const MIN_OPACITY: f32 = 0.2;

const BACKDROP: [ColorStop; 1] = [ColorStop::new(0.0, Rgba::opaque(5, 5, 5))];
const CYAN: Rgba = Rgba::opaque(0x00, 0xf0, 0xff);
const SILVER: Rgba = Rgba::opaque(0xc0, 0xc0, 0xd0);

const NEBULA_PURPLE: [ColorStop; 2] = [
    ColorStop::new(0.0, Rgba::new(168, 85, 247, 0.06)),
    ColorStop::new(1.0, Rgba::new(168, 85, 247, 0.0)),
];
const NEBULA_CYAN: [ColorStop; 2] = [
    ColorStop::new(0.0, Rgba::new(0, 240, 255, 0.05)),
    ColorStop::new(1.0, Rgba::new(0, 240, 255, 0.0)),
];

/// One star. Position is in percent of the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TwinkleStar {
    pub x_pct: f32,
    pub y_pct: f32,
    pub size: f32,
    pub delay_ms: u64,
    pub duration_ms: u64,
}

impl TwinkleStar {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            x_pct: rng.random::<f32>() * 100.0,
            y_pct: rng.random::<f32>() * 100.0,
            size: rng.random::<f32>() * 2.0 + 0.5,
            delay_ms: (rng.random::<f32>() * 4000.0) as u64,
            duration_ms: (rng.random::<f32>() * 3000.0 + 2000.0) as u64,
        }
    }

    pub fn is_large(&self) -> bool {
        self.size > 1.5
    }

    /// Opacity at `elapsed_ms`: 1 until the delay passes, then a linear
    /// 1 → 0.2 → 1 loop over `duration_ms`.
    pub fn opacity_at(&self, elapsed_ms: u64) -> f32 {
        if elapsed_ms < self.delay_ms || self.duration_ms == 0 {
            return 1.0;
        }
        let half = self.duration_ms as f32 / 2.0;
        let phase = ((elapsed_ms - self.delay_ms) % self.duration_ms) as f32;
        let t = if phase < half {
            phase / half
        } else {
            1.0 - (phase - half) / half
        };
        1.0 - (1.0 - MIN_OPACITY) * t
    }

    /// Size multiplier tied to opacity: 0.5 at the dimmest, 1 at full.
    pub fn scale_at(&self, elapsed_ms: u64) -> f32 {
        let opacity = self.opacity_at(elapsed_ms);
        0.5 + (opacity - MIN_OPACITY) / (1.0 - MIN_OPACITY) * 0.5
    }
}

/// The toolkit-style star field.
#[derive(Debug, Clone)]
pub struct TwinkleField {
    stars: Vec<TwinkleStar>,
}

impl TwinkleField {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            stars: (0..STAR_COUNT).map(|_| TwinkleStar::random(rng)).collect(),
        }
    }

    pub fn stars(&self) -> &[TwinkleStar] {
        &self.stars
    }

    pub fn draw(&self, surface: &mut dyn Surface, elapsed_ms: u64) {
        let viewport = surface.viewport();
        surface.reset_transform();
        surface.clear(&BACKDROP);

        for star in &self.stars {
            let x = star.x_pct / 100.0 * viewport.width;
            let y = star.y_pct / 100.0 * viewport.height;
            let opacity = star.opacity_at(elapsed_ms);
            let radius = star.size / 2.0 * star.scale_at(elapsed_ms);
            let color = if star.is_large() { CYAN } else { SILVER };
            if star.is_large() {
                let glow = CYAN.with_alpha(0.15 * opacity);
                surface.fill_disc(x, y, star.size * 3.0, Paint::Solid(glow));
            }
            surface.fill_disc(x, y, radius, Paint::Solid(color.with_alpha(opacity)));
        }

        draw_nebula(surface, viewport, (-0.1, -0.1), 600.0, &NEBULA_PURPLE);
        draw_nebula(surface, viewport, (1.1, 1.1), 500.0, &NEBULA_CYAN);
    }
}

/// A blurred disc anchored at a fractional viewport position.
fn draw_nebula(
    surface: &mut dyn Surface,
    viewport: Viewport,
    anchor: (f32, f32),
    diameter: f32,
    stops: &[ColorStop],
) {
    let r = diameter / 2.0;
    let x = anchor.0 * viewport.width + if anchor.0 < 0.5 { r } else { -r };
    let y = anchor.1 * viewport.height + if anchor.1 < 0.5 { r } else { -r };
    let gradient = RadialGradient {
        inner: (x, y, 0.0),
        outer: (x, y, r),
        stops,
    };
    surface.fill_disc(x, y, r, Paint::Radial(gradient));
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn star(delay_ms: u64, duration_ms: u64) -> TwinkleStar {
        TwinkleStar {
            x_pct: 50.0,
            y_pct: 50.0,
            size: 1.0,
            delay_ms,
            duration_ms,
        }
    }

    #[test]
    fn test_full_opacity_before_delay() {
        let s = star(1_000, 2_000);
        assert_eq!(s.opacity_at(0), 1.0);
        assert_eq!(s.opacity_at(999), 1.0);
    }

    #[test]
    fn test_twinkle_cycle_shape() {
        let s = star(0, 2_000);
        assert_eq!(s.opacity_at(0), 1.0);
        assert!((s.opacity_at(1_000) - 0.2).abs() < 1e-6);
        assert!((s.opacity_at(500) - 0.6).abs() < 1e-6);
        assert!((s.opacity_at(1_999) - 1.0).abs() < 1e-2);
        assert_eq!(s.opacity_at(2_000), 1.0);
    }

    #[test]
    fn test_opacity_bounds_for_random_field() {
        let mut rng = StdRng::seed_from_u64(42);
        let field = TwinkleField::new(&mut rng);
        assert_eq!(field.stars().len(), STAR_COUNT);
        for star in field.stars() {
            assert!(star.delay_ms <= 4_000);
            assert!((2_000..=5_000).contains(&star.duration_ms));
            for t in (0..20_000).step_by(37) {
                let o = star.opacity_at(t);
                assert!((MIN_OPACITY - 1e-6..=1.0).contains(&o));
                let scale = star.scale_at(t);
                assert!((0.5 - 1e-6..=1.0 + 1e-6).contains(&scale));
            }
        }
    }
}
