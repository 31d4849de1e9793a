//! Drifting, twinkling background star.

use rand::Rng;

use crate::color::Rgba;
use crate::surface::{Paint, Surface, Viewport};

/// A star with oscillating alpha and a slow drift that wraps at the edges.
#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    alpha: f32,
    twinkle_speed: f32,
    drift_x: f32,
    drift_y: f32,
}

impl Star {
    /// Place a star at a random position inside the viewport.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, viewport: Viewport) -> Self {
        Self {
            x: rng.random::<f32>() * viewport.width,
            y: rng.random::<f32>() * viewport.height,
            radius: rng.random::<f32>() * 1.5 + 0.5,
            alpha: rng.random::<f32>(),
            twinkle_speed: (rng.random::<f32>() - 0.5) * 0.02,
            drift_x: (rng.random::<f32>() - 0.5) * 0.1,
            drift_y: (rng.random::<f32>() - 0.5) * 0.1,
        }
    }

    /// Alpha as drawn, clamped to 0.0-1.0.
    pub fn alpha(&self) -> f32 {
        self.alpha.clamp(0.0, 1.0)
    }

    pub fn twinkle_speed(&self) -> f32 {
        self.twinkle_speed
    }

    /// Advance one frame.
    ///
    /// Alpha bounces off 0 and 1 instead of being clamped, so it keeps
    /// oscillating; the position wraps to the opposite edge.
    pub fn update(&mut self, viewport: Viewport) {
        self.alpha += self.twinkle_speed;
        if self.alpha <= 0.0 || self.alpha >= 1.0 {
            self.twinkle_speed = -self.twinkle_speed;
        }

        self.x += self.drift_x;
        self.y += self.drift_y;

        if self.x < 0.0 {
            self.x = viewport.width;
        } else if self.x > viewport.width {
            self.x = 0.0;
        }
        if self.y < 0.0 {
            self.y = viewport.height;
        } else if self.y > viewport.height {
            self.y = 0.0;
        }
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        surface.fill_disc(
            self.x,
            self.y,
            self.radius,
            Paint::Solid(Rgba::white(self.alpha())),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    const VIEW: Viewport = Viewport::new(200.0, 100.0);

    fn star(x: f32, y: f32, alpha: f32, twinkle: f32, drift: (f32, f32)) -> Star {
        Star {
            x,
            y,
            radius: 1.0,
            alpha,
            twinkle_speed: twinkle,
            drift_x: drift.0,
            drift_y: drift.1,
        }
    }

    #[test]
    fn test_alpha_stays_in_range_over_many_frames() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut stars: Vec<Star> = (0..200).map(|_| Star::random(&mut rng, VIEW)).collect();
        for _ in 0..5_000 {
            for s in &mut stars {
                s.update(VIEW);
                assert!((0.0..=1.0).contains(&s.alpha()));
                // Raw alpha overshoots a bound by at most one step.
                assert!(s.alpha > -0.011 && s.alpha < 1.011);
            }
        }
    }

    #[test]
    fn test_twinkle_reverses_exactly_at_bounds() {
        let mut s = star(10.0, 10.0, 0.995, 0.01, (0.0, 0.0));
        s.update(VIEW);
        assert!(s.alpha >= 1.0);
        assert_eq!(s.twinkle_speed(), -0.01);

        let mut s = star(10.0, 10.0, 0.5, 0.01, (0.0, 0.0));
        s.update(VIEW);
        assert_eq!(s.twinkle_speed(), 0.01);

        let mut s = star(10.0, 10.0, 0.004, -0.01, (0.0, 0.0));
        s.update(VIEW);
        assert!(s.alpha <= 0.0);
        assert_eq!(s.twinkle_speed(), 0.01);
        s.update(VIEW);
        assert!(s.alpha > 0.0);
    }

    #[test]
    fn test_position_wraps_to_opposite_edge() {
        let mut s = star(0.01, 50.0, 0.5, 0.0, (-0.05, 0.0));
        s.update(VIEW);
        assert_eq!(s.x, VIEW.width);

        let mut s = star(199.99, 50.0, 0.5, 0.0, (0.05, 0.0));
        s.update(VIEW);
        assert_eq!(s.x, 0.0);

        let mut s = star(20.0, 0.01, 0.5, 0.0, (0.0, -0.05));
        s.update(VIEW);
        assert_eq!(s.y, VIEW.height);

        let mut s = star(20.0, 99.99, 0.5, 0.0, (0.0, 0.05));
        s.update(VIEW);
        assert_eq!(s.y, 0.0);
    }

    #[test]
    fn test_random_star_within_ranges() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..100 {
            let s = Star::random(&mut rng, VIEW);
            assert!((0.5..=2.0).contains(&s.radius));
            assert!(s.twinkle_speed.abs() <= 0.01);
            assert!(s.drift_x.abs() <= 0.05 && s.drift_y.abs() <= 0.05);
            assert!(s.x >= 0.0 && s.x < VIEW.width);
        }
    }
}
