//! Smoothed pointer tracking for parallax.

use crate::surface::Viewport;

/// Fraction of the remaining distance covered each frame.
pub const SMOOTHING: f32 = 0.05;

/// Parallax offset per unit of pointer displacement from the centre.
pub const PARALLAX_SCALE: f32 = 0.02;

/// Pointer position with an exponential low-pass filter toward the raw target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pointer {
    current: (f32, f32),
    target: (f32, f32),
}

impl Pointer {
    /// Start centred in the viewport, at rest.
    pub fn centered(viewport: Viewport) -> Self {
        let center = viewport.center();
        Self {
            current: center,
            target: center,
        }
    }

    pub fn set_target(&mut self, x: f32, y: f32) {
        self.target = (x, y);
    }

    pub fn current(&self) -> (f32, f32) {
        self.current
    }

    pub fn update(&mut self) {
        self.current.0 += (self.target.0 - self.current.0) * SMOOTHING;
        self.current.1 += (self.target.1 - self.current.1) * SMOOTHING;
    }

    /// Translation applied to the parallaxed layers.
    pub fn parallax(&self, viewport: Viewport) -> (f32, f32) {
        let (cx, cy) = viewport.center();
        (
            (self.current.0 - cx) * PARALLAX_SCALE,
            (self.current.1 - cy) * PARALLAX_SCALE,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEW: Viewport = Viewport::new(1000.0, 500.0);

    #[test]
    fn test_at_rest_has_no_parallax() {
        let mut pointer = Pointer::centered(VIEW);
        pointer.update();
        assert_eq!(pointer.parallax(VIEW), (0.0, 0.0));
    }

    #[test]
    fn test_moves_fraction_toward_target() {
        let mut pointer = Pointer::centered(VIEW);
        pointer.set_target(600.0, 250.0);
        pointer.update();
        assert!((pointer.current().0 - 505.0).abs() < 1e-4);
        assert_eq!(pointer.current().1, 250.0);
    }

    #[test]
    fn test_converges_without_overshoot() {
        let mut pointer = Pointer::centered(VIEW);
        pointer.set_target(1000.0, 0.0);
        let mut last = pointer.current().0;
        for _ in 0..500 {
            pointer.update();
            let x = pointer.current().0;
            assert!(x >= last && x <= 1000.0);
            last = x;
        }
        let (px, py) = pointer.parallax(VIEW);
        assert!((px - 10.0).abs() < 0.01);
        assert!((py + 5.0).abs() < 0.01);
    }
}
