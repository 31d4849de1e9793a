//! Pooled shooting stars.

use rand::Rng;

use crate::color::Rgba;
use crate::surface::{Surface, Viewport};

/// Per-frame probability that a dormant comet launches.
pub const SPAWN_PROBABILITY: f64 = 0.005;

/// Opacity lost per frame while active.
pub const FADE_STEP: f32 = 0.01;

/// Vertical launch position, just above the top edge.
const LAUNCH_Y: f32 = -50.0;

/// Trail stroke width in logical units.
const TRAIL_WIDTH: f32 = 2.0;

/// A comet slot in the pool. Dormant until spawned, then flies and fades.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Comet {
    pub x: f32,
    pub y: f32,
    pub length: f32,
    pub speed: f32,
    pub angle: f32,
    opacity: f32,
    frames: u32,
    active: bool,
}

impl Comet {
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Opacity as drawn, clamped to 0.0-1.0.
    pub fn opacity(&self) -> f32 {
        self.opacity.clamp(0.0, 1.0)
    }

    /// Launch from a random point along the top edge at roughly 45 degrees.
    pub fn spawn<R: Rng + ?Sized>(&mut self, rng: &mut R, viewport: Viewport) {
        self.active = true;
        self.x = rng.random::<f32>() * viewport.width;
        self.y = LAUNCH_Y;
        self.length = rng.random::<f32>() * 100.0 + 50.0;
        self.speed = rng.random::<f32>() * 10.0 + 5.0;
        self.angle = std::f32::consts::FRAC_PI_4 + (rng.random::<f32>() - 0.5) * 0.2;
        self.opacity = 1.0;
        self.frames = 0;
    }

    /// Advance one frame. Returns to dormant once faded out or past the
    /// viewport by more than the trail length.
    pub fn update(&mut self, viewport: Viewport) {
        if !self.active {
            return;
        }

        self.x += self.angle.cos() * self.speed;
        self.y += self.angle.sin() * self.speed;
        // Closed form of the linear fade so it reaches exactly zero.
        self.frames += 1;
        self.opacity = 1.0 - self.frames as f32 * FADE_STEP;

        if self.opacity <= 0.0
            || self.x > viewport.width + self.length
            || self.y > viewport.height + self.length
        {
            self.active = false;
        }
    }

    /// Tail end of the trail.
    pub fn tail(&self) -> (f32, f32) {
        (
            self.x - self.angle.cos() * self.length,
            self.y - self.angle.sin() * self.length,
        )
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        if !self.active {
            return;
        }
        surface.stroke_line(
            (self.x, self.y),
            self.tail(),
            TRAIL_WIDTH,
            Rgba::white(self.opacity()),
            Rgba::white(0.0),
        );
    }
}
