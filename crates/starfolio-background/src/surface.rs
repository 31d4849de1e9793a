//! The 2D drawing surface the animations render to.
//!
//! Coordinates are logical units (the CSS-pixel scale the animation
//! constants were tuned for). Implementations map them to whatever they
//! actually draw on.

use std::sync::{Arc, RwLock};

use crate::color::{ColorStop, Rgb, Rgba};

/// Logical size of the drawing area.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> (f32, f32) {
        (self.width / 2.0, self.height / 2.0)
    }

    pub fn min_side(&self) -> f32 {
        self.width.min(self.height)
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// A radial gradient between two circles, in logical units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialGradient<'a> {
    pub inner: (f32, f32, f32),
    pub outer: (f32, f32, f32),
    pub stops: &'a [ColorStop],
}

impl RadialGradient<'_> {
    /// Gradient position of a logical point.
    pub fn position(&self, x: f32, y: f32) -> f32 {
        let (ix, iy, ir) = self.inner;
        let (_, _, or) = self.outer;
        let dist = ((x - ix).powi(2) + (y - iy).powi(2)).sqrt();
        ((dist - ir) / (or - ir).max(f32::EPSILON)).clamp(0.0, 1.0)
    }
}

/// How a filled disc is painted.
#[derive(Debug, Clone, Copy)]
pub enum Paint<'a> {
    Solid(Rgba),
    /// Texture stretched over the disc's bounding square.
    Texture(&'a Texture),
    Radial(RadialGradient<'a>),
}

/// A drawing surface with a translation-only transform.
pub trait Surface {
    /// Logical size of the surface.
    fn viewport(&self) -> Viewport;

    /// Fill the whole surface with a vertical gradient, ignoring the transform.
    fn clear(&mut self, backdrop: &[ColorStop]);

    /// Add a translation to the current transform.
    fn translate(&mut self, dx: f32, dy: f32);

    /// Reset the transform to identity.
    fn reset_transform(&mut self);

    /// Fill a disc centred at (`x`, `y`).
    fn fill_disc(&mut self, x: f32, y: f32, radius: f32, paint: Paint<'_>);

    /// Stroke a line whose color fades linearly from `from_color` to `to_color`.
    fn stroke_line(
        &mut self,
        from: (f32, f32),
        to: (f32, f32),
        width: f32,
        from_color: Rgba,
        to_color: Rgba,
    );
}

/// A small RGB image used to paint planets.
#[derive(Debug, Clone, PartialEq)]
pub struct Texture {
    width: u32,
    height: u32,
    pixels: Vec<Rgb>,
}

impl Texture {
    /// Build a texture from row-major pixels. Returns `None` on a size mismatch.
    pub fn new(width: u32, height: u32, pixels: Vec<Rgb>) -> Option<Self> {
        if width == 0 || height == 0 || pixels.len() != (width * height) as usize {
            return None;
        }
        Some(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Nearest-neighbour sample at normalized coordinates.
    pub fn sample(&self, u: f32, v: f32) -> Rgb {
        let x = ((u.clamp(0.0, 1.0) * self.width as f32) as u32).min(self.width - 1);
        let y = ((v.clamp(0.0, 1.0) * self.height as f32) as u32).min(self.height - 1);
        self.pixels[(y * self.width + x) as usize]
    }
}

/// Shared slot a texture loader fills once, read by the renderer every frame.
///
/// An empty slot renders the placeholder, so a failed load just leaves it empty.
#[derive(Debug, Clone, Default)]
pub struct TextureSlot(Arc<RwLock<Option<Arc<Texture>>>>);

impl TextureSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the texture. Only the first fill takes effect.
    pub fn fill(&self, texture: Texture) -> bool {
        match self.0.write() {
            Ok(mut slot) if slot.is_none() => {
                *slot = Some(Arc::new(texture));
                true
            }
            _ => false,
        }
    }

    pub fn get(&self) -> Option<Arc<Texture>> {
        self.0.read().ok().and_then(|slot| slot.clone())
    }

    pub fn is_loaded(&self) -> bool {
        self.0.read().map(|slot| slot.is_some()).unwrap_or(false)
    }
}
