//! Background animation rendering for the starfolio portfolio.
//!
//! Two styles are provided: a cosmos scene (drifting stars, pooled comets
//! and textured planets on orbits, with pointer parallax) and a twinkling
//! star field. Both draw through the [`Surface`] trait onto a half-block
//! pixel raster sized to the terminal.

mod animations;
mod color;
mod raster;
mod scene;
mod state;
mod surface;

pub use animations::comet::Comet;
pub use animations::planet::{PLACEHOLDER, PLANETS, Planet, PlanetSpec};
pub use animations::pointer::Pointer;
pub use animations::star::Star;
pub use animations::twinkle::{TwinkleField, TwinkleStar};
pub use color::{ColorStop, Rgb, Rgba};
pub use raster::PixelCanvas;
pub use scene::{COMET_POOL, STAR_COUNT, Scene};
pub use state::{BackgroundState, DEFAULT_SCALE};
pub use surface::{Paint, RadialGradient, Surface, Texture, TextureSlot, Viewport};
