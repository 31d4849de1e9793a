//! The cosmos scene: entity pool, per-frame update and draw order.

use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::debug;

use crate::animations::comet::{Comet, SPAWN_PROBABILITY};
use crate::animations::planet::{PLANETS, Planet};
use crate::animations::pointer::Pointer;
use crate::animations::star::Star;
use crate::color::{ColorStop, Rgba};
use crate::surface::{Surface, TextureSlot, Viewport};

pub const STAR_COUNT: usize = 200;
pub const COMET_POOL: usize = 3;

/// Deep-space gradient, darkened by a 20% black overlay.
const BACKDROP: [ColorStop; 3] = [
    ColorStop::new(0.0, Rgba::opaque(9, 12, 20)),
    ColorStop::new(0.5, Rgba::opaque(15, 12, 28)),
    ColorStop::new(1.0, Rgba::opaque(21, 13, 30)),
];

/// Stars, comets and planets with pointer parallax.
///
/// Entities are created once; resizing recentres the orbits but never reseeds.
#[derive(Debug)]
pub struct Scene {
    viewport: Viewport,
    stars: Vec<Star>,
    comets: [Comet; COMET_POOL],
    planets: Vec<Planet>,
    pointer: Pointer,
    rng: StdRng,
    /// Simulation steps taken since creation.
    steps: u64,
}

impl Scene {
    /// Build a scene. `textures` are matched to planets in order; missing
    /// slots get a fresh empty one.
    pub fn new(viewport: Viewport, seed: u64, textures: &[TextureSlot]) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let stars = (0..STAR_COUNT)
            .map(|_| Star::random(&mut rng, viewport))
            .collect();
        let planets = PLANETS
            .iter()
            .enumerate()
            .map(|(i, spec)| {
                let slot = textures.get(i).cloned().unwrap_or_default();
                Planet::new(spec, viewport, slot, &mut rng)
            })
            .collect();

        Self {
            viewport,
            stars,
            comets: Default::default(),
            planets,
            pointer: Pointer::centered(viewport),
            rng,
            steps: 0,
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Set the parallax target from a pointer position in logical units.
    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        self.pointer.set_target(x, y);
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn comets(&self) -> &[Comet] {
        &self.comets
    }

    pub fn planets(&self) -> &[Planet] {
        &self.planets
    }

    pub fn pointer(&self) -> &Pointer {
        &self.pointer
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn active_comets(&self) -> usize {
        self.comets.iter().filter(|c| c.is_active()).count()
    }

    /// Advance every entity by one frame.
    pub fn step(&mut self) {
        let viewport = self.viewport;
        self.steps += 1;
        self.pointer.update();

        for star in &mut self.stars {
            star.update(viewport);
        }
        for planet in &mut self.planets {
            planet.update(viewport);
        }
        for comet in &mut self.comets {
            if !comet.is_active() && self.rng.random_bool(SPAWN_PROBABILITY) {
                comet.spawn(&mut self.rng, viewport);
                debug!(x = comet.x, speed = comet.speed, "comet launched");
            }
            comet.update(viewport);
        }
    }

    /// Draw the current state: stars and planets under the parallax
    /// translation, then comets on top without it.
    pub fn draw(&self, surface: &mut dyn Surface) {
        surface.reset_transform();
        surface.clear(&BACKDROP);

        let (dx, dy) = self.pointer.parallax(self.viewport);
        surface.translate(dx, dy);
        for star in &self.stars {
            star.draw(surface);
        }
        for planet in &self.planets {
            planet.draw(surface);
        }
        surface.reset_transform();

        for comet in &self.comets {
            comet.draw(surface);
        }
    }

    /// One full frame: update, then draw.
    pub fn frame(&mut self, surface: &mut dyn Surface) {
        self.step();
        self.draw(surface);
    }
}
