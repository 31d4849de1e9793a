//! Planets on circular orbits around the viewport centre.

use rand::Rng;

use crate::color::{ColorStop, Rgba};
use crate::surface::{Paint, RadialGradient, Surface, TextureSlot, Viewport};

/// Fill used until the planet's texture has loaded.
pub const PLACEHOLDER: Rgba = Rgba::opaque(0x33, 0x33, 0x33);

/// Fake spherical shading laid over the planet disc.
const SHADING: [ColorStop; 3] = [
    ColorStop::new(0.0, Rgba::new(255, 255, 255, 0.1)),
    ColorStop::new(0.7, Rgba::new(0, 0, 0, 0.4)),
    ColorStop::new(1.0, Rgba::new(0, 0, 0, 0.9)),
];

/// Static description of one orbiting body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanetSpec {
    pub name: &'static str,
    /// Orbit radius as a fraction of the viewport's shorter side.
    pub orbit_factor: f32,
    /// Body radius in logical units.
    pub radius: f32,
    /// Radians per frame.
    pub orbit_speed: f32,
    pub texture_url: &'static str,
}

pub const PLANETS: [PlanetSpec; 4] = [
    PlanetSpec {
        name: "Venus",
        orbit_factor: 0.3,
        radius: 30.0,
        orbit_speed: 0.0015,
        texture_url: "https://upload.wikimedia.org/wikipedia/commons/thumb/e/e5/Venus-real_color.jpg/480px-Venus-real_color.jpg",
    },
    PlanetSpec {
        name: "Earth",
        orbit_factor: 0.45,
        radius: 40.0,
        orbit_speed: 0.001,
        texture_url: "https://upload.wikimedia.org/wikipedia/commons/thumb/2/23/Blue_Marble_2002.png/480px-Blue_Marble_2002.png",
    },
    PlanetSpec {
        name: "Mars",
        orbit_factor: 0.6,
        radius: 25.0,
        orbit_speed: 0.0008,
        texture_url: "https://upload.wikimedia.org/wikipedia/commons/thumb/0/02/OSIRIS_Mars_true_color.jpg/480px-OSIRIS_Mars_true_color.jpg",
    },
    PlanetSpec {
        name: "Jupiter",
        orbit_factor: 0.8,
        radius: 60.0,
        orbit_speed: 0.0004,
        texture_url: "https://upload.wikimedia.org/wikipedia/commons/thumb/e/e2/Jupiter.jpg/480px-Jupiter.jpg",
    },
];

/// An orbiting body.
///
/// The orbit radius is fixed when the planet is created; only the centre
/// follows the viewport.
#[derive(Debug, Clone)]
pub struct Planet {
    pub name: &'static str,
    center: (f32, f32),
    orbit_radius: f32,
    radius: f32,
    angle: f32,
    orbit_speed: f32,
    texture: TextureSlot,
}

impl Planet {
    pub fn new<R: Rng + ?Sized>(
        spec: &PlanetSpec,
        viewport: Viewport,
        texture: TextureSlot,
        rng: &mut R,
    ) -> Self {
        Self {
            name: spec.name,
            center: viewport.center(),
            orbit_radius: viewport.min_side() * spec.orbit_factor,
            radius: spec.radius,
            angle: rng.random::<f32>() * std::f32::consts::TAU,
            orbit_speed: spec.orbit_speed,
            texture,
        }
    }

    pub fn center(&self) -> (f32, f32) {
        self.center
    }

    pub fn orbit_radius(&self) -> f32 {
        self.orbit_radius
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn is_loaded(&self) -> bool {
        self.texture.is_loaded()
    }

    /// Advance one frame. The angle accumulates without wrapping.
    pub fn update(&mut self, viewport: Viewport) {
        self.angle += self.orbit_speed;
        self.center = viewport.center();
    }

    /// Current position on the orbit circle.
    pub fn position(&self) -> (f32, f32) {
        (
            self.center.0 + self.angle.cos() * self.orbit_radius,
            self.center.1 + self.angle.sin() * self.orbit_radius,
        )
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        let (x, y) = self.position();
        let r = self.radius;

        match self.texture.get() {
            Some(texture) => surface.fill_disc(x, y, r, Paint::Texture(&texture)),
            None => surface.fill_disc(x, y, r, Paint::Solid(PLACEHOLDER)),
        }

        let shading = RadialGradient {
            inner: (x - r * 0.3, y - r * 0.3, r * 0.1),
            outer: (x, y, r),
            stops: &SHADING,
        };
        surface.fill_disc(x, y, r, Paint::Radial(shading));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;
    use crate::surface::Texture;
    use rand::{SeedableRng, rngs::StdRng};

    const VIEW: Viewport = Viewport::new(1600.0, 900.0);

    fn planets(rng: &mut StdRng) -> Vec<Planet> {
        PLANETS
            .iter()
            .map(|spec| Planet::new(spec, VIEW, TextureSlot::new(), rng))
            .collect()
    }

    #[test]
    fn test_orbit_radius_from_viewport() {
        let mut rng = StdRng::seed_from_u64(5);
        let expected = [270.0, 405.0, 540.0, 720.0];
        for (planet, want) in planets(&mut rng).iter().zip(expected) {
            assert!((planet.orbit_radius() - want).abs() < 1e-3);
        }
    }

    #[test]
    fn test_position_stays_on_orbit_circle() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut planets = planets(&mut rng);
        for _ in 0..10_000 {
            for p in &mut planets {
                p.update(VIEW);
                let (x, y) = p.position();
                let (cx, cy) = p.center();
                let dist = ((x - cx).powi(2) + (y - cy).powi(2)).sqrt();
                assert!((dist - p.orbit_radius()).abs() < 1e-3 * p.orbit_radius());
            }
        }
    }

    #[test]
    fn test_angle_increases_monotonically() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut planet = Planet::new(&PLANETS[0], VIEW, TextureSlot::new(), &mut rng);
        let start = planet.angle();
        planet.update(VIEW);
        assert!(planet.angle() > start);
    }

    #[test]
    fn test_resize_recenters_without_changing_orbit() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut planet = Planet::new(&PLANETS[1], VIEW, TextureSlot::new(), &mut rng);
        let radius = planet.orbit_radius();
        planet.update(Viewport::new(800.0, 600.0));
        assert_eq!(planet.center(), (400.0, 300.0));
        assert_eq!(planet.orbit_radius(), radius);
    }

    #[test]
    fn test_loaded_flag_follows_slot() {
        let mut rng = StdRng::seed_from_u64(4);
        let slot = TextureSlot::new();
        let planet = Planet::new(&PLANETS[2], VIEW, slot.clone(), &mut rng);
        assert!(!planet.is_loaded());
        slot.fill(Texture::new(1, 1, vec![Rgb::new(200, 80, 40)]).unwrap());
        assert!(planet.is_loaded());
    }
}
