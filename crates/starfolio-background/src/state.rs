//! Background animation state management.

use ratatui::Frame;
use starfolio_core::BackgroundStyle;
use tracing::debug;

use crate::animations::planet::PLANETS;
use crate::animations::twinkle::TwinkleField;
use crate::raster::PixelCanvas;
use crate::scene::Scene;
use crate::surface::{Surface, TextureSlot};

/// Default number of logical units per raster pixel.
pub const DEFAULT_SCALE: f32 = 8.0;

/// Background animation state, owned by the mounted view.
#[derive(Debug)]
pub struct BackgroundState {
    canvas: PixelCanvas,
    /// Built lazily on the first cosmos frame, once the area is known.
    scene: Option<Scene>,
    twinkle: Option<TwinkleField>,
    textures: Vec<TextureSlot>,
    seed: u64,
    last_width: u16,
    last_height: u16,
}

impl Default for BackgroundState {
    fn default() -> Self {
        Self::new(DEFAULT_SCALE, None)
    }
}

impl BackgroundState {
    /// Create a new background state. Without a seed, the clock is used.
    pub fn new(scale: f32, seed: Option<u64>) -> Self {
        use std::time::{SystemTime, UNIX_EPOCH};

        let seed = seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(0)
        });

        Self {
            canvas: PixelCanvas::new(0, 0, scale),
            scene: None,
            twinkle: None,
            textures: PLANETS.iter().map(|_| TextureSlot::new()).collect(),
            seed,
            last_width: 0,
            last_height: 0,
        }
    }

    /// Texture slots for the planets, in [`PLANETS`] order.
    pub fn texture_slots(&self) -> &[TextureSlot] {
        &self.textures
    }

    pub fn scene(&self) -> Option<&Scene> {
        self.scene.as_ref()
    }

    /// Forward a pointer position in terminal cells to the parallax tracker.
    pub fn pointer_moved(&mut self, column: u16, row: u16) {
        let (x, y) = self.canvas.cell_to_logical(column, row);
        if let Some(scene) = self.scene.as_mut() {
            scene.pointer_moved(x, y);
        }
    }

    /// Advance and render one frame of the background.
    pub fn render(&mut self, frame: &mut Frame, style: BackgroundStyle, elapsed_ms: u64) {
        if matches!(style, BackgroundStyle::None | BackgroundStyle::Auto) {
            return;
        }

        let area = frame.area();
        if area.width == 0 || area.height == 0 {
            return;
        }

        let dimensions_changed = area.width != self.last_width || area.height != self.last_height;
        if dimensions_changed {
            self.canvas.resize(area.width, area.height);
            self.last_width = area.width;
            self.last_height = area.height;
            if let Some(scene) = self.scene.as_mut() {
                scene.resize(self.canvas.viewport());
            }
            debug!(width = area.width, height = area.height, "background resized");
        }

        match style {
            BackgroundStyle::Cosmos => {
                let viewport = self.canvas.viewport();
                let scene = self
                    .scene
                    .get_or_insert_with(|| Scene::new(viewport, self.seed, &self.textures));
                scene.frame(&mut self.canvas);
            }
            BackgroundStyle::Twinkle => {
                let seed = self.seed;
                let field = self.twinkle.get_or_insert_with(|| {
                    use rand::SeedableRng;
                    TwinkleField::new(&mut rand::rngs::StdRng::seed_from_u64(seed))
                });
                field.draw(&mut self.canvas, elapsed_ms);
            }
            BackgroundStyle::None | BackgroundStyle::Auto => return,
        }

        frame.render_widget(&self.canvas, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn test_cosmos_scene_created_on_first_frame() {
        let mut state = BackgroundState::new(8.0, Some(7));
        assert!(state.scene().is_none());

        let mut terminal = Terminal::new(TestBackend::new(40, 12)).unwrap();
        terminal
            .draw(|frame| state.render(frame, BackgroundStyle::Cosmos, 0))
            .unwrap();

        let scene = state.scene().expect("scene built");
        assert_eq!(scene.viewport().width, 40.0 * 8.0);
        assert_eq!(scene.viewport().height, 24.0 * 8.0);
        assert_eq!(terminal.backend().buffer()[(0, 0)].symbol(), "▀");
    }

    #[test]
    fn test_none_style_leaves_buffer_untouched() {
        let mut state = BackgroundState::new(8.0, Some(7));
        let mut terminal = Terminal::new(TestBackend::new(10, 4)).unwrap();
        terminal
            .draw(|frame| state.render(frame, BackgroundStyle::None, 0))
            .unwrap();
        assert_eq!(terminal.backend().buffer()[(0, 0)].symbol(), " ");
    }

    #[test]
    fn test_resize_keeps_scene() {
        let mut state = BackgroundState::new(8.0, Some(7));
        let mut terminal = Terminal::new(TestBackend::new(40, 12)).unwrap();
        terminal
            .draw(|frame| state.render(frame, BackgroundStyle::Cosmos, 0))
            .unwrap();
        let radius = state.scene().unwrap().stars()[0].radius;

        terminal.backend_mut().resize(20, 6);
        terminal
            .draw(|frame| state.render(frame, BackgroundStyle::Cosmos, 16))
            .unwrap();

        let scene = state.scene().unwrap();
        assert_eq!(scene.viewport().width, 20.0 * 8.0);
        assert_eq!(scene.stars()[0].radius, radius);
    }

    #[test]
    fn test_texture_slots_match_planets() {
        let state = BackgroundState::default();
        assert_eq!(state.texture_slots().len(), PLANETS.len());
        assert!(state.texture_slots().iter().all(|s| !s.is_loaded()));
    }
}
