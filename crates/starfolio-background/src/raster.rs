//! Half-block pixel raster backing the [`Surface`] trait in a terminal.
//!
//! Every terminal cell holds two stacked pixels drawn as `▀` with the top
//! pixel as foreground and the bottom pixel as background.

use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use crate::color::{ColorStop, Rgb, Rgba, gradient_at};
use crate::surface::{Paint, Surface, Viewport};

/// Below this pixel radius a disc is drawn as a single coverage-weighted pixel.
const MIN_DISC_RADIUS: f32 = 0.75;

/// A raster of `cols × rows*2` pixels with a logical-unit scale.
#[derive(Debug, Clone)]
pub struct PixelCanvas {
    width: u16,
    height: u16,
    scale: f32,
    pixels: Vec<Rgb>,
    offset: (f32, f32),
}

impl PixelCanvas {
    /// Create a canvas covering `cols × rows` terminal cells.
    /// `scale` is the number of logical units per pixel.
    pub fn new(cols: u16, rows: u16, scale: f32) -> Self {
        let mut canvas = Self {
            width: 0,
            height: 0,
            scale: scale.max(0.01),
            pixels: Vec::new(),
            offset: (0.0, 0.0),
        };
        canvas.resize(cols, rows);
        canvas
    }

    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.width = cols;
        self.height = rows.saturating_mul(2);
        self.pixels = vec![Rgb::BLACK; self.width as usize * self.height as usize];
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Pixel dimensions.
    pub fn dimensions(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    pub fn pixel(&self, x: u16, y: u16) -> Option<Rgb> {
        if x < self.width && y < self.height {
            Some(self.pixels[y as usize * self.width as usize + x as usize])
        } else {
            None
        }
    }

    /// Logical coordinates of the centre of a terminal cell.
    pub fn cell_to_logical(&self, column: u16, row: u16) -> (f32, f32) {
        (
            (column as f32 + 0.5) * self.scale,
            (row as f32 * 2.0 + 1.0) * self.scale,
        )
    }

    fn to_pixel(&self, x: f32, y: f32) -> (f32, f32) {
        (
            (x + self.offset.0) / self.scale,
            (y + self.offset.1) / self.scale,
        )
    }

    fn to_logical(&self, px: f32, py: f32) -> (f32, f32) {
        (
            px * self.scale - self.offset.0,
            py * self.scale - self.offset.1,
        )
    }

    fn blend(&mut self, x: i32, y: i32, color: Rgba) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 || color.a <= 0.0 {
            return;
        }
        let idx = y as usize * self.width as usize + x as usize;
        self.pixels[idx] = self.pixels[idx].blend(color.rgb, color.a);
    }

    /// Intersect a pixel-space box with the canvas, as inclusive pixel ranges.
    fn clip(&self, left: f32, right: f32, top: f32, bottom: f32) -> Option<(i32, i32, i32, i32)> {
        if self.width == 0 || self.height == 0 {
            return None;
        }
        let x0 = left.floor().max(0.0) as i32;
        let x1 = right.ceil().min(self.width as f32 - 1.0) as i32;
        let y0 = top.floor().max(0.0) as i32;
        let y1 = bottom.ceil().min(self.height as f32 - 1.0) as i32;
        (x0 <= x1 && y0 <= y1).then_some((x0, x1, y0, y1))
    }

    fn paint_at(&self, paint: &Paint<'_>, px: f32, py: f32, bounds: (f32, f32, f32)) -> Rgba {
        match paint {
            Paint::Solid(color) => *color,
            Paint::Texture(texture) => {
                let (cx, cy, r) = bounds;
                let u = (px - (cx - r)) / (2.0 * r);
                let v = (py - (cy - r)) / (2.0 * r);
                let rgb = texture.sample(u, v);
                Rgba::opaque(rgb.r, rgb.g, rgb.b)
            }
            Paint::Radial(gradient) => {
                let (lx, ly) = self.to_logical(px, py);
                gradient_at(gradient.stops, gradient.position(lx, ly))
            }
        }
    }
}

impl Surface for PixelCanvas {
    fn viewport(&self) -> Viewport {
        Viewport::new(
            self.width as f32 * self.scale,
            self.height as f32 * self.scale,
        )
    }

    fn clear(&mut self, backdrop: &[ColorStop]) {
        let height = self.height.max(1) as f32;
        for y in 0..self.height as usize {
            let color = gradient_at(backdrop, (y as f32 + 0.5) / height);
            let rgb = Rgb::BLACK.blend(color.rgb, color.a);
            let row = y * self.width as usize;
            self.pixels[row..row + self.width as usize].fill(rgb);
        }
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.offset.0 += dx;
        self.offset.1 += dy;
    }

    fn reset_transform(&mut self) {
        self.offset = (0.0, 0.0);
    }

    fn fill_disc(&mut self, x: f32, y: f32, radius: f32, paint: Paint<'_>) {
        let (cx, cy) = self.to_pixel(x, y);
        let r = radius / self.scale;
        if !cx.is_finite() || !cy.is_finite() || r <= 0.0 {
            return;
        }

        if r < MIN_DISC_RADIUS {
            let coverage = (std::f32::consts::PI * r * r).min(1.0);
            let color = self.paint_at(&paint, cx, cy, (cx, cy, r));
            self.blend(cx.floor() as i32, cy.floor() as i32, color.with_alpha(color.a * coverage));
            return;
        }

        let Some((x0, x1, y0, y1)) = self.clip(cx - r, cx + r, cy - r, cy + r) else {
            return;
        };
        for py in y0..=y1 {
            for px in x0..=x1 {
                let (sx, sy) = (px as f32 + 0.5, py as f32 + 0.5);
                if (sx - cx).powi(2) + (sy - cy).powi(2) <= r * r {
                    let color = self.paint_at(&paint, sx, sy, (cx, cy, r));
                    self.blend(px, py, color);
                }
            }
        }
    }

    fn stroke_line(
        &mut self,
        from: (f32, f32),
        to: (f32, f32),
        width: f32,
        from_color: Rgba,
        to_color: Rgba,
    ) {
        let (x0, y0) = self.to_pixel(from.0, from.1);
        let (x1, y1) = self.to_pixel(to.0, to.1);
        if ![x0, y0, x1, y1, width].iter().all(|v| v.is_finite()) {
            return;
        }

        // Pixels whose centre lies within half the width of the segment.
        let half = (width / self.scale / 2.0).max(0.5);
        let Some((bx0, bx1, by0, by1)) = self.clip(
            x0.min(x1) - half,
            x0.max(x1) + half,
            y0.min(y1) - half,
            y0.max(y1) + half,
        ) else {
            return;
        };
        let (dx, dy) = (x1 - x0, y1 - y0);
        let length_sq = dx * dx + dy * dy;
        for py in by0..=by1 {
            for px in bx0..=bx1 {
                let (sx, sy) = (px as f32 + 0.5, py as f32 + 0.5);
                let t = if length_sq > 0.0 {
                    (((sx - x0) * dx + (sy - y0) * dy) / length_sq).clamp(0.0, 1.0)
                } else {
                    0.0
                };
                let (nx, ny) = (x0 + dx * t, y0 + dy * t);
                if (sx - nx).powi(2) + (sy - ny).powi(2) <= half * half {
                    self.blend(px, py, from_color.lerp(to_color, t));
                }
            }
        }
    }
}

impl Widget for &PixelCanvas {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for row in 0..area.height.min(self.height / 2) {
            for col in 0..area.width.min(self.width) {
                let top = self.pixels[(row as usize * 2) * self.width as usize + col as usize];
                let bottom =
                    self.pixels[(row as usize * 2 + 1) * self.width as usize + col as usize];
                if let Some(cell) = buf.cell_mut((area.x + col, area.y + row)) {
                    cell.set_symbol("▀").set_fg(top.into()).set_bg(bottom.into());
                }
            }
        }
    }
}
