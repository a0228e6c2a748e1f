//! SceneView: maps a character [`Frame`] into a styled terminal framebuffer.
//!
//! This module is pure (no I/O). Styling is picked per region: the status row,
//! the minimap rectangle below it, and the ray-cast scene everywhere else.
//! Frames larger than the terminal are clipped at the right and bottom.

use crate::core::Frame;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::glyph;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneView {
    /// Minimap size in cells (drawn from row 1, column 0).
    map_width: usize,
    map_height: usize,
}

impl SceneView {
    pub fn new(map_width: usize, map_height: usize) -> Self {
        Self {
            map_width,
            map_height,
        }
    }

    /// Render a frame into an existing framebuffer sized to `viewport`.
    ///
    /// Cells of the viewport not covered by the frame are blank.
    pub fn render_into(&self, frame: &Frame, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let w = frame.width().min(usize::from(viewport.width));
        let h = frame.height().min(usize::from(viewport.height));
        for y in 0..h {
            for (x, &ch) in frame.row(y)[..w].iter().enumerate() {
                let style = self.style_for(x, y, ch);
                fb.set(x as u16, y as u16, Cell::new(ch, style));
            }
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, frame: &Frame, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(frame, viewport, &mut fb);
        fb
    }

    fn in_minimap(&self, x: usize, y: usize) -> bool {
        x < self.map_width && y >= 1 && y <= self.map_height
    }

    fn style_for(&self, x: usize, y: usize, ch: char) -> CellStyle {
        if self.in_minimap(x, y) {
            return minimap_style(ch);
        }
        if y == 0 && !glyph::WALL.contains(&ch) && ch != glyph::SEAM {
            return CellStyle::fg(Rgb::new(255, 255, 255)).bold();
        }
        scene_style(ch)
    }
}

fn minimap_style(ch: char) -> CellStyle {
    match ch {
        glyph::MARKER => CellStyle::fg(Rgb::new(255, 210, 60)).bold(),
        glyph::MAP_WALL => CellStyle::fg(Rgb::grey(170)),
        _ => CellStyle::fg(Rgb::grey(90)).dim(),
    }
}

fn scene_style(ch: char) -> CellStyle {
    if let Some(level) = glyph::WALL.iter().position(|&g| g == ch) {
        // Nearest wall is brightest.
        return CellStyle::fg(Rgb::grey(230 - 40 * level as u8));
    }
    if let Some(level) = glyph::FLOOR.iter().position(|&g| g == ch) {
        return CellStyle::fg(Rgb::new(150 - 20 * level as u8, 110 - 15 * level as u8, 70));
    }
    if ch == glyph::SEAM {
        return CellStyle::fg(Rgb::new(255, 255, 255)).bold();
    }
    CellStyle::default()
}
