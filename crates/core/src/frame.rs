//! Frame composition.
//!
//! [`FrameCompositor::compose`] runs one ray cast per column in parallel, merges
//! the columns into a row-major [`Frame`], then overlays the status line, the
//! minimap and the viewpoint marker, in that order.

use rayon::{
    iter::{IndexedParallelIterator, ParallelIterator},
    slice::ParallelSliceMut,
};

use crate::config::RenderConfig;
use crate::map::WorldMap;
use crate::ray::RayCaster;
use crate::types::glyph;
use crate::viewpoint::Viewpoint;

/// Flat character buffer, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    width: usize,
    height: usize,
    cells: Vec<char>,
}

impl Frame {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![glyph::BLANK; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cells(&self) -> &[char] {
        &self.cells
    }

    /// Resize, keeping the allocation when possible.
    pub fn resize(&mut self, width: usize, height: usize) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        self.cells.resize(width * height, glyph::BLANK);
    }

    #[inline(always)]
    fn idx(&self, x: usize, y: usize) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }

    pub fn get(&self, x: usize, y: usize) -> Option<char> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    /// Out-of-range writes are dropped.
    pub fn set(&mut self, x: usize, y: usize, ch: char) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = ch;
        }
    }

    /// Write `s` from (x, y), truncated at the right edge.
    pub fn put_str(&mut self, x: usize, y: usize, s: &str) {
        for (dx, ch) in s.chars().enumerate() {
            if x + dx >= self.width {
                break;
            }
            self.set(x + dx, y, ch);
        }
    }

    pub fn row(&self, y: usize) -> &[char] {
        if y >= self.height {
            return &[];
        }
        &self.cells[y * self.width..(y + 1) * self.width]
    }

    pub fn to_lines(&self) -> Vec<String> {
        (0..self.height)
            .map(|y| self.row(y).iter().collect())
            .collect()
    }
}

/// Per-frame timing shown on the status line.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameStats {
    /// Seconds since the previous frame.
    pub elapsed: f64,
}

impl FrameStats {
    pub fn new(elapsed: f64) -> Self {
        Self { elapsed }
    }

    pub fn fps(&self) -> u32 {
        if self.elapsed > 0.0 {
            (1.0 / self.elapsed) as u32
        } else {
            0
        }
    }
}

/// Status line text.
pub fn status_line(view: &Viewpoint, stats: FrameStats) -> String {
    format!(
        "X: {:.2}, Y: {:.2}, A: {:.2}, FPS: {}",
        view.x,
        view.y,
        view.heading,
        stats.fps()
    )
}

/// Builds frames, reusing a column-major scratch buffer across calls.
#[derive(Debug, Default)]
pub struct FrameCompositor {
    columns: Vec<char>,
}

impl FrameCompositor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render one full frame into `frame`, resizing it to the configured screen.
    pub fn compose(
        &mut self,
        frame: &mut Frame,
        map: &WorldMap,
        view: &Viewpoint,
        config: &RenderConfig,
        stats: FrameStats,
    ) {
        let w = usize::from(config.screen_width);
        let h = usize::from(config.screen_height);
        frame.resize(w, h);
        if w == 0 || h == 0 {
            return;
        }

        self.cast_columns(map, view, config);

        // Transpose column-major scratch into the row-major frame.
        for (x, column) in self.columns.chunks_exact(h).enumerate() {
            for (y, &ch) in column.iter().enumerate() {
                frame.cells[y * w + x] = ch;
            }
        }

        frame.put_str(0, 0, &status_line(view, stats));
        Self::overlay_map(frame, map);
        Self::overlay_marker(frame, view);
    }

    /// One ray per column. Each worker owns a disjoint `h`-long slice.
    fn cast_columns(&mut self, map: &WorldMap, view: &Viewpoint, config: &RenderConfig) {
        let w = usize::from(config.screen_width);
        let h = usize::from(config.screen_height);
        self.columns.resize(w * h, glyph::BLANK);

        let caster = RayCaster::new(map, *view, config);
        self.columns
            .par_chunks_mut(h)
            .enumerate()
            .for_each(|(x, column)| {
                caster.cast_column_into(x as u16, column);
            });
    }

    /// Minimap at 1:1, one row below the status line.
    fn overlay_map(frame: &mut Frame, map: &WorldMap) {
        for y in 0..map.height() {
            for (x, ch) in map.row_glyphs(y).enumerate() {
                frame.set(x, y + 1, ch);
            }
        }
    }

    fn overlay_marker(frame: &mut Frame, view: &Viewpoint) {
        let (cx, cy) = view.cell();
        if cx < 0 || cy < 0 {
            return;
        }
        frame.set(cx as usize, cy as usize + 1, glyph::MARKER);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_set_ignores_out_of_range() {
        let mut f = Frame::new(3, 2);
        f.set(3, 0, 'x');
        f.set(0, 2, 'x');
        assert!(f.cells().iter().all(|&c| c == ' '));
        f.set(2, 1, 'x');
        assert_eq!(f.get(2, 1), Some('x'));
    }

    #[test]
    fn put_str_truncates_at_edge() {
        let mut f = Frame::new(4, 1);
        f.put_str(1, 0, "abcdef");
        assert_eq!(f.to_lines(), vec![" abc".to_string()]);
    }

    #[test]
    fn fps_guards_zero_elapsed() {
        assert_eq!(FrameStats::new(0.0).fps(), 0);
        assert_eq!(FrameStats::new(0.25).fps(), 4);
    }

    #[test]
    fn status_line_format() {
        let v = Viewpoint::new(5.0, 6.25, -0.5);
        assert_eq!(
            status_line(&v, FrameStats::new(0.5)),
            "X: 5.00, Y: 6.25, A: -0.50, FPS: 2"
        );
    }
}
