//! Shade selection.
//!
//! Pure functions: walls shade by `(distance, is_boundary)`, floors by screen
//! row only. The floor gradient is deliberately inverted (far rows are dense).

use crate::types::glyph;

/// Glyph for a wall hit.
pub fn wall_shade(distance: f64, is_boundary: bool, max_depth: f64) -> char {
    if is_boundary {
        glyph::SEAM
    } else if distance < max_depth / 4.0 {
        glyph::WALL[0]
    } else if distance < max_depth / 3.0 {
        glyph::WALL[1]
    } else if distance < max_depth / 2.0 {
        glyph::WALL[2]
    } else if distance < max_depth {
        glyph::WALL[3]
    } else {
        glyph::BLANK
    }
}

/// Glyph for a floor row.
pub fn floor_shade(row: usize, screen_height: u16) -> char {
    let half = f64::from(screen_height) / 2.0;
    let b = 1.0 - (row as f64 - half) / half;

    if b < 0.25 {
        glyph::FLOOR[0]
    } else if b < 0.5 {
        glyph::FLOOR[1]
    } else if b < 0.75 {
        glyph::FLOOR[2]
    } else if b < 0.9 {
        glyph::FLOOR[3]
    } else {
        glyph::BLANK
    }
}
