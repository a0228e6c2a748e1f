//! Core types module - shared constants, glyphs and commands
//!
//! This module defines the fundamental types used throughout the renderer.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (ray casting, terminal output, input mapping).
//!
//! # Screen and Map Dimensions
//!
//! - **Screen**: 180 columns x 120 rows of characters
//! - **Map**: 32 x 32 cells, indexed `(x, y)` with `y` growing downwards
//! - **Spawn**: `(5.0, 5.0)` facing heading `0.0` (looking along +y)
//!
//! # Projection Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FOV` | π/3 | Horizontal sweep, also the projection scale |
//! | `MAX_DEPTH` | 16.0 | Farthest distance a ray is traced |
//! | `RAY_STEP` | 0.1 | Fixed marching step of the wall search |
//! | `BOUNDARY_ANGLE` | 0.03 | Seam threshold, divided by hit distance |
//!
//! # Movement
//!
//! Movement is scaled by the elapsed frame time in seconds:
//!
//! - `MOVE_SPEED`: 25 world units per second along the heading
//! - `TURN_RATE`: 10 radians per second
//!
//! # Examples
//!
//! ```
//! use tui_raycaster_types::{MapCell, Tile, MAP_WIDTH, SCREEN_WIDTH};
//!
//! assert_eq!(MapCell::from_glyph('#'), Some(MapCell::Wall));
//! assert_eq!(Tile::from(MapCell::Wall), Tile::Wall);
//!
//! assert!(Tile::OutOfBounds.is_solid());
//! assert!(!Tile::Empty.is_solid());
//!
//! assert_eq!(SCREEN_WIDTH, 180);
//! assert_eq!(MAP_WIDTH, 32);
//! ```

/// Output width in character columns.
pub const SCREEN_WIDTH: u16 = 180;

/// Output height in character rows.
pub const SCREEN_HEIGHT: u16 = 120;

/// Embedded map width in cells.
pub const MAP_WIDTH: usize = 32;

/// Embedded map height in cells.
pub const MAP_HEIGHT: usize = 32;

/// Field of view in radians.
pub const FOV: f64 = std::f64::consts::PI / 3.0;

/// Max ray depth in world units.
pub const MAX_DEPTH: f64 = 16.0;

/// Marching step of the wall search.
pub const RAY_STEP: f64 = 0.1;

/// Seam threshold numerator (radians times distance).
pub const BOUNDARY_ANGLE: f64 = 0.03;

/// World units per second.
pub const MOVE_SPEED: f64 = 25.0;

/// Radians per second.
pub const TURN_RATE: f64 = 10.0;

/// Target frame budget in milliseconds (~60 FPS).
pub const FRAME_MS: u64 = 16;

/// Upper bound on a single frame's elapsed time in milliseconds.
pub const MAX_FRAME_DT_MS: u64 = 100;

/// Spawn position and heading.
pub const SPAWN_X: f64 = 5.0;
pub const SPAWN_Y: f64 = 5.0;
pub const SPAWN_HEADING: f64 = 0.0;

/// Glyph palette.
pub mod glyph {
    /// Sky and anything past max depth.
    pub const BLANK: char = ' ';
    /// Vertical seam between wall faces.
    pub const SEAM: char = '|';
    /// Wall shades, nearest first.
    pub const WALL: [char; 4] = ['\u{2588}', '\u{2593}', '\u{2592}', '\u{2591}'];
    /// Floor shades, farthest (dimmest) first.
    pub const FLOOR: [char; 4] = ['#', 'x', '-', '.'];
    /// Map glyphs.
    pub const MAP_WALL: char = '#';
    pub const MAP_EMPTY: char = '.';
    /// Viewpoint marker on the minimap.
    pub const MARKER: char = 'P';
}

/// Persistent map cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MapCell {
    Wall,
    Empty,
}

impl MapCell {
    /// Parse a layout glyph (`#` or `.`).
    pub fn from_glyph(ch: char) -> Option<Self> {
        match ch {
            glyph::MAP_WALL => Some(MapCell::Wall),
            glyph::MAP_EMPTY => Some(MapCell::Empty),
            _ => None,
        }
    }

    pub fn glyph(&self) -> char {
        match self {
            MapCell::Wall => glyph::MAP_WALL,
            MapCell::Empty => glyph::MAP_EMPTY,
        }
    }
}

/// Result of a map lookup.
///
/// `OutOfBounds` is a value, not an error. Callers treat it like `Wall`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    Wall,
    Empty,
    OutOfBounds,
}

impl Tile {
    /// Blocks movement and terminates rays.
    pub fn is_solid(&self) -> bool {
        !matches!(self, Tile::Empty)
    }
}

impl From<MapCell> for Tile {
    fn from(cell: MapCell) -> Self {
        match cell {
            MapCell::Wall => Tile::Wall,
            MapCell::Empty => Tile::Empty,
        }
    }
}

/// Movement commands sampled once per frame.
///
/// "No command" is `Option::<Command>::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    TurnLeft,
    TurnRight,
    MoveForward,
    MoveBackward,
}
