//! World map - immutable grid of wall and empty cells
//!
//! The map is parsed once from an ASCII layout (`#` = wall, `.` = empty) and is
//! never mutated afterwards. Ray casting only ever reads it.
//! Coordinates: (x, y) where x grows to the right and y grows downwards.
//! Lookups outside the grid yield [`Tile::OutOfBounds`] instead of panicking.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::types::{MapCell, Tile};

/// The embedded 32x32 level.
pub const DEFAULT_LAYOUT: &str = concat!(
    "################################\n",
    "#.....................#........#\n",
    "#.....................#........#\n",
    "#.....................#........#\n",
    "#.....................#........#\n",
    "#.....................#........#\n",
    "#.....................#........#\n",
    "#.....................#........#\n",
    "#......######.........#........#\n",
    "#..............................#\n",
    "#..............................#\n",
    "#..............................#\n",
    "#.......................########\n",
    "#.......#......................#\n",
    "#..............................#\n",
    "#..............................#\n",
    "#..............................#\n",
    "#..............................#\n",
    "#..............................#\n",
    "#..............................#\n",
    "#..............................#\n",
    "#..............................#\n",
    "###########....................#\n",
    "#..............................#\n",
    "#.........#....................#\n",
    "#.........#....................#\n",
    "#.........#....................#\n",
    "#.........#....................#\n",
    "#.........#....................#\n",
    "#.........#....................#\n",
    "#.........#....................#\n",
    "################################\n",
);

#[derive(Debug, Error)]
pub enum MapError {
    #[error("map layout is empty")]
    Empty,

    #[error("map row {row} has width {actual}, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("unknown map glyph {glyph:?} at row {row}, column {column}")]
    UnknownGlyph { row: usize, column: usize, glyph: char },

    #[error("failed to read map file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Rectangular tile grid using flat row-major storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorldMap {
    width: usize,
    height: usize,
    cells: Vec<MapCell>,
}

impl WorldMap {
    /// Parse a layout, one row per line.
    ///
    /// Blank lines and trailing whitespace are ignored. All rows must share the
    /// width of the first row.
    pub fn parse(layout: &str) -> Result<Self, MapError> {
        let mut width = None;
        let mut height = 0;
        let mut cells = Vec::new();

        for line in layout.lines().map(str::trim_end).filter(|l| !l.is_empty()) {
            let row = height;
            let mut actual = 0;
            for (column, glyph) in line.chars().enumerate() {
                let cell = MapCell::from_glyph(glyph)
                    .ok_or(MapError::UnknownGlyph { row, column, glyph })?;
                cells.push(cell);
                actual += 1;
            }

            let expected = *width.get_or_insert(actual);
            if actual != expected {
                return Err(MapError::Ragged {
                    row,
                    expected,
                    actual,
                });
            }
            height += 1;
        }

        match width {
            Some(width) if width > 0 => Ok(Self {
                width,
                height,
                cells,
            }),
            _ => Err(MapError::Empty),
        }
    }

    /// Read and parse a layout file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, MapError> {
        let path = path.as_ref();
        let layout = fs::read_to_string(path).map_err(|source| MapError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let map = Self::parse(&layout)?;
        debug!(path = %path.display(), width = map.width, height = map.height, "loaded map");
        Ok(map)
    }

    /// The embedded level.
    pub fn default_map() -> Self {
        // DEFAULT_LAYOUT is a fixed literal covered by tests.
        match Self::parse(DEFAULT_LAYOUT) {
            Ok(map) => map,
            Err(err) => unreachable!("embedded layout is invalid: {err}"),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cells(&self) -> &[MapCell] {
        &self.cells
    }

    #[inline(always)]
    fn index(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return None;
        }
        Some((y as usize) * self.width + (x as usize))
    }

    /// Stored cell at (x, y), `None` outside the grid.
    pub(crate) fn get(&self, x: i64, y: i64) -> Option<MapCell> {
        self.index(x, y).map(|i| self.cells[i])
    }

    /// Tile at (x, y). Never fails.
    #[inline]
    pub fn cell_at(&self, x: i64, y: i64) -> Tile {
        self.get(x, y).map_or(Tile::OutOfBounds, Tile::from)
    }

    /// Wall or out of bounds.
    #[inline]
    pub fn is_solid(&self, x: i64, y: i64) -> bool {
        self.cell_at(x, y).is_solid()
    }

    /// Layout glyphs of row `y`.
    pub fn row_glyphs(&self, y: usize) -> impl Iterator<Item = char> + '_ {
        let start = (y * self.width).min(self.cells.len());
        let end = (start + self.width).min(self.cells.len());
        self.cells[start..end].iter().map(MapCell::glyph)
    }
}

impl Default for WorldMap {
    fn default() -> Self {
        Self::default_map()
    }
}
