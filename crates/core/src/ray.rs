//! Ray caster - per-column wall search, seam detection and projection
//!
//! One ray is cast per screen column. Column 0 is the left edge of the view and
//! looks at `heading + fov / 2`; angles sweep right-to-left as the column index
//! grows so the image is not mirrored.
//!
//! The wall search marches along the ray in fixed steps of
//! [`RenderConfig::ray_step`] until it enters a wall cell, leaves the grid, or
//! reaches [`RenderConfig::max_depth`]. Leaving the grid counts as a hit at max
//! depth. At least one step is taken before any cell is tested, so the
//! projection never divides by zero.
//!
//! A hit is flagged as a boundary when one of the two corners of the struck
//! cell nearest to the viewer lies within `BOUNDARY_ANGLE / distance` radians of
//! the ray. This draws thin vertical seams where wall faces meet, getting
//! thinner with distance.

use arrayvec::ArrayVec;

use crate::config::RenderConfig;
use crate::map::WorldMap;
use crate::shade::{floor_shade, wall_shade};
use crate::types::{glyph, Tile, BOUNDARY_ANGLE};
use crate::viewpoint::Viewpoint;

/// Outcome of a single wall search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Always in `(0, max_depth]`.
    pub distance: f64,
    pub is_boundary: bool,
}

/// Casts rays against an immutable map from a fixed viewpoint snapshot.
///
/// Holds no mutable state, so one caster can be shared by all column workers.
#[derive(Debug, Clone, Copy)]
pub struct RayCaster<'a> {
    map: &'a WorldMap,
    view: Viewpoint,
    config: &'a RenderConfig,
}

impl<'a> RayCaster<'a> {
    pub fn new(map: &'a WorldMap, view: Viewpoint, config: &'a RenderConfig) -> Self {
        Self { map, view, config }
    }

    /// Ray angle for a screen column.
    #[inline]
    pub fn ray_angle(&self, column: u16) -> f64 {
        let fov = self.config.fov;
        self.view.heading + fov / 2.0
            - f64::from(column) * fov / f64::from(self.config.screen_width)
    }

    /// March along `angle` until something solid is struck.
    pub fn cast(&self, angle: f64) -> RayHit {
        let (rx, ry) = (angle.sin(), angle.cos());
        let max_depth = self.config.max_depth;
        let step = self.config.ray_step;

        let mut steps: u32 = 0;
        loop {
            steps += 1;
            let distance = f64::from(steps) * step;
            if distance >= max_depth {
                return RayHit {
                    distance: max_depth,
                    is_boundary: false,
                };
            }

            let cx = (self.view.x + rx * distance).floor() as i64;
            let cy = (self.view.y + ry * distance).floor() as i64;

            match self.map.cell_at(cx, cy) {
                Tile::Empty => continue,
                Tile::OutOfBounds => {
                    return RayHit {
                        distance: max_depth,
                        is_boundary: false,
                    }
                }
                Tile::Wall => {
                    return RayHit {
                        distance,
                        is_boundary: self.is_boundary(rx, ry, distance, cx, cy),
                    }
                }
            }
        }
    }

    /// Seam test against the corners of wall cell (cx, cy).
    fn is_boundary(&self, rx: f64, ry: f64, distance: f64, cx: i64, cy: i64) -> bool {
        // (distance to corner, cosine of angle between ray and corner)
        let mut corners: ArrayVec<(f64, f64), 4> = ArrayVec::new();
        for tx in 0..2 {
            for ty in 0..2 {
                let vx = (cx + tx) as f64 - self.view.x;
                let vy = (cy + ty) as f64 - self.view.y;
                let len = (vx * vx + vy * vy).sqrt().max(f64::EPSILON);
                let cos = (rx * vx + ry * vy) / len;
                corners.push((len, cos));
            }
        }
        corners.sort_unstable_by(|a, b| a.0.total_cmp(&b.0));

        let threshold = BOUNDARY_ANGLE / distance;
        corners
            .iter()
            .take(2)
            .any(|&(_, cos)| cos.clamp(-1.0, 1.0).acos() < threshold)
    }

    /// Ceiling and floor rows for a hit distance.
    ///
    /// Rows `<= ceiling` are sky, rows in `(ceiling, floor]` are wall, the rest
    /// is floor. `fov` doubles as the projection scale.
    #[inline]
    pub fn projection(&self, distance: f64) -> (i64, i64) {
        let h = f64::from(self.config.screen_height);
        let ceiling = (h / 2.0 - h * self.config.fov / distance) as i64;
        let floor = i64::from(self.config.screen_height) - ceiling;
        (ceiling, floor)
    }

    /// Fill one column, top to bottom. `out` should be `screen_height` long.
    pub fn cast_column_into(&self, column: u16, out: &mut [char]) -> RayHit {
        let hit = self.cast(self.ray_angle(column));
        let (ceiling, floor) = self.projection(hit.distance);
        let wall = wall_shade(hit.distance, hit.is_boundary, self.config.max_depth);

        for (row, slot) in out.iter_mut().enumerate() {
            let y = row as i64;
            *slot = if y <= ceiling {
                glyph::BLANK
            } else if y <= floor {
                wall
            } else {
                floor_shade(row, self.config.screen_height)
            };
        }
        hit
    }

    /// Every `(row, glyph)` of one column, rows `0..screen_height` in order.
    pub fn cast_column(&self, column: u16) -> Vec<(u16, char)> {
        let mut glyphs = vec![glyph::BLANK; usize::from(self.config.screen_height)];
        self.cast_column_into(column, &mut glyphs);
        (0..self.config.screen_height).zip(glyphs).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn caster<'a>(map: &'a WorldMap, view: Viewpoint, cfg: &'a RenderConfig) -> RayCaster<'a> {
        RayCaster::new(map, view, cfg)
    }

    #[test]
    fn column_angles_sweep_right_to_left() {
        let map = WorldMap::default_map();
        let cfg = RenderConfig::default();
        let rc = caster(&map, Viewpoint::default(), &cfg);
        assert!((rc.ray_angle(0) - cfg.fov / 2.0).abs() < 1e-12);
        assert!(rc.ray_angle(90).abs() < 1e-12);
        assert!(rc.ray_angle(1) < rc.ray_angle(0));
    }

    #[test]
    fn open_space_runs_to_max_depth() {
        let map = WorldMap::parse(&".".repeat(64)).unwrap();
        let cfg = RenderConfig::default();
        // Single 64-wide row, looking along +x (heading pi/2).
        let rc = caster(
            &map,
            Viewpoint::new(0.5, 0.5, std::f64::consts::FRAC_PI_2),
            &cfg,
        );
        let hit = rc.cast(std::f64::consts::FRAC_PI_2);
        assert_eq!(hit.distance, cfg.max_depth);
        assert!(!hit.is_boundary);
    }

    #[test]
    fn leaving_the_grid_clamps_to_max_depth() {
        let map = WorldMap::parse("...\n...\n...").unwrap();
        let cfg = RenderConfig::default();
        let rc = caster(&map, Viewpoint::new(1.5, 1.5, 0.0), &cfg);
        let hit = rc.cast(0.0);
        assert_eq!(hit.distance, cfg.max_depth);
        assert!(!hit.is_boundary);
    }

    #[test]
    fn wall_search_stops_in_first_wall_cell() {
        let map = WorldMap::default_map();
        let cfg = RenderConfig::default();
        // Straight up from (5.5, 5.5) reaches the row-0 border after 4.5 units.
        let rc = caster(&map, Viewpoint::new(5.5, 5.5, std::f64::consts::PI), &cfg);
        let hit = rc.cast(std::f64::consts::PI);
        assert!((hit.distance - 4.6).abs() < 0.1 + 1e-9, "{}", hit.distance);
        assert!(!hit.is_boundary);
    }

    #[test]
    fn projection_is_symmetric_about_the_horizon() {
        let map = WorldMap::default_map();
        let cfg = RenderConfig::default();
        let rc = caster(&map, Viewpoint::default(), &cfg);
        let (ceiling, floor) = rc.projection(8.0);
        assert_eq!(ceiling + floor, i64::from(cfg.screen_height));
        // 60 - 120 * (pi/3) / 8 = 44.29 -> 44
        assert_eq!(ceiling, 44);
    }

    #[test]
    fn cast_column_covers_every_row_once() {
        let map = WorldMap::default_map();
        let cfg = RenderConfig::default();
        let rc = caster(&map, Viewpoint::default(), &cfg);
        for column in [0, 45, 90, 179] {
            let rows = rc.cast_column(column);
            assert_eq!(rows.len(), usize::from(cfg.screen_height));
            for (i, (row, _)) in rows.iter().enumerate() {
                assert_eq!(usize::from(*row), i);
            }
        }
    }
}
