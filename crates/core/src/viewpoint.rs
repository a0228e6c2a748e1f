//! Viewpoint - position and heading of the viewer
//!
//! Heading is in radians and is never normalized; only its sine and cosine are
//! read. Heading `0.0` looks along +y, and the forward vector is
//! `(sin(heading), cos(heading))`.
//!
//! Moves are speculative: the destination is computed first and committed only
//! when the destination cell is empty.

use tracing::trace;

use crate::config::RenderConfig;
use crate::map::WorldMap;
use crate::types::{Command, SPAWN_HEADING, SPAWN_X, SPAWN_Y};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewpoint {
    pub x: f64,
    pub y: f64,
    pub heading: f64,
}

impl Default for Viewpoint {
    fn default() -> Self {
        Self::new(SPAWN_X, SPAWN_Y, SPAWN_HEADING)
    }
}

impl Viewpoint {
    pub fn new(x: f64, y: f64, heading: f64) -> Self {
        Self { x, y, heading }
    }

    /// Unit forward vector.
    #[inline]
    pub fn direction(&self) -> (f64, f64) {
        (self.heading.sin(), self.heading.cos())
    }

    /// Integer cell the viewer stands in.
    pub fn cell(&self) -> (i64, i64) {
        (self.x.floor() as i64, self.y.floor() as i64)
    }

    pub fn turn(&mut self, delta: f64) {
        self.heading += delta;
    }

    /// Move by (dx, dy) unless the destination is a wall or off the map.
    ///
    /// Returns `true` if the move was committed.
    pub fn try_move(&mut self, dx: f64, dy: f64, map: &WorldMap) -> bool {
        let nx = self.x + dx;
        let ny = self.y + dy;
        let tile = map.cell_at(nx.floor() as i64, ny.floor() as i64);
        if tile.is_solid() {
            trace!(x = nx, y = ny, ?tile, "move rejected");
            return false;
        }
        self.x = nx;
        self.y = ny;
        true
    }

    /// Apply one frame's command scaled by `elapsed` seconds.
    ///
    /// Returns `true` if position or heading changed.
    pub fn apply(
        &mut self,
        command: Command,
        elapsed: f64,
        config: &RenderConfig,
        map: &WorldMap,
    ) -> bool {
        let turn = config.turn_rate * elapsed;
        let step = config.move_speed * elapsed;
        let (sx, sy) = self.direction();

        match command {
            Command::TurnLeft => {
                self.turn(turn);
                true
            }
            Command::TurnRight => {
                self.turn(-turn);
                true
            }
            Command::MoveForward => self.try_move(sx * step, sy * step, map),
            Command::MoveBackward => self.try_move(-sx * step, -sy * step, map),
        }
    }
}
