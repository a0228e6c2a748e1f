//! Core rendering pipeline - pure, deterministic, and testable
//!
//! This crate turns a tile map and a viewpoint into a frame of characters.
//! It has **no dependencies** on terminals or input devices:
//!
//! - **Deterministic**: Same map, viewpoint and config produce the same frame
//! - **Parallel**: Columns are independent and cast concurrently with `rayon`
//! - **Immutable inputs**: The map and the viewpoint snapshot are read-only
//!   while a frame is being built
//!
//! # Module Structure
//!
//! - [`map`]: Tile grid parsed from an ASCII layout, with an out-of-bounds sentinel
//! - [`viewpoint`]: Position and heading, with collision-checked movement
//! - [`ray`]: Fixed-step wall search, seam detection and projection per column
//! - [`shade`]: Glyph selection for walls (by distance) and floor (by row)
//! - [`frame`]: Character frame and the compositor (status line, minimap, marker)
//! - [`config`]: Screen size, projection and movement parameters
//!
//! # Example
//!
//! ```
//! use tui_raycaster_core::{Frame, FrameCompositor, FrameStats, RenderConfig, Viewpoint, WorldMap};
//!
//! let map = WorldMap::default_map();
//! let config = RenderConfig::default();
//! let view = Viewpoint::default();
//!
//! let mut frame = Frame::new(0, 0);
//! let mut compositor = FrameCompositor::new();
//! compositor.compose(&mut frame, &map, &view, &config, FrameStats::new(1.0 / 60.0));
//!
//! assert_eq!(frame.width(), 180);
//! assert_eq!(frame.height(), 120);
//! assert!(frame.to_lines()[0].starts_with("X: 5.00, Y: 5.00"));
//! ```

pub mod config;
pub mod frame;
pub mod map;
pub mod ray;
pub mod shade;
pub mod viewpoint;

pub use tui_raycaster_types as types;

// Re-export commonly used types for convenience
pub use config::RenderConfig;
pub use frame::{status_line, Frame, FrameCompositor, FrameStats};
pub use map::{MapError, WorldMap, DEFAULT_LAYOUT};
pub use ray::{RayCaster, RayHit};
pub use shade::{floor_shade, wall_shade};
pub use viewpoint::Viewpoint;
