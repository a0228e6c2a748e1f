//! Terminal output module.
//!
//! A small rendering layer for terminal output. It renders the core's character
//! frame into a styled framebuffer and flushes it to the terminal backend,
//! rewriting only changed cells after the first frame.

pub mod fb;
pub mod renderer;
pub mod scene_view;

pub use tui_raycaster_core as core;
pub use tui_raycaster_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_diff_into, encode_full_into, PresentStats, TerminalRenderer};
pub use scene_view::{SceneView, Viewport};
