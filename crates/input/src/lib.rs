//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::Command`] and samples at
//! most one command per frame without blocking past the frame budget.

pub mod map;
pub mod sample;

pub use tui_raycaster_types as types;

pub use map::{command_for_key, should_quit};
pub use sample::{classify, sample, wait_for_input, FrameInput};
