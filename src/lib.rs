//! TUI raycaster (workspace facade crate).
//!
//! Re-exports the member crates as `tui_raycaster::{core,input,term,types}` so the
//! binary, integration tests and benches share one import surface.

pub mod logging;

pub use tui_raycaster_core as core;
pub use tui_raycaster_input as input;
pub use tui_raycaster_term as term;
pub use tui_raycaster_types as types;
