//! Once-per-frame input sampling.
//!
//! At most one terminal event is consumed per frame. A second key pressed
//! during the same frame stays queued in the terminal and is seen next frame.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use crate::map::{command_for_key, should_quit};
use crate::types::Command;

/// What the render loop should do with this frame's input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameInput {
    /// Nothing actionable; the viewpoint carries forward unchanged.
    Idle,
    Command(Command),
    Resized(u16, u16),
    Quit,
}

/// Classify a single terminal event.
pub fn classify(ev: Event) -> FrameInput {
    match ev {
        Event::Key(key) => match key.kind {
            // Repeats are accepted: holding a key keeps the viewer moving.
            KeyEventKind::Press | KeyEventKind::Repeat => {
                if should_quit(key) {
                    FrameInput::Quit
                } else {
                    command_for_key(key).map_or(FrameInput::Idle, FrameInput::Command)
                }
            }
            KeyEventKind::Release => FrameInput::Idle,
        },
        Event::Resize(w, h) => FrameInput::Resized(w, h),
        _ => FrameInput::Idle,
    }
}

/// Wait up to `timeout` for one event and classify it.
///
/// A zero timeout makes this a pure non-blocking check.
pub fn sample(timeout: Duration) -> Result<FrameInput> {
    if !event::poll(timeout)? {
        return Ok(FrameInput::Idle);
    }
    Ok(classify(event::read()?))
}

/// Wait up to `timeout` until input is pending, without consuming it.
///
/// Used to idle out the rest of a frame budget while staying responsive.
pub fn wait_for_input(timeout: Duration) -> Result<bool> {
    Ok(event::poll(timeout)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventState, KeyModifiers};

    fn key(code: KeyCode, kind: KeyEventKind) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        })
    }

    #[test]
    fn press_maps_to_command() {
        assert_eq!(
            classify(key(KeyCode::Char('w'), KeyEventKind::Press)),
            FrameInput::Command(Command::MoveForward)
        );
        assert_eq!(
            classify(key(KeyCode::Char('a'), KeyEventKind::Repeat)),
            FrameInput::Command(Command::TurnLeft)
        );
    }

    #[test]
    fn release_and_unknown_keys_are_idle() {
        assert_eq!(
            classify(key(KeyCode::Char('w'), KeyEventKind::Release)),
            FrameInput::Idle
        );
        assert_eq!(
            classify(key(KeyCode::Char('z'), KeyEventKind::Press)),
            FrameInput::Idle
        );
        assert_eq!(classify(Event::FocusGained), FrameInput::Idle);
    }

    #[test]
    fn quit_and_resize() {
        assert_eq!(
            classify(key(KeyCode::Char('q'), KeyEventKind::Press)),
            FrameInput::Quit
        );
        assert_eq!(classify(Event::Resize(100, 40)), FrameInput::Resized(100, 40));
    }
}
