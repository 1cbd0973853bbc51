//! Keyboard polling and quit requests

use macroquad::prelude::*;

use crate::sim::TickInput;

/// Key bound to "move left"
pub const MOVE_LEFT_KEY: KeyCode = KeyCode::A;
/// Key bound to "move right"
pub const MOVE_RIGHT_KEY: KeyCode = KeyCode::D;

/// Result of polling the window once per frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputPoll {
    pub input: TickInput,
    /// Window close was requested
    pub quit: bool,
}

/// Input handler: turns window state into a [`TickInput`]
pub struct InputHandler;

impl InputHandler {
    /// Take over window-close handling so the game loop sees quit requests.
    /// Call once before the first frame.
    pub fn install() {
        prevent_quit();
    }

    /// Read held keys and pending quit for this frame
    pub fn poll() -> InputPoll {
        InputPoll {
            input: TickInput {
                left: is_key_down(MOVE_LEFT_KEY),
                right: is_key_down(MOVE_RIGHT_KEY),
            },
            quit: is_quit_requested(),
        }
    }
}
