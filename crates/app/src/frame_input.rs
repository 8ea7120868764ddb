//! Keyboard input collection for one rendered frame.

use macroquad::prelude::{KeyCode, is_key_down, is_key_pressed};

const MOVE_KEYS: [KeyCode; 8] = [
    KeyCode::Left,
    KeyCode::Right,
    KeyCode::Up,
    KeyCode::Down,
    KeyCode::A,
    KeyCode::D,
    KeyCode::W,
    KeyCode::S,
];

#[derive(Default)]
pub struct FrameInput {
    /// Movement keys held this frame; a held key keeps stepping every controlled turn.
    pub keys_down: Vec<KeyCode>,
    pub quit: bool,
}

pub fn capture_frame_input() -> FrameInput {
    let keys_down = MOVE_KEYS.into_iter().filter(|key| is_key_down(*key)).collect();
    FrameInput { keys_down, quit: is_key_pressed(KeyCode::Escape) }
}
