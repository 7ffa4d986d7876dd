//! Keyboard input handling

use hockey_core::Keys;

/// Direction a browser key name controls, if any
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" | "a" | "A" => Some(Direction::Left),
            "ArrowRight" | "d" | "D" => Some(Direction::Right),
            "ArrowUp" | "w" | "W" => Some(Direction::Up),
            "ArrowDown" | "s" | "S" => Some(Direction::Down),
            _ => None,
        }
    }
}

/// Set or clear the held flag for `key`. Returns false for unmapped keys.
pub fn set_key(keys: &mut Keys, key: &str, held: bool) -> bool {
    let Some(direction) = Direction::from_key(key) else {
        return false;
    };
    match direction {
        Direction::Left => keys.left = held,
        Direction::Right => keys.right = held,
        Direction::Up => keys.up = held,
        Direction::Down => keys.down = held,
    }
    true
}

/// Handle key down event
pub fn handle_key_down(keys: &mut Keys, key: &str) -> bool {
    set_key(keys, key, true)
}

/// Handle key up event
pub fn handle_key_up(keys: &mut Keys, key: &str) -> bool {
    set_key(keys, key, false)
}
