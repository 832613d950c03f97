//! Keyboard snapshot handed to the core once per frame

/// Logical keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
}

/// Anything that can answer "is this key held right now?"
pub trait KeySnapshot {
    fn is_pressed(&self, key: Key) -> bool;
}

/// Plain keyboard state captured at the start of a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyState {
    pub up: bool,
    pub down: bool,
}

impl KeyState {
    pub fn new(up: bool, down: bool) -> Self {
        Self { up, down }
    }

    /// Movement direction: -1 = up, 0 = stop, 1 = down
    pub fn dir(&self) -> i8 {
        self.down as i8 - self.up as i8
    }
}

impl KeySnapshot for KeyState {
    fn is_pressed(&self, key: Key) -> bool {
        match key {
            Key::Up => self.up,
            Key::Down => self.down,
        }
    }
}
