//! Input feed consumed by the simulation
//!
//! The host binds physical keys to logical roles and queues events here;
//! the core drains the queue once at the start of every tick.

use crate::components::{PaddleKey, Side};

/// Logical key roles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    LeftUp,
    LeftDown,
    RightUp,
    RightDown,
    Start,
    Cancel,
}

impl Key {
    /// Bind a host key name to a logical role.
    ///
    /// W/S drive the left paddle, the arrow keys the right one, Escape
    /// cancels and any other key serves.
    pub fn from_key_name(name: &str) -> Option<Key> {
        match name {
            "" => None,
            "w" | "W" => Some(Key::LeftUp),
            "s" | "S" => Some(Key::LeftDown),
            "ArrowUp" => Some(Key::RightUp),
            "ArrowDown" => Some(Key::RightDown),
            "Escape" => Some(Key::Cancel),
            _ => Some(Key::Start),
        }
    }

    /// The paddle and direction this key drives, if any
    pub fn paddle(self) -> Option<(Side, PaddleKey)> {
        match self {
            Key::LeftUp => Some((Side::Left, PaddleKey::Up)),
            Key::LeftDown => Some((Side::Left, PaddleKey::Down)),
            Key::RightUp => Some((Side::Right, PaddleKey::Up)),
            Key::RightDown => Some((Side::Right, PaddleKey::Down)),
            Key::Start | Key::Cancel => None,
        }
    }
}

/// One discrete input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    KeyDown(Key),
    KeyUp(Key),
}

/// Events buffered between ticks
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    pub events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    pub fn key_down(&mut self, key: Key) {
        self.push(InputEvent::KeyDown(key));
    }

    pub fn key_up(&mut self, key: Key) {
        self.push(InputEvent::KeyUp(key));
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Take every queued event, oldest first
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }
}
