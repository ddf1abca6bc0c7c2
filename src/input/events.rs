//! Generic input event types shared by both editors.

/// Generic key representation.
///
/// Hosts map their native key codes or DOM-style key names to these values
/// before handing them to an editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Up arrow
    ArrowUp,
    /// Down arrow
    ArrowDown,
    /// Left arrow
    ArrowLeft,
    /// Right arrow
    ArrowRight,
    /// Delete key (removes the selected shape)
    Delete,
    /// Backspace key (removes the selected shape)
    Backspace,
    /// Escape key (clears the selection)
    Escape,
    /// Unmapped or unrecognized key
    Unknown,
}

impl Key {
    /// Looks up a key by its DOM `KeyboardEvent.key` name, e.g. `"ArrowRight"`.
    ///
    /// Unrecognized names map to [`Key::Unknown`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "ArrowUp" => Key::ArrowUp,
            "ArrowDown" => Key::ArrowDown,
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowRight" => Key::ArrowRight,
            "Delete" => Key::Delete,
            "Backspace" => Key::Backspace,
            "Escape" => Key::Escape,
            _ => Key::Unknown,
        }
    }

    /// The movement direction this key stands for, if any.
    pub fn direction(self) -> Option<Direction> {
        match self {
            Key::ArrowUp => Some(Direction::Up),
            Key::ArrowDown => Some(Direction::Down),
            Key::ArrowLeft => Some(Direction::Left),
            Key::ArrowRight => Some(Direction::Right),
            _ => None,
        }
    }
}

/// Direction for keyboard-driven repositioning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit offset `(dx, dy)` in surface space; y grows downward.
    pub fn unit(self) -> (f64, f64) {
        match self {
            Direction::Up => (0.0, -1.0),
            Direction::Down => (0.0, 1.0),
            Direction::Left => (-1.0, 0.0),
            Direction::Right => (1.0, 0.0),
        }
    }
}

/// Mouse button identification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    /// Left mouse button (primary drawing button)
    Left,
    /// Right mouse button
    Right,
    /// Middle mouse button (currently unused)
    Middle,
}
