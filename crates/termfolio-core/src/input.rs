//! Keyboard input as seen by the core.

/// Identity of a pressed key, reduced to what navigation cares about.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Enter,
    Space,
    Tab,
    Escape,
    /// Any other single printable character.
    Char(char),
    /// Modifier keys, function keys and the like.
    Other,
}

impl Key {
    /// Maps a DOM `KeyboardEvent.key` value.
    pub fn from_dom(key: &str) -> Self {
        match key {
            "ArrowUp" => Self::Up,
            "ArrowDown" => Self::Down,
            "ArrowLeft" => Self::Left,
            "ArrowRight" => Self::Right,
            "Enter" => Self::Enter,
            " " => Self::Space,
            "Tab" => Self::Tab,
            "Escape" => Self::Escape,
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Self::Char(c),
                    _ => Self::Other,
                }
            }
        }
    }
}

/// Where keyboard focus currently is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Focus {
    /// The shell's text input.
    Shell,
    /// Anywhere else on the page.
    #[default]
    Page,
}

/// A keydown event with its modifiers and focus target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyInput {
    pub key: Key,
    pub ctrl: bool,
    pub shift: bool,
    pub focus: Focus,
}

impl KeyInput {
    /// A key pressed without modifiers.
    pub fn new(key: Key, focus: Focus) -> Self {
        Self {
            key,
            ctrl: false,
            shift: false,
            focus,
        }
    }

    /// Builds an input from DOM `KeyboardEvent` fields.
    ///
    /// Only the Control key counts as `ctrl`; Meta is not a modifier here.
    pub fn from_dom(key: &str, ctrl: bool, shift: bool, focus: Focus) -> Self {
        Self {
            key: Key::from_dom(key),
            ctrl,
            shift,
            focus,
        }
    }

    pub fn page(key: Key) -> Self {
        Self::new(key, Focus::Page)
    }

    pub fn shell(key: Key) -> Self {
        Self::new(key, Focus::Shell)
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }
}
