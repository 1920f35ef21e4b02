//! Input events
//!
//! Platform-agnostic keyboard and mouse events delivered to a terminal's
//! input queue, plus the end-of-stream marker enqueued on close.

use std::time::{SystemTime, UNIX_EPOCH};

use bitflags::bitflags;

use crate::position::Position;

/// Milliseconds since the Unix epoch
pub fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

bitflags! {
    /// Keyboard modifiers held during a key stroke
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
    pub struct KeyModifiers: u8 {
        const SHIFT = 1 << 0;
        const CTRL = 1 << 1;
        const ALT = 1 << 2;
    }
}

/// Keyboard key codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A printable character
    Character(char),

    // Navigation
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,

    // Editing
    Insert,
    Delete,
    Backspace,
    Enter,
    Tab,
    /// Shift+Tab
    ReverseTab,
    Escape,

    // Function keys
    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,

    /// Unknown key
    Unknown,
}

/// Mouse action kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseActionType {
    Clicked,
    Pressed,
    Released,
    Entered,
    Exited,
    WheelRotatedUp,
    WheelRotatedDown,
    Dragged,
    Moved,
}

/// Coarse classification of an [`Input`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputType {
    Character,
    Navigation,
    Editing,
    Function,
    Unknown,
    MouseEvent,
    Eof,
}

/// A key press
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyStroke {
    pub key: KeyCode,
    pub modifiers: KeyModifiers,
    pub timestamp_ms: u64,
}

impl KeyStroke {
    /// Create a key stroke stamped with the current time
    pub fn new(key: KeyCode, modifiers: KeyModifiers) -> Self {
        Self {
            key,
            modifiers,
            timestamp_ms: now_millis(),
        }
    }

    /// Shorthand for an unmodified printable character
    pub fn character(c: char) -> Self {
        Self::new(KeyCode::Character(c), KeyModifiers::empty())
    }

    pub fn with_timestamp(self, timestamp_ms: u64) -> Self {
        Self {
            timestamp_ms,
            ..self
        }
    }

    /// The typed character, if this stroke carries one
    pub fn get_character(&self) -> Option<char> {
        match self.key {
            KeyCode::Character(c) => Some(c),
            _ => None,
        }
    }

    pub fn is_ctrl_down(&self) -> bool {
        self.modifiers.contains(KeyModifiers::CTRL)
    }

    pub fn is_alt_down(&self) -> bool {
        self.modifiers.contains(KeyModifiers::ALT)
    }

    pub fn is_shift_down(&self) -> bool {
        self.modifiers.contains(KeyModifiers::SHIFT)
    }

    fn input_type(&self) -> InputType {
        match self.key {
            KeyCode::Character(_) => InputType::Character,
            KeyCode::Up
            | KeyCode::Down
            | KeyCode::Left
            | KeyCode::Right
            | KeyCode::Home
            | KeyCode::End
            | KeyCode::PageUp
            | KeyCode::PageDown => InputType::Navigation,
            KeyCode::Insert
            | KeyCode::Delete
            | KeyCode::Backspace
            | KeyCode::Enter
            | KeyCode::Tab
            | KeyCode::ReverseTab
            | KeyCode::Escape => InputType::Editing,
            KeyCode::F1
            | KeyCode::F2
            | KeyCode::F3
            | KeyCode::F4
            | KeyCode::F5
            | KeyCode::F6
            | KeyCode::F7
            | KeyCode::F8
            | KeyCode::F9
            | KeyCode::F10
            | KeyCode::F11
            | KeyCode::F12 => InputType::Function,
            KeyCode::Unknown => InputType::Unknown,
        }
    }
}

/// A pointer event in grid coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MouseAction {
    pub action: MouseActionType,
    /// Button number, 0 when no button is involved
    pub button: u8,
    pub position: Position,
    pub timestamp_ms: u64,
}

impl MouseAction {
    pub fn new(action: MouseActionType, button: u8, position: Position) -> Self {
        Self {
            action,
            button,
            position,
            timestamp_ms: now_millis(),
        }
    }
}

/// An event consumed from a terminal's input queue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Input {
    Key(KeyStroke),
    Mouse(MouseAction),
    /// No more input will follow
    Eof { timestamp_ms: u64 },
}

impl Input {
    /// End-of-stream marker stamped with the current time
    pub fn eof() -> Self {
        Self::Eof {
            timestamp_ms: now_millis(),
        }
    }

    pub fn input_type(&self) -> InputType {
        match self {
            Self::Key(stroke) => stroke.input_type(),
            Self::Mouse(_) => InputType::MouseEvent,
            Self::Eof { .. } => InputType::Eof,
        }
    }

    pub fn input_type_is(&self, input_type: InputType) -> bool {
        self.input_type() == input_type
    }

    pub fn timestamp_ms(&self) -> u64 {
        match self {
            Self::Key(stroke) => stroke.timestamp_ms,
            Self::Mouse(action) => action.timestamp_ms,
            Self::Eof { timestamp_ms } => *timestamp_ms,
        }
    }

    pub fn is_key_stroke(&self) -> bool {
        matches!(self, Self::Key(_))
    }

    pub fn is_mouse_action(&self) -> bool {
        matches!(self, Self::Mouse(_))
    }

    pub fn is_eof(&self) -> bool {
        matches!(self, Self::Eof { .. })
    }

    pub fn as_key_stroke(&self) -> Option<&KeyStroke> {
        match self {
            Self::Key(stroke) => Some(stroke),
            _ => None,
        }
    }

    pub fn as_mouse_action(&self) -> Option<&MouseAction> {
        match self {
            Self::Mouse(action) => Some(action),
            _ => None,
        }
    }
}

impl From<KeyStroke> for Input {
    fn from(stroke: KeyStroke) -> Self {
        Self::Key(stroke)
    }
}

impl From<MouseAction> for Input {
    fn from(action: MouseAction) -> Self {
        Self::Mouse(action)
    }
}
