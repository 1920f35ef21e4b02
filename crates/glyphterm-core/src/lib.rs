//! glyphterm-core: Virtual terminal core
//!
//! This crate provides the building blocks of a text-mode UI surface:
//! - Geometry, color and styled character types
//! - A row-growable character buffer
//! - Dirty-cell tracking for minimal repaints
//! - An unbounded input queue for single-consumer event reads
//! - The [`VirtualTerminal`] state machine tying them together

pub mod position;
pub mod color;
pub mod cell;
pub mod buffer;
pub mod cursor;
pub mod style;
pub mod layer;
pub mod dirty;
pub mod input;
pub mod input_queue;
pub mod listener;
pub mod terminal;

pub use position::{Position, Size};
pub use color::{Color, AnsiColor, Rgb};
pub use cell::{Cell, Modifiers, StyleSet, TextCharacter};
pub use buffer::TextCharacterBuffer;
pub use cursor::{Cursor, CursorHolder, DefaultCursorHolder};
pub use style::{SharedStyleSet, StyleContext};
pub use layer::{DefaultLayerable, Layer, Layerable};
pub use dirty::DirtyTracker;
pub use input::{Input, InputType, KeyCode, KeyModifiers, KeyStroke, MouseAction, MouseActionType};
pub use input_queue::InputQueue;
pub use listener::TerminalListener;
pub use terminal::VirtualTerminal;
