//! Cursor state
//!
//! The terminal does not own cursor bookkeeping directly; it delegates to a
//! [`CursorHolder`] supplied at construction. Clamping to the grid is the
//! terminal's job, so holders store whatever position they are given.

use serde::{Deserialize, Serialize};

use crate::position::Position;

/// Cursor position and state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cursor {
    /// Current write position
    pub position: Position,
    /// Whether cursor is visible
    pub visible: bool,
    /// Whether cursor should blink
    pub blink: bool,
}

impl Default for Cursor {
    fn default() -> Self {
        Self {
            position: Position::ORIGIN,
            visible: true,
            blink: true,
        }
    }
}

/// Strategy object tracking the cursor on behalf of a terminal
pub trait CursorHolder: Send {
    fn cursor_position(&self) -> Position;

    fn set_cursor_position(&mut self, position: Position);

    fn is_cursor_visible(&self) -> bool;

    fn set_cursor_visibility(&mut self, visible: bool);

    fn is_cursor_blinking(&self) -> bool;

    fn set_cursor_blinking(&mut self, blink: bool);

    /// Snapshot of the whole cursor state
    fn cursor(&self) -> Cursor {
        Cursor {
            position: self.cursor_position(),
            visible: self.is_cursor_visible(),
            blink: self.is_cursor_blinking(),
        }
    }
}

/// Plain in-memory cursor holder
#[derive(Debug, Clone, Default)]
pub struct DefaultCursorHolder {
    cursor: Cursor,
}

impl DefaultCursorHolder {
    pub fn new(cursor: Cursor) -> Self {
        Self { cursor }
    }
}

impl CursorHolder for DefaultCursorHolder {
    fn cursor_position(&self) -> Position {
        self.cursor.position
    }

    fn set_cursor_position(&mut self, position: Position) {
        self.cursor.position = position;
    }

    fn is_cursor_visible(&self) -> bool {
        self.cursor.visible
    }

    fn set_cursor_visibility(&mut self, visible: bool) {
        self.cursor.visible = visible;
    }

    fn is_cursor_blinking(&self) -> bool {
        self.cursor.blink
    }

    fn set_cursor_blinking(&mut self, blink: bool) {
        self.cursor.blink = blink;
    }

    fn cursor(&self) -> Cursor {
        self.cursor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_cursor() {
        let holder = DefaultCursorHolder::default();
        assert_eq!(holder.cursor_position(), Position::ORIGIN);
        assert!(holder.is_cursor_visible());
        assert!(holder.is_cursor_blinking());
    }

    #[test]
    fn test_holder_stores_unclamped() {
        let mut holder = DefaultCursorHolder::default();
        holder.set_cursor_position(Position::new(500, 3));
        holder.set_cursor_visibility(false);
        holder.set_cursor_blinking(false);

        let cursor = holder.cursor();
        assert_eq!(cursor.position, Position::new(500, 3));
        assert!(!cursor.visible);
        assert!(!cursor.blink);
    }
}
