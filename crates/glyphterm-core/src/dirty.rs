//! Dirty-cell tracking
//!
//! Records which positions changed since the last drain so a renderer only
//! repaints those. Whole-buffer operations (resize, clear) set a flag that
//! supersedes the explicit set until the next drain.
//!
//! Two positions are always carried between drains: the cursor cell, so
//! the caret is redrawn every frame, and the previously drawn cursor cell
//! once the cursor moves away, so the old caret is erased. Blinking glyphs
//! stay dirty across drains.

use std::collections::BTreeSet;

use crate::buffer::TextCharacterBuffer;
use crate::cell::{Cell, TextCharacter};
use crate::position::{Position, Size};

#[derive(Debug, Clone, Default)]
pub struct DirtyTracker {
    positions: BTreeSet<Position>,
    whole_buffer_dirty: bool,
    last_drawn_cursor: Option<Position>,
}

impl DirtyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a changed position. Redundant while the whole buffer is dirty.
    pub fn mark_dirty(&mut self, position: Position) {
        if !self.whole_buffer_dirty {
            self.positions.insert(position);
        }
    }

    /// Treat every cell as dirty until the next drain
    pub fn set_whole_buffer_dirty(&mut self) {
        self.whole_buffer_dirty = true;
        self.positions.clear();
    }

    pub fn is_whole_buffer_dirty(&self) -> bool {
        self.whole_buffer_dirty
    }

    pub fn is_dirty(&self) -> bool {
        self.whole_buffer_dirty || !self.positions.is_empty()
    }

    /// Explicitly dirty positions in row-major order
    pub fn dirty_positions(&self) -> Vec<Position> {
        self.positions.iter().copied().collect()
    }

    /// Cursor position recorded by the last drain
    pub fn last_drawn_cursor(&self) -> Option<Position> {
        self.last_drawn_cursor
    }

    /// Emit every dirty cell to `f` and reset for the next frame.
    ///
    /// With the whole buffer dirty, every buffer cell is emitted, followed
    /// by blanks for `viewport` rows the buffer does not back yet and
    /// finally the cursor cell. Otherwise the explicit set is emitted in
    /// row-major order.
    pub fn drain<F>(
        &mut self,
        buffer: &TextCharacterBuffer,
        cursor: Position,
        viewport: Size,
        mut f: F,
    ) where
        F: FnMut(Cell),
    {
        if let Some(last) = self.last_drawn_cursor {
            if last != cursor {
                self.positions.insert(last);
            }
        }

        let mut blinking = Vec::new();
        let mut emit = |cell: Cell| {
            if cell.character.is_blinking() {
                blinking.push(cell.position);
            }
            f(cell);
        };

        if self.whole_buffer_dirty {
            let mut emitted = 0;
            buffer.for_each_cell(|cell| {
                emitted += 1;
                emit(cell);
            });
            for row in buffer.line_count()..viewport.rows {
                for column in 0..buffer.width() {
                    emitted += 1;
                    emit(Cell::new(Position::new(column, row), TextCharacter::blank()));
                }
            }
            emit(Cell::new(cursor, buffer.get_character(cursor)));
            log::trace!("Drained whole buffer ({} cells)", emitted + 1);
            self.whole_buffer_dirty = false;
        } else {
            log::trace!("Drained {} dirty cells", self.positions.len());
            for &position in &self.positions {
                emit(Cell::new(position, buffer.get_character(position)));
            }
        }

        self.positions.clear();
        self.positions.extend(blinking);
        self.last_drawn_cursor = Some(cursor);
        self.positions.insert(cursor);
    }
}
