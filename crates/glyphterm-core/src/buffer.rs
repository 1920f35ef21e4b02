//! Character buffer - growable rows of text characters
//!
//! Lines are appended, never removed, so the buffer doubles as scrollback.
//! Resizing only changes the width of every line; the row count is kept.

use crate::cell::{Cell, TextCharacter};
use crate::position::{Position, Size};

/// A single line of character slots
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    characters: Vec<TextCharacter>,
}

impl Line {
    /// Create a blank line with the given width
    pub fn new(width: usize) -> Self {
        Self {
            characters: vec![TextCharacter::blank(); width],
        }
    }

    /// Get the width of this line
    pub fn len(&self) -> usize {
        self.characters.len()
    }

    /// Check if the line has no width
    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    /// Truncate or pad with blanks to a new width
    pub fn resize(&mut self, width: usize) {
        self.characters.resize(width, TextCharacter::blank());
    }

    pub fn get(&self, column: usize) -> Option<&TextCharacter> {
        self.characters.get(column)
    }

    pub fn get_mut(&mut self, column: usize) -> Option<&mut TextCharacter> {
        self.characters.get_mut(column)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TextCharacter> {
        self.characters.iter()
    }

    /// Get the glyphs of this line with trailing spaces removed
    pub fn text(&self) -> String {
        let s: String = self.characters.iter().map(TextCharacter::glyph).collect();
        s.trim_end().to_string()
    }
}

/// Row-growable store of text characters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextCharacterBuffer {
    lines: Vec<Line>,
    width: usize,
}

impl TextCharacterBuffer {
    /// Create a buffer holding a single blank line
    pub fn new(width: usize) -> Self {
        Self {
            lines: vec![Line::new(width)],
            width,
        }
    }

    /// Get the current line width (columns)
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of lines currently backed by the buffer
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Get the character at `position`, or a blank if nothing backs it
    pub fn get_character(&self, position: Position) -> TextCharacter {
        self.lines
            .get(position.row)
            .and_then(|line| line.get(position.column))
            .copied()
            .unwrap_or_default()
    }

    /// Store `character` at `position`.
    ///
    /// Rows up to `position.row` are appended as needed. Returns false
    /// when the column lies outside the line width.
    pub fn set_character(&mut self, position: Position, character: TextCharacter) -> bool {
        if position.column >= self.width {
            return false;
        }
        self.ensure_lines(position.row + 1);
        match self.lines[position.row].get_mut(position.column) {
            Some(slot) => {
                *slot = character;
                true
            }
            None => false,
        }
    }

    /// Append a blank line
    pub fn new_line(&mut self) {
        self.lines.push(Line::new(self.width));
    }

    /// Append blank lines until at least `count` lines exist
    pub fn ensure_lines(&mut self, count: usize) {
        while self.lines.len() < count {
            self.new_line();
        }
    }

    /// Reflow every line to the new column count; rows are left alone
    pub fn resize(&mut self, size: Size) {
        for line in &mut self.lines {
            line.resize(size.columns);
        }
        self.width = size.columns;
    }

    /// Drop all content, leaving one blank line
    pub fn clear(&mut self) {
        self.lines.clear();
        self.lines.push(Line::new(self.width));
    }

    /// Get a reference to a line
    pub fn line(&self, row: usize) -> Option<&Line> {
        self.lines.get(row)
    }

    /// Lazy row-major sequence of every cell in the buffer
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.lines.iter().enumerate().flat_map(|(row, line)| {
            line.iter()
                .enumerate()
                .map(move |(column, character)| Cell::new(Position::new(column, row), *character))
        })
    }

    pub fn for_each_cell<F: FnMut(Cell)>(&self, f: F) {
        self.cells().for_each(f);
    }

    /// Get all text content, one line per row
    pub fn text(&self) -> String {
        self.lines
            .iter()
            .map(Line::text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
