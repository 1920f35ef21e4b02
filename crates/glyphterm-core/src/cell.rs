//! Text character types
//!
//! A [`TextCharacter`] is the immutable value stored in each slot of the
//! character buffer: a glyph plus its colors and modifiers. A [`Cell`]
//! pairs one with the position it was read from.

use crate::color::Color;
use crate::position::Position;
use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Character rendering modifiers
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct Modifiers: u8 {
        /// Bold/bright text
        const BOLD = 1 << 0;
        /// Italic text
        const ITALIC = 1 << 1;
        /// Underlined text
        const UNDERLINE = 1 << 2;
        /// Strikethrough text
        const CROSSED_OUT = 1 << 3;
        /// Blinking text, redrawn every frame
        const BLINK = 1 << 4;
        /// Reverse video (swap fg/bg)
        const REVERSE = 1 << 5;
        /// Hidden/invisible text
        const HIDDEN = 1 << 6;
        /// Dim/faint text
        const DIM = 1 << 7;
    }
}

/// Foreground, background and modifiers applied to newly written glyphs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StyleSet {
    pub foreground: Color,
    pub background: Color,
    pub modifiers: Modifiers,
}

impl StyleSet {
    pub fn new(foreground: Color, background: Color, modifiers: Modifiers) -> Self {
        Self {
            foreground,
            background,
            modifiers,
        }
    }

    /// Create a character with this style and the given glyph
    pub fn create_character(&self, glyph: char) -> TextCharacter {
        TextCharacter::new(glyph).with_style(self)
    }
}

/// A styled glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextCharacter {
    glyph: char,
    foreground: Color,
    background: Color,
    modifiers: Modifiers,
}

impl Default for TextCharacter {
    fn default() -> Self {
        Self::blank()
    }
}

impl TextCharacter {
    /// A space with default colors and no modifiers
    pub const fn blank() -> Self {
        Self {
            glyph: ' ',
            foreground: Color::Default,
            background: Color::Default,
            modifiers: Modifiers::empty(),
        }
    }

    /// Create a character with the given glyph and default style
    pub const fn new(glyph: char) -> Self {
        Self {
            glyph,
            ..Self::blank()
        }
    }

    pub const fn with_background(self, background: Color) -> Self {
        Self { background, ..self }
    }

    pub const fn with_modifiers(self, modifiers: Modifiers) -> Self {
        Self { modifiers, ..self }
    }

    /// Replace colors and modifiers with those of `style`
    pub fn with_style(self, style: &StyleSet) -> Self {
        Self {
            foreground: style.foreground,
            background: style.background,
            modifiers: style.modifiers,
            ..self
        }
    }

    pub fn glyph(&self) -> char {
        self.glyph
    }

    pub fn foreground(&self) -> Color {
        self.foreground
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    pub fn style_set(&self) -> StyleSet {
        StyleSet::new(self.foreground, self.background, self.modifiers)
    }

    pub fn is_blinking(&self) -> bool {
        self.modifiers.contains(Modifiers::BLINK)
    }

    /// Check if this is a blank (space with default colors and no modifiers)
    pub fn is_blank(&self) -> bool {
        *self == Self::blank()
    }
}

/// A character paired with the position it occupies.
///
/// Produced during iteration, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub position: Position,
    pub character: TextCharacter,
}

impl Cell {
    pub fn new(position: Position, character: TextCharacter) -> Self {
        Self {
            position,
            character,
        }
    }
}
