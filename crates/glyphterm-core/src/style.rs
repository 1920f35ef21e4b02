//! Style context consulted when writing glyphs
//!
//! The terminal reads colors and modifiers from a [`StyleContext`] every
//! time it writes a glyph, so a caller holding the same context can restyle
//! subsequent output without touching the terminal.

use parking_lot::RwLock;

use crate::cell::{Modifiers, StyleSet};
use crate::color::Color;

/// Source of the style applied to newly written glyphs
pub trait StyleContext: Send + Sync {
    fn foreground_color(&self) -> Color;

    fn background_color(&self) -> Color;

    fn active_modifiers(&self) -> Modifiers;

    fn style_set(&self) -> StyleSet {
        StyleSet::new(
            self.foreground_color(),
            self.background_color(),
            self.active_modifiers(),
        )
    }
}

/// A style set that can be changed through a shared reference
#[derive(Debug, Default)]
pub struct SharedStyleSet {
    style: RwLock<StyleSet>,
}

impl SharedStyleSet {
    pub fn new(style: StyleSet) -> Self {
        Self {
            style: RwLock::new(style),
        }
    }

    pub fn set_foreground_color(&self, color: Color) {
        self.style.write().foreground = color;
    }

    pub fn set_background_color(&self, color: Color) {
        self.style.write().background = color;
    }

    pub fn enable_modifiers(&self, modifiers: Modifiers) {
        self.style.write().modifiers.insert(modifiers);
    }

    pub fn disable_modifiers(&self, modifiers: Modifiers) {
        self.style.write().modifiers.remove(modifiers);
    }

    /// Back to default colors with no modifiers
    pub fn reset_colors_and_modifiers(&self) {
        *self.style.write() = StyleSet::default();
    }
}

impl StyleContext for SharedStyleSet {
    fn foreground_color(&self) -> Color {
        self.style.read().foreground
    }

    fn background_color(&self) -> Color {
        self.style.read().background
    }

    fn active_modifiers(&self) -> Modifiers {
        self.style.read().modifiers
    }

    fn style_set(&self) -> StyleSet {
        *self.style.read()
    }
}
