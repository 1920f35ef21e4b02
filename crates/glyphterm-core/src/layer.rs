//! Overlay layers
//!
//! Layers are sparse character maps drawn above the terminal buffer. The
//! terminal keeps them through a [`Layerable`] strategy and only consults
//! them when asked for the composite character at a position.

use std::collections::BTreeMap;

use crate::cell::TextCharacter;
use crate::position::{Position, Size};

/// A rectangular overlay placed at `offset`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layer {
    offset: Position,
    size: Size,
    characters: BTreeMap<Position, TextCharacter>,
}

impl Layer {
    pub fn new(offset: Position, size: Size) -> Self {
        Self {
            offset,
            size,
            characters: BTreeMap::new(),
        }
    }

    pub fn offset(&self) -> Position {
        self.offset
    }

    pub fn size(&self) -> Size {
        self.size
    }

    fn to_local(&self, position: Position) -> Option<Position> {
        let column = position.column.checked_sub(self.offset.column)?;
        let row = position.row.checked_sub(self.offset.row)?;
        let local = Position::new(column, row);
        self.size.contains(local).then_some(local)
    }

    /// Character drawn at an absolute position, if any
    pub fn get_character_at(&self, position: Position) -> Option<TextCharacter> {
        let local = self.to_local(position)?;
        self.characters.get(&local).copied()
    }

    /// Draw at an absolute position; false when outside the layer
    pub fn set_character_at(&mut self, position: Position, character: TextCharacter) -> bool {
        match self.to_local(position) {
            Some(local) => {
                self.characters.insert(local, character);
                true
            }
            None => false,
        }
    }

    /// Cover the whole layer with `character`
    pub fn fill(&mut self, character: TextCharacter) {
        for row in 0..self.size.rows {
            for column in 0..self.size.columns {
                self.characters.insert(Position::new(column, row), character);
            }
        }
    }

    /// Absolute positions of every drawn character
    pub fn drawn_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.characters.keys().map(move |local| {
            Position::new(
                local.column + self.offset.column,
                local.row + self.offset.row,
            )
        })
    }
}

/// Strategy object holding a stack of layers
pub trait Layerable: Send {
    fn push_layer(&mut self, layer: Layer);

    fn pop_layer(&mut self) -> Option<Layer>;

    /// Remove the first layer equal to `layer`; false if none matched
    fn remove_layer(&mut self, layer: &Layer) -> bool;

    /// Layers from bottom to top
    fn layers(&self) -> &[Layer];

    /// Called when the owning terminal changes size
    fn resize(&mut self, size: Size);

    /// Topmost drawn character at `position`
    fn character_at(&self, position: Position) -> Option<TextCharacter> {
        self.layers()
            .iter()
            .rev()
            .find_map(|layer| layer.get_character_at(position))
    }
}

/// Layer stack clipped to the terminal size
#[derive(Debug, Clone)]
pub struct DefaultLayerable {
    size: Size,
    layers: Vec<Layer>,
}

impl DefaultLayerable {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            layers: Vec::new(),
        }
    }

    pub fn size(&self) -> Size {
        self.size
    }
}

impl Layerable for DefaultLayerable {
    fn push_layer(&mut self, layer: Layer) {
        self.layers.push(layer);
    }

    fn pop_layer(&mut self) -> Option<Layer> {
        self.layers.pop()
    }

    fn remove_layer(&mut self, layer: &Layer) -> bool {
        match self.layers.iter().position(|l| l == layer) {
            Some(index) => {
                self.layers.remove(index);
                true
            }
            None => false,
        }
    }

    fn layers(&self) -> &[Layer] {
        &self.layers
    }

    fn resize(&mut self, size: Size) {
        self.size = size;
    }

    fn character_at(&self, position: Position) -> Option<TextCharacter> {
        if !self.size.contains(position) {
            return None;
        }
        self.layers
            .iter()
            .rev()
            .find_map(|layer| layer.get_character_at(position))
    }
}
