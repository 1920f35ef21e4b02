//! Headless renderer
//!
//! Keeps an in-memory frame of what a display would show and repaints only
//! the cells a terminal reports dirty. Used by the CLI and by tests that
//! need to observe rendered output without a real device.

use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;

use glyphterm_core::{Cursor, Position, Size, TerminalListener, TextCharacter, VirtualTerminal};

/// Glyph drawn over the cursor cell when cursor rendering is enabled
pub const CURSOR_GLYPH: char = '\u{2588}';

#[derive(Debug)]
struct Frame {
    size: Size,
    rows: Vec<Vec<TextCharacter>>,
    cursor: Option<Cursor>,
}

impl Frame {
    fn new(size: Size) -> Self {
        Self {
            size,
            rows: vec![vec![TextCharacter::blank(); size.columns]; size.rows],
            cursor: None,
        }
    }

    /// Change dimensions, keeping whatever still fits
    fn resize(&mut self, size: Size) {
        if size == self.size {
            return;
        }
        log::debug!("Resizing frame from {} to {}", self.size, size);
        self.rows.resize_with(size.rows, Vec::new);
        for row in &mut self.rows {
            row.resize(size.columns, TextCharacter::blank());
        }
        self.size = size;
    }

    fn set(&mut self, position: Position, character: TextCharacter) -> bool {
        match self
            .rows
            .get_mut(position.row)
            .and_then(|row| row.get_mut(position.column))
        {
            Some(slot) => {
                *slot = character;
                true
            }
            None => false,
        }
    }
}

/// Renders a [`VirtualTerminal`] into an in-memory frame
#[derive(Debug)]
pub struct HeadlessRenderer {
    frame: Mutex<Frame>,
    show_cursor: bool,
    flushes: AtomicU64,
}

impl HeadlessRenderer {
    pub fn new(size: Size, show_cursor: bool) -> Self {
        Self {
            frame: Mutex::new(Frame::new(size)),
            show_cursor,
            flushes: AtomicU64::new(0),
        }
    }

    /// Repaint the cells `terminal` reports dirty.
    ///
    /// Overlay layers are composited onto the repainted cells. Returns the
    /// number of cells written into the frame.
    pub fn render(&self, terminal: &VirtualTerminal) -> usize {
        let mut frame = self.frame.lock();
        // A resize notification may still be in flight, so match the
        // terminal before its whole-buffer drain is consumed
        frame.resize(terminal.size());

        let mut touched = Vec::new();
        terminal.for_each_dirty_cell(|cell| {
            if frame.set(cell.position, cell.character) {
                touched.push(cell.position);
            }
        });

        // Layers are read after the drain since the drain holds the terminal lock
        if terminal.layer_count() > 0 {
            for &position in &touched {
                if let Some(character) = terminal.composite_character_at(position) {
                    frame.set(position, character);
                }
            }
        }

        frame.cursor = Some(terminal.cursor());
        log::trace!("Rendered {} cells", touched.len());
        touched.len()
    }

    pub fn size(&self) -> Size {
        self.frame.lock().size
    }

    /// Character currently shown at `position`
    pub fn character_at(&self, position: Position) -> Option<TextCharacter> {
        let frame = self.frame.lock();
        frame
            .rows
            .get(position.row)
            .and_then(|row| row.get(position.column))
            .copied()
    }

    /// The frame as text, one line per row with trailing spaces removed
    pub fn text(&self) -> String {
        let frame = self.frame.lock();
        let cursor = frame
            .cursor
            .filter(|c| self.show_cursor && c.visible)
            .map(|c| c.position);

        frame
            .rows
            .iter()
            .enumerate()
            .map(|(row, characters)| {
                let line: String = characters
                    .iter()
                    .enumerate()
                    .map(|(column, ch)| {
                        if cursor == Some(Position::new(column, row)) {
                            CURSOR_GLYPH
                        } else {
                            ch.glyph()
                        }
                    })
                    .collect();
                line.trim_end().to_string()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Number of frame boundaries signalled by the terminal
    pub fn flush_count(&self) -> u64 {
        self.flushes.load(Ordering::SeqCst)
    }
}

impl TerminalListener for HeadlessRenderer {
    fn on_resized(&self, _source: &VirtualTerminal, new_size: Size) {
        self.frame.lock().resize(new_size);
    }

    fn on_flush(&self) {
        self.flushes.fetch_add(1, Ordering::SeqCst);
    }

    fn on_close(&self) {
        log::debug!("Terminal closed after {} frames", self.flush_count());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glyphterm_core::Layer;
    use std::sync::Arc;

    #[test]
    fn test_render_text() {
        let term = VirtualTerminal::new(Size::new(6, 3));
        let renderer = HeadlessRenderer::new(term.size(), false);

        term.put_str("hello\nworld");
        assert!(renderer.render(&term) > 0);
        assert_eq!(renderer.text(), "hello\nworld\n");
    }

    #[test]
    fn test_only_dirty_cells_repainted() {
        let term = VirtualTerminal::new(Size::new(6, 3));
        let renderer = HeadlessRenderer::new(term.size(), false);
        term.put_str("abc");
        renderer.render(&term);

        // Only the caret cell is carried over
        assert_eq!(renderer.render(&term), 1);

        term.set_glyph_at(Position::new(5, 2), 'z');
        assert_eq!(renderer.render(&term), 2);
        assert_eq!(
            renderer.character_at(Position::new(5, 2)).map(|c| c.glyph()),
            Some('z')
        );
    }

    #[test]
    fn test_clear_erases_frame() {
        let term = VirtualTerminal::new(Size::new(4, 3));
        let renderer = HeadlessRenderer::new(term.size(), false);
        term.put_str("ab\ncd\nef");
        renderer.render(&term);
        assert_eq!(renderer.text(), "ab\ncd\nef");

        term.clear();
        renderer.render(&term);
        assert_eq!(renderer.text(), "\n\n");
    }

    #[test]
    fn test_resize_follows_terminal() {
        let term = VirtualTerminal::new(Size::new(4, 2));
        let renderer = Arc::new(HeadlessRenderer::new(term.size(), false));
        term.add_listener(&renderer);

        term.put_str("abcd");
        term.set_size(Size::new(2, 3));
        renderer.render(&term);

        assert_eq!(renderer.size(), Size::new(2, 3));
        assert_eq!(renderer.text(), "ab\n\n");
    }

    #[test]
    fn test_late_resize_notification_keeps_frame() {
        let term = VirtualTerminal::new(Size::new(4, 2));
        let renderer = HeadlessRenderer::new(term.size(), false);
        term.put_str("abcd");
        term.set_size(Size::new(3, 2));

        renderer.render(&term);
        assert_eq!(renderer.size(), Size::new(3, 2));
        assert_eq!(renderer.text(), "abc\n");

        // Notification delivered after the whole-buffer drain
        renderer.on_resized(&term, Size::new(3, 2));
        renderer.render(&term);
        assert_eq!(renderer.text(), "abc\n");
    }

    #[test]
    fn test_resize_notification_keeps_visible_content() {
        let term = VirtualTerminal::new(Size::new(4, 2));
        let renderer = HeadlessRenderer::new(term.size(), false);
        term.put_str("ab");
        renderer.render(&term);

        renderer.on_resized(&term, Size::new(6, 3));
        assert_eq!(renderer.size(), Size::new(6, 3));
        assert_eq!(renderer.text(), "ab\n\n");
    }

    #[test]
    fn test_layers_composited() {
        let term = VirtualTerminal::new(Size::new(4, 1));
        let renderer = HeadlessRenderer::new(term.size(), false);
        term.put_str("abc");
        renderer.render(&term);

        let mut layer = Layer::new(Position::new(1, 0), Size::new(1, 1));
        layer.fill(TextCharacter::new('#'));
        term.push_layer(layer);
        renderer.render(&term);
        assert_eq!(renderer.text(), "a#c");
    }

    #[test]
    fn test_cursor_drawn_when_enabled() {
        let term = VirtualTerminal::new(Size::new(4, 1));
        let renderer = HeadlessRenderer::new(term.size(), true);
        term.put_str("ab");
        renderer.render(&term);
        assert_eq!(renderer.text(), format!("ab{}", CURSOR_GLYPH));

        term.set_cursor_visibility(false);
        renderer.render(&term);
        assert_eq!(renderer.text(), "ab");
    }

    #[test]
    fn test_flush_counted() {
        let term = VirtualTerminal::new(Size::new(4, 1));
        let renderer = Arc::new(HeadlessRenderer::new(term.size(), false));
        term.add_listener(&renderer);
        term.flush();
        term.flush();
        assert_eq!(renderer.flush_count(), 2);
    }
}
