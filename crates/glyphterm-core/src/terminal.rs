//! Virtual terminal - the state machine tying the core together
//!
//! Buffer, cursor, layers and dirty state live behind one mutex so every
//! write, read, resize and drain is serialized. The input queue has its own
//! lock, so polling input never contends with rendering or writing.

use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use unicode_width::UnicodeWidthChar;

use crate::buffer::TextCharacterBuffer;
use crate::cell::{Cell, TextCharacter};
use crate::cursor::{Cursor, CursorHolder, DefaultCursorHolder};
use crate::dirty::DirtyTracker;
use crate::input::Input;
use crate::input_queue::InputQueue;
use crate::layer::{DefaultLayerable, Layer, Layerable};
use crate::listener::{ListenerSet, TerminalListener};
use crate::position::{Position, Size};
use crate::style::{SharedStyleSet, StyleContext};

/// Whether `c` produces a visible glyph
fn is_printable(c: char) -> bool {
    !c.is_control() && UnicodeWidthChar::width(c).is_some_and(|w| w > 0)
}

struct TerminalState {
    size: Size,
    buffer: TextCharacterBuffer,
    cursor: Box<dyn CursorHolder>,
    layers: Box<dyn Layerable>,
    dirty: DirtyTracker,
    closed: bool,
}

impl TerminalState {
    fn cursor_position(&self) -> Position {
        self.cursor.cursor_position()
    }

    /// Clamp and move the cursor.
    ///
    /// The column may equal the width: that is the pending-wrap position,
    /// not an addressable cell.
    fn set_cursor_position(&mut self, position: Position) {
        let clamped = Position::new(
            position.column.min(self.size.columns),
            position.row.min(self.size.rows.saturating_sub(1)),
        );
        self.cursor.set_cursor_position(clamped);
        self.buffer.ensure_lines(clamped.row + 1);
        self.dirty.mark_dirty(clamped);
    }

    fn move_cursor_to_next_line(&mut self) {
        let next = self.cursor_position().with_column(0).with_relative_row(1);
        self.set_cursor_position(next);
        if self.cursor_position().row >= self.buffer.line_count() {
            self.buffer.new_line();
        }
    }

    fn wrap_if_pending(&mut self) {
        if self.cursor_position().column == self.size.columns {
            self.move_cursor_to_next_line();
        }
    }

    fn put_text_character(&mut self, character: TextCharacter) {
        // The cursor may already sit on the wrap position from an earlier
        // operation, so check before and after the write.
        self.wrap_if_pending();
        let position = self.cursor_position();
        self.buffer.set_character(position, character);
        self.dirty.mark_dirty(position);
        self.set_cursor_position(position.with_relative_column(1));
        self.wrap_if_pending();
    }

    fn mark_layer_dirty(&mut self, layer: &Layer) {
        for position in layer.drawn_positions() {
            if self.size.contains(position) {
                self.dirty.mark_dirty(position);
            }
        }
    }
}

/// In-memory character grid with dirty-cell tracking and an input queue.
///
/// Shared between threads as `Arc<VirtualTerminal>`: writers call
/// [`put_character`](Self::put_character), a renderer calls
/// [`for_each_dirty_cell`](Self::for_each_dirty_cell) once per frame and an
/// input producer calls [`add_input`](Self::add_input).
pub struct VirtualTerminal {
    state: Mutex<TerminalState>,
    style: Arc<dyn StyleContext>,
    input: InputQueue,
    listeners: Mutex<ListenerSet>,
}

impl VirtualTerminal {
    /// Create a terminal with the default cursor, layer and style collaborators
    pub fn new(size: Size) -> Self {
        Self::with_style(size, Arc::new(SharedStyleSet::default()))
    }

    /// Create a terminal that styles new glyphs from `style`
    pub fn with_style(size: Size, style: Arc<dyn StyleContext>) -> Self {
        Self::with_collaborators(
            size,
            Box::new(DefaultCursorHolder::default()),
            Box::new(DefaultLayerable::new(size)),
            style,
        )
    }

    /// Create a terminal from explicit collaborators
    pub fn with_collaborators(
        size: Size,
        cursor: Box<dyn CursorHolder>,
        layers: Box<dyn Layerable>,
        style: Arc<dyn StyleContext>,
    ) -> Self {
        let mut state = TerminalState {
            size,
            buffer: TextCharacterBuffer::new(size.columns),
            cursor,
            layers,
            dirty: DirtyTracker::new(),
            closed: false,
        };
        let initial = state.cursor_position();
        state.set_cursor_position(initial);

        Self {
            state: Mutex::new(state),
            style,
            input: InputQueue::new(),
            listeners: Mutex::new(ListenerSet::default()),
        }
    }

    /// Subscribe a listener. Only a weak reference is kept.
    pub fn add_listener<L: TerminalListener + 'static>(&self, listener: &Arc<L>) {
        let weak: Weak<L> = Arc::downgrade(listener);
        let weak: Weak<dyn TerminalListener> = weak;
        self.listeners.lock().add(weak);
    }

    /// Unsubscribe a listener; false if it was not subscribed
    pub fn remove_listener<L: TerminalListener + 'static>(&self, listener: &Arc<L>) -> bool {
        let weak: Weak<L> = Arc::downgrade(listener);
        let weak: Weak<dyn TerminalListener> = weak;
        self.listeners.lock().remove(&weak)
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.lock().len()
    }

    /// Invoke `f` on every live listener with no terminal lock held
    fn notify<F: Fn(&dyn TerminalListener)>(&self, f: F) {
        let live = self.listeners.lock().live();
        for listener in live {
            f(listener.as_ref());
        }
    }

    pub fn size(&self) -> Size {
        self.state.lock().size
    }

    /// Resize the grid.
    ///
    /// Every line is reflowed to the new width, the cursor is pulled back
    /// inside the new bounds and the whole buffer is marked dirty before
    /// listeners are told about the new size.
    pub fn set_size(&self, new_size: Size) {
        {
            let mut state = self.state.lock();
            if state.size == new_size {
                return;
            }
            log::debug!("Resizing terminal {} -> {}", state.size, new_size);
            state.size = new_size;
            state.buffer.resize(new_size);
            let cursor = state.cursor_position();
            if cursor.row >= new_size.rows || cursor.column >= new_size.columns {
                state.set_cursor_position(cursor);
            }
            state.layers.resize(new_size);
            state.dirty.set_whole_buffer_dirty();
        }
        self.notify(|listener| listener.on_resized(self, new_size));
    }

    /// Number of lines backed by the buffer (grows with line breaks)
    pub fn line_count(&self) -> usize {
        self.state.lock().buffer.line_count()
    }

    pub fn cursor_position(&self) -> Position {
        self.state.lock().cursor_position()
    }

    /// Move the cursor, clamping the row to `[0, rows - 1]` and the column
    /// to `[0, columns]`
    pub fn set_cursor_position(&self, position: Position) {
        self.state.lock().set_cursor_position(position);
    }

    pub fn cursor(&self) -> Cursor {
        self.state.lock().cursor.cursor()
    }

    pub fn is_cursor_visible(&self) -> bool {
        self.state.lock().cursor.is_cursor_visible()
    }

    pub fn set_cursor_visibility(&self, visible: bool) {
        let mut state = self.state.lock();
        state.cursor.set_cursor_visibility(visible);
        let position = state.cursor_position();
        state.dirty.mark_dirty(position);
    }

    pub fn is_cursor_blinking(&self) -> bool {
        self.state.lock().cursor.is_cursor_blinking()
    }

    pub fn set_cursor_blinking(&self, blink: bool) {
        let mut state = self.state.lock();
        state.cursor.set_cursor_blinking(blink);
        let position = state.cursor_position();
        state.dirty.mark_dirty(position);
    }

    /// Write a character at the cursor.
    ///
    /// `'\n'` moves to the start of the next row. Printable characters are
    /// styled from the style context and advance the cursor, wrapping at
    /// the end of the row. Anything else is ignored.
    pub fn put_character(&self, c: char) {
        if c == '\n' {
            self.state.lock().move_cursor_to_next_line();
        } else if is_printable(c) {
            let character = self.style.style_set().create_character(c);
            self.state.lock().put_text_character(character);
        }
    }

    /// Write a prebuilt character at the cursor
    pub fn put_text_character(&self, character: TextCharacter) {
        self.state.lock().put_text_character(character);
    }

    /// Write every character of `text`
    pub fn put_str(&self, text: &str) {
        for c in text.chars() {
            self.put_character(c);
        }
    }

    /// Reset to a single blank line with the cursor at the origin
    pub fn clear(&self) {
        let mut state = self.state.lock();
        log::debug!("Clearing terminal");
        state.buffer.clear();
        state.dirty.set_whole_buffer_dirty();
        state.set_cursor_position(Position::ORIGIN);
    }

    /// Get the character at `position`, or `None` outside the grid
    pub fn get_character_at(&self, position: Position) -> Option<TextCharacter> {
        let state = self.state.lock();
        state
            .size
            .contains(position)
            .then(|| state.buffer.get_character(position))
    }

    /// Store a character at `position`; false outside the grid
    pub fn set_character_at(&self, position: Position, character: TextCharacter) -> bool {
        let mut state = self.state.lock();
        if !state.size.contains(position) {
            return false;
        }
        state.buffer.set_character(position, character);
        state.dirty.mark_dirty(position);
        true
    }

    /// Store a glyph styled from the style context; false outside the grid
    pub fn set_glyph_at(&self, position: Position, glyph: char) -> bool {
        self.set_character_at(position, self.style.style_set().create_character(glyph))
    }

    pub fn is_dirty(&self) -> bool {
        self.state.lock().dirty.is_dirty()
    }

    /// Emit every cell changed since the last call and reset dirty state.
    ///
    /// `f` runs with the terminal locked and must not call back into it.
    pub fn for_each_dirty_cell<F: FnMut(Cell)>(&self, f: F) {
        let mut guard = self.state.lock();
        let state = &mut *guard;
        let cursor = state.cursor_position();
        state.dirty.drain(&state.buffer, cursor, state.size, f);
    }

    /// Emit every buffer cell without touching dirty state.
    ///
    /// `f` runs with the terminal locked and must not call back into it.
    pub fn for_each_cell<F: FnMut(Cell)>(&self, f: F) {
        self.state.lock().buffer.for_each_cell(f);
    }

    /// Buffer contents as text, one line per row
    pub fn text(&self) -> String {
        self.state.lock().buffer.text()
    }

    /// Signal a frame boundary to listeners. Dirty state is not drained.
    pub fn flush(&self) {
        self.notify(|listener| listener.on_flush());
    }

    pub fn push_layer(&self, layer: Layer) {
        let mut state = self.state.lock();
        state.mark_layer_dirty(&layer);
        state.layers.push_layer(layer);
    }

    pub fn pop_layer(&self) -> Option<Layer> {
        let mut state = self.state.lock();
        let layer = state.layers.pop_layer()?;
        state.mark_layer_dirty(&layer);
        Some(layer)
    }

    pub fn layer_count(&self) -> usize {
        self.state.lock().layers.layers().len()
    }

    /// Topmost layer character at `position`, falling back to the buffer.
    /// `None` outside the grid.
    pub fn composite_character_at(&self, position: Position) -> Option<TextCharacter> {
        let state = self.state.lock();
        if !state.size.contains(position) {
            return None;
        }
        state
            .layers
            .character_at(position)
            .or_else(|| Some(state.buffer.get_character(position)))
    }

    pub fn add_input(&self, input: Input) {
        self.input.add_input(input);
    }

    /// Take the oldest pending input without blocking
    pub fn poll_input(&self) -> Option<Input> {
        self.input.poll_input()
    }

    /// Enqueue the end-of-stream marker and notify listeners.
    ///
    /// Writes are still accepted afterwards. Repeated calls do nothing.
    pub fn close(&self) {
        {
            let mut state = self.state.lock();
            if state.closed {
                return;
            }
            state.closed = true;
        }
        log::debug!("Closing terminal");
        self.input.close();
        self.notify(|listener| listener.on_close());
    }

    pub fn is_closed(&self) -> bool {
        self.state.lock().closed
    }
}

impl Default for VirtualTerminal {
    fn default() -> Self {
        Self::new(Size::default())
    }
}

impl std::fmt::Debug for VirtualTerminal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.lock();
        f.debug_struct("VirtualTerminal")
            .field("size", &state.size)
            .field("cursor", &state.cursor_position())
            .field("lines", &state.buffer.line_count())
            .field("closed", &state.closed)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::{Modifiers, StyleSet};
    use crate::color::{AnsiColor, Color};
    use crate::input::KeyStroke;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn drained(term: &VirtualTerminal) -> Vec<Position> {
        let mut positions = Vec::new();
        term.for_each_dirty_cell(|cell| positions.push(cell.position));
        positions
    }

    #[test]
    fn test_dirty_after_construction() {
        let term = VirtualTerminal::new(Size::new(10, 5));
        assert!(term.is_dirty());
        assert_eq!(drained(&term), vec![Position::ORIGIN]);
    }

    #[test]
    fn test_put_character_uses_style_at_write_time() {
        let style = Arc::new(SharedStyleSet::default());
        let term = VirtualTerminal::with_style(Size::new(10, 5), style.clone());

        term.put_character('a');
        style.set_foreground_color(Color::Ansi(AnsiColor::Red));
        style.enable_modifiers(Modifiers::BOLD);
        term.put_character('b');

        let a = term.get_character_at(Position::new(0, 0));
        let b = term.get_character_at(Position::new(1, 0));
        assert_eq!(a, Some(TextCharacter::new('a')));
        assert_eq!(
            b,
            Some(StyleSet::new(Color::Ansi(AnsiColor::Red), Color::Default, Modifiers::BOLD)
                .create_character('b'))
        );
        assert_eq!(term.cursor_position(), Position::new(2, 0));
    }

    #[test]
    fn test_line_break_advances_row() {
        let term = VirtualTerminal::new(Size::new(10, 5));
        term.put_str("ab");
        assert_eq!(term.line_count(), 1);

        term.put_character('\n');
        assert_eq!(term.cursor_position(), Position::new(0, 1));
        assert_eq!(term.line_count(), 2);

        term.set_cursor_position(Position::new(4, 0));
        term.put_character('\n');
        assert_eq!(term.cursor_position(), Position::new(0, 1));
        assert_eq!(term.line_count(), 2);
    }

    #[test]
    fn test_line_break_on_last_row_stays() {
        let term = VirtualTerminal::new(Size::new(4, 2));
        term.put_str("\n\n\n");
        assert_eq!(term.cursor_position(), Position::new(0, 1));
    }

    #[test]
    fn test_non_printable_ignored() {
        let term = VirtualTerminal::new(Size::new(4, 2));
        term.put_character('\t');
        term.put_character('\u{7}');
        term.put_character('\r');
        assert_eq!(term.cursor_position(), Position::ORIGIN);
        assert_eq!(term.get_character_at(Position::ORIGIN), Some(TextCharacter::blank()));
    }

    #[test]
    fn test_wrap_scenario() {
        let term = VirtualTerminal::new(Size::new(3, 2));
        drained(&term);

        term.put_str("ABC");
        assert_eq!(term.cursor_position(), Position::new(0, 1));
        term.put_character('D');

        assert_eq!(
            term.get_character_at(Position::new(0, 1)).map(|c| c.glyph()),
            Some('D')
        );
        assert_eq!(term.cursor_position(), Position::new(1, 1));
        let dirty = drained(&term);
        assert!(dirty.contains(&Position::new(2, 0)));
        assert!(dirty.contains(&Position::new(0, 1)));
    }

    #[test]
    fn test_full_row_then_line_break_skips_a_row() {
        let term = VirtualTerminal::new(Size::new(3, 3));
        term.put_str("ABC");
        assert_eq!(term.cursor_position(), Position::new(0, 1));

        // The wrap already moved to row 1, the break moves again
        term.put_character('\n');
        assert_eq!(term.cursor_position(), Position::new(0, 2));
        term.put_character('D');
        assert_eq!(term.text(), "ABC\n\nD");
    }

    #[test]
    fn test_pending_wrap_from_cursor_move() {
        let term = VirtualTerminal::new(Size::new(3, 2));
        term.set_cursor_position(Position::new(3, 0));
        assert_eq!(term.cursor_position(), Position::new(3, 0));

        term.put_character('X');
        assert_eq!(
            term.get_character_at(Position::new(0, 1)).map(|c| c.glyph()),
            Some('X')
        );
    }

    #[test]
    fn test_cursor_clamped_to_sentinel_column() {
        let term = VirtualTerminal::new(Size::new(3, 2));
        term.set_cursor_position(Position::new(5, 0));
        assert_eq!(term.cursor_position(), Position::new(3, 0));

        term.set_cursor_position(Position::new(1, 9));
        assert_eq!(term.cursor_position(), Position::new(1, 1));
        assert!(term.line_count() >= 2);
    }

    #[test]
    fn test_shrink_hides_columns() {
        let term = VirtualTerminal::new(Size::new(6, 3));
        term.put_str("abcdef");
        term.set_size(Size::new(3, 3));

        assert_eq!(term.get_character_at(Position::new(3, 0)), None);
        assert_eq!(term.get_character_at(Position::new(5, 0)), None);
        assert_eq!(
            term.get_character_at(Position::new(2, 0)).map(|c| c.glyph()),
            Some('c')
        );
    }

    #[test]
    fn test_resize_clamps_cursor_and_dirties_everything() {
        let term = VirtualTerminal::new(Size::new(6, 4));
        term.set_cursor_position(Position::new(5, 3));
        drained(&term);

        term.set_size(Size::new(2, 2));
        assert_eq!(term.cursor_position(), Position::new(2, 1));
        assert!(term.is_dirty());

        let mut count = 0;
        term.for_each_dirty_cell(|_| count += 1);
        // 2x4 buffer lines after reflow, plus the cursor cell
        assert_eq!(count, 2 * 4 + 1);
    }

    #[test]
    fn test_resize_to_same_size_is_noop() {
        let term = VirtualTerminal::new(Size::new(4, 4));
        drained(&term);
        term.set_size(Size::new(4, 4));
        assert_eq!(drained(&term), vec![Position::ORIGIN]);
    }

    #[test]
    fn test_clear() {
        let term = VirtualTerminal::new(Size::new(4, 3));
        term.put_str("ab\ncd");
        term.clear();

        assert_eq!(term.cursor_position(), Position::ORIGIN);
        assert_eq!(term.line_count(), 1);
        assert_eq!(term.text(), "");

        let mut count = 0;
        term.for_each_dirty_cell(|cell| {
            assert!(cell.character.is_blank());
            count += 1;
        });
        // one backed line, two padded viewport rows, then the cursor
        assert_eq!(count, 4 * 3 + 1);
    }

    #[test]
    fn test_set_character_at_bounds() {
        let term = VirtualTerminal::new(Size::new(3, 2));
        assert!(term.set_character_at(Position::new(2, 1), TextCharacter::new('z')));
        assert!(!term.set_character_at(Position::new(3, 1), TextCharacter::new('z')));
        assert!(!term.set_glyph_at(Position::new(0, 2), 'z'));
        assert_eq!(term.get_character_at(Position::new(0, 2)), None);

        assert!(drained(&term).contains(&Position::new(2, 1)));
    }

    #[test]
    fn test_clean_after_drain_only_cursor_remains() {
        let term = VirtualTerminal::new(Size::new(5, 2));
        term.put_str("hi");
        let first = drained(&term);
        assert!(first.contains(&Position::new(0, 0)));
        assert!(first.contains(&Position::new(1, 0)));

        // Nothing written: only the caret is carried over
        assert_eq!(drained(&term), vec![Position::new(2, 0)]);
    }

    #[test]
    fn test_cursor_move_erases_old_caret() {
        let term = VirtualTerminal::new(Size::new(5, 2));
        drained(&term);
        term.set_cursor_position(Position::new(3, 1));
        let dirty = drained(&term);
        assert_eq!(dirty, vec![Position::ORIGIN, Position::new(3, 1)]);
    }

    #[test]
    fn test_blinking_glyph_stays_dirty() {
        let style = Arc::new(SharedStyleSet::default());
        style.enable_modifiers(Modifiers::BLINK);
        let term = VirtualTerminal::with_style(Size::new(5, 2), style);
        term.put_character('*');
        drained(&term);

        assert!(drained(&term).contains(&Position::ORIGIN));
        assert!(drained(&term).contains(&Position::ORIGIN));
    }

    #[derive(Default)]
    struct Recorder {
        resized: AtomicUsize,
        flushed: AtomicUsize,
        closed: AtomicUsize,
    }

    impl TerminalListener for Recorder {
        fn on_resized(&self, source: &VirtualTerminal, new_size: Size) {
            // Safe to re-enter: no lock is held during callbacks
            assert_eq!(source.size(), new_size);
            self.resized.fetch_add(1, Ordering::SeqCst);
        }

        fn on_flush(&self) {
            self.flushed.fetch_add(1, Ordering::SeqCst);
        }

        fn on_close(&self) {
            self.closed.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn test_listeners_notified() {
        let term = VirtualTerminal::new(Size::new(4, 4));
        let recorder = Arc::new(Recorder::default());
        term.add_listener(&recorder);

        term.set_size(Size::new(4, 4));
        term.set_size(Size::new(5, 4));
        term.flush();
        term.flush();
        term.close();
        term.close();

        assert_eq!(recorder.resized.load(Ordering::SeqCst), 1);
        assert_eq!(recorder.flushed.load(Ordering::SeqCst), 2);
        assert_eq!(recorder.closed.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_flush_does_not_drain() {
        let term = VirtualTerminal::new(Size::new(4, 4));
        term.put_character('x');
        term.flush();
        assert!(term.is_dirty());
    }

    #[test]
    fn test_listener_held_weakly() {
        let term = VirtualTerminal::new(Size::new(4, 4));
        let recorder = Arc::new(Recorder::default());
        term.add_listener(&recorder);
        assert_eq!(term.listener_count(), 1);

        drop(recorder);
        term.flush();
        assert_eq!(term.listener_count(), 0);
    }

    #[test]
    fn test_remove_listener() {
        let term = VirtualTerminal::new(Size::new(4, 4));
        let recorder = Arc::new(Recorder::default());
        term.add_listener(&recorder);
        assert!(term.remove_listener(&recorder));
        assert!(!term.remove_listener(&recorder));

        term.flush();
        assert_eq!(recorder.flushed.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_close_then_poll() {
        let term = VirtualTerminal::new(Size::new(4, 4));
        term.add_input(KeyStroke::character('a').into());
        term.add_input(KeyStroke::character('b').into());
        term.close();
        assert!(term.is_closed());

        let glyphs: Vec<_> = std::iter::from_fn(|| term.poll_input())
            .map(|input| input.as_key_stroke().and_then(|k| k.get_character()))
            .collect();
        assert_eq!(glyphs, vec![Some('a'), Some('b'), None]);
        assert!(term.poll_input().is_none());
        assert!(term.poll_input().is_none());
    }

    #[test]
    fn test_writes_accepted_after_close() {
        let term = VirtualTerminal::new(Size::new(4, 4));
        term.close();
        term.put_character('q');
        assert_eq!(
            term.get_character_at(Position::ORIGIN).map(|c| c.glyph()),
            Some('q')
        );
    }

    #[test]
    fn test_layers_composite_and_dirty() {
        let term = VirtualTerminal::new(Size::new(4, 2));
        term.put_str("abcd");
        drained(&term);

        let mut layer = Layer::new(Position::new(1, 0), Size::new(1, 1));
        layer.fill(TextCharacter::new('#'));
        term.push_layer(layer);
        assert_eq!(term.layer_count(), 1);

        assert!(drained(&term).contains(&Position::new(1, 0)));
        assert_eq!(
            term.composite_character_at(Position::new(1, 0)).map(|c| c.glyph()),
            Some('#')
        );
        assert_eq!(
            term.composite_character_at(Position::new(2, 0)).map(|c| c.glyph()),
            Some('c')
        );
        assert_eq!(term.composite_character_at(Position::new(4, 0)), None);

        assert!(term.pop_layer().is_some());
        assert!(drained(&term).contains(&Position::new(1, 0)));
        assert_eq!(
            term.composite_character_at(Position::new(1, 0)).map(|c| c.glyph()),
            Some('b')
        );
    }

    #[test]
    fn test_cursor_flags_mark_caret_dirty() {
        let term = VirtualTerminal::new(Size::new(4, 2));
        term.set_cursor_position(Position::new(2, 1));
        drained(&term);
        drained(&term);

        term.set_cursor_visibility(false);
        assert!(!term.is_cursor_visible());
        term.set_cursor_blinking(false);
        assert!(!term.is_cursor_blinking());
        assert_eq!(drained(&term), vec![Position::new(2, 1)]);
        assert!(!term.cursor().visible);
    }
}
