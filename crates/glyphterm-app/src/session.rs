//! Session management
//!
//! A session wires a terminal to its style context and a headless renderer,
//! and runs an optional input producer thread.

use std::io::{self, BufRead};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use parking_lot::Mutex;

use glyphterm_core::{
    DefaultCursorHolder, DefaultLayerable, Input, KeyCode, KeyModifiers, KeyStroke,
    SharedStyleSet, VirtualTerminal,
};

use crate::config::Config;
use crate::headless::HeadlessRenderer;

/// Inputs taken from the queue by [`Session::drain_input`]
#[derive(Debug, Default, Clone, PartialEq)]
pub struct InputBatch {
    /// Events in arrival order, without the end-of-stream marker
    pub events: Vec<Input>,
    /// The end-of-stream marker was reached
    pub eof: bool,
}

/// A terminal with its style context and renderer
pub struct Session {
    terminal: Arc<VirtualTerminal>,
    style: Arc<SharedStyleSet>,
    renderer: Arc<HeadlessRenderer>,
    /// Minimum spacing between rendered frames
    frame_interval: Duration,
    last_frame: Mutex<Option<Instant>>,
}

impl Session {
    pub fn new(config: &Config) -> Self {
        let size = config.terminal.size();
        let style = Arc::new(SharedStyleSet::new(config.style.style_set()));
        let terminal = Arc::new(VirtualTerminal::with_collaborators(
            size,
            Box::new(DefaultCursorHolder::new(config.terminal.cursor())),
            Box::new(DefaultLayerable::new(size)),
            style.clone(),
        ));
        let renderer = Arc::new(HeadlessRenderer::new(size, config.render.show_cursor));
        terminal.add_listener(&renderer);

        log::debug!("Created session with {} grid", size);
        Self {
            terminal,
            style,
            renderer,
            frame_interval: Duration::from_millis(config.render.frame_interval_ms),
            last_frame: Mutex::new(None),
        }
    }

    pub fn terminal(&self) -> &Arc<VirtualTerminal> {
        &self.terminal
    }

    /// Style applied to subsequently written glyphs
    pub fn style(&self) -> &SharedStyleSet {
        &self.style
    }

    pub fn renderer(&self) -> &HeadlessRenderer {
        &self.renderer
    }

    pub fn write_str(&self, text: &str) {
        self.terminal.put_str(text);
    }

    /// Signal a frame boundary and repaint dirty cells.
    ///
    /// Sleeps first if the previous frame was rendered less than the
    /// configured frame interval ago. Returns the number of cells repainted.
    pub fn render_frame(&self) -> usize {
        let mut last_frame = self.last_frame.lock();
        if let Some(last) = *last_frame {
            let elapsed = last.elapsed();
            if elapsed < self.frame_interval {
                thread::sleep(self.frame_interval - elapsed);
            }
        }
        self.terminal.flush();
        let repainted = self.renderer.render(&self.terminal);
        *last_frame = Some(Instant::now());
        repainted
    }

    /// The rendered frame as text
    pub fn frame_text(&self) -> String {
        self.renderer.text()
    }

    /// Feed `reader` into the input queue from a background thread.
    ///
    /// Each line becomes one key stroke per character followed by Enter.
    /// The terminal is closed when the reader is exhausted or fails.
    pub fn spawn_input_reader<R>(&self, reader: R) -> io::Result<JoinHandle<()>>
    where
        R: BufRead + Send + 'static,
    {
        let terminal = Arc::clone(&self.terminal);
        thread::Builder::new()
            .name("glyphterm-input".to_string())
            .spawn(move || {
                for line in reader.lines() {
                    match line {
                        Ok(line) => {
                            for stroke in line_to_key_strokes(&line) {
                                terminal.add_input(Input::from(stroke));
                            }
                        }
                        Err(e) => {
                            log::warn!("Input reader failed: {}", e);
                            break;
                        }
                    }
                }
                terminal.close();
            })
    }

    /// Take every pending input without blocking
    pub fn drain_input(&self) -> InputBatch {
        let mut batch = InputBatch::default();
        while let Some(input) = self.terminal.poll_input() {
            if input.is_eof() {
                batch.eof = true;
                break;
            }
            batch.events.push(input);
        }
        batch
    }

    pub fn close(&self) {
        self.terminal.close();
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.terminal.remove_listener(&self.renderer);
    }
}

fn line_to_key_strokes(line: &str) -> Vec<KeyStroke> {
    line.chars()
        .map(|c| match c {
            '\t' => KeyStroke::new(KeyCode::Tab, KeyModifiers::empty()),
            c => KeyStroke::character(c),
        })
        .chain(std::iter::once(KeyStroke::new(
            KeyCode::Enter,
            KeyModifiers::empty(),
        )))
        .collect()
}
