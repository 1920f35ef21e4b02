//! Unbounded input queue
//!
//! Any number of producer threads push events; a single consumer polls
//! without blocking. Closing enqueues one [`Input::Eof`] marker; once the
//! consumer has seen it, the queue yields nothing more.

use std::collections::VecDeque;

use parking_lot::Mutex;

use crate::input::Input;

#[derive(Debug, Default)]
struct QueueState {
    events: VecDeque<Input>,
    /// Eof marker has been enqueued
    closed: bool,
    /// Eof marker has been handed to the consumer
    finished: bool,
}

/// FIFO bridging input producers to one consumer
#[derive(Debug, Default)]
pub struct InputQueue {
    state: Mutex<QueueState>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue an event. Never blocks.
    ///
    /// Events arriving after [`close`](Self::close) are dropped so nothing
    /// is delivered behind the end-of-stream marker.
    pub fn add_input(&self, input: Input) {
        let mut state = self.state.lock();
        if state.closed {
            log::debug!("Dropping input after close: {:?}", input.input_type());
            return;
        }
        state.events.push_back(input);
    }

    /// Take the oldest event, if any
    pub fn poll_input(&self) -> Option<Input> {
        let mut state = self.state.lock();
        if state.finished {
            return None;
        }
        let input = state.events.pop_front()?;
        if input.is_eof() {
            state.finished = true;
        }
        Some(input)
    }

    /// Enqueue the end-of-stream marker. Later calls do nothing.
    pub fn close(&self) {
        let mut state = self.state.lock();
        if state.closed {
            return;
        }
        state.closed = true;
        state.events.push_back(Input::eof());
    }

    pub fn is_closed(&self) -> bool {
        self.state.lock().closed
    }

    /// Number of events waiting, including a pending Eof marker
    pub fn len(&self) -> usize {
        self.state.lock().events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.lock().events.is_empty()
    }
}
