//! Terminal listeners
//!
//! Observers notified when a terminal resizes, flushes a frame or closes.
//! The terminal holds listeners weakly; dropping the last `Arc` to a
//! listener unsubscribes it.

use std::sync::{Arc, Weak};

use crate::position::Size;
use crate::terminal::VirtualTerminal;

/// Callbacks invoked by a [`VirtualTerminal`].
///
/// Callbacks run on the thread that triggered them, after the terminal has
/// released its state lock, and should return quickly.
pub trait TerminalListener: Send + Sync {
    fn on_resized(&self, _source: &VirtualTerminal, _new_size: Size) {}

    fn on_flush(&self) {}

    fn on_close(&self) {}
}

/// Non-owning subscription list
#[derive(Default)]
pub(crate) struct ListenerSet {
    listeners: Vec<Weak<dyn TerminalListener>>,
}

impl ListenerSet {
    pub(crate) fn add(&mut self, listener: Weak<dyn TerminalListener>) {
        self.listeners.push(listener);
    }

    /// Unsubscribe `listener`; false if it was not subscribed
    pub(crate) fn remove(&mut self, listener: &Weak<dyn TerminalListener>) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|l| !Weak::ptr_eq(l, listener));
        self.listeners.len() != before
    }

    /// Upgrade live listeners, pruning dropped ones
    pub(crate) fn live(&mut self) -> Vec<Arc<dyn TerminalListener>> {
        let mut live = Vec::with_capacity(self.listeners.len());
        self.listeners.retain(|weak| match weak.upgrade() {
            Some(listener) => {
                live.push(listener);
                true
            }
            None => false,
        });
        live
    }

    pub(crate) fn len(&self) -> usize {
        self.listeners.len()
    }
}
