//! Narration events
//!
//! The engine reports everything that happens as plain-text messages.
//! Listeners receive them synchronously, in registration order.

use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, Mutex, PoisonError};

/// Receiver of narration messages
pub trait EventListener: Send + Sync {
    fn on_event(&self, message: &str);
}

impl<F> EventListener for F
where
    F: Fn(&str) + Send + Sync,
{
    fn on_event(&self, message: &str) {
        self(message)
    }
}

/// Shared handle to a listener; the same listener may watch several combatants
pub type ListenerHandle = Arc<dyn EventListener>;

/// Deliver `message` to each listener, in order
///
/// A listener that panics is logged and skipped. The others still hear the
/// message, and the caller carries on with its turn.
pub(crate) fn notify_all(listeners: &[ListenerHandle], message: &str) {
    for listener in listeners {
        let delivered = panic::catch_unwind(AssertUnwindSafe(|| listener.on_event(message)));
        if delivered.is_err() {
            tracing::warn!(event = message, "listener panicked, skipping it");
        }
    }
}

/// Listener that records every message it sees
#[derive(Debug, Default)]
pub struct EventLog {
    messages: Mutex<Vec<String>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of all messages received so far
    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Drain the recorded messages
    pub fn take(&self) -> Vec<String> {
        let mut messages = self.messages.lock().unwrap_or_else(PoisonError::into_inner);
        std::mem::take(&mut *messages)
    }

    /// True if any recorded message contains `needle`
    pub fn contains(&self, needle: &str) -> bool {
        self.messages().iter().any(|m| m.contains(needle))
    }
}

impl EventListener for EventLog {
    fn on_event(&self, message: &str) {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.to_string());
    }
}

/// Listener that forwards narration into `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingListener;

impl EventListener for TracingListener {
    fn on_event(&self, message: &str) {
        tracing::info!(target: "duel_engine::narration", "{}", message);
    }
}
