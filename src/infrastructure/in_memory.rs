use crate::domain::payment::PaymentEvent;
use crate::domain::ports::PaymentEventSink;
use std::sync::{Arc, Mutex};

/// A thread-safe in-memory event sink.
///
/// Records events in call order behind `Arc<Mutex<Vec<PaymentEvent>>>`, so
/// clones observe the same stream. This is the only sink the binary and the
/// tests need; a real deployment would put a ledger behind the same port.
#[derive(Default, Clone)]
pub struct InMemoryEventSink {
    events: Arc<Mutex<Vec<PaymentEvent>>>,
}

impl InMemoryEventSink {
    /// Creates a new, empty event sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of all events recorded so far, in call order.
    pub fn events(&self) -> Vec<PaymentEvent> {
        let events = self.events.lock().unwrap_or_else(|e| e.into_inner());
        events.clone()
    }
}

impl PaymentEventSink for InMemoryEventSink {
    fn record(&self, event: PaymentEvent) {
        let mut events = self.events.lock().unwrap_or_else(|e| e.into_inner());
        events.push(event);
    }
}
