use super::payment::PaymentEvent;
use rust_decimal::Decimal;
use std::sync::Arc;

/// Unified payment contract.
///
/// Amounts are forwarded exactly as given: zero and negative values are
/// accepted, matching the reference behavior. Neither operation can fail;
/// the only observable effect is one event emitted per call.
pub trait PaymentProcessor {
    fn charge(&self, amount: Decimal);
    fn refund(&self, amount: Decimal);
}

pub type ProcessorBox = Box<dyn PaymentProcessor>;

/// Sink for emitted payment events.
///
/// Implementations must record events in call order. `Send + Sync` lets a
/// sink be shared between gateways; whether a concrete gateway tolerates
/// concurrent calls is that gateway's own guarantee, not the sink's.
pub trait PaymentEventSink: Send + Sync {
    fn record(&self, event: PaymentEvent);
}

pub type EventSinkHandle = Arc<dyn PaymentEventSink>;
