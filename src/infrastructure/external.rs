//! The two external gateways and their adapters.
//!
//! The gateways are opaque: their operation names are fixed by the vendor and
//! do not match the unified [`PaymentProcessor`] contract. Each adapter owns
//! exactly one gateway instance and forwards calls one-to-one, amount
//! unchanged. No conversion, no retry, no failure handling.

use crate::domain::payment::{GatewayId, PaymentEvent, PaymentKind};
use crate::domain::ports::{EventSinkHandle, PaymentProcessor};
use rust_decimal::Decimal;

/// Gateway Alpha's native API.
pub struct ExternalSystemAlpha {
    sink: EventSinkHandle,
}

impl ExternalSystemAlpha {
    pub fn new(sink: EventSinkHandle) -> Self {
        Self { sink }
    }

    pub fn make_payment(&self, amount: Decimal) {
        self.sink.record(PaymentEvent {
            gateway: GatewayId::Alpha,
            kind: PaymentKind::Charge,
            amount,
        });
    }

    pub fn make_refund(&self, amount: Decimal) {
        self.sink.record(PaymentEvent {
            gateway: GatewayId::Alpha,
            kind: PaymentKind::Refund,
            amount,
        });
    }
}

/// Gateway Beta's native API.
pub struct ExternalSystemBeta {
    sink: EventSinkHandle,
}

impl ExternalSystemBeta {
    pub fn new(sink: EventSinkHandle) -> Self {
        Self { sink }
    }

    pub fn send_payment(&self, amount: Decimal) {
        self.sink.record(PaymentEvent {
            gateway: GatewayId::Beta,
            kind: PaymentKind::Charge,
            amount,
        });
    }

    pub fn process_refund(&self, amount: Decimal) {
        self.sink.record(PaymentEvent {
            gateway: GatewayId::Beta,
            kind: PaymentKind::Refund,
            amount,
        });
    }
}

/// Presents gateway Alpha as a [`PaymentProcessor`].
pub struct AlphaAdapter {
    system: ExternalSystemAlpha,
}

impl AlphaAdapter {
    pub fn new(system: ExternalSystemAlpha) -> Self {
        Self { system }
    }
}

impl PaymentProcessor for AlphaAdapter {
    fn charge(&self, amount: Decimal) {
        self.system.make_payment(amount);
    }

    fn refund(&self, amount: Decimal) {
        self.system.make_refund(amount);
    }
}

/// Presents gateway Beta as a [`PaymentProcessor`].
pub struct BetaAdapter {
    system: ExternalSystemBeta,
}

impl BetaAdapter {
    pub fn new(system: ExternalSystemBeta) -> Self {
        Self { system }
    }
}

impl PaymentProcessor for BetaAdapter {
    fn charge(&self, amount: Decimal) {
        self.system.send_payment(amount);
    }

    fn refund(&self, amount: Decimal) {
        self.system.process_refund(amount);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::in_memory::InMemoryEventSink;
    use rust_decimal_macros::dec;
    use std::sync::Arc;

    #[test]
    fn test_alpha_adapter_forwards_amount_unchanged() {
        let sink = InMemoryEventSink::new();
        let adapter = AlphaAdapter::new(ExternalSystemAlpha::new(Arc::new(sink.clone())));

        adapter.charge(dec!(1500));
        adapter.refund(dec!(300));

        let events = sink.events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].gateway, GatewayId::Alpha);
        assert_eq!(events[0].kind, PaymentKind::Charge);
        assert_eq!(events[0].amount, dec!(1500));
        assert_eq!(events[1].gateway, GatewayId::Alpha);
        assert_eq!(events[1].kind, PaymentKind::Refund);
        assert_eq!(events[1].amount, dec!(300));
    }

    #[test]
    fn test_beta_adapter_forwards_amount_unchanged() {
        let sink = InMemoryEventSink::new();
        let adapter = BetaAdapter::new(ExternalSystemBeta::new(Arc::new(sink.clone())));

        adapter.charge(dec!(2000));
        adapter.refund(dec!(500));

        let events = sink.events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].gateway, GatewayId::Beta);
        assert_eq!(events[0].kind, PaymentKind::Charge);
        assert_eq!(events[1].gateway, GatewayId::Beta);
        assert_eq!(events[1].kind, PaymentKind::Refund);
    }

    #[test]
    fn test_adapters_accept_zero_and_negative_amounts() {
        // Amount validation is deliberately absent; see the processor port.
        let sink = InMemoryEventSink::new();
        let adapter = AlphaAdapter::new(ExternalSystemAlpha::new(Arc::new(sink.clone())));

        adapter.charge(dec!(0));
        adapter.charge(dec!(-5));

        let events = sink.events();
        assert_eq!(events[0].amount, dec!(0));
        assert_eq!(events[1].amount, dec!(-5));
    }
}
