use crate::domain::payment::{GatewayId, PaymentEvent, PaymentKind};
use crate::domain::ports::{EventSinkHandle, PaymentProcessor};
use rust_decimal::Decimal;

/// Handles charges and refunds in-house. No translation layer: the unified
/// contract is the native contract.
pub struct InternalProcessor {
    sink: EventSinkHandle,
}

impl InternalProcessor {
    pub fn new(sink: EventSinkHandle) -> Self {
        Self { sink }
    }
}

impl PaymentProcessor for InternalProcessor {
    fn charge(&self, amount: Decimal) {
        self.sink.record(PaymentEvent {
            gateway: GatewayId::Internal,
            kind: PaymentKind::Charge,
            amount,
        });
    }

    fn refund(&self, amount: Decimal) {
        self.sink.record(PaymentEvent {
            gateway: GatewayId::Internal,
            kind: PaymentKind::Refund,
            amount,
        });
    }
}
