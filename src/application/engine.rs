use crate::application::router::PaymentRouter;
use crate::domain::payment::{PaymentInstruction, PaymentKind};
use crate::domain::ports::EventSinkHandle;

/// Drives payment instructions through the router.
///
/// Each instruction selects a processor by its currency and dispatches the
/// requested operation. Instructions never fail: the router is total and the
/// processors accept every amount, so processing a batch emits exactly one
/// event per instruction, in batch order.
pub struct PaymentEngine {
    router: PaymentRouter,
}

impl PaymentEngine {
    pub fn new(sink: EventSinkHandle) -> Self {
        Self {
            router: PaymentRouter::new(sink),
        }
    }

    pub fn process_instruction(&self, instruction: PaymentInstruction) {
        let processor = self.router.processor_for(&instruction.currency);
        match instruction.kind {
            PaymentKind::Charge => processor.charge(instruction.amount),
            PaymentKind::Refund => processor.refund(instruction.amount),
        }
    }
}
