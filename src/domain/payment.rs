use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum PaymentKind {
    Charge,
    Refund,
}

/// Identity of the system that handled a payment operation.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum GatewayId {
    Internal,
    Alpha,
    Beta,
}

/// One record per processor call: which gateway handled it, what the
/// operation was, and the amount exactly as it was requested.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct PaymentEvent {
    pub gateway: GatewayId,
    pub kind: PaymentKind,
    pub amount: Decimal,
}

/// A single routed payment request, as read from the instruction CSV.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct PaymentInstruction {
    pub currency: String,
    pub kind: PaymentKind,
    pub amount: Decimal,
}
