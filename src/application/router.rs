use crate::domain::ports::{EventSinkHandle, ProcessorBox};
use crate::infrastructure::external::{
    AlphaAdapter, BetaAdapter, ExternalSystemAlpha, ExternalSystemBeta,
};
use crate::infrastructure::internal::InternalProcessor;

/// Routes a currency code to the processor that settles it.
pub struct PaymentRouter {
    sink: EventSinkHandle,
}

impl PaymentRouter {
    pub fn new(sink: EventSinkHandle) -> Self {
        Self { sink }
    }

    /// Total mapping: every input resolves to a processor, never an error.
    ///
    /// Matching is case-insensitive via uppercasing. Nothing is trimmed, so
    /// a padded code like `"usd "` falls through to the internal processor
    /// along with empty and unrecognized codes.
    pub fn processor_for(&self, currency: &str) -> ProcessorBox {
        match currency.to_uppercase().as_str() {
            "USD" => Box::new(AlphaAdapter::new(ExternalSystemAlpha::new(
                self.sink.clone(),
            ))),
            "EUR" => Box::new(BetaAdapter::new(ExternalSystemBeta::new(
                self.sink.clone(),
            ))),
            _ => Box::new(InternalProcessor::new(self.sink.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::payment::GatewayId;
    use crate::infrastructure::in_memory::InMemoryEventSink;
    use rust_decimal_macros::dec;
    use std::sync::Arc;

    fn routed_gateway(currency: &str) -> GatewayId {
        let sink = InMemoryEventSink::new();
        let router = PaymentRouter::new(Arc::new(sink.clone()));
        router.processor_for(currency).charge(dec!(1));
        sink.events()[0].gateway
    }

    #[test]
    fn test_known_currencies_route_to_their_gateways() {
        assert_eq!(routed_gateway("USD"), GatewayId::Alpha);
        assert_eq!(routed_gateway("EUR"), GatewayId::Beta);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        assert_eq!(routed_gateway("usd"), GatewayId::Alpha);
        assert_eq!(routed_gateway("eUr"), GatewayId::Beta);
    }

    #[test]
    fn test_everything_else_routes_internal() {
        assert_eq!(routed_gateway("XYZ"), GatewayId::Internal);
        assert_eq!(routed_gateway(""), GatewayId::Internal);
        // Padded codes are not trimmed.
        assert_eq!(routed_gateway("usd "), GatewayId::Internal);
    }
}
