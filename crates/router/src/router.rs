use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info, warn};

use haulbot_core::chrono::Utc;
use haulbot_core::{
    AppConfig, DistanceResolver, IntentClassifier, Lead, LeadId, PricingBreakdown,
    PricingCalculator, Quote, QuoteId, QuoteRequest, QuoteRequestError, VehicleTier,
};
use haulbot_db::{LedgerError, QuoteLedger};

use crate::message::{InboundMessage, OutboundReply};
use crate::replies;

#[derive(Debug, Error)]
pub enum RouterError {
    #[error(transparent)]
    InvalidRequest(#[from] QuoteRequestError),
    #[error("quote could not be stored")]
    StorageUnavailable(#[source] LedgerError),
}

impl RouterError {
    /// Safe wording for end users; the technical cause stays in the logs.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::InvalidRequest(_) => {
                "I couldn't read that quote request. Check the origin, destination, and weight."
            }
            Self::StorageUnavailable(_) => {
                "Sorry, I couldn't save your quote right now. Please try again in a moment."
            }
        }
    }
}

/// Orchestrates classifier, pricing, and ledger. Stateless apart from the
/// ledger handle; safe to share across request tasks.
pub struct MessageRouter {
    classifier: IntentClassifier,
    distances: DistanceResolver,
    pricing: PricingCalculator,
    ledger: Arc<dyn QuoteLedger>,
}

impl MessageRouter {
    pub fn new(
        classifier: IntentClassifier,
        distances: DistanceResolver,
        pricing: PricingCalculator,
        ledger: Arc<dyn QuoteLedger>,
    ) -> Self {
        Self { classifier, distances, pricing, ledger }
    }

    pub fn from_config(config: &AppConfig, ledger: Arc<dyn QuoteLedger>) -> Self {
        Self::new(
            IntentClassifier::new(),
            DistanceResolver::from_config(&config.distances),
            PricingCalculator::from_config(&config.pricing),
            ledger,
        )
    }

    /// Classifies the message and returns the fixed acknowledgement for
    /// its intent. Pure and synchronous; no pricing, no persistence.
    pub fn handle(&self, message: &InboundMessage) -> OutboundReply {
        let intent = self.classifier.classify(&message.text);
        debug!(
            event_name = "router.message_classified",
            intent = intent.as_str(),
            channel = message.channel.as_str(),
            user_id = message.user_id.as_str(),
            "classified inbound message"
        );
        OutboundReply { intent, text: replies::acknowledgement(intent, message.channel).to_string() }
    }

    /// Prices a structured request without persisting anything.
    pub fn estimate(&self, request: &QuoteRequest) -> Result<PricingBreakdown, QuoteRequestError> {
        request.validate()?;
        let distance_km =
            self.distances.resolve(&request.origin, &request.destination, request.distance_km);
        Ok(self.pricing.price(request, distance_km))
    }

    /// Prices the request and appends the resulting quote to the ledger.
    /// A storage failure is surfaced, never retried here.
    pub async fn quote_and_persist(
        &self,
        request: &QuoteRequest,
        user_id: &str,
    ) -> Result<Quote, RouterError> {
        let breakdown = self.estimate(request)?;
        if VehicleTier::parse(&request.vehicle).is_none() {
            debug!(
                event_name = "router.vehicle_defaulted",
                requested_vehicle = request.vehicle.as_str(),
                "unrecognized vehicle tier defaulted to 14ft"
            );
        }

        let quote = Quote {
            id: QuoteId::generate(),
            user_id: user_id.to_string(),
            origin: request.origin.clone(),
            destination: request.destination.clone(),
            weight_kg: request.weight_kg,
            vehicle: breakdown.vehicle,
            price_inr: breakdown.price_inr,
            eta_days: breakdown.eta_days,
            distance_km: breakdown.distance_km,
            created_at: Utc::now(),
        };

        self.ledger.append_quote(&quote).await.map_err(|error| {
            warn!(
                event_name = "router.quote_append_failed",
                quote_id = quote.id.0.as_str(),
                error = %error,
                "failed to append quote to ledger"
            );
            RouterError::StorageUnavailable(error)
        })?;

        info!(
            event_name = "router.quote_persisted",
            quote_id = quote.id.0.as_str(),
            user_id = user_id,
            vehicle = quote.vehicle.as_str(),
            price_inr = quote.price_inr,
            eta_days = quote.eta_days,
            "quote persisted"
        );
        Ok(quote)
    }

    /// Records a handoff contact. Fields arrive already structured from
    /// the adapter; no entity extraction happens here.
    pub async fn capture_lead(
        &self,
        name: Option<String>,
        phone: Option<String>,
        company: Option<String>,
    ) -> Result<Lead, RouterError> {
        let lead = Lead { id: LeadId::generate(), name, phone, company, created_at: Utc::now() };
        self.ledger.append_lead(&lead).await.map_err(RouterError::StorageUnavailable)?;
        info!(
            event_name = "router.lead_captured",
            lead_id = lead.id.0.as_str(),
            "lead captured for agent handoff"
        );
        Ok(lead)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use haulbot_core::{AppConfig, Intent, QuoteRequest, QuoteRequestError, VehicleTier};
    use haulbot_db::InMemoryQuoteLedger;

    use crate::message::{Channel, InboundMessage};

    use super::{MessageRouter, RouterError};

    fn router_with_ledger() -> (MessageRouter, Arc<InMemoryQuoteLedger>) {
        let ledger = Arc::new(InMemoryQuoteLedger::default());
        let router = MessageRouter::from_config(&AppConfig::default(), ledger.clone());
        (router, ledger)
    }

    fn message(text: &str) -> InboundMessage {
        InboundMessage { user_id: "web:test".to_string(), text: text.to_string(), channel: Channel::Web }
    }

    fn request() -> QuoteRequest {
        QuoteRequest {
            origin: "Nigha".to_string(),
            destination: "Varanasi".to_string(),
            weight_kg: 1200.0,
            vehicle: "14ft".to_string(),
            distance_km: None,
        }
    }

    #[test]
    fn handle_acknowledges_without_pricing() {
        let (router, _) = router_with_ledger();
        let reply = router.handle(&message("what would a quote cost?"));
        assert_eq!(reply.intent, Intent::Quote);
        assert!(reply.text.contains("origin, destination, weight"));
        assert!(!reply.text.contains('₹'));
    }

    #[test]
    fn handle_falls_back_on_unknown_text() {
        let (router, _) = router_with_ledger();
        let reply = router.handle(&message("good morning"));
        assert_eq!(reply.intent, Intent::Fallback);
        assert!(reply.text.contains("Quotes, Booking, and Tracking"));
    }

    #[test]
    fn whatsapp_channel_gets_short_prompts() {
        let (router, _) = router_with_ledger();
        let mut message = message("price please");
        message.channel = Channel::Whatsapp;
        let reply = router.handle(&message);
        assert_eq!(reply.intent, Intent::Quote);
        assert_eq!(reply.text, "Send: quote Nigha->Varanasi 1200kg 14ft");
    }

    #[test]
    fn estimate_prices_known_route() {
        let (router, _) = router_with_ledger();
        let breakdown = router.estimate(&request()).expect("estimate");
        assert_eq!(breakdown.price_inr, 8320);
        assert_eq!(breakdown.eta_days, 1);
        assert_eq!(breakdown.distance_km, 310.0);
        assert_eq!(breakdown.vehicle, VehicleTier::FourteenFt);
    }

    #[test]
    fn estimate_rejects_invalid_request_before_computation() {
        let (router, _) = router_with_ledger();
        let mut bad = request();
        bad.weight_kg = -1.0;
        assert_eq!(router.estimate(&bad), Err(QuoteRequestError::NonPositiveWeight(-1.0)));
    }

    #[tokio::test]
    async fn quote_and_persist_appends_full_record() {
        let (router, ledger) = router_with_ledger();
        let quote = router.quote_and_persist(&request(), "web:alice").await.expect("persist");

        assert_eq!(quote.price_inr, 8320);
        assert_eq!(quote.user_id, "web:alice");
        assert_eq!(quote.summary(), "Estimated ₹8320 • ETA 1 day(s) for 310 km");

        let stored = ledger.quotes().await;
        assert_eq!(stored, vec![quote]);
    }

    #[tokio::test]
    async fn identical_requests_persist_distinct_quotes() {
        let (router, ledger) = router_with_ledger();
        let first = router.quote_and_persist(&request(), "web:alice").await.expect("first");
        let second = router.quote_and_persist(&request(), "web:alice").await.expect("second");

        assert_ne!(first.id, second.id);
        assert_eq!(ledger.quotes().await.len(), 2);
    }

    #[tokio::test]
    async fn storage_failure_surfaces_with_retry_message() {
        let (router, ledger) = router_with_ledger();
        ledger.set_unavailable(true);

        let error =
            router.quote_and_persist(&request(), "web:alice").await.expect_err("storage down");
        assert!(matches!(error, RouterError::StorageUnavailable(_)));
        assert!(error.user_message().contains("try again"));
    }

    #[tokio::test]
    async fn invalid_request_never_touches_the_ledger() {
        let (router, ledger) = router_with_ledger();
        let mut bad = request();
        bad.origin = String::new();

        let error = router.quote_and_persist(&bad, "web:alice").await.expect_err("invalid");
        assert!(matches!(error, RouterError::InvalidRequest(QuoteRequestError::EmptyOrigin)));
        assert!(ledger.quotes().await.is_empty());
    }

    #[tokio::test]
    async fn captures_lead_with_structured_fields() {
        let (router, ledger) = router_with_ledger();
        let lead = router
            .capture_lead(Some("Ravi".to_string()), Some("+91-98765-43210".to_string()), None)
            .await
            .expect("capture lead");

        assert_eq!(ledger.leads().await, vec![lead]);
    }
}
