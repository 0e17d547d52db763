use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::RwLock;

use haulbot_core::domain::lead::Lead;
use haulbot_core::domain::quote::Quote;

use super::{LedgerError, QuoteLedger};

/// In-memory ledger for tests and local runs. `set_unavailable(true)`
/// makes every append fail the way a broken durable store would.
#[derive(Default)]
pub struct InMemoryQuoteLedger {
    quotes: RwLock<Vec<Quote>>,
    leads: RwLock<Vec<Lead>>,
    unavailable: AtomicBool,
}

impl InMemoryQuoteLedger {
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    pub async fn quotes(&self) -> Vec<Quote> {
        self.quotes.read().await.clone()
    }

    pub async fn leads(&self) -> Vec<Lead> {
        self.leads.read().await.clone()
    }

    fn check_available(&self) -> Result<(), LedgerError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(LedgerError::StorageUnavailable("in-memory store is offline".to_string()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl QuoteLedger for InMemoryQuoteLedger {
    async fn append_quote(&self, quote: &Quote) -> Result<(), LedgerError> {
        self.check_available()?;
        self.quotes.write().await.push(quote.clone());
        Ok(())
    }

    async fn append_lead(&self, lead: &Lead) -> Result<(), LedgerError> {
        self.check_available()?;
        self.leads.write().await.push(lead.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use haulbot_core::chrono::Utc;
    use haulbot_core::domain::lead::{Lead, LeadId};
    use haulbot_core::domain::quote::{Quote, QuoteId};
    use haulbot_core::domain::vehicle::VehicleTier;

    use crate::ledger::{LedgerError, QuoteLedger};

    use super::InMemoryQuoteLedger;

    fn quote() -> Quote {
        Quote {
            id: QuoteId::generate(),
            user_id: "user-1".to_string(),
            origin: "Nigha".to_string(),
            destination: "Varanasi".to_string(),
            weight_kg: 1200.0,
            vehicle: VehicleTier::FourteenFt,
            price_inr: 8320,
            eta_days: 1,
            distance_km: 310.0,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn appends_accumulate_without_dedup() {
        let ledger = InMemoryQuoteLedger::default();
        let mut first = quote();
        let mut second = quote();
        // Same field values except the caller-assigned identifiers.
        second.created_at = first.created_at;
        first.user_id = "user-1".to_string();
        second.user_id = "user-1".to_string();

        ledger.append_quote(&first).await.expect("first append");
        ledger.append_quote(&second).await.expect("second append");

        let stored = ledger.quotes().await;
        assert_eq!(stored.len(), 2);
        assert_ne!(stored[0].id, stored[1].id);
    }

    #[tokio::test]
    async fn appends_lead_with_optional_fields() {
        let ledger = InMemoryQuoteLedger::default();
        let lead = Lead {
            id: LeadId::generate(),
            name: Some("Ravi".to_string()),
            phone: None,
            company: None,
            created_at: Utc::now(),
        };
        ledger.append_lead(&lead).await.expect("append lead");
        assert_eq!(ledger.leads().await, vec![lead]);
    }

    #[tokio::test]
    async fn unavailable_store_fails_every_append() {
        let ledger = InMemoryQuoteLedger::default();
        ledger.set_unavailable(true);

        let error = ledger.append_quote(&quote()).await.expect_err("append should fail");
        assert!(matches!(error, LedgerError::StorageUnavailable(_)));
        assert!(ledger.quotes().await.is_empty());

        ledger.set_unavailable(false);
        ledger.append_quote(&quote()).await.expect("append succeeds after recovery");
    }
}
