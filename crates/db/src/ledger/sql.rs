use haulbot_core::domain::lead::Lead;
use haulbot_core::domain::quote::Quote;

use super::{LedgerError, QuoteLedger};
use crate::DbPool;

/// SQLite-backed ledger. INSERT only: there is deliberately no ON CONFLICT
/// clause, so an identifier collision (negligible with 128-bit ids)
/// surfaces as a storage error instead of silently rewriting history.
pub struct SqlQuoteLedger {
    pool: DbPool,
}

impl SqlQuoteLedger {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl QuoteLedger for SqlQuoteLedger {
    async fn append_quote(&self, quote: &Quote) -> Result<(), LedgerError> {
        sqlx::query(
            "INSERT INTO quotes (
                id,
                user_id,
                origin,
                destination,
                weight_kg,
                vehicle,
                price_inr,
                eta_days,
                distance_km,
                created_at
             ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&quote.id.0)
        .bind(&quote.user_id)
        .bind(&quote.origin)
        .bind(&quote.destination)
        .bind(quote.weight_kg)
        .bind(quote.vehicle.as_str())
        .bind(quote.price_inr)
        .bind(quote.eta_days)
        .bind(quote.distance_km)
        .bind(quote.created_at.to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn append_lead(&self, lead: &Lead) -> Result<(), LedgerError> {
        sqlx::query(
            "INSERT INTO leads (id, name, phone, company, created_at)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&lead.id.0)
        .bind(&lead.name)
        .bind(&lead.phone)
        .bind(&lead.company)
        .bind(lead.created_at.to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
