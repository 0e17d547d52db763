use async_trait::async_trait;
use thiserror::Error;

use haulbot_core::domain::lead::Lead;
use haulbot_core::domain::quote::Quote;

pub mod memory;
pub mod sql;

pub use memory::InMemoryQuoteLedger;
pub use sql::SqlQuoteLedger;

/// A failed write against the durable store. Never retried here; the
/// router decides whether to retry or tell the user to try again.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),
}

impl From<sqlx::Error> for LedgerError {
    fn from(error: sqlx::Error) -> Self {
        Self::StorageUnavailable(error.to_string())
    }
}

/// Append-only persistence for generated quotes and captured leads.
/// Identifiers are assigned by the caller before append; records are
/// immutable once written. `append_*` may block on I/O — callers must not
/// hold a lock across it.
#[async_trait]
pub trait QuoteLedger: Send + Sync {
    async fn append_quote(&self, quote: &Quote) -> Result<(), LedgerError>;
    async fn append_lead(&self, lead: &Lead) -> Result<(), LedgerError>;
}
