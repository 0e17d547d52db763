pub mod connection;
pub mod ledger;
pub mod migrations;

pub use connection::{connect, DbPool};
pub use ledger::{InMemoryQuoteLedger, LedgerError, QuoteLedger, SqlQuoteLedger};
