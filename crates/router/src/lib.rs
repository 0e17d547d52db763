//! Message routing for the haulbot engine.
//!
//! `MessageRouter` is the only surface channel adapters call. It follows
//! the two-step conversational flow: `handle` classifies free text and
//! returns an acknowledgement prompting for structured fields, then
//! `quote_and_persist` prices and records the quote once the adapter has
//! collected them. Pricing itself never happens inside `handle`.

pub mod message;
pub mod replies;
pub mod router;

pub use message::{Channel, InboundMessage, OutboundReply};
pub use router::{MessageRouter, RouterError};
