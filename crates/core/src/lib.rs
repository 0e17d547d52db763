//! Deterministic core of the haulbot freight chatbot.
//!
//! Everything in this crate is pure and synchronous: intent classification,
//! distance resolution, and quote pricing are plain functions of their
//! inputs plus immutable configuration loaded once at process start.
//! Persistence and channel transports live in sibling crates.

pub mod config;
pub mod distance;
pub mod domain;
pub mod errors;
pub mod intent;
pub mod pricing;

pub use config::{AppConfig, ConfigError, ConfigOverrides, LoadOptions};
pub use distance::DistanceResolver;
pub use domain::intent::Intent;
pub use domain::lead::{Lead, LeadId};
pub use domain::quote::{Quote, QuoteId, QuoteRequest};
pub use domain::vehicle::{TierSpec, VehicleTier, VehicleTierTable};
pub use errors::QuoteRequestError;
pub use intent::IntentClassifier;
pub use pricing::{PricingBreakdown, PricingCalculator};

pub use chrono;
