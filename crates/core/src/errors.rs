use thiserror::Error;

/// Malformed quote input, rejected before any pricing computation.
/// Unrecognized vehicle tiers are deliberately absent: they are recovered
/// locally by defaulting to `14ft` and never surfaced.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum QuoteRequestError {
    #[error("origin must not be empty")]
    EmptyOrigin,
    #[error("destination must not be empty")]
    EmptyDestination,
    #[error("weight_kg must be positive, got {0}")]
    NonPositiveWeight(f64),
    #[error("distance_km must be positive when supplied, got {0}")]
    NonPositiveDistance(f64),
}
