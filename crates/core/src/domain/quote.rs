use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::vehicle::VehicleTier;
use crate::errors::QuoteRequestError;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuoteId(pub String);

impl QuoteId {
    /// 128-bit random identifier; collisions are negligible so appends
    /// never need a uniqueness retry loop.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

fn default_vehicle() -> String {
    "14ft".to_string()
}

/// Transient pricing input supplied by a channel adapter once the
/// conversation has collected structured fields. Never persisted itself.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuoteRequest {
    pub origin: String,
    pub destination: String,
    pub weight_kg: f64,
    #[serde(default = "default_vehicle")]
    pub vehicle: String,
    #[serde(default)]
    pub distance_km: Option<f64>,
}

impl QuoteRequest {
    /// Rejects malformed input before any computation. An unrecognized
    /// vehicle string is NOT malformed; pricing defaults it to `14ft`.
    pub fn validate(&self) -> Result<(), QuoteRequestError> {
        if self.origin.trim().is_empty() {
            return Err(QuoteRequestError::EmptyOrigin);
        }
        if self.destination.trim().is_empty() {
            return Err(QuoteRequestError::EmptyDestination);
        }
        if self.weight_kg <= 0.0 {
            return Err(QuoteRequestError::NonPositiveWeight(self.weight_kg));
        }
        if let Some(distance_km) = self.distance_km {
            if distance_km <= 0.0 {
                return Err(QuoteRequestError::NonPositiveDistance(distance_km));
            }
        }
        Ok(())
    }
}

/// Priced estimate record. Immutable once created: the ledger exposes no
/// update or delete path, only append.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub id: QuoteId,
    pub user_id: String,
    pub origin: String,
    pub destination: String,
    pub weight_kg: f64,
    pub vehicle: VehicleTier,
    pub price_inr: i64,
    pub eta_days: i64,
    pub distance_km: f64,
    pub created_at: DateTime<Utc>,
}

impl Quote {
    /// Human-readable confirmation line for channel adapters to render.
    pub fn summary(&self) -> String {
        format!(
            "Estimated ₹{} • ETA {} day(s) for {} km",
            self.price_inr, self.eta_days, self.distance_km
        )
    }
}
