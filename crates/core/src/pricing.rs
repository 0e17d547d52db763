use serde::{Deserialize, Serialize};

use crate::config::PricingConfig;
use crate::domain::quote::QuoteRequest;
use crate::domain::vehicle::{VehicleTier, VehicleTierTable};

/// Result of pricing one request. `vehicle` is the tier actually used,
/// which may differ from the requested string when it was unrecognized.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PricingBreakdown {
    pub price_inr: i64,
    pub eta_days: i64,
    pub distance_km: f64,
    pub vehicle: VehicleTier,
}

/// Deterministic tiered pricing. Pure: identical inputs always produce
/// identical breakdowns.
///
/// Rounding is half-away-from-zero (`f64::round`), for both the price and
/// the ETA. Tests pin the tie-break.
pub struct PricingCalculator {
    tiers: VehicleTierTable,
    transit_speed_km_per_day: f64,
}

impl PricingCalculator {
    pub fn new(tiers: VehicleTierTable, transit_speed_km_per_day: f64) -> Self {
        Self { tiers, transit_speed_km_per_day }
    }

    pub fn from_config(config: &PricingConfig) -> Self {
        Self::new(config.tiers.clone(), config.transit_speed_km_per_day)
    }

    /// Unknown tier strings silently degrade to `14ft`; conversations are
    /// never blocked on a tier the user mistyped.
    pub fn resolve_tier(&self, requested: &str) -> VehicleTier {
        VehicleTier::parse(requested).unwrap_or(VehicleTier::FourteenFt)
    }

    /// Prices a validated request against an already-resolved distance.
    ///
    /// The overload factor scales the entire base-plus-variable cost once
    /// weight exceeds the tier's rated payload; at or under capacity it is
    /// exactly 1.0. This all-or-nothing scaling is intentional.
    pub fn price(&self, request: &QuoteRequest, distance_km: f64) -> PricingBreakdown {
        let vehicle = self.resolve_tier(&request.vehicle);
        let spec = self.tiers.spec(vehicle);

        let variable_cost = spec.per_km_rate * distance_km;
        let overload_factor = (request.weight_kg / spec.max_payload_kg).max(1.0);
        let price_inr = ((spec.base_fare + variable_cost) * overload_factor).round() as i64;

        let eta_days = ((distance_km / self.transit_speed_km_per_day).round() as i64).max(1);

        PricingBreakdown { price_inr, eta_days, distance_km, vehicle }
    }
}
