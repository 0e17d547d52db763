use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

/// Closed set of vehicle tiers the operator runs. Unknown tier strings are
/// never an error anywhere in the system; callers default them to `14ft`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum VehicleTier {
    #[serde(rename = "pickup")]
    Pickup,
    #[serde(rename = "14ft")]
    FourteenFt,
    #[serde(rename = "17ft")]
    SeventeenFt,
    #[serde(rename = "22ft")]
    TwentyTwoFt,
}

impl VehicleTier {
    pub const ALL: [VehicleTier; 4] =
        [Self::Pickup, Self::FourteenFt, Self::SeventeenFt, Self::TwentyTwoFt];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pickup => "pickup",
            Self::FourteenFt => "14ft",
            Self::SeventeenFt => "17ft",
            Self::TwentyTwoFt => "22ft",
        }
    }

    /// Exact identifier match; returns `None` for anything else so the
    /// caller can apply the `14ft` default.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pickup" => Some(Self::Pickup),
            "14ft" => Some(Self::FourteenFt),
            "17ft" => Some(Self::SeventeenFt),
            "22ft" => Some(Self::TwentyTwoFt),
            _ => None,
        }
    }
}

impl std::fmt::Display for VehicleTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pricing economics for one tier. All attributes strictly positive,
/// enforced by `VehicleTierTable::new`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TierSpec {
    pub base_fare: f64,
    pub per_km_rate: f64,
    pub max_payload_kg: f64,
}

impl TierSpec {
    fn validate(&self, tier: VehicleTier) -> Result<(), ConfigError> {
        for (field, value) in [
            ("base_fare", self.base_fare),
            ("per_km_rate", self.per_km_rate),
            ("max_payload_kg", self.max_payload_kg),
        ] {
            if value <= 0.0 {
                return Err(ConfigError::Validation(format!(
                    "tier `{tier}` has non-positive {field}: {value}"
                )));
            }
        }
        Ok(())
    }
}

/// Immutable table with exactly one spec per tier, built once at startup.
#[derive(Clone, Debug, PartialEq)]
pub struct VehicleTierTable {
    pickup: TierSpec,
    fourteen_ft: TierSpec,
    seventeen_ft: TierSpec,
    twenty_two_ft: TierSpec,
}

impl VehicleTierTable {
    pub fn new(
        pickup: TierSpec,
        fourteen_ft: TierSpec,
        seventeen_ft: TierSpec,
        twenty_two_ft: TierSpec,
    ) -> Result<Self, ConfigError> {
        let table = Self { pickup, fourteen_ft, seventeen_ft, twenty_two_ft };
        for tier in VehicleTier::ALL {
            table.spec(tier).validate(tier)?;
        }
        Ok(table)
    }

    pub fn spec(&self, tier: VehicleTier) -> &TierSpec {
        match tier {
            VehicleTier::Pickup => &self.pickup,
            VehicleTier::FourteenFt => &self.fourteen_ft,
            VehicleTier::SeventeenFt => &self.seventeen_ft,
            VehicleTier::TwentyTwoFt => &self.twenty_two_ft,
        }
    }
}
