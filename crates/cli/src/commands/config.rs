use serde_json::json;

use haulbot_core::{AppConfig, LoadOptions, VehicleTier};

use crate::commands::CommandResult;

pub fn run() -> CommandResult {
    let config = match AppConfig::load(LoadOptions::default()) {
        Ok(config) => config,
        Err(error) => {
            return CommandResult::failure(
                "config",
                "config_validation",
                format!("configuration issue: {error}"),
                2,
            );
        }
    };

    let tiers: serde_json::Map<String, serde_json::Value> = VehicleTier::ALL
        .iter()
        .map(|tier| {
            let spec = config.pricing.tiers.spec(*tier);
            (
                tier.as_str().to_string(),
                json!({
                    "base_fare": spec.base_fare,
                    "per_km_rate": spec.per_km_rate,
                    "max_payload_kg": spec.max_payload_kg,
                }),
            )
        })
        .collect();

    CommandResult::success_with_data(
        "config",
        "effective configuration",
        json!({
            "database": {
                "url": config.database.url,
                "max_connections": config.database.max_connections,
                "timeout_secs": config.database.timeout_secs,
            },
            "logging": {
                "level": config.logging.level,
            },
            "pricing": {
                "tiers": tiers,
                "transit_speed_km_per_day": config.pricing.transit_speed_km_per_day,
            },
            "distances": {
                "pairs": config.distances.pairs,
                "fallback_km": config.distances.fallback_km,
            },
        }),
    )
}
