use serde_json::json;

use haulbot_core::{
    AppConfig, DistanceResolver, LoadOptions, PricingCalculator, QuoteRequest,
};

use crate::commands::CommandResult;
use crate::EstimateArgs;

pub fn run(args: &EstimateArgs) -> CommandResult {
    let config = match AppConfig::load(LoadOptions::default()) {
        Ok(config) => config,
        Err(error) => {
            return CommandResult::failure(
                "estimate",
                "config_validation",
                format!("configuration issue: {error}"),
                2,
            );
        }
    };

    let request = QuoteRequest {
        origin: args.origin.clone(),
        destination: args.destination.clone(),
        weight_kg: args.weight_kg,
        vehicle: args.vehicle.clone(),
        distance_km: args.distance_km,
    };
    if let Err(error) = request.validate() {
        return CommandResult::failure("estimate", "invalid_request", error.to_string(), 2);
    }

    let distances = DistanceResolver::from_config(&config.distances);
    let pricing = PricingCalculator::from_config(&config.pricing);
    let distance_km = distances.resolve(&request.origin, &request.destination, request.distance_km);
    let breakdown = pricing.price(&request, distance_km);

    CommandResult::success_with_data(
        "estimate",
        format!(
            "₹{} over {} km by {} in {} day(s)",
            breakdown.price_inr, breakdown.distance_km, breakdown.vehicle, breakdown.eta_days
        ),
        json!({
            "price_inr": breakdown.price_inr,
            "eta_days": breakdown.eta_days,
            "distance_km": breakdown.distance_km,
            "vehicle": breakdown.vehicle.as_str(),
        }),
    )
}
