use std::sync::Arc;

use serde_json::json;

use haulbot_core::{AppConfig, LoadOptions, QuoteRequest};
use haulbot_db::{connect, migrations, SqlQuoteLedger};
use haulbot_router::{MessageRouter, RouterError};

use crate::commands::{block_on, CommandResult};
use crate::QuoteArgs;

pub fn run(args: &QuoteArgs) -> CommandResult {
    let config = match AppConfig::load(LoadOptions::default()) {
        Ok(config) => config,
        Err(error) => {
            return CommandResult::failure(
                "quote",
                "config_validation",
                format!("configuration issue: {error}"),
                2,
            );
        }
    };

    let request = QuoteRequest {
        origin: args.estimate.origin.clone(),
        destination: args.estimate.destination.clone(),
        weight_kg: args.estimate.weight_kg,
        vehicle: args.estimate.vehicle.clone(),
        distance_km: args.estimate.distance_km,
    };

    let outcome = match block_on("quote", async {
        let pool = connect(&config.database)
            .await
            .map_err(|error| ("db_connectivity", error.to_string(), 4u8))?;
        migrations::run_pending(&pool)
            .await
            .map_err(|error| ("migration", error.to_string(), 5u8))?;

        let router =
            MessageRouter::from_config(&config, Arc::new(SqlQuoteLedger::new(pool.clone())));
        let result = router.quote_and_persist(&request, &args.user_id).await;
        pool.close().await;

        result.map_err(|error| match &error {
            RouterError::InvalidRequest(_) => {
                ("invalid_request", error.to_string(), 2u8)
            }
            RouterError::StorageUnavailable(_) => {
                ("storage_unavailable", error.user_message().to_string(), 6u8)
            }
        })
    }) {
        Ok(outcome) => outcome,
        Err(result) => return result,
    };

    match outcome {
        Ok(quote) => CommandResult::success_with_data(
            "quote",
            quote.summary(),
            json!({
                "quote_id": quote.id.0,
                "price_inr": quote.price_inr,
                "eta_days": quote.eta_days,
                "distance_km": quote.distance_km,
                "vehicle": quote.vehicle.as_str(),
                "created_at": quote.created_at.to_rfc3339(),
            }),
        ),
        Err((error_class, message, exit_code)) => {
            CommandResult::failure("quote", error_class, message, exit_code)
        }
    }
}
