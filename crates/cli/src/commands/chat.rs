use std::sync::Arc;

use serde_json::json;

use haulbot_core::{AppConfig, LoadOptions};
use haulbot_db::InMemoryQuoteLedger;
use haulbot_router::{Channel, InboundMessage, MessageRouter};

use crate::commands::CommandResult;
use crate::ChatArgs;

pub fn run(args: &ChatArgs) -> CommandResult {
    let config = match AppConfig::load(LoadOptions::default()) {
        Ok(config) => config,
        Err(error) => {
            return CommandResult::failure(
                "chat",
                "config_validation",
                format!("configuration issue: {error}"),
                2,
            );
        }
    };

    let channel = match args.channel.as_str() {
        "web" => Channel::Web,
        "whatsapp" => Channel::Whatsapp,
        other => {
            return CommandResult::failure(
                "chat",
                "invalid_channel",
                format!("unknown channel `{other}` (expected web|whatsapp)"),
                2,
            );
        }
    };

    // `handle` never touches the ledger; an in-memory one satisfies the
    // router without a database connection.
    let router = MessageRouter::from_config(&config, Arc::new(InMemoryQuoteLedger::default()));
    let reply = router.handle(&InboundMessage {
        user_id: args.user_id.clone(),
        text: args.text.clone(),
        channel,
    });

    CommandResult::success_with_data(
        "chat",
        format!("classified as {}", reply.intent),
        json!({
            "user_id": args.user_id,
            "intent": reply.intent.as_str(),
            "reply": reply.text,
        }),
    )
}
