use serde_json::json;

use haulbot_core::IntentClassifier;

use crate::commands::CommandResult;

pub fn run(text: &str) -> CommandResult {
    let intent = IntentClassifier::new().classify(text);
    CommandResult::success_with_data(
        "classify",
        format!("classified as {intent}"),
        json!({ "intent": intent.as_str() }),
    )
}
