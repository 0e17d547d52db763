pub mod chat;
pub mod classify;
pub mod config;
pub mod estimate;
pub mod migrate;
pub mod quote;

use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone)]
pub struct CommandResult {
    pub exit_code: u8,
    pub output: String,
}

#[derive(Debug, Serialize)]
struct CommandOutcome {
    command: String,
    status: String,
    error_class: Option<String>,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<Value>,
}

impl CommandResult {
    pub fn success(command: &str, message: impl Into<String>) -> Self {
        Self::build(command, "ok", None, message.into(), None, 0)
    }

    pub fn success_with_data(command: &str, message: impl Into<String>, data: Value) -> Self {
        Self::build(command, "ok", None, message.into(), Some(data), 0)
    }

    pub fn failure(
        command: &str,
        error_class: &str,
        message: impl Into<String>,
        exit_code: u8,
    ) -> Self {
        Self::build(command, "error", Some(error_class.to_string()), message.into(), None, exit_code)
    }

    fn build(
        command: &str,
        status: &str,
        error_class: Option<String>,
        message: String,
        data: Option<Value>,
        exit_code: u8,
    ) -> Self {
        let payload = CommandOutcome {
            command: command.to_string(),
            status: status.to_string(),
            error_class,
            message,
            data,
        };
        Self { exit_code, output: serialize_payload(payload) }
    }
}

fn serialize_payload(payload: CommandOutcome) -> String {
    serde_json::to_string_pretty(&payload).unwrap_or_else(|_| {
        format!(
            "{{\"command\":\"{}\",\"status\":\"error\",\"message\":\"output serialization failed\"}}",
            payload.command
        )
    })
}

/// Current-thread runtime for commands that touch the database.
pub(crate) fn block_on<F: std::future::Future>(
    command: &str,
    future: F,
) -> Result<F::Output, CommandResult> {
    let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build().map_err(
        |error| {
            CommandResult::failure(
                command,
                "runtime_init",
                format!("failed to initialize async runtime: {error}"),
                3,
            )
        },
    )?;
    Ok(runtime.block_on(future))
}
