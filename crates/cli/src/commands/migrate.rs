use haulbot_core::{AppConfig, LoadOptions};
use haulbot_db::{connect, migrations};

use crate::commands::{block_on, CommandResult};

pub fn run() -> CommandResult {
    let config = match AppConfig::load(LoadOptions::default()) {
        Ok(config) => config,
        Err(error) => {
            return CommandResult::failure(
                "migrate",
                "config_validation",
                format!("configuration issue: {error}"),
                2,
            );
        }
    };

    let result = match block_on("migrate", async {
        let pool = connect(&config.database)
            .await
            .map_err(|error| ("db_connectivity", error.to_string(), 4u8))?;
        migrations::run_pending(&pool)
            .await
            .map_err(|error| ("migration", error.to_string(), 5u8))?;
        pool.close().await;
        Ok::<(), (&'static str, String, u8)>(())
    }) {
        Ok(result) => result,
        Err(result) => return result,
    };

    match result {
        Ok(()) => CommandResult::success("migrate", "applied pending migrations"),
        Err((error_class, message, exit_code)) => {
            CommandResult::failure("migrate", error_class, message, exit_code)
        }
    }
}
