use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use haulbot_core::config::LogFormat;
use haulbot_core::{AppConfig, LoadOptions};

/// Filter directives come straight from `logging.level`, so operators can
/// write either a plain level ("debug") or per-target directives
/// ("info,sqlx=warn"). Unparseable values fall back to warn.
fn log_filter(level: &str) -> EnvFilter {
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"))
}

fn init_logging(config: &AppConfig) {
    let builder = tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(log_filter(&config.logging.level))
        .with_writer(std::io::stderr);

    match config.logging.format {
        LogFormat::Compact => builder.compact().init(),
        LogFormat::Pretty => builder.pretty().init(),
        LogFormat::Json => builder.json().init(),
    }
}

fn main() -> ExitCode {
    // Command output is JSON on stdout; diagnostics go to stderr. A config
    // error here is reported again, structured, by the command itself.
    if let Ok(config) = AppConfig::load(LoadOptions::default()) {
        init_logging(&config);
    }

    haulbot_cli::run()
}

#[cfg(test)]
mod tests {
    use super::log_filter;

    #[test]
    fn level_strings_become_filter_directives() {
        assert_eq!(log_filter("debug").to_string(), "debug");
        let combined = log_filter("info,sqlx=warn").to_string();
        assert!(combined.contains("info"), "{combined}");
        assert!(combined.contains("sqlx=warn"), "{combined}");
    }

    #[test]
    fn unparseable_level_falls_back_to_warn() {
        assert_eq!(log_filter("not a level !!").to_string(), "warn");
    }
}
