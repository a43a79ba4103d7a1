//! Logging setup, powered by tracing-subscriber.
//!
//! A compatibility bridge (`tracing_log::LogTracer`) captures the `log::*`
//! macro calls used throughout the workspace and routes them through the
//! tracing subscriber.

use cinecms_configs::LoggingSettings;
use std::collections::HashMap;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Compact text: timestamp LEVEL target - message
    Compact,
    /// JSON Lines for structured log shippers
    Json,
}

impl LogFormat {
    pub fn from_config(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" | "jsonl" => LogFormat::Json,
            _ => LogFormat::Compact,
        }
    }
}

/// Build the `EnvFilter` from the base level, hardcoded noisy-crate
/// overrides, and optional per-target overrides from config.
fn build_env_filter(
    level: &str,
    target_levels: &HashMap<String, String>,
) -> anyhow::Result<EnvFilter> {
    let mut directives = vec![level.to_string()];

    // Suppress noisy third-party crates
    let noisy: &[(&str, &str)] = &[
        ("actix_server", "warn"),
        ("actix_web", "warn"),
        ("h2", "warn"),
        ("rocksdb", "warn"),
        ("tracing", "warn"),
    ];
    for (target, lvl) in noisy {
        directives.push(format!("{}={}", target, lvl));
    }

    for (target, lvl) in target_levels {
        directives.push(format!("{}={}", target, lvl));
    }

    let filter_str = directives.join(",");
    EnvFilter::try_new(&filter_str)
        .map_err(|e| anyhow::anyhow!("Invalid tracing filter '{}': {}", filter_str, e))
}

/// Initialize logging based on configuration.
pub fn init_logging(settings: &LoggingSettings) -> anyhow::Result<()> {
    // Route log:: records into tracing; ignore the error when a test
    // harness already installed a logger
    let _ = tracing_log::LogTracer::init();

    let filter = build_env_filter(&settings.level, &settings.targets)?;

    let console_layer = settings.log_to_console.then(|| {
        match LogFormat::from_config(&settings.format) {
            LogFormat::Json => fmt::layer().json().boxed(),
            LogFormat::Compact => fmt::layer().compact().boxed(),
        }
    });

    tracing_subscriber::registry()
        .with(console_layer)
        .with(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_parsing_defaults_to_compact() {
        assert_eq!(LogFormat::from_config("json"), LogFormat::Json);
        assert_eq!(LogFormat::from_config("compact"), LogFormat::Compact);
        assert_eq!(LogFormat::from_config("fancy"), LogFormat::Compact);
    }

    #[test]
    fn filter_accepts_target_overrides() {
        let mut targets = HashMap::new();
        targets.insert("cinecms_jobs".to_string(), "debug".to_string());
        assert!(build_env_filter("info", &targets).is_ok());
    }

    #[test]
    fn filter_rejects_garbage_level() {
        assert!(build_env_filter("not-a-level!!", &HashMap::new()).is_err());
    }
}
