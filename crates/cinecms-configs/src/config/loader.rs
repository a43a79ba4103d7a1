//! Configuration loading and validation.

use super::types::ServerConfig;
use std::fs;
use std::path::Path;

impl ServerConfig {
    /// Load configuration from a TOML file and finalize it.
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .map_err(|e| anyhow::anyhow!("Failed to read config file: {}", e))?;

        let mut config: ServerConfig = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config file: {}", e))?;

        config.finalize()?;
        Ok(config)
    }

    /// All defaults plus environment overrides; used when no config file
    /// is present.
    pub fn from_defaults() -> anyhow::Result<Self> {
        let mut config = ServerConfig::default();
        config.finalize()?;
        Ok(config)
    }

    /// Apply environment overrides and validate.
    pub fn finalize(&mut self) -> anyhow::Result<()> {
        if let Ok(token) = std::env::var("CINECMS_ADMIN_TOKEN") {
            if !token.is_empty() {
                self.security.admin_token = token;
            }
        }

        self.validate()
    }

    /// Validate configuration settings.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.server.port == 0 {
            return Err(anyhow::anyhow!("Server port cannot be 0"));
        }

        let valid_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            return Err(anyhow::anyhow!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_levels.join(", ")
            ));
        }
        for (target, level) in &self.logging.targets {
            if !valid_levels.contains(&level.as_str()) {
                return Err(anyhow::anyhow!(
                    "Invalid log level '{}' for target '{}'",
                    level,
                    target
                ));
            }
        }

        let valid_formats = ["compact", "json"];
        if !valid_formats.contains(&self.logging.format.as_str()) {
            return Err(anyhow::anyhow!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_formats.join(", ")
            ));
        }

        if self.jobs.poll_interval_secs == 0 {
            return Err(anyhow::anyhow!("Job poll interval cannot be 0"));
        }
        if self.cache.page_ttl_secs == 0 {
            return Err(anyhow::anyhow!("Page cache TTL cannot be 0"));
        }

        Ok(())
    }
}
