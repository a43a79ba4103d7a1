//! # cinecms-configs
//!
//! Server configuration: TOML file loading, serde defaults, validation,
//! and environment overrides.

pub mod config;

pub use config::types::{
    CacheSettings, JobSettings, LoggingSettings, SecuritySettings, ServerConfig, ServerSettings,
    StorageSettings,
};
