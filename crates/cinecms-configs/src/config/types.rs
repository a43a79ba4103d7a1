//! Configuration types, deserialized from `config.toml`.

use crate::config::defaults;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ServerConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub storage: StorageSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
    #[serde(default)]
    pub jobs: JobSettings,
    #[serde(default)]
    pub cache: CacheSettings,
    #[serde(default)]
    pub security: SecuritySettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "defaults::host")]
    pub host: String,
    #[serde(default = "defaults::port")]
    pub port: u16,
    /// Public base URL used in generated sitemaps.
    #[serde(default = "defaults::base_url")]
    pub base_url: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: defaults::host(),
            port: defaults::port(),
            base_url: defaults::base_url(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageSettings {
    /// Root data directory; the database, public files, and temp files
    /// live underneath it.
    #[serde(default = "defaults::data_path")]
    pub data_path: String,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            data_path: defaults::data_path(),
        }
    }
}

impl StorageSettings {
    pub fn rocksdb_dir(&self) -> PathBuf {
        Path::new(&self.data_path).join("db")
    }

    pub fn public_dir(&self) -> PathBuf {
        Path::new(&self.data_path).join("public")
    }

    pub fn tmp_dir(&self) -> PathBuf {
        Path::new(&self.data_path).join("tmp")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// error | warn | info | debug | trace
    #[serde(default = "defaults::log_level")]
    pub level: String,
    /// compact | json
    #[serde(default = "defaults::log_format")]
    pub format: String,
    #[serde(default = "defaults::log_to_console")]
    pub log_to_console: bool,
    /// Per-target level overrides, e.g. `cinecms_jobs = "debug"`.
    #[serde(default)]
    pub targets: HashMap<String, String>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: defaults::log_level(),
            format: defaults::log_format(),
            log_to_console: defaults::log_to_console(),
            targets: HashMap::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobSettings {
    #[serde(default = "defaults::job_poll_interval_secs")]
    pub poll_interval_secs: u64,
    /// Temp files older than this are removed by the cleanup job.
    #[serde(default = "defaults::temp_file_max_age_hours")]
    pub temp_file_max_age_hours: u64,
    /// Disable to run the HTTP API without the background scheduler.
    #[serde(default = "defaults::jobs_enabled")]
    pub enabled: bool,
}

impl Default for JobSettings {
    fn default() -> Self {
        Self {
            poll_interval_secs: defaults::job_poll_interval_secs(),
            temp_file_max_age_hours: defaults::temp_file_max_age_hours(),
            enabled: defaults::jobs_enabled(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheSettings {
    /// TTL for cached published-page reads. Pages are not invalidated on
    /// publish, so this bounds how stale a cached read can be.
    #[serde(default = "defaults::page_ttl_secs")]
    pub page_ttl_secs: u64,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            page_ttl_secs: defaults::page_ttl_secs(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SecuritySettings {
    /// Bearer token required on mutating endpoints. Empty disables those
    /// endpoints entirely; set it here or via `CINECMS_ADMIN_TOKEN`.
    #[serde(default)]
    pub admin_token: String,
    /// Allowed CORS origins; empty or `*` allows any origin.
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}
