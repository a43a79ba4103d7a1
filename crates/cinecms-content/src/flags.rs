//! Feature flags with cached reads.

use crate::cache::ContentCache;
use crate::error::{ContentError, Result};
use cinecms_commons::{now_millis, FeatureFlag};
use cinecms_store::{EntityStore, StorageBackend};
use std::sync::Arc;
use std::time::Duration;

pub const FLAGS_PARTITION: &str = "feature_flags";

const FLAG_CACHE_KEY: &str = "flag:";
const FLAG_CACHE_TTL: Duration = Duration::from_secs(300);

struct FlagsStore {
    backend: Arc<dyn StorageBackend>,
}

impl EntityStore<String, FeatureFlag> for FlagsStore {
    fn backend(&self) -> &Arc<dyn StorageBackend> {
        &self.backend
    }

    fn partition(&self) -> &str {
        FLAGS_PARTITION
    }
}

pub struct FeatureFlagService {
    store: FlagsStore,
    cache: Arc<dyn ContentCache>,
}

impl FeatureFlagService {
    pub fn new(backend: Arc<dyn StorageBackend>, cache: Arc<dyn ContentCache>) -> Self {
        let _ = backend.create_partition(&cinecms_store::Partition::new(FLAGS_PARTITION));
        Self {
            store: FlagsStore { backend },
            cache,
        }
    }

    pub fn list(&self) -> Result<Vec<FeatureFlag>> {
        let mut flags: Vec<FeatureFlag> = self
            .store
            .scan_all(None)?
            .into_iter()
            .map(|(_, flag)| flag)
            .collect();
        flags.sort_by(|a, b| a.key.cmp(&b.key));
        Ok(flags)
    }

    /// Read-through cached flag lookup.
    pub fn get(&self, key: &str) -> Result<FeatureFlag> {
        let cache_key = format!("{}{}", FLAG_CACHE_KEY, key);
        if let Some(cached) = self.cache.get(&cache_key) {
            if let Ok(flag) = serde_json::from_str::<FeatureFlag>(&cached) {
                return Ok(flag);
            }
            self.cache.remove(&cache_key);
        }

        let flag = self
            .store
            .get(&key.to_string())?
            .ok_or_else(|| ContentError::not_found(format!("Feature flag not found: {}", key)))?;

        if let Ok(json) = serde_json::to_string(&flag) {
            self.cache.set(&cache_key, json, FLAG_CACHE_TTL);
        }
        Ok(flag)
    }

    /// Creates or updates a flag; the cached entry is evicted so the next
    /// read sees the new value.
    pub fn set(
        &self,
        key: &str,
        name: String,
        description: Option<String>,
        is_enabled: bool,
        audience_percentage: u8,
    ) -> Result<FeatureFlag> {
        if key.trim().is_empty() {
            return Err(ContentError::validation("Flag key must not be empty."));
        }
        if audience_percentage > 100 {
            return Err(ContentError::validation(
                "Audience percentage must be between 0 and 100.",
            ));
        }

        let now = now_millis();
        let existing = self.store.get(&key.to_string())?;
        let flag = FeatureFlag {
            key: key.to_string(),
            name,
            description,
            is_enabled,
            audience_percentage,
            created_at: existing.as_ref().map(|f| f.created_at).unwrap_or(now),
            updated_at: existing.is_some().then_some(now),
        };

        self.store.put(&key.to_string(), &flag)?;
        self.cache.remove(&format!("{}{}", FLAG_CACHE_KEY, key));
        log::info!("Feature flag '{}' set (enabled={})", key, is_enabled);
        Ok(flag)
    }

    /// Whether a flag is fully on (enabled for the whole audience).
    pub fn is_enabled(&self, key: &str) -> bool {
        self.get(key)
            .map(|f| f.is_enabled && f.audience_percentage == 100)
            .unwrap_or(false)
    }
}
