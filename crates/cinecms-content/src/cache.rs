//! Content cache collaborator.
//!
//! Published-page reads go through a key-value cache with per-entry TTL.
//! The trait mirrors the get/set(ttl)/remove surface of a distributed
//! cache; the in-process implementation below is the default. Write paths
//! deliberately do not invalidate page entries, so a cached read can be
//! stale for up to its TTL after a publish.

use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

pub trait ContentCache: Send + Sync {
    /// Returns the cached value, or `None` on miss or expiry.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores a value with an absolute time-to-live.
    fn set(&self, key: &str, value: String, ttl: Duration);

    /// Drops an entry. No-op when absent.
    fn remove(&self, key: &str);
}

/// In-process `ContentCache` with lazy expiry.
///
/// Entries past their deadline are dropped on the read path; there is no
/// background sweeper.
#[derive(Default)]
pub struct InMemoryCache {
    entries: RwLock<HashMap<String, (String, Instant)>>,
}

impl InMemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live (unexpired) entries.
    pub fn len(&self) -> usize {
        let now = Instant::now();
        self.entries
            .read()
            .map(|e| e.values().filter(|(_, deadline)| *deadline > now).count())
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ContentCache for InMemoryCache {
    fn get(&self, key: &str) -> Option<String> {
        let expired = {
            let entries = self.entries.read().ok()?;
            match entries.get(key) {
                Some((value, deadline)) if *deadline > Instant::now() => {
                    return Some(value.clone());
                }
                Some(_) => true,
                None => false,
            }
        };

        if expired {
            if let Ok(mut entries) = self.entries.write() {
                entries.remove(key);
            }
        }
        None
    }

    fn set(&self, key: &str, value: String, ttl: Duration) {
        if let Ok(mut entries) = self.entries.write() {
            entries.insert(key.to_string(), (value, Instant::now() + ttl));
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut entries) = self.entries.write() {
            entries.remove(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_remove() {
        let cache = InMemoryCache::new();
        cache.set("k", "v".to_string(), Duration::from_secs(60));
        assert_eq!(cache.get("k"), Some("v".to_string()));

        cache.remove("k");
        assert_eq!(cache.get("k"), None);
    }

    #[test]
    fn entries_expire() {
        let cache = InMemoryCache::new();
        cache.set("k", "v".to_string(), Duration::from_millis(10));
        assert!(cache.get("k").is_some());

        std::thread::sleep(Duration::from_millis(20));
        assert_eq!(cache.get("k"), None);
        assert!(cache.is_empty());
    }

    #[test]
    fn set_overwrites_value_and_ttl() {
        let cache = InMemoryCache::new();
        cache.set("k", "old".to_string(), Duration::from_millis(10));
        cache.set("k", "new".to_string(), Duration::from_secs(60));

        std::thread::sleep(Duration::from_millis(20));
        assert_eq!(cache.get("k"), Some("new".to_string()));
    }
}
