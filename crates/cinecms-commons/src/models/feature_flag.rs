//! Feature flag entity.

use serde::{Deserialize, Serialize};

/// A keyed on/off switch with a staged-rollout percentage.
///
/// The flag `key` is the primary key; flags are cheap to read because
/// lookups go through the content cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureFlag {
    pub key: String,
    pub name: String,
    pub description: Option<String>,
    pub is_enabled: bool,
    /// Percentage of the audience the flag applies to, 0..=100.
    pub audience_percentage: u8,
    pub created_at: i64,
    pub updated_at: Option<i64>,
}
