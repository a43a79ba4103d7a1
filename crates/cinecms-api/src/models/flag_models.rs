//! Feature-flag request and response models.

use cinecms_commons::FeatureFlag;
use serde::{Deserialize, Serialize};

/// Body of `PUT /api/feature-flags/{key}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetFeatureFlagRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub is_enabled: bool,
    #[serde(default = "default_audience")]
    pub audience_percentage: u8,
}

fn default_audience() -> u8 {
    100
}

/// Feature-flag representation returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureFlagDto {
    pub key: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub is_enabled: bool,
    pub audience_percentage: u8,
    pub created_at: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
}

impl From<FeatureFlag> for FeatureFlagDto {
    fn from(flag: FeatureFlag) -> Self {
        Self {
            key: flag.key,
            name: flag.name,
            description: flag.description,
            is_enabled: flag.is_enabled,
            audience_percentage: flag.audience_percentage,
            created_at: flag.created_at,
            updated_at: flag.updated_at,
        }
    }
}
