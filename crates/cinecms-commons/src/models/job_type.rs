use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Enum representing schedulable job types.
///
/// Each variant maps to exactly one executor registered at process start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JobType {
    GenerateSitemap,
    CleanupTempFiles,
    UpdateSearchIndex,
}

impl JobType {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobType::GenerateSitemap => "generate_sitemap",
            JobType::CleanupTempFiles => "cleanup_temp_files",
            JobType::UpdateSearchIndex => "update_search_index",
        }
    }

    pub fn from_str_opt(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "generate_sitemap" => Some(JobType::GenerateSitemap),
            "cleanup_temp_files" => Some(JobType::CleanupTempFiles),
            "update_search_index" => Some(JobType::UpdateSearchIndex),
            _ => None,
        }
    }

    pub fn all() -> [JobType; 3] {
        [
            JobType::GenerateSitemap,
            JobType::CleanupTempFiles,
            JobType::UpdateSearchIndex,
        ]
    }
}

impl FromStr for JobType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        JobType::from_str_opt(s).ok_or_else(|| format!("Invalid job type: {}", s))
    }
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_str() {
        for job_type in JobType::all() {
            assert_eq!(JobType::from_str(job_type.as_str()).unwrap(), job_type);
        }
    }

    #[test]
    fn rejects_unknown_type() {
        assert!(JobType::from_str("defragment_moon").is_err());
    }
}
