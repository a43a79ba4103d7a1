use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Whether a job runs once or recurs on a cron schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JobScheduleType {
    RunOnce,
    Recurring,
}

impl JobScheduleType {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobScheduleType::RunOnce => "run_once",
            JobScheduleType::Recurring => "recurring",
        }
    }
}

impl fmt::Display for JobScheduleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for JobScheduleType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "run_once" => Ok(JobScheduleType::RunOnce),
            "recurring" => Ok(JobScheduleType::Recurring),
            other => Err(format!("Invalid schedule type: {}", other)),
        }
    }
}
