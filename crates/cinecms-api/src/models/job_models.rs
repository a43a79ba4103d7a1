//! Job request and response models.

use cinecms_commons::{Job, JobScheduleType, JobStatus, JobType};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Body of `POST /api/jobs`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// "generate_sitemap" | "cleanup_temp_files" | "update_search_index"
    #[serde(rename = "type")]
    pub job_type: String,
    /// "run_once" | "recurring"
    pub schedule_type: String,
    #[serde(default)]
    pub cron_expression: Option<String>,
    #[serde(default)]
    pub parameters: HashMap<String, String>,
    #[serde(default)]
    pub start_immediately: bool,
}

/// Query string of `GET /api/jobs`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobListParams {
    /// "pending" | "running" | "completed" | "failed" | "cancelled"
    #[serde(default)]
    pub status: Option<String>,
}

/// Job representation returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDto {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub job_type: JobType,
    pub status: JobStatus,
    pub schedule_type: JobScheduleType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cron_expression: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_run: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_run: Option<i64>,
    pub is_enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    pub parameters: HashMap<String, String>,
    pub created_at: i64,
}

impl From<Job> for JobDto {
    fn from(job: Job) -> Self {
        Self {
            id: job.id.to_string(),
            name: job.name,
            description: job.description,
            job_type: job.job_type,
            status: job.status,
            schedule_type: job.schedule_type,
            cron_expression: job.cron_expression,
            last_run: job.last_run,
            next_run: job.next_run,
            is_enabled: job.is_enabled,
            error_message: job.error_message,
            parameters: job.parameters,
            created_at: job.created_at,
        }
    }
}
