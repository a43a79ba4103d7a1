//! Temp-file cleanup executor.
//!
//! Removes files in the configured temp directory whose modification time
//! is older than the retention window. Subdirectories are left alone.

use crate::error::{JobError, Result};
use crate::executors::JobExecutor;
use async_trait::async_trait;
use chrono::Utc;
use cinecms_commons::Job;
use std::path::PathBuf;
use std::time::{Duration, SystemTime};

pub struct CleanupTempFilesExecutor {
    tmp_dir: PathBuf,
    max_age: Duration,
}

impl CleanupTempFilesExecutor {
    pub fn new(tmp_dir: impl Into<PathBuf>, max_age: Duration) -> Self {
        Self {
            tmp_dir: tmp_dir.into(),
            max_age,
        }
    }
}

#[async_trait]
impl JobExecutor for CleanupTempFilesExecutor {
    async fn execute(&self, job: &mut Job) -> Result<()> {
        log::info!("Starting temp file cleanup in {}", self.tmp_dir.display());

        let mut deleted: u64 = 0;
        let cutoff = SystemTime::now() - self.max_age;

        if self.tmp_dir.is_dir() {
            let mut entries = tokio::fs::read_dir(&self.tmp_dir)
                .await
                .map_err(|e| JobError::Execution(format!("Failed to read temp dir: {}", e)))?;

            while let Some(entry) = entries
                .next_entry()
                .await
                .map_err(|e| JobError::Execution(format!("Failed to read temp dir entry: {}", e)))?
            {
                let metadata = match entry.metadata().await {
                    Ok(m) if m.is_file() => m,
                    _ => continue,
                };
                let modified = match metadata.modified() {
                    Ok(m) => m,
                    Err(_) => continue,
                };
                if modified < cutoff {
                    match tokio::fs::remove_file(entry.path()).await {
                        Ok(()) => deleted += 1,
                        Err(e) => {
                            log::warn!("Could not remove {}: {}", entry.path().display(), e)
                        }
                    }
                }
            }
        }

        log::info!("Temp file cleanup removed {} files", deleted);

        job.parameters
            .insert("LastCleanupTime".to_string(), Utc::now().to_rfc3339());
        job.parameters
            .insert("FilesDeleted".to_string(), deleted.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cinecms_commons::{JobId, JobScheduleType, JobStatus, JobType};
    use std::collections::HashMap;

    fn job() -> Job {
        Job {
            id: JobId::new("j1"),
            name: "cleanup".to_string(),
            description: String::new(),
            job_type: JobType::CleanupTempFiles,
            status: JobStatus::Running,
            schedule_type: JobScheduleType::RunOnce,
            cron_expression: None,
            last_run: None,
            next_run: None,
            is_enabled: true,
            error_message: None,
            parameters: HashMap::new(),
            created_at: 1,
            created_by: None,
            updated_at: None,
            is_deleted: false,
        }
    }

    #[tokio::test]
    async fn removes_only_old_files() {
        let dir = tempfile::tempdir().unwrap();
        let old_file = dir.path().join("old.tmp");
        let new_file = dir.path().join("new.tmp");
        std::fs::write(&old_file, b"old").unwrap();
        std::fs::write(&new_file, b"new").unwrap();

        // max_age of zero: everything modified before "now" is stale, but
        // give the filesystem clock a moment so both files are in the past
        std::thread::sleep(Duration::from_millis(20));
        std::fs::write(&new_file, b"touched").unwrap();

        let executor =
            CleanupTempFilesExecutor::new(dir.path(), Duration::from_millis(10));
        let mut job = job();
        executor.execute(&mut job).await.unwrap();

        assert!(!old_file.exists());
        assert!(new_file.exists());
        assert_eq!(job.parameters.get("FilesDeleted"), Some(&"1".to_string()));
    }

    #[tokio::test]
    async fn missing_directory_is_a_clean_noop() {
        let executor = CleanupTempFilesExecutor::new("/definitely/not/here", Duration::from_secs(1));
        let mut job = job();
        executor.execute(&mut job).await.unwrap();
        assert_eq!(job.parameters.get("FilesDeleted"), Some(&"0".to_string()));
    }
}
