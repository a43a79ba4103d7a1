//! Default values for configuration fields.

pub fn host() -> String {
    "127.0.0.1".to_string()
}

pub fn port() -> u16 {
    8080
}

pub fn base_url() -> String {
    "http://localhost:8080".to_string()
}

pub fn data_path() -> String {
    "./data".to_string()
}

pub fn log_level() -> String {
    "info".to_string()
}

pub fn log_format() -> String {
    "compact".to_string()
}

pub fn log_to_console() -> bool {
    true
}

pub fn job_poll_interval_secs() -> u64 {
    30
}

pub fn temp_file_max_age_hours() -> u64 {
    24
}

pub fn jobs_enabled() -> bool {
    true
}

pub fn page_ttl_secs() -> u64 {
    3600
}
