//! Server configuration re-export.

pub use cinecms_configs::ServerConfig;
