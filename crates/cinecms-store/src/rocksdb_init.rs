//! RocksDB initialization utilities.
//!
//! Opens (or creates) a RocksDB instance with all partitions the
//! application needs present as column families. The partition set is the
//! single source of truth handed in by the caller; nothing creates column
//! families after open.

use anyhow::Result;
use rocksdb::{Options, DB};
use std::path::Path;
use std::sync::Arc;

pub struct RocksDbInit {
    db_path: String,
    partitions: Vec<String>,
}

impl RocksDbInit {
    pub fn new(db_path: impl Into<String>, partitions: &[&str]) -> Self {
        Self {
            db_path: db_path.into(),
            partitions: partitions.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Open or create the database, ensuring every requested partition
    /// exists as a column family.
    pub fn open(&self) -> Result<Arc<DB>> {
        let path = Path::new(&self.db_path);

        let mut db_opts = Options::default();
        db_opts.create_if_missing(true);
        db_opts.create_missing_column_families(true);

        // Union of the column families already on disk and the requested
        // set, so reopening after a partition was added keeps old data.
        let mut cf_names = match DB::list_cf(&db_opts, path) {
            Ok(cfs) if !cfs.is_empty() => cfs,
            _ => vec!["default".to_string()],
        };
        for partition in &self.partitions {
            if !cf_names.iter().any(|n| n == partition) {
                cf_names.push(partition.clone());
            }
        }

        let db = DB::open_cf(&db_opts, path, cf_names)?;
        Ok(Arc::new(db))
    }
}
