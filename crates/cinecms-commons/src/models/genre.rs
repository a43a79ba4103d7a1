//! Genre entity, keyed by its external catalog id.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    /// External catalog id (stable across imports).
    pub id: i64,
    pub name: String,
}
