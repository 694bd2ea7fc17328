//! Row limits for list queries

use serde::{Deserialize, Serialize};

/// Default rows per list query
const DEFAULT_LIMIT: u32 = 10;

/// Row cap applied as SQL `LIMIT`, bound exactly as given.
///
/// Zero is a valid limit and yields no rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Limit(u32);

impl Limit {
    pub fn new(rows: u32) -> Self {
        Self(rows)
    }

    /// Value to bind for `LIMIT $n`.
    pub fn as_i64(&self) -> i64 {
        i64::from(self.0)
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

impl Default for Limit {
    fn default() -> Self {
        Self(DEFAULT_LIMIT)
    }
}

impl From<u32> for Limit {
    fn from(rows: u32) -> Self {
        Self::new(rows)
    }
}

impl From<Option<u32>> for Limit {
    fn from(rows: Option<u32>) -> Self {
        rows.map(Self::new).unwrap_or_default()
    }
}
