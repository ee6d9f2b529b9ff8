//! Equity table cache.
//!
//! A single JSON file holding one serialized [`EquityTable`]. An absent
//! file is a recognized condition, not an error. Writes go through a
//! temporary sibling file followed by a rename, so concurrent readers see
//! either the old complete table or the new one, never a partial write.

use std::fs;
use std::path::{Path, PathBuf};

use crate::batch::table::EquityTable;

/// File-backed cache for one equity table.
#[derive(Debug, Clone)]
pub struct EquityCache {
    path: PathBuf,
}

impl EquityCache {
    /// Create a cache handle for the given file path.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// The cache file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the cached table, if one exists.
    ///
    /// Returns `Ok(None)` when the file is absent; a present but unreadable
    /// or unparsable file is an error.
    pub fn load(&self) -> Result<Option<EquityTable>, CacheError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&self.path)?;
        let table: EquityTable = serde_json::from_str(&contents)?;
        Ok(Some(table))
    }

    /// Save a table, replacing any existing cache atomically.
    pub fn save(&self, table: &EquityTable) -> Result<(), CacheError> {
        let json = serde_json::to_string_pretty(table)?;

        // Write the complete table to a sibling temp file, then publish it
        // with a rename so no reader ever observes a partial table.
        let tmp_path = self.path.with_extension("tmp");
        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}

/// Errors from cache I/O.
#[derive(Debug)]
pub enum CacheError {
    /// Filesystem error reading or writing the cache file.
    Io(std::io::Error),
    /// The cache file exists but does not hold a valid table.
    Json(serde_json::Error),
}

impl std::fmt::Display for CacheError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CacheError::Io(e) => write!(f, "Cache I/O error: {}", e),
            CacheError::Json(e) => write!(f, "Cache parse error: {}", e),
        }
    }
}

impl std::error::Error for CacheError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CacheError::Io(e) => Some(e),
            CacheError::Json(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for CacheError {
    fn from(e: std::io::Error) -> Self {
        CacheError::Io(e)
    }
}

impl From<serde_json::Error> for CacheError {
    fn from(e: serde_json::Error) -> Self {
        CacheError::Json(e)
    }
}
