//! Batch generation, the aggregated equity table and its cache.
//!
//! This layer owns [`EquityTable`] construction: it fans the 169 starting
//! hands out across parallel workers, merges per-hand results, and reuses
//! a cached table when its simulation count matches the request.

pub mod cache;
pub mod orchestrator;
pub mod table;

pub use cache::{CacheError, EquityCache};
pub use orchestrator::{
    generate, generate_with_progress, load_or_generate, load_or_generate_with_progress,
    CacheStatus, GenerateError,
};
pub use table::{EquityTable, TableMetadata, FORMAT_VERSION, NUM_STARTING_HANDS};
