//! Batch orchestration.
//!
//! Runs the equity estimator for every canonical starting hand across the
//! configured table sizes and merges the results into one [`EquityTable`].
//! Work is partitioned by starting hand (169 units, not 845 cells) so all
//! table sizes for one hand are computed together; units are independent
//! and merged by label, so table contents do not depend on completion
//! order. A previously cached table with a matching simulation count is
//! reused instead of recomputed.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::batch::cache::{CacheError, EquityCache};
use crate::batch::table::{EquityTable, TableMetadata, FORMAT_VERSION};
use crate::cards::StartingHand;
use crate::sim::{EquityEstimator, SimConfig, SimError, SimulationResult};

/// How a [`load_or_generate`] call resolved against the cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheStatus {
    /// A cached table matched the requested trial count and was reused.
    Hit,
    /// No cached table existed; a fresh one was generated.
    Miss,
    /// A cached table existed but with a different trial count; it was
    /// regenerated. Informational, not a failure.
    Stale {
        /// Trial count of the discarded cache.
        cached_trials: usize,
    },
}

/// Errors from batch generation with caching.
#[derive(Debug)]
pub enum GenerateError {
    /// Simulation-boundary rejection or worker failure.
    Sim(SimError),
    /// Cache file I/O or parse failure.
    Cache(CacheError),
}

impl std::fmt::Display for GenerateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerateError::Sim(e) => write!(f, "{}", e),
            GenerateError::Cache(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for GenerateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GenerateError::Sim(e) => Some(e),
            GenerateError::Cache(e) => Some(e),
        }
    }
}

impl From<SimError> for GenerateError {
    fn from(e: SimError) -> Self {
        GenerateError::Sim(e)
    }
}

impl From<CacheError> for GenerateError {
    fn from(e: CacheError) -> Self {
        GenerateError::Cache(e)
    }
}

/// Generate a complete equity table for the given configuration.
pub fn generate(config: &SimConfig) -> Result<EquityTable, SimError> {
    generate_with_progress(config, |_| {})
}

/// Generate a complete equity table, invoking `on_hand_done` after each
/// starting hand finishes (from worker threads; the callback must be
/// `Sync`).
///
/// Any failing unit of work fails the whole batch: a partially populated
/// table violates the completeness invariant and is never returned.
pub fn generate_with_progress<F>(config: &SimConfig, on_hand_done: F) -> Result<EquityTable, SimError>
where
    F: Fn(&StartingHand) + Sync,
{
    config.validate()?;

    let hands = StartingHand::all();
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(worker_threads(config))
        .build()
        .map_err(|e| SimError::WorkerPool(e.to_string()))?;

    let results: Result<Vec<(StartingHand, BTreeMap<u8, SimulationResult>)>, SimError> =
        pool.install(|| {
            hands
                .par_iter()
                .enumerate()
                .map(|(idx, hand)| {
                    // Each worker owns its RNG: derived per hand when seeded
                    // so tables are bit-reproducible, process entropy otherwise.
                    let mut rng = match config.seed {
                        Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(idx as u64)),
                        None => StdRng::from_entropy(),
                    };
                    let estimator = EquityEstimator::new();
                    let hero = hand.sample_cards();

                    let mut per_size = BTreeMap::new();
                    for &players in &config.table_sizes {
                        let result = estimator.estimate(
                            hero,
                            (players - 1) as usize,
                            config.trials,
                            &mut rng,
                        )?;
                        per_size.insert(players, result);
                    }

                    on_hand_done(hand);
                    Ok((*hand, per_size))
                })
                .collect()
        });

    let mut merged = FxHashMap::default();
    for (hand, per_size) in results? {
        merged.insert(hand.label(), per_size);
    }

    Ok(EquityTable {
        metadata: TableMetadata {
            generated_at: unix_timestamp(),
            num_simulations: config.trials,
            num_hands: merged.len(),
            table_sizes: config.table_sizes.clone(),
            version: FORMAT_VERSION.to_string(),
        },
        hands: merged,
    })
}

/// Return the cached table when its simulation count matches the request,
/// otherwise generate, save and return a fresh one.
///
/// The validity predicate is evaluated before any simulation work is
/// scheduled; the cache file is only replaced after the complete table is
/// assembled.
pub fn load_or_generate(
    cache: &EquityCache,
    config: &SimConfig,
) -> Result<(EquityTable, CacheStatus), GenerateError> {
    load_or_generate_with_progress(cache, config, |_| {})
}

/// [`load_or_generate`] with a per-hand progress callback.
pub fn load_or_generate_with_progress<F>(
    cache: &EquityCache,
    config: &SimConfig,
    on_hand_done: F,
) -> Result<(EquityTable, CacheStatus), GenerateError>
where
    F: Fn(&StartingHand) + Sync,
{
    config.validate()?;

    let status = match cache.load()? {
        Some(table) if table.is_valid_for(config.trials) => {
            return Ok((table, CacheStatus::Hit));
        }
        Some(table) => CacheStatus::Stale {
            cached_trials: table.metadata.num_simulations,
        },
        None => CacheStatus::Miss,
    };

    let table = generate_with_progress(config, on_hand_done)?;
    cache.save(&table)?;
    Ok((table, status))
}

/// Worker count: configured value, or all available cores minus one so the
/// orchestrating thread keeps a core.
fn worker_threads(config: &SimConfig) -> usize {
    config.num_threads.unwrap_or_else(|| {
        std::thread::available_parallelism()
            .map(|n| n.get().saturating_sub(1).max(1))
            .unwrap_or(1)
    })
}

fn unix_timestamp() -> String {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs().to_string())
        .unwrap_or_else(|_| "0".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn quick_config() -> SimConfig {
        SimConfig::default()
            .with_trials(100)
            .with_seed(42)
            .with_threads(2)
    }

    #[test]
    fn test_generate_produces_complete_table() {
        let table = generate(&quick_config()).unwrap();

        assert!(table.is_complete());
        assert_eq!(table.num_hands(), 169);
        assert_eq!(table.metadata.num_hands, 169);
        assert_eq!(table.metadata.num_simulations, 100);
        assert_eq!(table.metadata.table_sizes, vec![2, 3, 4, 5, 6]);
        assert_eq!(table.metadata.version, FORMAT_VERSION);

        // Even at low trial counts the best hand dwarfs the worst
        let aa = table.result("AA", 2).unwrap();
        let junk = table.result("32o", 2).unwrap();
        assert!(aa.equity > junk.equity);
    }

    #[test]
    fn test_generate_rejects_invalid_config() {
        let config = SimConfig::default().with_trials(0);
        assert!(matches!(generate(&config), Err(SimError::InvalidTrials(0))));
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let config = quick_config().with_table_sizes(vec![2]);
        let a = generate(&config).unwrap();
        let b = generate(&config).unwrap();

        for hand in StartingHand::all() {
            let label = hand.label();
            let ra = a.result(&label, 2).unwrap();
            let rb = b.result(&label, 2).unwrap();
            assert_eq!(ra.win_rate, rb.win_rate, "{} diverged across runs", label);
            assert_eq!(ra.equity, rb.equity, "{} diverged across runs", label);
        }
    }

    #[test]
    fn test_progress_callback_fires_per_hand() {
        let config = quick_config().with_table_sizes(vec![2]).with_trials(10);
        let count = AtomicUsize::new(0);
        generate_with_progress(&config, |_| {
            count.fetch_add(1, Ordering::Relaxed);
        })
        .unwrap();
        assert_eq!(count.load(Ordering::Relaxed), 169);
    }

    #[test]
    fn test_load_or_generate_cache_policy() {
        let mut path = std::env::temp_dir();
        path.push(format!("holdem_equity_orch_{}.json", std::process::id()));
        let _ = fs::remove_file(&path);
        let cache = EquityCache::new(&path);

        let config = quick_config().with_table_sizes(vec![2]).with_trials(20);

        // First run: nothing cached
        let (first, status) = load_or_generate(&cache, &config).unwrap();
        assert_eq!(status, CacheStatus::Miss);
        assert!(first.is_complete());

        // Second run with the same trial count: cache hit, identical table
        let (second, status) = load_or_generate(&cache, &config).unwrap();
        assert_eq!(status, CacheStatus::Hit);
        assert_eq!(second.metadata.generated_at, first.metadata.generated_at);

        // Different trial count: stale cache triggers regeneration
        let (third, status) = load_or_generate(&cache, &config.clone().with_trials(30)).unwrap();
        assert_eq!(status, CacheStatus::Stale { cached_trials: 20 });
        assert_eq!(third.metadata.num_simulations, 30);

        let _ = fs::remove_file(&path);
    }
}
