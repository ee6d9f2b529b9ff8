//! # Hold'em Equity
//!
//! Monte Carlo equity simulation for every canonical Texas Hold'em
//! starting hand against 1-5 random opponents.
//!
//! ## Features
//!
//! - **Hand Evaluator**: total ordering over 5-card hands, best-of-7 selection
//! - **Trial Engine**: full simulated deals with hero-excluded decks
//! - **Equity Estimator**: win/tie/loss rates and equity per hand
//! - **Batch Orchestrator**: all 169 hands x table sizes 2-6 in parallel
//! - **Caching**: generated tables are reused when the trial count matches
//!
//! ## Quick Start
//!
//! ```no_run
//! use holdem_equity::batch::{generate, load_or_generate, EquityCache};
//! use holdem_equity::sim::SimConfig;
//!
//! // Generate a full table: 169 hands x 5 table sizes
//! let config = SimConfig::default().with_trials(50_000);
//! let table = generate(&config).unwrap();
//! let aa = table.result("AA", 2).unwrap();
//! println!("AA heads-up equity: {:.2}%", aa.equity * 100.0);
//!
//! // Or go through the cache
//! let cache = EquityCache::new("equity_cache.json");
//! let (table, status) = load_or_generate(&cache, &config).unwrap();
//! println!("cache: {:?}, hands: {}", status, table.num_hands());
//! ```
//!
//! ## Modules
//!
//! - [`cards`]: card/deck primitives, hand evaluation, the 169 starting hands
//! - [`sim`]: simulation config, single trials, equity estimation
//! - [`batch`]: parallel batch generation, the equity table and its cache
//!
//! ## Architecture
//!
//! ```text
//! StartingHand::all()  ──►  Batch Orchestrator (rayon workers)
//!                                   │ per (hand, table size)
//!                                   ▼
//!                            Equity Estimator
//!                                   │ per trial
//!                                   ▼
//!                             Trial Engine ──► Hand Evaluator
//!                                   │
//!                                   ▼
//!                        EquityTable (+ JSON cache)
//! ```

pub mod batch;
pub mod cards;
pub mod sim;

// Re-export commonly used types at crate root for convenience
pub use batch::{generate, load_or_generate, CacheStatus, EquityCache, EquityTable};
pub use cards::{Card, HandEvaluator, HandRank, StartingHand};
pub use sim::{EquityEstimator, SimConfig, SimError, SimulationResult, TrialEngine, TrialOutcome};
