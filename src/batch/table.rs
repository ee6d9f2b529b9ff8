//! The aggregated equity table.
//!
//! `EquityTable` is the sole artifact the engine exposes: every canonical
//! starting hand mapped to a per-player-count [`SimulationResult`], plus
//! generation metadata. The orchestrator owns construction; once returned
//! the table is read-only.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::cards::StartingHand;
use crate::sim::SimulationResult;

/// On-disk/table format version.
pub const FORMAT_VERSION: &str = "1.0";

/// Number of canonical starting hands in a complete table.
pub const NUM_STARTING_HANDS: usize = 169;

/// Generation metadata carried alongside the per-hand results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableMetadata {
    /// Generation timestamp (unix seconds).
    pub generated_at: String,
    /// Monte Carlo trials per (hand, table size) cell.
    pub num_simulations: usize,
    /// Number of hand entries (169 when complete).
    pub num_hands: usize,
    /// Table sizes covered by every hand entry.
    pub table_sizes: Vec<u8>,
    /// Format version, currently "1.0".
    pub version: String,
}

/// Equity results for all starting hands across the configured table sizes.
///
/// Hands are keyed by canonical label ("AA", "AKs", "AKo"); each entry maps
/// player count to its simulation result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquityTable {
    /// Generation metadata.
    pub metadata: TableMetadata,
    /// Per-hand results: label -> player count -> result.
    pub hands: FxHashMap<String, BTreeMap<u8, SimulationResult>>,
}

impl EquityTable {
    /// Look up the result for a hand label at a given player count.
    pub fn result(&self, label: &str, players: u8) -> Option<&SimulationResult> {
        self.hands.get(label)?.get(&players)
    }

    /// Look up all per-player-count results for a hand label.
    pub fn hand(&self, label: &str) -> Option<&BTreeMap<u8, SimulationResult>> {
        self.hands.get(label)
    }

    /// Number of hand entries in the table.
    pub fn num_hands(&self) -> usize {
        self.hands.len()
    }

    /// Check the completeness invariant: every one of the 169 canonical
    /// labels is present with an entry for every metadata table size.
    pub fn is_complete(&self) -> bool {
        if self.hands.len() != NUM_STARTING_HANDS {
            return false;
        }
        StartingHand::all().iter().all(|hand| {
            match self.hands.get(&hand.label()) {
                Some(results) => self
                    .metadata
                    .table_sizes
                    .iter()
                    .all(|size| results.contains_key(size)),
                None => false,
            }
        })
    }

    /// Cache-validity predicate: a cached table is reusable iff it was
    /// generated with the requested trial count and is complete.
    pub fn is_valid_for(&self, trials: usize) -> bool {
        self.metadata.num_simulations == trials && self.is_complete()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny_result(equity: f64) -> SimulationResult {
        SimulationResult {
            win_rate: equity,
            tie_rate: 0.0,
            loss_rate: 1.0 - equity,
            equity,
        }
    }

    fn full_table(trials: usize, table_sizes: Vec<u8>) -> EquityTable {
        let mut hands = FxHashMap::default();
        for hand in StartingHand::all() {
            let mut results = BTreeMap::new();
            for &size in &table_sizes {
                results.insert(size, tiny_result(0.5));
            }
            hands.insert(hand.label(), results);
        }
        EquityTable {
            metadata: TableMetadata {
                generated_at: "0".to_string(),
                num_simulations: trials,
                num_hands: hands.len(),
                table_sizes,
                version: FORMAT_VERSION.to_string(),
            },
            hands,
        }
    }

    #[test]
    fn test_completeness_invariant() {
        let table = full_table(100, vec![2, 3, 4, 5, 6]);
        assert!(table.is_complete());
        assert_eq!(table.num_hands(), 169);

        let mut partial = table.clone();
        partial.hands.remove("AA");
        assert!(!partial.is_complete());

        let mut missing_size = table.clone();
        missing_size
            .hands
            .get_mut("AKs")
            .unwrap()
            .remove(&4);
        assert!(!missing_size.is_complete());
    }

    #[test]
    fn test_validity_predicate() {
        let table = full_table(100, vec![2, 3, 4, 5, 6]);
        assert!(table.is_valid_for(100));
        assert!(!table.is_valid_for(50_000));
    }

    #[test]
    fn test_lookup() {
        let table = full_table(100, vec![2, 6]);
        assert!(table.result("AA", 2).is_some());
        assert!(table.result("AA", 4).is_none());
        assert!(table.result("XX", 2).is_none());
        assert_eq!(table.hand("AKo").unwrap().len(), 2);
    }
}
