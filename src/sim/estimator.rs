//! Equity estimation over repeated trials.
//!
//! The estimator runs N independent trials for a fixed (hero hand,
//! opponent count) pair and reduces the outcome tallies into win/tie/loss
//! rates and an equity figure. As N grows the estimate converges to the
//! true equity; the caller chooses N to bound sampling error.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::cards::HoleCards;
use crate::sim::config::SimError;
use crate::sim::trial::{TrialEngine, TrialOutcome};

/// Win/tie/loss rates and equity for one simulated (hand, opponent count)
/// pair. Rates are in [0, 1] and sum to 1; equity is win rate plus half
/// the tie rate. Immutable once computed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Fraction of trials the hero strictly won.
    pub win_rate: f64,
    /// Fraction of trials the hero tied the best opponent.
    pub tie_rate: f64,
    /// Fraction of trials the hero lost.
    pub loss_rate: f64,
    /// Expected pot share: `win_rate + tie_rate / 2`.
    pub equity: f64,
}

/// Monte Carlo equity estimator.
#[derive(Debug, Clone, Default)]
pub struct EquityEstimator;

impl EquityEstimator {
    /// Create a new estimator.
    pub fn new() -> Self {
        Self
    }

    /// Estimate equity for `hero` against `opponents` random hands over
    /// `trials` independent deals.
    ///
    /// Invalid `opponents` or a zero `trials` count is rejected before any
    /// simulation work begins. Each trial draws fresh randomness from the
    /// caller's RNG; no board or opponent state is shared between trials.
    pub fn estimate<R: Rng>(
        &self,
        hero: HoleCards,
        opponents: usize,
        trials: usize,
        rng: &mut R,
    ) -> Result<SimulationResult, SimError> {
        if trials == 0 {
            return Err(SimError::InvalidTrials(trials));
        }
        let engine = TrialEngine::new(hero, opponents)?;

        let mut wins = 0usize;
        let mut ties = 0usize;
        let mut losses = 0usize;

        for _ in 0..trials {
            match engine.run(rng) {
                TrialOutcome::Win => wins += 1,
                TrialOutcome::Tie => ties += 1,
                TrialOutcome::Loss => losses += 1,
            }
        }

        let win_rate = wins as f64 / trials as f64;
        let tie_rate = ties as f64 / trials as f64;
        let loss_rate = losses as f64 / trials as f64;

        Ok(SimulationResult {
            win_rate,
            tie_rate,
            loss_rate,
            equity: win_rate + tie_rate / 2.0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn hero(s: &str) -> HoleCards {
        HoleCards::from_str(s).unwrap()
    }

    #[test]
    fn test_rejects_invalid_input() {
        let est = EquityEstimator::new();
        let mut rng = StdRng::seed_from_u64(0);
        let aa = hero("AcAd");

        assert_eq!(
            est.estimate(aa, 1, 0, &mut rng),
            Err(SimError::InvalidTrials(0))
        );
        assert_eq!(
            est.estimate(aa, 0, 100, &mut rng),
            Err(SimError::InvalidOpponentCount(0))
        );
        assert_eq!(
            est.estimate(aa, 6, 100, &mut rng),
            Err(SimError::InvalidOpponentCount(6))
        );
    }

    #[test]
    fn test_rates_sum_to_one_and_equity_identity() {
        let est = EquityEstimator::new();
        let mut rng = StdRng::seed_from_u64(3);
        let result = est.estimate(hero("KhQh"), 2, 5_000, &mut rng).unwrap();

        let sum = result.win_rate + result.tie_rate + result.loss_rate;
        assert!((sum - 1.0).abs() < 1e-12, "rates sum to {}", sum);
        assert_eq!(result.equity, result.win_rate + result.tie_rate / 2.0);
    }

    #[test]
    fn test_aa_heads_up_equity() {
        // Reference: AA vs one random hand is ~85% equity
        let est = EquityEstimator::new();
        let mut rng = StdRng::seed_from_u64(42);
        let result = est.estimate(hero("AcAd"), 1, 10_000, &mut rng).unwrap();
        assert!(
            (result.equity - 0.85).abs() < 0.02,
            "AA heads-up equity {} not near 85%",
            result.equity
        );
    }

    #[test]
    fn test_aa_six_player_equity() {
        // Reference: AA vs five random hands is ~49% equity
        let est = EquityEstimator::new();
        let mut rng = StdRng::seed_from_u64(42);
        let result = est.estimate(hero("AcAd"), 5, 10_000, &mut rng).unwrap();
        assert!(
            (result.equity - 0.49).abs() < 0.02,
            "AA 6-player equity {} not near 49%",
            result.equity
        );
    }

    #[test]
    fn test_more_opponents_lower_dominant_equity() {
        let est = EquityEstimator::new();
        let mut rng = StdRng::seed_from_u64(7);
        let aa = hero("AcAd");

        let heads_up = est.estimate(aa, 1, 10_000, &mut rng).unwrap();
        let six_max = est.estimate(aa, 5, 10_000, &mut rng).unwrap();
        assert!(
            heads_up.equity > six_max.equity,
            "AA equity should fall with more opponents: {} vs {}",
            heads_up.equity,
            six_max.equity
        );
    }

    #[test]
    fn test_suited_never_worse_than_offsuit() {
        // AKs vs AKo at a 6-player table; the true gap (~3%) is far wider
        // than the sampling noise at 20k trials.
        let est = EquityEstimator::new();
        let mut rng = StdRng::seed_from_u64(11);

        let aks = est.estimate(hero("AcKc"), 5, 20_000, &mut rng).unwrap();
        let ako = est.estimate(hero("AcKd"), 5, 20_000, &mut rng).unwrap();
        assert!(
            aks.equity >= ako.equity,
            "AKs equity {} below AKo equity {}",
            aks.equity,
            ako.equity
        );
    }
}
