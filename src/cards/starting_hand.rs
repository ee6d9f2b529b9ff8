//! Canonical starting hands.
//!
//! There are 169 strategically distinct preflop hands:
//! - 13 pairs (AA, KK, ..., 22)
//! - 78 suited hands (AKs, AQs, ..., 32s)
//! - 78 offsuit hands (AKo, AQo, ..., 32o)
//!
//! Equity is invariant under suit permutation, so every physical two-card
//! combination of a class has the same equity and one fixed representative
//! per class is enough for simulation.

use super::card::{Card, HoleCards, RANK_CHARS, SUIT_CLUBS, SUIT_DIAMONDS};
use std::fmt;

/// One of the 169 canonical two-card starting hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StartingHand {
    /// Rank of first card (higher).
    pub rank1: u8,
    /// Rank of second card (lower or equal).
    pub rank2: u8,
    /// Whether suited. Always false for pairs.
    pub suited: bool,
}

impl StartingHand {
    /// Create a starting hand from two ranks and suitedness.
    /// Ranks are normalized so `rank1 >= rank2`; pairs are never suited.
    pub fn new(rank1: u8, rank2: u8, suited: bool) -> Self {
        debug_assert!(rank1 < 13 && rank2 < 13);
        let (hi, lo) = if rank1 >= rank2 {
            (rank1, rank2)
        } else {
            (rank2, rank1)
        };
        Self {
            rank1: hi,
            rank2: lo,
            suited: suited && hi != lo,
        }
    }

    /// All 169 starting hands in a stable, complete order: pairs from AA
    /// down to 22, then for each rank pair (high rank descending, low rank
    /// descending) the suited hand followed by the offsuit hand:
    /// AA, KK, ..., 22, AKs, AKo, AQs, AQo, ...
    pub fn all() -> Vec<StartingHand> {
        let mut hands = Vec::with_capacity(169);

        for rank in (0..13u8).rev() {
            hands.push(StartingHand::new(rank, rank, false));
        }

        for hi in (0..13u8).rev() {
            for lo in (0..hi).rev() {
                hands.push(StartingHand::new(hi, lo, true));
                hands.push(StartingHand::new(hi, lo, false));
            }
        }

        hands
    }

    /// Check if this hand is a pocket pair.
    pub fn is_pair(&self) -> bool {
        self.rank1 == self.rank2
    }

    /// Canonical label: rank pair plus suitedness marker, e.g. "AA",
    /// "AKs", "AKo". Pairs carry no marker.
    pub fn label(&self) -> String {
        if self.is_pair() {
            format!(
                "{}{}",
                RANK_CHARS[self.rank1 as usize], RANK_CHARS[self.rank2 as usize]
            )
        } else {
            let suffix = if self.suited { 's' } else { 'o' };
            format!(
                "{}{}{}",
                RANK_CHARS[self.rank1 as usize], RANK_CHARS[self.rank2 as usize], suffix
            )
        }
    }

    /// Parse a label like "AA", "AKs" or "AKo" back into a starting hand.
    pub fn from_label(label: &str) -> Option<Self> {
        let chars: Vec<char> = label.chars().collect();
        if chars.len() < 2 || chars.len() > 3 {
            return None;
        }

        let r1 = RANK_CHARS.iter().position(|&c| c == chars[0].to_ascii_uppercase())? as u8;
        let r2 = RANK_CHARS.iter().position(|&c| c == chars[1].to_ascii_uppercase())? as u8;

        match (r1 == r2, chars.get(2)) {
            (true, None) => Some(StartingHand::new(r1, r2, false)),
            (false, Some('s')) => Some(StartingHand::new(r1, r2, true)),
            (false, Some('o')) => Some(StartingHand::new(r1, r2, false)),
            _ => None,
        }
    }

    /// One concrete two-card representative of this hand class.
    ///
    /// Suit choice is fixed for reproducibility: pairs and offsuit hands
    /// use clubs + diamonds, suited hands use two clubs.
    pub fn sample_cards(&self) -> HoleCards {
        if self.suited {
            HoleCards::new(
                Card::new(self.rank1, SUIT_CLUBS),
                Card::new(self.rank2, SUIT_CLUBS),
            )
        } else {
            HoleCards::new(
                Card::new(self.rank1, SUIT_CLUBS),
                Card::new(self.rank2, SUIT_DIAMONDS),
            )
        }
    }

    /// Number of physical two-card combinations in this class.
    pub fn num_combos(&self) -> u8 {
        if self.is_pair() {
            6
        } else if self.suited {
            4
        } else {
            12
        }
    }
}

impl fmt::Display for StartingHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
