//! Poker hand evaluation.
//!
//! This module scores 5-card hands into a totally ordered rank value and
//! selects the best 5-card hand out of 7 (two hole cards plus the board).
//! Ranks are packed into a single `u32` so comparison is a plain integer
//! compare.

use super::card::Card;
use std::cmp::Ordering;

/// Hand rank categories, ordered from worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HandCategory {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl HandCategory {
    /// Get the category name.
    pub fn name(&self) -> &'static str {
        match self {
            HandCategory::HighCard => "High Card",
            HandCategory::OnePair => "One Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
        }
    }
}

/// A hand rank that can be compared. Higher values are better hands.
///
/// Format: category (bits 20+) | kicker1 (4 bits) | kicker2 (4 bits) | ...
/// The packed layout compares identically to the lexicographic tuple
/// `(category, kicker1, kicker2, ...)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandRank(u32);

impl HandRank {
    /// Create a new hand rank from a category and up to five kickers,
    /// ordered most significant first.
    fn new(category: HandCategory, kickers: &[u8]) -> Self {
        let mut value = (category as u32) << 20;
        for (i, &k) in kickers.iter().take(5).enumerate() {
            value |= (k as u32) << (16 - i * 4);
        }
        Self(value)
    }

    /// Get the raw rank value for comparison.
    pub fn value(&self) -> u32 {
        self.0
    }

    /// Get the hand category.
    pub fn category(&self) -> HandCategory {
        match self.0 >> 20 {
            0 => HandCategory::HighCard,
            1 => HandCategory::OnePair,
            2 => HandCategory::TwoPair,
            3 => HandCategory::ThreeOfAKind,
            4 => HandCategory::Straight,
            5 => HandCategory::Flush,
            6 => HandCategory::FullHouse,
            7 => HandCategory::FourOfAKind,
            _ => HandCategory::StraightFlush,
        }
    }
}

impl PartialOrd for HandRank {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HandRank {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

/// Hand evaluator for 5- and 7-card poker hands.
#[derive(Debug, Clone, Default)]
pub struct HandEvaluator;

impl HandEvaluator {
    /// Create a new hand evaluator.
    pub fn new() -> Self {
        Self
    }

    /// Evaluate a 5-card hand.
    ///
    /// Panics on duplicate cards: that is a caller bug, and scoring an
    /// ill-defined hand would silently corrupt every tally downstream.
    pub fn evaluate_5(&self, cards: &[Card; 5]) -> HandRank {
        // Build rank counts and suit counts
        let mut rank_counts = [0u8; 13];
        let mut suit_counts = [0u8; 4];
        let mut rank_bits = 0u16;
        let mut id_bits = 0u64;

        for card in cards {
            assert!(
                id_bits & (1u64 << card.id()) == 0,
                "duplicate card {} in hand",
                card
            );
            id_bits |= 1u64 << card.id();
            rank_counts[card.rank() as usize] += 1;
            suit_counts[card.suit() as usize] += 1;
            rank_bits |= 1 << card.rank();
        }

        let is_flush = suit_counts.iter().any(|&c| c == 5);
        let straight_high = find_straight(rank_bits);

        // Straight flush
        if is_flush {
            if let Some(high) = straight_high {
                return HandRank::new(HandCategory::StraightFlush, &[high]);
            }
        }

        // Group ranks by multiplicity, highest rank first within each group
        let mut quads = Vec::new();
        let mut trips = Vec::new();
        let mut pairs = Vec::new();
        let mut singles = Vec::new();

        for rank in (0..13u8).rev() {
            match rank_counts[rank as usize] {
                4 => quads.push(rank),
                3 => trips.push(rank),
                2 => pairs.push(rank),
                1 => singles.push(rank),
                _ => {}
            }
        }

        // Four of a kind: (quad rank, kicker)
        if let Some(&quad) = quads.first() {
            return HandRank::new(HandCategory::FourOfAKind, &[quad, singles[0]]);
        }

        // Full house: (trip rank, pair rank)
        if !trips.is_empty() && !pairs.is_empty() {
            return HandRank::new(HandCategory::FullHouse, &[trips[0], pairs[0]]);
        }

        // Flush: all five ranks descending
        if is_flush {
            return HandRank::new(HandCategory::Flush, &singles);
        }

        // Straight: high card only
        if let Some(high) = straight_high {
            return HandRank::new(HandCategory::Straight, &[high]);
        }

        // Three of a kind: (trip rank, two kickers descending)
        if let Some(&trip) = trips.first() {
            return HandRank::new(HandCategory::ThreeOfAKind, &[trip, singles[0], singles[1]]);
        }

        // Two pair: (higher pair, lower pair, kicker)
        if pairs.len() == 2 {
            return HandRank::new(HandCategory::TwoPair, &[pairs[0], pairs[1], singles[0]]);
        }

        // One pair: (pair rank, three kickers descending)
        if pairs.len() == 1 {
            return HandRank::new(
                HandCategory::OnePair,
                &[pairs[0], singles[0], singles[1], singles[2]],
            );
        }

        // High card: all five ranks descending
        HandRank::new(HandCategory::HighCard, &singles)
    }

    /// Evaluate a 7-card hand by taking the best of all C(7,5) = 21
    /// five-card subsets. The result is invariant under reordering of
    /// the input.
    pub fn evaluate_7(&self, cards: &[Card; 7]) -> HandRank {
        let mut best = HandRank(0);

        for i in 0..7 {
            for j in (i + 1)..7 {
                for k in (j + 1)..7 {
                    for l in (k + 1)..7 {
                        for m in (l + 1)..7 {
                            let hand = [cards[i], cards[j], cards[k], cards[l], cards[m]];
                            let rank = self.evaluate_5(&hand);
                            if rank > best {
                                best = rank;
                            }
                        }
                    }
                }
            }
        }

        best
    }
}

/// Find the highest straight in a rank bitmask.
///
/// Returns the straight's high-card rank, or None. The wheel (A-5-4-3-2)
/// counts as a straight whose high card is the five, so it ranks below
/// every other straight.
fn find_straight(rank_bits: u16) -> Option<u8> {
    // Ace-high (bits 8..=12) down to six-high (bits 0..=4)
    for high in (4..13u8).rev() {
        let mask = 0b11111u16 << (high - 4);
        if rank_bits & mask == mask {
            return Some(high);
        }
    }

    // Wheel: ace plus 2-3-4-5
    const WHEEL: u16 = (1 << 12) | 0b1111;
    if rank_bits & WHEEL == WHEEL {
        return Some(3);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards_from_str(s: &str) -> Vec<Card> {
        let s = s.replace(' ', "");
        let mut cards = Vec::new();
        for i in (0..s.len()).step_by(2) {
            cards.push(Card::from_str(&s[i..i + 2]).unwrap());
        }
        cards
    }

    fn arr5(cards: &[Card]) -> [Card; 5] {
        [cards[0], cards[1], cards[2], cards[3], cards[4]]
    }

    fn rank5(s: &str) -> HandRank {
        HandEvaluator::new().evaluate_5(&arr5(&cards_from_str(s)))
    }

    #[test]
    fn test_categories() {
        assert_eq!(rank5("As Kd Qh Jc 9s").category(), HandCategory::HighCard);
        assert_eq!(rank5("As Ad Kh Qc Js").category(), HandCategory::OnePair);
        assert_eq!(rank5("As Ad Kh Kc Js").category(), HandCategory::TwoPair);
        assert_eq!(rank5("As Ad Ah Kc Js").category(), HandCategory::ThreeOfAKind);
        assert_eq!(rank5("Ts 9d 8h 7c 6s").category(), HandCategory::Straight);
        assert_eq!(rank5("As Ks 9s 7s 2s").category(), HandCategory::Flush);
        assert_eq!(rank5("As Ad Ah Kc Kd").category(), HandCategory::FullHouse);
        assert_eq!(rank5("As Ad Ah Ac Ks").category(), HandCategory::FourOfAKind);
        assert_eq!(rank5("9s 8s 7s 6s 5s").category(), HandCategory::StraightFlush);
    }

    #[test]
    fn test_category_precedence() {
        // Weakest hand of each category, strongest of the one below
        let straight_flush = rank5("6s 5s 4s 3s 2s");
        let quads = rank5("As Ad Ah Ac Ks");
        let full_house = rank5("As Ad Ah Kc Kd");
        let flush = rank5("As Ks Qs Js 9s");
        let straight = rank5("As Kd Qh Jc Ts");
        let trips = rank5("As Ad Ah Kc Qs");
        let two_pair = rank5("As Ad Kh Kc Qs");
        let one_pair = rank5("As Ad Kh Qc Js");
        let high_card = rank5("As Kd Qh Jc 9s");

        assert!(straight_flush > quads);
        assert!(quads > full_house);
        assert!(full_house > flush);
        assert!(flush > straight);
        assert!(straight > trips);
        assert!(trips > two_pair);
        assert!(two_pair > one_pair);
        assert!(one_pair > high_card);
    }

    #[test]
    fn test_straights() {
        // Broadway is the best straight
        let broadway = rank5("As Kd Qh Jc Ts");
        assert_eq!(broadway.category(), HandCategory::Straight);

        // Wheel is a straight, below the six-high straight and above
        // any non-straight of lower category
        let wheel = rank5("5s 4d 3h 2c As");
        let six_high = rank5("6s 5d 4h 3c 2s");
        assert_eq!(wheel.category(), HandCategory::Straight);
        assert!(wheel < six_high);
        assert!(six_high < broadway);
        assert!(wheel > rank5("As Ad Ah Kc Qs")); // trips

        // Ace does not wrap around (Q-K-A-2-3 is no straight)
        let wrap = rank5("Qs Kd Ah 2c 3s");
        assert_eq!(wrap.category(), HandCategory::HighCard);
    }

    #[test]
    fn test_kicker_tiebreaks() {
        // One pair: pair rank first, then kickers descending
        assert!(rank5("As Ad Kh Qc Js") > rank5("As Ad Kh Qc Ts"));
        assert!(rank5("Ks Kd Ah Qc Js") > rank5("Qs Qd Ah Kc Js"));

        // Two pair: (higher pair, lower pair, kicker)
        assert!(rank5("As Ad Kh Kc 2s") > rank5("As Ad Qh Qc Ks"));
        assert!(rank5("As Ad Kh Kc Qs") > rank5("As Ad Kh Kc Js"));

        // Full house: trips rank dominates the pair
        assert!(rank5("Ks Kd Kh 2c 2d") > rank5("Qs Qd Qh Ac Ad"));

        // Flush compares all five ranks in order
        assert!(rank5("As Ks Qs Js 9s") > rank5("As Ks Qs Ts 9s"));

        // High card compares all five ranks in order
        assert!(rank5("As Kd Qh Jc 9s") > rank5("As Kd Qh Jc 8s"));
    }

    #[test]
    fn test_exact_tie() {
        let a = rank5("As Kd Qh Jc 9s");
        let b = rank5("Ad Kh Qc Js 9d");
        assert_eq!(a, b);
    }

    #[test]
    fn test_7_card_evaluation() {
        let eval = HandEvaluator::new();
        let cards = cards_from_str("Ah As Ad Ac Kh Qs Jd");
        let seven = [
            cards[0], cards[1], cards[2], cards[3], cards[4], cards[5], cards[6],
        ];
        let rank = eval.evaluate_7(&seven);
        assert_eq!(rank.category(), HandCategory::FourOfAKind);
    }

    #[test]
    fn test_7_card_order_invariance() {
        let eval = HandEvaluator::new();
        let cards = cards_from_str("9s 8s 7s 6s 5s Ad Ac");
        let forward = [
            cards[0], cards[1], cards[2], cards[3], cards[4], cards[5], cards[6],
        ];
        let reversed = [
            cards[6], cards[5], cards[4], cards[3], cards[2], cards[1], cards[0],
        ];
        let shuffled = [
            cards[3], cards[6], cards[0], cards[5], cards[2], cards[4], cards[1],
        ];

        let rank = eval.evaluate_7(&forward);
        assert_eq!(rank.category(), HandCategory::StraightFlush);
        assert_eq!(rank, eval.evaluate_7(&reversed));
        assert_eq!(rank, eval.evaluate_7(&shuffled));
    }

    #[test]
    #[should_panic(expected = "duplicate card")]
    fn test_duplicate_cards_panic() {
        let eval = HandEvaluator::new();
        let cards = cards_from_str("As As Kh Qc Js");
        eval.evaluate_5(&arr5(&cards));
    }
}
