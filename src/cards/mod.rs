//! Card model, hand evaluation and canonical starting hands.
//!
//! Everything in this module is pure and deterministic: cards and decks,
//! the 5/7-card evaluator with its total hand ordering, and the 169
//! canonical starting-hand classes the batch layer iterates over.

pub mod card;
pub mod hand_eval;
pub mod starting_hand;

pub use card::{Card, Deck, HoleCards};
pub use hand_eval::{HandCategory, HandEvaluator, HandRank};
pub use starting_hand::StartingHand;
