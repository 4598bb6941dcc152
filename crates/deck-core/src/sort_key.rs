use crate::model::card::Card;
use crate::model::rank::Rank;
use crate::model::suit::Suit;
use core::fmt;

/// Integer key used by the final sort step.
pub struct SortKey(Box<dyn Fn(&Card) -> i64>);

impl SortKey {
    pub fn new<F>(key: F) -> Self
    where
        F: Fn(&Card) -> i64 + 'static,
    {
        Self(Box::new(key))
    }

    pub fn key(&self, card: &Card) -> i64 {
        (self.0)(card)
    }
}

impl Default for SortKey {
    fn default() -> Self {
        Self::new(absolute_rank)
    }
}

impl fmt::Debug for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SortKey(..)")
    }
}

/// Suit-major order: Diamonds, Hearts, Spades, Clubs, each Ace through King, then jokers.
pub fn absolute_rank(card: &Card) -> i64 {
    match *card {
        Card::Standard { rank, suit } => (suit.index() * Rank::COUNT + rank.index()) as i64,
        Card::Joker { id } => (Suit::Joker.index() * Rank::COUNT) as i64 + id as i64,
    }
}

/// Rank-major order matching the base deck layout: all Aces, then all Twos, then jokers.
pub fn rank_major(card: &Card) -> i64 {
    let stride = Suit::STANDARD.len() + 1;
    match *card {
        Card::Standard { rank, suit } => (rank.index() * stride + suit.index()) as i64,
        Card::Joker { id } => (Rank::COUNT * stride) as i64 + id as i64,
    }
}
