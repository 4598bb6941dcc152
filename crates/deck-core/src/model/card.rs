use crate::error::DeckError;
use crate::model::rank::Rank;
use crate::model::suit::Suit;
use core::fmt;
use serde::{Deserialize, Serialize};

/// A single playing card. Jokers carry an identifier instead of a rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Card {
    Standard { rank: Rank, suit: Suit },
    Joker { id: usize },
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Result<Self, DeckError> {
        if suit.is_joker() {
            return Err(DeckError::JokerHasNoRank);
        }
        Ok(Card::Standard { rank, suit })
    }

    pub const fn joker(id: usize) -> Self {
        Card::Joker { id }
    }

    pub const fn suit(self) -> Suit {
        match self {
            Card::Standard { suit, .. } => suit,
            Card::Joker { .. } => Suit::Joker,
        }
    }

    pub const fn rank(self) -> Option<Rank> {
        match self {
            Card::Standard { rank, .. } => Some(rank),
            Card::Joker { .. } => None,
        }
    }

    pub const fn is_joker(self) -> bool {
        matches!(self, Card::Joker { .. })
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Card::Standard { rank, suit } => write!(f, "{rank} of {suit}s"),
            Card::Joker { .. } => write!(f, "{}", Suit::Joker),
        }
    }
}
