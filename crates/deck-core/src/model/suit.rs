use crate::error::ParseError;
use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Suit {
    Diamond = 0,
    Heart = 1,
    Spade = 2,
    Club = 3,
    Joker = 4,
}

impl Suit {
    /// The four playing suits, in absolute-rank order. Excludes `Joker`.
    pub const STANDARD: [Suit; 4] = [Suit::Diamond, Suit::Heart, Suit::Spade, Suit::Club];

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Suit::Diamond),
            1 => Some(Suit::Heart),
            2 => Some(Suit::Spade),
            3 => Some(Suit::Club),
            4 => Some(Suit::Joker),
            _ => None,
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn is_joker(self) -> bool {
        matches!(self, Suit::Joker)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Suit::Diamond => "Diamond",
            Suit::Heart => "Heart",
            Suit::Spade => "Spade",
            Suit::Club => "Club",
            Suit::Joker => "Joker",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Suit {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        let singular = lowered.strip_suffix('s').unwrap_or(lowered.as_str());
        match singular {
            "diamond" => Ok(Suit::Diamond),
            "heart" => Ok(Suit::Heart),
            "spade" => Ok(Suit::Spade),
            "club" => Ok(Suit::Club),
            "joker" => Ok(Suit::Joker),
            _ => Err(ParseError::UnknownSuit(s.to_string())),
        }
    }
}
