//! Pipeline steps. Each one consumes a card sequence and returns the transformed sequence.

use crate::model::card::Card;
use crate::model::rank::Rank;
use crate::model::suit::Suit;
use crate::sort_key::SortKey;
use rand::Rng;
use rand::seq::SliceRandom;

/// Appends `count` jokers numbered `0..count`.
pub fn add_jokers(mut cards: Vec<Card>, count: usize) -> Vec<Card> {
    cards.reserve(count);
    cards.extend((0..count).map(Card::joker));
    cards
}

/// Concatenates `copies` copies of the sequence. Zero copies empties it.
pub fn multiply(cards: Vec<Card>, copies: usize) -> Vec<Card> {
    match copies {
        1 => cards,
        _ => cards.repeat(copies),
    }
}

pub fn shuffle<R: Rng + ?Sized>(mut cards: Vec<Card>, rng: &mut R) -> Vec<Card> {
    cards.shuffle(rng);
    cards
}

/// Keeps every card for which `reject` is false.
pub fn filter<F>(mut cards: Vec<Card>, reject: F) -> Vec<Card>
where
    F: Fn(&Card) -> bool,
{
    cards.retain(|card| !reject(card));
    cards
}

/// Jokers have no rank and are never removed here.
pub fn exclude_rank(cards: Vec<Card>, rank: Rank) -> Vec<Card> {
    filter(cards, |card| card.rank() == Some(rank))
}

pub fn exclude_suit(cards: Vec<Card>, suit: Suit) -> Vec<Card> {
    filter(cards, |card| card.suit() == suit)
}

/// Stable sort by `key`, descending when `reverse` is set.
pub fn sort(mut cards: Vec<Card>, key: &SortKey, reverse: bool) -> Vec<Card> {
    if reverse {
        cards.sort_by(|a, b| key.key(b).cmp(&key.key(a)));
    } else {
        cards.sort_by_key(|card| key.key(card));
    }
    cards
}
