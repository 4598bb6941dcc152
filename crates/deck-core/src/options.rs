//! Functional options for [`build`](crate::build).
//!
//! Each setter returns a [`DeckOption`] that overwrites exactly one field of
//! [`DeckOptions`]. Options apply in the order given, so a later setter for the
//! same field wins; list setters replace rather than append.

use crate::error::DeckError;
use crate::model::card::Card;
use crate::model::rank::Rank;
use crate::model::suit::Suit;
use crate::sort_key::SortKey;

/// Resolved configuration for a single deck build.
#[derive(Debug)]
pub struct DeckOptions {
    pub sort_key: SortKey,
    pub reverse: bool,
    pub jokers: usize,
    pub decks: usize,
    pub excluded_suits: Vec<Suit>,
    pub excluded_ranks: Vec<Rank>,
    pub shuffle: bool,
    pub seed: Option<u64>,
}

impl Default for DeckOptions {
    fn default() -> Self {
        Self {
            sort_key: SortKey::default(),
            reverse: false,
            jokers: 0,
            decks: 1,
            excluded_suits: Vec::new(),
            excluded_ranks: Vec::new(),
            shuffle: false,
            seed: None,
        }
    }
}

impl DeckOptions {
    pub fn apply<I>(&mut self, options: I)
    where
        I: IntoIterator<Item = DeckOption>,
    {
        for option in options {
            option.apply(self);
        }
    }
}

/// A deferred mutation of [`DeckOptions`].
pub struct DeckOption(Box<dyn FnOnce(&mut DeckOptions)>);

impl DeckOption {
    fn new<F>(f: F) -> Self
    where
        F: FnOnce(&mut DeckOptions) + 'static,
    {
        Self(Box::new(f))
    }

    pub fn apply(self, options: &mut DeckOptions) {
        (self.0)(options)
    }
}

impl core::fmt::Debug for DeckOption {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("DeckOption(..)")
    }
}

pub fn sort_key<F>(key: F) -> DeckOption
where
    F: Fn(&Card) -> i64 + 'static,
{
    DeckOption::new(move |options| options.sort_key = SortKey::new(key))
}

pub fn reverse() -> DeckOption {
    DeckOption::new(|options| options.reverse = true)
}

pub fn jokers(count: usize) -> DeckOption {
    DeckOption::new(move |options| options.jokers = count)
}

pub fn decks(count: usize) -> DeckOption {
    DeckOption::new(move |options| options.decks = count)
}

pub fn exclude_suits(suits: Vec<Suit>) -> DeckOption {
    DeckOption::new(move |options| options.excluded_suits = suits)
}

pub fn exclude_ranks(ranks: Vec<Rank>) -> DeckOption {
    DeckOption::new(move |options| options.excluded_ranks = ranks)
}

pub fn shuffle(enabled: bool) -> DeckOption {
    DeckOption::new(move |options| options.shuffle = enabled)
}

/// Seeds the shuffle step. Has no effect unless shuffling is enabled.
pub fn seed(seed: u64) -> DeckOption {
    DeckOption::new(move |options| options.seed = Some(seed))
}

/// Converts a count from an untyped source. Negative values are rejected, never clamped.
pub fn checked_count(option: &'static str, value: i64) -> Result<usize, DeckError> {
    usize::try_from(value).map_err(|_| DeckError::InvalidOption { option, value })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(options: Vec<DeckOption>) -> DeckOptions {
        let mut resolved = DeckOptions::default();
        resolved.apply(options);
        resolved
    }

    #[test]
    fn defaults_are_noops() {
        let options = DeckOptions::default();
        assert!(!options.reverse);
        assert_eq!(options.jokers, 0);
        assert_eq!(options.decks, 1);
        assert!(options.excluded_suits.is_empty());
        assert!(options.excluded_ranks.is_empty());
        assert!(!options.shuffle);
        assert_eq!(options.seed, None);
    }

    #[test]
    fn each_setter_touches_one_field() {
        let options = resolve(vec![jokers(3)]);
        assert_eq!(options.jokers, 3);
        assert_eq!(options.decks, 1);

        let options = resolve(vec![decks(0), shuffle(true), seed(9), reverse()]);
        assert_eq!(options.decks, 0);
        assert!(options.shuffle);
        assert_eq!(options.seed, Some(9));
        assert!(options.reverse);
        assert_eq!(options.jokers, 0);
    }

    #[test]
    fn later_setters_overwrite_earlier_ones() {
        let options = resolve(vec![
            exclude_ranks(vec![Rank::Two, Rank::Five]),
            jokers(4),
            exclude_ranks(vec![Rank::King]),
            jokers(1),
            shuffle(true),
            shuffle(false),
        ]);
        assert_eq!(options.excluded_ranks, vec![Rank::King]);
        assert_eq!(options.jokers, 1);
        assert!(!options.shuffle);
    }

    #[test]
    fn sort_key_setter_replaces_default() {
        let options = resolve(vec![sort_key(|_: &Card| 7)]);
        assert_eq!(options.sort_key.key(&Card::joker(0)), 7);
    }

    #[test]
    fn negative_counts_are_rejected() {
        assert_eq!(checked_count("jokers", 4), Ok(4));
        assert_eq!(checked_count("decks", 0), Ok(0));
        assert_eq!(
            checked_count("decks", -1),
            Err(DeckError::InvalidOption {
                option: "decks",
                value: -1
            })
        );
    }
}
