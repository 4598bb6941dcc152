use crate::model::deck::Deck;
use crate::options::{DeckOption, DeckOptions};
use crate::transform;
use rand::SeedableRng;
use rand::rngs::StdRng;

const TARGET: &str = "deck_core::pipeline";

/// Builds a deck from the standard 52 cards and the given options.
///
/// Options are applied in order, then the fixed pipeline runs: jokers, multiply,
/// shuffle, rank filters, suit filters, sort. Every step runs even when its
/// option is at the default.
pub fn build<I>(options: I) -> Deck
where
    I: IntoIterator<Item = DeckOption>,
{
    let mut resolved = DeckOptions::default();
    resolved.apply(options);
    resolved.assemble()
}

impl DeckOptions {
    pub fn assemble(self) -> Deck {
        tracing::trace!(target: TARGET, options = ?self, "resolved deck options");

        let cards = Deck::standard().into_cards();

        let cards = transform::add_jokers(cards, self.jokers);
        tracing::debug!(target: TARGET, step = "jokers", jokers = self.jokers, cards = cards.len());

        let cards = transform::multiply(cards, self.decks);
        tracing::debug!(target: TARGET, step = "multiply", decks = self.decks, cards = cards.len());

        let cards = match (self.shuffle, self.seed) {
            (false, _) => cards,
            (true, Some(seed)) => transform::shuffle(cards, &mut StdRng::seed_from_u64(seed)),
            (true, None) => transform::shuffle(cards, &mut rand::thread_rng()),
        };
        tracing::debug!(target: TARGET, step = "shuffle", enabled = self.shuffle, seeded = self.seed.is_some());

        let cards = self
            .excluded_ranks
            .iter()
            .fold(cards, |cards, &rank| transform::exclude_rank(cards, rank));
        tracing::debug!(target: TARGET, step = "exclude_ranks", ranks = ?self.excluded_ranks, cards = cards.len());

        let cards = self
            .excluded_suits
            .iter()
            .fold(cards, |cards, &suit| transform::exclude_suit(cards, suit));
        tracing::debug!(target: TARGET, step = "exclude_suits", suits = ?self.excluded_suits, cards = cards.len());

        let cards = transform::sort(cards, &self.sort_key, self.reverse);
        tracing::debug!(target: TARGET, step = "sort", reverse = self.reverse, cards = cards.len());

        Deck::from_cards(cards)
    }
}
