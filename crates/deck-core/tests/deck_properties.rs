use std::collections::HashMap;

use deck_core::options::{
    decks, exclude_ranks, exclude_suits, jokers, reverse, seed, shuffle, sort_key,
};
use deck_core::sort_key::{SortKey, absolute_rank, rank_major};
use deck_core::{Card, Deck, Rank, Suit, build, transform};

fn counts(deck: &Deck) -> HashMap<Card, usize> {
    let mut counts = HashMap::new();
    for card in deck {
        *counts.entry(*card).or_insert(0) += 1;
    }
    counts
}

fn joker_count(deck: &Deck) -> usize {
    deck.iter().filter(|card| card.suit() == Suit::Joker).count()
}

#[test]
fn default_deck_has_52_cards() {
    assert_eq!(build([]).len(), 52);
}

#[test]
fn default_sort_runs_ace_of_diamonds_to_king_of_clubs() {
    let deck = build([]);
    assert_eq!(deck.first(), Some(Card::new(Rank::Ace, Suit::Diamond).unwrap()));
    assert_eq!(deck.last(), Some(Card::new(Rank::King, Suit::Club).unwrap()));

    let keys: Vec<i64> = deck.iter().map(absolute_rank).collect();
    assert_eq!(keys, (0..52).collect::<Vec<i64>>());
}

#[test]
fn reverse_puts_king_of_clubs_first() {
    let deck = build([reverse()]);
    assert_eq!(deck.first(), Some(Card::new(Rank::King, Suit::Club).unwrap()));
    assert_eq!(deck.last(), Some(Card::new(Rank::Ace, Suit::Diamond).unwrap()));
}

#[test]
fn jokers_are_counted_exactly() {
    assert_eq!(joker_count(&build([jokers(10)])), 10);
    assert_eq!(
        joker_count(&build([jokers(10), exclude_ranks(vec![Rank::Ace]), reverse()])),
        10
    );
    let deck = build([jokers(10)]);
    assert_eq!(deck.len(), 62);
    assert!(deck.cards()[52..].iter().all(|card| card.is_joker()));
}

#[test]
fn excluded_ranks_are_absent() {
    let deck = build([exclude_ranks(vec![Rank::Two, Rank::Five])]);
    assert_eq!(deck.len(), 44);
    for card in &deck {
        assert!(
            !matches!(card.rank(), Some(Rank::Two) | Some(Rank::Five)),
            "found {card} in deck"
        );
    }
}

#[test]
fn excluded_suits_are_absent() {
    let deck = build([exclude_suits(vec![Suit::Diamond])]);
    assert_eq!(deck.len(), 39);
    assert!(deck.iter().all(|card| card.suit() != Suit::Diamond));
}

#[test]
fn rank_filters_never_touch_jokers() {
    let deck = build([jokers(2), exclude_ranks(Rank::ORDERED.to_vec())]);
    assert_eq!(deck.cards(), &[Card::joker(0), Card::joker(1)]);
}

#[test]
fn filtering_everything_yields_an_empty_deck() {
    let deck = build([jokers(3), exclude_suits(vec![
        Suit::Diamond,
        Suit::Heart,
        Suit::Spade,
        Suit::Club,
        Suit::Joker,
    ])]);
    assert!(deck.is_empty());
}

#[test]
fn four_decks_hold_each_card_four_times() {
    let deck = build([decks(4)]);
    assert_eq!(deck.len(), 208);
    let counts = counts(&deck);
    assert_eq!(counts.len(), 52);
    assert!(counts.values().all(|&count| count == 4));
}

// Jokers are added once to the base deck and then multiplied along with it,
// so three decks with two jokers carry six jokers with ids 0, 1, 0, 1, 0, 1.
#[test]
fn jokers_are_added_before_multiplying() {
    let deck = build([jokers(2), decks(3)]);
    assert_eq!(deck.len(), 3 * 54);
    assert_eq!(joker_count(&deck), 6);
    let counts = counts(&deck);
    assert_eq!(counts[&Card::joker(0)], 3);
    assert_eq!(counts[&Card::joker(1)], 3);
    assert!(!counts.contains_key(&Card::joker(2)));
}

#[test]
fn option_order_decides_the_winner() {
    let deck = build([exclude_ranks(vec![Rank::Ace]), exclude_ranks(vec![Rank::King])]);
    assert_eq!(deck.len(), 48);
    assert!(deck.iter().any(|card| card.rank() == Some(Rank::Ace)));
    assert!(deck.iter().all(|card| card.rank() != Some(Rank::King)));
}

#[test]
fn sorting_a_sorted_deck_is_identity() {
    for reversed in [false, true] {
        let key = SortKey::default();
        let once = transform::sort(build([jokers(2), decks(2)]).into_cards(), &key, reversed);
        let twice = transform::sort(once.clone(), &key, reversed);
        assert_eq!(once, twice);
    }
}

#[test]
fn custom_sort_key_controls_order() {
    let deck = build([sort_key(rank_major)]);
    let firsts: Vec<Card> = deck.iter().copied().take(4).collect();
    assert!(firsts.iter().all(|card| card.rank() == Some(Rank::Ace)));

    let deck = build([sort_key(|card: &Card| -absolute_rank(card))]);
    assert_eq!(deck.first(), Some(Card::new(Rank::King, Suit::Club).unwrap()));
}

#[test]
fn shuffle_is_sorted_away_by_the_final_step() {
    // The sort step always runs last, so a shuffled build with the default key
    // lands back in sorted order.
    assert_eq!(build([shuffle(true)]), build([]));
}

#[test]
fn shuffled_deck_is_a_permutation() {
    // A constant key keeps the shuffled order through the stable sort.
    let unshuffled = build([jokers(2), decks(2), sort_key(|_: &Card| 0)]);
    let shuffled = build([jokers(2), decks(2), shuffle(true), sort_key(|_: &Card| 0)]);
    assert_eq!(shuffled.len(), unshuffled.len());
    assert_eq!(counts(&shuffled), counts(&unshuffled));
}

#[test]
fn unseeded_shuffles_vary() {
    let orders: Vec<Deck> = (0..5)
        .map(|_| build([shuffle(true), sort_key(|_: &Card| 0)]))
        .collect();
    assert!(orders.windows(2).any(|pair| pair[0] != pair[1]));
}

#[test]
fn seeded_shuffles_reproduce() {
    let a = build([shuffle(true), seed(42), sort_key(|_: &Card| 0)]);
    let b = build([seed(42), shuffle(true), sort_key(|_: &Card| 0)]);
    let c = build([shuffle(true), seed(43), sort_key(|_: &Card| 0)]);
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn display_strings() {
    assert_eq!(
        Card::new(Rank::Ace, Suit::Diamond).unwrap().to_string(),
        "Ace of Diamonds"
    );
    assert_eq!(Card::joker(0).to_string(), "Joker");
    let lines: Vec<String> = build([reverse()]).iter().map(ToString::to_string).collect();
    assert_eq!(lines[0], "King of Clubs");
}
