#![deny(warnings)]
pub mod error;
pub mod model;
pub mod options;
pub mod pipeline;
pub mod sort_key;
pub mod transform;

pub use error::{DeckError, ParseError};
pub use model::card::Card;
pub use model::deck::Deck;
pub use model::rank::Rank;
pub use model::suit::Suit;
pub use options::{DeckOption, DeckOptions};
pub use pipeline::build;
pub use sort_key::SortKey;
