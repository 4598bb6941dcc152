use std::io::{self, Write};

use clap::ValueEnum;
use deck_core::{Deck, DeckError};
use serde::Serialize;
use thiserror::Error;

use crate::config::Recipe;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// A `# name` header, then one card per line.
    #[default]
    Text,
    /// One JSON object per recipe, one per line.
    Json,
}

#[derive(Debug, Serialize)]
struct DeckRow<'a> {
    recipe: &'a str,
    count: usize,
    cards: Vec<String>,
}

pub fn write_deck<W: Write>(
    out: &mut W,
    name: &str,
    deck: &Deck,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => {
            writeln!(out, "# {name}")?;
            for card in deck {
                writeln!(out, "{card}")?;
            }
        }
        OutputFormat::Json => {
            let row = DeckRow {
                recipe: name,
                count: deck.len(),
                cards: deck.iter().map(ToString::to_string).collect(),
            };
            serde_json::to_writer(&mut *out, &row)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Builds and writes every recipe in order, returning the total number of cards written.
pub fn run_recipes<W: Write>(
    recipes: &[Recipe],
    format: OutputFormat,
    out: &mut W,
) -> Result<usize, RunError> {
    let mut total = 0;
    for recipe in recipes {
        let deck = recipe.build().map_err(|source| RunError::Recipe {
            name: recipe.name.clone(),
            source,
        })?;
        tracing::info!(recipe = %recipe.name, cards = deck.len(), "built deck");
        write_deck(out, &recipe.name, &deck, format)?;
        total += deck.len();
    }
    out.flush()?;
    Ok(total)
}

#[derive(Debug, Error)]
pub enum RunError {
    #[error("recipe '{name}' could not be built: {source}")]
    Recipe {
        name: String,
        #[source]
        source: DeckError,
    },
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
