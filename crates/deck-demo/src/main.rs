use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use deck_core::{Rank, Suit};
use deck_demo::config::{DemoConfig, Overrides};
use deck_demo::logging::init_logging;
use deck_demo::render::{OutputFormat, run_recipes};

/// Builds playing-card decks and prints them.
#[derive(Debug, Parser)]
#[command(
    name = "deck-demo",
    author,
    version,
    about = "Print decks built from configurable recipes"
)]
struct Cli {
    /// Path to a YAML recipe file. Built-in recipes are used when omitted.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Only print the recipe with this name.
    #[arg(long, value_name = "NAME")]
    recipe: Option<String>,

    /// Override the number of jokers added to every recipe.
    #[arg(long, value_name = "COUNT", allow_negative_numbers = true)]
    jokers: Option<i64>,

    /// Override the number of decks combined in every recipe.
    #[arg(long, value_name = "COUNT", allow_negative_numbers = true)]
    decks: Option<i64>,

    /// Shuffle every recipe.
    #[arg(long)]
    shuffle: bool,

    /// Seed the shuffle step.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Sort every recipe in descending order.
    #[arg(long)]
    reverse: bool,

    /// Remove a rank from every recipe (repeatable).
    #[arg(long = "exclude-rank", value_name = "RANK")]
    exclude_ranks: Vec<Rank>,

    /// Remove a suit from every recipe (repeatable).
    #[arg(long = "exclude-suit", value_name = "SUIT")]
    exclude_suits: Vec<Suit>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Override the tracing level (trace, debug, info, warn, error).
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            jokers: self.jokers,
            decks: self.decks,
            shuffle: self.shuffle,
            seed: self.seed,
            reverse: self.reverse,
            exclude_suits: self.exclude_suits.clone(),
            exclude_ranks: self.exclude_ranks.clone(),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = match cli.config.as_ref() {
        Some(path) => DemoConfig::from_path(path)?,
        None => DemoConfig::builtin(),
    };

    if let Some(level) = cli.log_level.clone() {
        config.logging.tracing_level = level;
    }

    config.apply_overrides(&cli.overrides());

    if let Some(name) = cli.recipe.as_deref() {
        config.select(name)?;
    }

    config.validate()?;

    let _logging_guard = init_logging(&config.logging);
    tracing::debug!(recipes = config.recipes.len(), format = ?cli.format, "configuration loaded");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let total = run_recipes(&config.recipes, cli.format, &mut out).context("printing decks")?;
    tracing::info!(recipes = config.recipes.len(), cards = total, "demo complete");

    Ok(())
}
