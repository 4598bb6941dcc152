use deck_core::options::{self, DeckOption};
use deck_core::sort_key::{absolute_rank, rank_major};
use deck_core::{Card, Deck, DeckError, Rank, Suit};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::Level;

/// Root demo configuration loaded from YAML.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct DemoConfig {
    pub recipes: Vec<Recipe>,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl DemoConfig {
    /// Load configuration from a YAML file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let path_buf = path.to_path_buf();
        let file = File::open(path).map_err(|source| ConfigError::Read {
            source,
            path: path_buf.clone(),
        })?;
        let reader = BufReader::new(file);
        let mut cfg: DemoConfig =
            serde_yaml::from_reader(reader).map_err(|source| ConfigError::Parse {
                source,
                path: path_buf.clone(),
            })?;
        cfg.validate().map_err(|source| ConfigError::Invalid {
            path: path_buf,
            source,
        })?;
        Ok(cfg)
    }

    /// The decks printed when no configuration file is given.
    pub fn builtin() -> Self {
        Self {
            recipes: vec![
                Recipe::named("sorted"),
                Recipe {
                    reverse: true,
                    ..Recipe::named("reversed")
                },
                Recipe {
                    shuffle: true,
                    sort: SortOrder::Preserve,
                    ..Recipe::named("shuffled")
                },
            ],
            logging: LoggingConfig::default(),
        }
    }

    /// Validate the configuration without performing I/O.
    pub fn validate(&mut self) -> Result<(), ValidationError> {
        self.logging.normalize();
        validate_recipes(&self.recipes)
    }

    pub fn apply_overrides(&mut self, overrides: &Overrides) {
        for recipe in &mut self.recipes {
            recipe.apply_overrides(overrides);
        }
    }

    /// Keep only the recipe called `name`.
    pub fn select(&mut self, name: &str) -> Result<(), ValidationError> {
        self.recipes.retain(|recipe| recipe.name == name);
        if self.recipes.is_empty() {
            return Err(ValidationError::InvalidField {
                field: "recipe".to_string(),
                message: format!("no recipe named '{name}'"),
            });
        }
        Ok(())
    }
}

/// One deck to build and print.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Recipe {
    pub name: String,
    #[serde(default)]
    pub jokers: i64,
    #[serde(default = "default_decks")]
    pub decks: i64,
    #[serde(default)]
    pub shuffle: bool,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub reverse: bool,
    #[serde(default)]
    pub exclude_suits: Vec<Suit>,
    #[serde(default)]
    pub exclude_ranks: Vec<Rank>,
    #[serde(default)]
    pub sort: SortOrder,
}

impl Recipe {
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            jokers: 0,
            decks: default_decks(),
            shuffle: false,
            seed: None,
            reverse: false,
            exclude_suits: Vec::new(),
            exclude_ranks: Vec::new(),
            sort: SortOrder::default(),
        }
    }

    /// Translate the recipe into deck options. Negative counts are rejected.
    pub fn options(&self) -> Result<Vec<DeckOption>, DeckError> {
        let mut opts = vec![
            options::jokers(options::checked_count("jokers", self.jokers)?),
            options::decks(options::checked_count("decks", self.decks)?),
            options::shuffle(self.shuffle),
            options::exclude_suits(self.exclude_suits.clone()),
            options::exclude_ranks(self.exclude_ranks.clone()),
            self.sort.option(),
        ];
        if let Some(seed) = self.seed {
            opts.push(options::seed(seed));
        }
        if self.reverse {
            opts.push(options::reverse());
        }
        Ok(opts)
    }

    pub fn build(&self) -> Result<Deck, DeckError> {
        Ok(deck_core::build(self.options()?))
    }

    fn apply_overrides(&mut self, overrides: &Overrides) {
        if let Some(jokers) = overrides.jokers {
            self.jokers = jokers;
        }
        if let Some(decks) = overrides.decks {
            self.decks = decks;
        }
        if overrides.shuffle {
            self.shuffle = true;
        }
        if let Some(seed) = overrides.seed {
            self.seed = Some(seed);
        }
        if overrides.reverse {
            self.reverse = true;
        }
        if !overrides.exclude_suits.is_empty() {
            self.exclude_suits = overrides.exclude_suits.clone();
        }
        if !overrides.exclude_ranks.is_empty() {
            self.exclude_ranks = overrides.exclude_ranks.clone();
        }
    }
}

fn default_decks() -> i64 {
    1
}

/// Named sort keys, since a YAML file cannot carry a function.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    Absolute,
    RankMajor,
    /// Constant key; the stable sort keeps the order produced by earlier steps.
    Preserve,
}

impl SortOrder {
    fn option(self) -> DeckOption {
        match self {
            SortOrder::Absolute => options::sort_key(absolute_rank),
            SortOrder::RankMajor => options::sort_key(rank_major),
            SortOrder::Preserve => options::sort_key(|_: &Card| 0),
        }
    }
}

/// Command-line values layered on top of every recipe.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overrides {
    pub jokers: Option<i64>,
    pub decks: Option<i64>,
    pub shuffle: bool,
    pub seed: Option<u64>,
    pub reverse: bool,
    pub exclude_suits: Vec<Suit>,
    pub exclude_ranks: Vec<Rank>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default = "default_tracing_level")]
    pub tracing_level: String,
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            tracing_level: default_tracing_level(),
            json: false,
        }
    }
}

impl LoggingConfig {
    fn normalize(&mut self) {
        if self.level().is_none() {
            self.tracing_level = default_tracing_level();
        }
    }

    pub fn level(&self) -> Option<Level> {
        match self.tracing_level.trim().to_ascii_lowercase().as_str() {
            "trace" => Some(Level::TRACE),
            "debug" => Some(Level::DEBUG),
            "info" => Some(Level::INFO),
            "warn" | "warning" => Some(Level::WARN),
            "error" => Some(Level::ERROR),
            _ => None,
        }
    }
}

fn default_enabled() -> bool {
    true
}

fn default_tracing_level() -> String {
    "warn".to_string()
}

fn validate_recipes(recipes: &[Recipe]) -> Result<(), ValidationError> {
    if recipes.is_empty() {
        return Err(ValidationError::InvalidField {
            field: "recipes".to_string(),
            message: "at least one recipe must be specified".to_string(),
        });
    }

    let mut seen = HashSet::new();
    for recipe in recipes {
        if recipe.name.trim().is_empty() {
            return Err(ValidationError::InvalidField {
                field: "recipes.name".to_string(),
                message: "recipe name must not be empty".to_string(),
            });
        }

        if !seen.insert(recipe.name.as_str()) {
            return Err(ValidationError::InvalidField {
                field: "recipes".to_string(),
                message: format!("recipe name '{}' defined more than once", recipe.name),
            });
        }

        recipe
            .options()
            .map_err(|source| ValidationError::InvalidOption {
                recipe: recipe.name.clone(),
                source,
            })?;
    }

    Ok(())
}

/// Errors surfaced when loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },
    #[error("failed to parse config {path:?}: {source}")]
    Parse {
        #[source]
        source: serde_yaml::Error,
        path: PathBuf,
    },
    #[error("invalid configuration in {path:?}: {source}")]
    Invalid {
        path: PathBuf,
        source: ValidationError,
    },
}

impl ConfigError {
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. }
            | ConfigError::Parse { path, .. }
            | ConfigError::Invalid { path, .. } => path.as_path(),
        }
    }
}

/// Validation failures captured with contextual metadata.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("{field}: {message}")]
    InvalidField { field: String, message: String },
    #[error("recipe '{recipe}': {source}")]
    InvalidOption {
        recipe: String,
        #[source]
        source: DeckError,
    },
}
