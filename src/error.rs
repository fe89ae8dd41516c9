use crate::recipe::RecipeId;
use thiserror::Error;

/// Errors that can occur while fetching or decoding bazaar market data.
#[derive(Error, Debug)]
pub enum MarketError {
    #[error("Bazaar request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Bazaar endpoint answered with status {code}")]
    Status { code: u16 },

    #[error("Failed to parse bazaar payload: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Errors that can occur during recursive cost evaluation.
///
/// Degraded price lookups are *not* errors; they surface as
/// [`PriceWarning`](crate::pricing::PriceWarning)s on the appraisal instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    #[error("Recipe '{name}' is contained in its own ingredient tree")]
    CyclicRecipe { name: String },

    #[error("Sub-recipe id {id} does not exist in the recipe book")]
    UnknownRecipe { id: RecipeId },
}

/// Errors that can occur while persisting or restoring the recipe book.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Could not read snapshot '{path}': {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("Could not write snapshot '{path}': {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },

    #[error("Snapshot serialization failed: {0}")]
    Encode(String),

    #[error("Snapshot deserialization failed: {0}")]
    Decode(String),

    #[error("Snapshot version {found} is not supported (expected {supported})")]
    VersionMismatch { found: u32, supported: u32 },
}

/// Errors that can occur during account, profile, or purse resolution.
#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("Profile request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Hypixel API answered with status {code}")]
    Status { code: u16 },

    #[error("No Minecraft account found for username '{0}'")]
    UnknownUsername(String),

    #[error("No Skyblock profiles found for uuid '{0}'")]
    NoProfiles(String),
}

/// Errors that can occur while writing the session config.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not write config '{path}': {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },

    #[error("Config serialization failed: {0}")]
    Encode(#[from] serde_json::Error),
}
