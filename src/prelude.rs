//! Prelude module for convenient imports
//!
//! Re-exports the most commonly used types from the satei crate. Import this
//! module to get access to the core functionality without having to import
//! each type individually.

// Core pricing and affordability
pub use crate::pricing::{Appraisal, CostEngine, PriceWarning, SELL_SURCHARGE, appraise_and_record};
pub use crate::purse::{BATCH_SIZE, BatchPlan, craft_count, plan_purchases};

// Recipe data structures
pub use crate::recipe::{PricePoint, Recipe, RecipeBook, RecipeId};

// Market and profile collaborators
pub use crate::market::{BazaarClient, MarketSnapshot, ProductQuote};
pub use crate::profile::{ProfileClient, ProfileSummary};

// Session settings
pub use crate::config::SessionConfig;

// Error types
pub use crate::error::{ConfigError, MarketError, PricingError, ProfileError, StoreError};

/// Result type alias for application-level flows that mix several error
/// domains.
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
