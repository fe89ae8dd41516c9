//! # Satei - Bazaar Recipe Appraisal Engine
//!
//! **Satei** prices crafting recipes against the Hypixel Skyblock bazaar and
//! works out how many crafts a player's purse can fund. Recipes are
//! arbitrary bills of materials: bazaar items with quantities, plus other
//! recipes nested as components, priced recursively.
//!
//! ## Core Workflow
//!
//! 1. **Build or load a [`RecipeBook`](recipe::RecipeBook)**: the named,
//!    order-preserving collection of saved recipes, persisted as a versioned
//!    snapshot.
//! 2. **Fetch a [`MarketSnapshot`](market::MarketSnapshot)**: a
//!    [`BazaarClient`](market::BazaarClient) pulls the current best
//!    sell-order price for every bazaar product in one call.
//! 3. **Appraise**: a [`CostEngine`](pricing::CostEngine) recursively prices
//!    a recipe tree against the snapshot. Evaluation is pure; unknown items
//!    degrade to warnings, and cyclic recipe graphs are rejected with an
//!    explicit error.
//! 4. **Fit the purse**: [`purse::plan_purchases`] turns a coin balance into
//!    per-item purchase orders against the bazaar's order cap.
//!
//! ## Quick Start
//!
//! ```rust
//! use satei::market::{MarketSnapshot, ProductQuote};
//! use satei::pricing::CostEngine;
//! use satei::purse;
//! use satei::recipe::{Recipe, RecipeBook};
//!
//! // A fixed snapshot; in the application this comes from a BazaarClient.
//! let mut market = MarketSnapshot::empty();
//! market.insert_quote(
//!     "ENCHANTED_DIAMOND",
//!     ProductQuote { best_sell_unit_price: Some(100.0) },
//! );
//!
//! let mut book = RecipeBook::new();
//! let mut block = Recipe::new("Diamond Block");
//! block.add_item("ENCHANTED_DIAMOND", 10);
//! let id = book.insert(block);
//!
//! let appraisal = CostEngine::new(&book, &market).appraise(id).unwrap();
//! assert_eq!(appraisal.total, 1001.0);
//!
//! let orders = purse::plan_purchases(5000, appraisal.total, book.get(id).unwrap());
//! assert_eq!(orders[0].1.to_string(), "0 full orders 40 extra");
//! ```

pub mod config;
pub mod error;
pub mod market;
pub mod prelude;
pub mod pricing;
pub mod profile;
pub mod purse;
pub mod recipe;
