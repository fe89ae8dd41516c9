//! Market price source: bazaar product quotes and the client that fetches them.

pub mod client;

pub use client::*;

use ahash::AHashMap;

/// The current bazaar quote for a single product.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductQuote {
    /// Unit price of the cheapest active sell order, if any orders exist.
    pub best_sell_unit_price: Option<f64>,
}

impl ProductQuote {
    pub fn has_sell_orders(&self) -> bool {
        self.best_sell_unit_price.is_some()
    }
}

/// A point-in-time view of every product the bazaar currently lists.
///
/// Snapshots are plain data: the cost engine evaluates against one without
/// performing any I/O of its own, so pricing stays deterministic for a fixed
/// snapshot.
#[derive(Debug, Clone, Default)]
pub struct MarketSnapshot {
    products: AHashMap<String, ProductQuote>,
}

impl MarketSnapshot {
    /// A snapshot listing no products at all. Every lookup degrades to a
    /// zero contribution, which is the fallback when the bazaar is
    /// unreachable.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn insert_quote(&mut self, item_id: impl Into<String>, quote: ProductQuote) {
        self.products.insert(item_id.into(), quote);
    }

    /// Looks up the quote for a bazaar item id. `None` means the bazaar does
    /// not list the item.
    pub fn quote(&self, item_id: &str) -> Option<&ProductQuote> {
        self.products.get(item_id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
