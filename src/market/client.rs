use super::{MarketSnapshot, ProductQuote};
use crate::error::MarketError;
use ahash::AHashMap;
use serde::Deserialize;

/// The public bazaar endpoint. No API key required.
pub const BAZAAR_URL: &str = "https://api.hypixel.net/skyblock/bazaar";

// --- Payload Deserialization Structs ---
// These match the bazaar response shape and are only used for decoding.

#[derive(Deserialize)]
struct BazaarResponse {
    products: AHashMap<String, BazaarProduct>,
}

#[derive(Deserialize)]
struct BazaarProduct {
    #[serde(default)]
    sell_summary: Vec<SellOrder>,
}

#[derive(Deserialize)]
struct SellOrder {
    #[serde(rename = "pricePerUnit")]
    price_per_unit: f64,
}

/// Decodes a raw bazaar payload into a [`MarketSnapshot`].
///
/// The best sell price for a product is the first `sell_summary` entry (the
/// API lists sell orders cheapest first). A missing or empty `sell_summary`
/// yields a quote with no active orders.
///
/// Split out from the HTTP call so the decode path is testable offline.
pub fn parse_products(body: &str) -> Result<MarketSnapshot, MarketError> {
    let response: BazaarResponse = serde_json::from_str(body)?;
    let mut snapshot = MarketSnapshot::empty();
    for (item_id, product) in response.products {
        let quote = ProductQuote {
            best_sell_unit_price: product.sell_summary.first().map(|order| order.price_per_unit),
        };
        snapshot.insert_quote(item_id, quote);
    }
    Ok(snapshot)
}

/// Blocking HTTP client for the bazaar endpoint.
pub struct BazaarClient {
    http: reqwest::blocking::Client,
    base_url: String,
}

impl BazaarClient {
    pub fn new() -> Self {
        Self::with_base_url(BAZAAR_URL)
    }

    /// Points the client at a different endpoint, e.g. a local fixture
    /// server.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::blocking::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Fetches the current sell-order quote for every bazaar product.
    pub fn fetch_products(&self) -> Result<MarketSnapshot, MarketError> {
        let response = self.http.get(&self.base_url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(MarketError::Status {
                code: status.as_u16(),
            });
        }
        let snapshot = parse_products(&response.text()?)?;
        log::debug!("Fetched {} bazaar products", snapshot.len());
        Ok(snapshot)
    }
}

impl Default for BazaarClient {
    fn default() -> Self {
        Self::new()
    }
}
