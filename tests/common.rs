//! Common test utilities for building recipe books and market snapshots.
use satei::market::{MarketSnapshot, ProductQuote};
use satei::recipe::{Recipe, RecipeBook, RecipeId};

/// Builds a snapshot quoting each `(item, best_sell)` pair with active
/// orders.
#[allow(dead_code)]
pub fn market_with(quotes: &[(&str, f64)]) -> MarketSnapshot {
    let mut snapshot = MarketSnapshot::empty();
    for (item_id, best_sell) in quotes {
        snapshot.insert_quote(
            *item_id,
            ProductQuote {
                best_sell_unit_price: Some(*best_sell),
            },
        );
    }
    snapshot
}

/// A snapshot that lists `item_id` but with no active sell orders.
#[allow(dead_code)]
pub fn market_without_orders(item_id: &str) -> MarketSnapshot {
    let mut snapshot = MarketSnapshot::empty();
    snapshot.insert_quote(
        item_id,
        ProductQuote {
            best_sell_unit_price: None,
        },
    );
    snapshot
}

/// A book holding a single "Widget" recipe needing 10 RAW_ORE per craft.
#[allow(dead_code)]
pub fn widget_book() -> (RecipeBook, RecipeId) {
    let mut book = RecipeBook::new();
    let mut widget = Recipe::new("Widget");
    widget.add_item("RAW_ORE", 10);
    let id = book.insert(widget);
    (book, id)
}

/// A book where "Widget" nests two "Gear" crafts next to one raw item.
///
/// With `IRON_PLATE` at 49.9 and `RAW_ORE` at 29.9, the gear appraises to
/// 50.0 and the widget to 130.0.
#[allow(dead_code)]
pub fn nested_book() -> (RecipeBook, RecipeId, RecipeId) {
    let mut book = RecipeBook::new();

    let mut gear = Recipe::new("Gear");
    gear.add_item("IRON_PLATE", 1);
    let gear_id = book.insert(gear);

    let mut widget = Recipe::new("Widget");
    widget.add_item("RAW_ORE", 1);
    widget.add_sub_recipe(gear_id, 2);
    let widget_id = book.insert(widget);

    (book, widget_id, gear_id)
}
