use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable arena index of a recipe inside a [`RecipeBook`](super::RecipeBook).
///
/// Recipes reference their sub-recipes by id rather than by ownership, so
/// nesting forms an arbitrary graph without self-referential types.
pub type RecipeId = usize;

/// One bazaar-tradeable item consumed directly by a recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemIngredient {
    pub item_id: String,
    pub quantity: u32,
}

/// Another recipe consumed as a component, priced recursively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubRecipeIngredient {
    pub recipe: RecipeId,
    pub quantity: u32,
}

/// A single cost evaluation result, kept as an append-only log on the recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Milliseconds since the UNIX epoch, UTC.
    pub timestamp_ms: i64,
    pub cost: f64,
}

/// A named, possibly nested bill of materials with a computable market cost.
///
/// Quantities are per one craft of the recipe's own output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    name: String,
    items: Vec<ItemIngredient>,
    sub_recipes: Vec<SubRecipeIngredient>,
    price_history: Vec<PricePoint>,
}

impl Recipe {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            items: Vec::new(),
            sub_recipes: Vec::new(),
            price_history: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sets the required quantity of a bazaar item. Adding an item id that is
    /// already present overwrites its quantity instead of accumulating, and
    /// keeps the entry's position.
    pub fn add_item(&mut self, item_id: impl Into<String>, quantity: u32) {
        let item_id = item_id.into();
        if let Some(existing) = self.items.iter_mut().find(|i| i.item_id == item_id) {
            existing.quantity = quantity;
            return;
        }
        self.items.push(ItemIngredient { item_id, quantity });
    }

    /// Sets the required quantity of a nested recipe, with the same
    /// overwrite-on-duplicate semantics as [`add_item`](Self::add_item).
    pub fn add_sub_recipe(&mut self, recipe: RecipeId, quantity: u32) {
        if let Some(existing) = self.sub_recipes.iter_mut().find(|s| s.recipe == recipe) {
            existing.quantity = quantity;
            return;
        }
        self.sub_recipes.push(SubRecipeIngredient { recipe, quantity });
    }

    /// Direct item ingredients, in the order they were added.
    pub fn items(&self) -> &[ItemIngredient] {
        &self.items
    }

    /// Direct sub-recipe ingredients, in the order they were added.
    pub fn sub_recipes(&self) -> &[SubRecipeIngredient] {
        &self.sub_recipes
    }

    pub fn has_ingredients(&self) -> bool {
        !self.items.is_empty() || !self.sub_recipes.is_empty()
    }

    /// Every recorded cost evaluation, oldest first.
    pub fn price_history(&self) -> &[PricePoint] {
        &self.price_history
    }

    pub fn record_price(&mut self, timestamp_ms: i64, cost: f64) {
        self.price_history.push(PricePoint { timestamp_ms, cost });
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} ingredients)",
            self.name,
            self.items.len() + self.sub_recipes.len()
        )
    }
}
