//! Affordability: how many crafts a purse can fund, and how the raw
//! materials break down into bazaar purchase orders.

use crate::recipe::Recipe;
use std::fmt;

/// Maximum quantity a single bazaar buy order can carry.
pub const BATCH_SIZE: u64 = 71_680;

/// A required quantity expressed as whole buy orders plus a partial one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchPlan {
    pub full_batches: u64,
    pub remainder: u64,
}

impl BatchPlan {
    /// Splits a total quantity against [`BATCH_SIZE`].
    pub fn for_quantity(total: u64) -> Self {
        Self {
            full_batches: total / BATCH_SIZE,
            remainder: total % BATCH_SIZE,
        }
    }

    /// The quantity this plan was built from.
    pub fn total(&self) -> u64 {
        self.full_batches * BATCH_SIZE + self.remainder
    }
}

impl fmt::Display for BatchPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} full orders {} extra", self.full_batches, self.remainder)
    }
}

/// Number of complete crafts the purse can pay for at the given unit cost.
///
/// A non-positive unit cost yields zero crafts instead of dividing by it.
pub fn craft_count(purse: u64, unit_cost: f64) -> u64 {
    if unit_cost <= 0.0 {
        return 0;
    }
    (purse as f64 / unit_cost).floor() as u64
}

/// Converts a purse balance into per-item purchase plans for `recipe`.
///
/// Only the recipe's own direct item ingredients are reported, in ingredient
/// order; sub-recipes are priced into the unit cost but not expanded into
/// orders. A free recipe (unit cost 0) yields no plans at all, and a purse
/// smaller than the unit cost yields all-zero plans, which is valid output.
pub fn plan_purchases(purse: u64, unit_cost: f64, recipe: &Recipe) -> Vec<(String, BatchPlan)> {
    if unit_cost == 0.0 {
        return Vec::new();
    }
    let crafts = craft_count(purse, unit_cost);
    recipe
        .items()
        .iter()
        .map(|ingredient| {
            let needed = crafts * u64::from(ingredient.quantity);
            (ingredient.item_id.clone(), BatchPlan::for_quantity(needed))
        })
        .collect()
}
