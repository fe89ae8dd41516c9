//! Recursive market-cost evaluation over recipe trees.

use crate::error::PricingError;
use crate::market::MarketSnapshot;
use crate::recipe::{RecipeBook, RecipeId};
use itertools::Itertools;
use std::fmt;

/// Flat surcharge added on top of the best sell order before rounding, so an
/// instant buy placed slightly above the cheapest offer still fills.
pub const SELL_SURCHARGE: f64 = 0.1;

/// Rounds half-up to one decimal place.
///
/// This is applied at three points: the adjusted unit price, each item
/// subtotal, and each sub-recipe subtotal. Totals therefore compound the
/// per-stage rounding rather than rounding once at the end.
pub fn round_dp1(value: f64) -> f64 {
    (value * 10.0 + 0.5).floor() / 10.0
}

/// A degraded price lookup. Warnings never abort an appraisal; the affected
/// ingredient contributes nothing to the total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PriceWarning {
    /// The bazaar does not list the item at all.
    UnknownItem { item_id: String },
    /// The item is listed but currently has no active sell orders.
    NoSellOrders { item_id: String },
}

impl fmt::Display for PriceWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriceWarning::UnknownItem { item_id } => {
                write!(f, "Item {} not found in the bazaar", item_id)
            }
            PriceWarning::NoSellOrders { item_id } => {
                write!(f, "No sell orders for {}", item_id)
            }
        }
    }
}

/// The result of appraising one recipe against a market snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct Appraisal {
    /// Total market cost of one craft of the appraised recipe.
    pub total: f64,
    /// Cost of every recipe node the recursion evaluated, in completion
    /// order; the appraised recipe itself is the last entry. A node shared
    /// through several sub-recipe edges appears once per visit.
    pub node_costs: Vec<(RecipeId, f64)>,
    /// Lookups that degraded to a zero contribution.
    pub warnings: Vec<PriceWarning>,
}

impl Appraisal {
    /// Renders all warnings as a single comma-separated line, or `None` when
    /// every lookup succeeded.
    pub fn warning_summary(&self) -> Option<String> {
        if self.warnings.is_empty() {
            return None;
        }
        Some(self.warnings.iter().map(|w| w.to_string()).join(", "))
    }
}

/// Pure recursive cost engine.
///
/// Prices recipes against an already-fetched [`MarketSnapshot`]; evaluation
/// itself performs no I/O, so results are deterministic for a fixed snapshot
/// and directly unit-testable.
pub struct CostEngine<'a> {
    book: &'a RecipeBook,
    market: &'a MarketSnapshot,
}

impl<'a> CostEngine<'a> {
    pub fn new(book: &'a RecipeBook, market: &'a MarketSnapshot) -> Self {
        Self { book, market }
    }

    /// Computes the market cost of one craft of `id`.
    ///
    /// Unknown items and order-less products contribute zero and are
    /// reported as warnings. A recipe that reaches itself through its
    /// sub-recipe edges fails with [`PricingError::CyclicRecipe`] instead of
    /// recursing without bound; diamond-shaped sharing of a sub-recipe is
    /// fine.
    pub fn appraise(&self, id: RecipeId) -> Result<Appraisal, PricingError> {
        let mut appraisal = Appraisal {
            total: 0.0,
            node_costs: Vec::new(),
            warnings: Vec::new(),
        };
        let mut path = Vec::new();
        let total = self.eval(id, &mut path, &mut appraisal)?;
        appraisal.total = total;
        Ok(appraisal)
    }

    fn eval(
        &self,
        id: RecipeId,
        path: &mut Vec<RecipeId>,
        out: &mut Appraisal,
    ) -> Result<f64, PricingError> {
        let recipe = self.book.get(id).ok_or(PricingError::UnknownRecipe { id })?;
        if path.contains(&id) {
            return Err(PricingError::CyclicRecipe {
                name: recipe.name().to_string(),
            });
        }
        path.push(id);

        let mut sum = 0.0;
        for ingredient in recipe.items() {
            match self.market.quote(&ingredient.item_id) {
                None => {
                    log::warn!("Item {} not found in the bazaar", ingredient.item_id);
                    out.warnings.push(PriceWarning::UnknownItem {
                        item_id: ingredient.item_id.clone(),
                    });
                }
                Some(quote) => match quote.best_sell_unit_price {
                    None => {
                        log::warn!("No sell orders for {}", ingredient.item_id);
                        out.warnings.push(PriceWarning::NoSellOrders {
                            item_id: ingredient.item_id.clone(),
                        });
                    }
                    Some(best_sell) => {
                        let unit = round_dp1(best_sell + SELL_SURCHARGE);
                        sum += round_dp1(unit * f64::from(ingredient.quantity));
                    }
                },
            }
        }

        for sub in recipe.sub_recipes() {
            let sub_cost = self.eval(sub.recipe, path, out)?;
            sum += round_dp1(sub_cost * f64::from(sub.quantity));
        }

        path.pop();
        out.node_costs.push((id, sum));
        Ok(sum)
    }
}

/// Appraises `id` and appends the result to the price history of every
/// recipe node the evaluation visited, stamped with the current UTC time.
///
/// This is the impure wrapper around [`CostEngine`] that menu flows call.
pub fn appraise_and_record(
    book: &mut RecipeBook,
    id: RecipeId,
    market: &MarketSnapshot,
) -> Result<Appraisal, PricingError> {
    let appraisal = CostEngine::new(book, market).appraise(id)?;
    let timestamp_ms = chrono::Utc::now().timestamp_millis();
    for &(node, cost) in &appraisal.node_costs {
        if let Some(recipe) = book.get_mut(node) {
            recipe.record_price(timestamp_ms, cost);
        }
    }
    Ok(appraisal)
}
