use std::collections::HashMap;

use crate::errors::{BotError, Result};
use crate::models::ItemRecord;

// Names matching any of these markers are transient currencies, not
// craftable ingredients, and are dropped from recipe trees.
const DEFAULT_NEGLIGIBLE_MARKERS: &[&str] = &["void particle", " fragment"];

#[derive(Debug, Clone, PartialEq)]
pub struct IngredientNode {
    pub item_id: String,
    pub amount: u64,
    pub children: Vec<IngredientNode>,
}

pub struct NegligibleFilter {
    markers: Vec<String>,
}

impl NegligibleFilter {
    pub fn new(markers: &[&str]) -> Self {
        Self {
            markers: markers.iter().map(|m| m.to_lowercase()).collect(),
        }
    }

    pub fn is_negligible(&self, name: &str) -> bool {
        let name = name.to_lowercase();
        self.markers.iter().any(|marker| name.contains(marker))
    }
}

impl Default for NegligibleFilter {
    fn default() -> Self {
        Self::new(DEFAULT_NEGLIGIBLE_MARKERS)
    }
}

// Expands a raw ingredients string ("<id>x<amount>" entries joined by '|')
// into a recipe tree. Amounts are cumulative: each node carries its per-craft
// quantity multiplied by every quantity above it. Recursion depth is bounded
// by the game data, which keeps recipe chains shallow.
pub fn build_ingredient_tree(
    ingredients: &str,
    items: &HashMap<String, ItemRecord>,
    parent_amount: u64,
    filter: &NegligibleFilter,
) -> Result<Vec<IngredientNode>> {
    if ingredients.is_empty() {
        return Ok(Vec::new());
    }

    let mut result = Vec::new();
    for entry in ingredients.split('|') {
        let (item_id, raw_amount) = entry.split_once('x').ok_or_else(|| {
            BotError::DataError(format!(
                "ingredient entry '{}' is missing the amount separator",
                entry
            ))
        })?;
        let amount: u64 = raw_amount.parse().map_err(|_| {
            BotError::DataError(format!("ingredient entry '{}' has a non-numeric amount", entry))
        })?;
        let record = items
            .get(item_id)
            .ok_or_else(|| BotError::UnknownItem(item_id.to_string()))?;

        if filter.is_negligible(&record.name) {
            continue;
        }

        let combined_amount = amount * parent_amount;
        let children = build_ingredient_tree(&record.ingredients, items, combined_amount, filter)?;
        result.push(IngredientNode {
            item_id: item_id.to_string(),
            amount: combined_amount,
            children,
        });
    }

    Ok(result)
}
