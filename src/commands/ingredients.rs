use std::collections::HashMap;

use crate::commands::{find_records, BotReply, MARKET_NOTE};
use crate::crafting::{build_ingredient_tree, flatten_ingredient_tree, FlattenedLevel, NegligibleFilter};
use crate::errors::{BotError, Result};
use crate::models::ItemRecord;

// Malformed recipe data propagates as an error here; everything user-facing
// (unknown name, uncraftable item) lands in the reply instead.
pub fn get_ingredients_for_item(
    items: &HashMap<String, ItemRecord>,
    name: &str,
) -> Result<BotReply> {
    if name.trim().is_empty() {
        return Ok(BotReply::failure(vec![
            "You must specify an item name!".to_string(),
        ]));
    }

    let matches = find_records(items, name, true);
    let Some(record) = matches.first() else {
        return Ok(BotReply::not_found(name));
    };

    let tree = build_ingredient_tree(&record.ingredients, items, 1, &NegligibleFilter::default())?;
    let mut levels = flatten_ingredient_tree(&tree);
    levels.retain(|level| !level.is_empty());

    Ok(BotReply::success(format_ingredient_levels(
        &record.name,
        &levels,
        items,
    )?))
}

fn format_ingredient_levels(
    item_name: &str,
    levels: &[FlattenedLevel],
    items: &HashMap<String, ItemRecord>,
) -> Result<Vec<String>> {
    let mut lines = vec![format!("**Ingredients for {}**", item_name)];

    if levels.is_empty() {
        lines.push("This item can't be crafted".to_string());
        return Ok(lines);
    }

    for level in levels {
        let mut level_costs: i64 = 0;
        for (item_id, amount) in level {
            let record = items
                .get(item_id)
                .ok_or_else(|| BotError::UnknownItem(item_id.clone()))?;
            let price_sum = record.market_price * *amount as i64;
            level_costs += price_sum;
            lines.push(format!(
                "{} x {} ({} bux ea): {} bux",
                amount, record.name, record.market_price, price_sum
            ));
        }
        lines.push(format!("Crafting costs: {} bux", level_costs));
        lines.push(String::new());
    }

    lines.push(MARKET_NOTE.to_string());
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, name: &str, ingredients: &str, market_price: i64) -> ItemRecord {
        ItemRecord {
            id: id.to_string(),
            name: name.to_string(),
            rarity: "Common".to_string(),
            item_type: "Mineral".to_string(),
            item_subtype: "None".to_string(),
            enhancement_type: "None".to_string(),
            enhancement_value: 0.0,
            fair_price: 1,
            market_price,
            flags: 1,
            ingredients: ingredients.to_string(),
        }
    }

    fn snapshot(records: Vec<ItemRecord>) -> HashMap<String, ItemRecord> {
        records
            .into_iter()
            .map(|record| (record.id.clone(), record))
            .collect()
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let items = snapshot(vec![]);
        let reply = get_ingredients_for_item(&items, "  ").unwrap();
        assert!(!reply.success);
        assert_eq!(reply.lines, vec!["You must specify an item name!".to_string()]);
    }

    #[test]
    fn test_uncraftable_item() {
        let items = snapshot(vec![record("1", "Iron Ore", "", 10)]);
        let reply = get_ingredients_for_item(&items, "iron ore").unwrap();
        assert!(reply.success);
        assert_eq!(
            reply.lines,
            vec![
                "**Ingredients for Iron Ore**".to_string(),
                "This item can't be crafted".to_string(),
            ]
        );
    }

    #[test]
    fn test_levels_with_cost_rollups() {
        // Blade = 2 Ingot + 1 Hilt; Ingot = 3 Ore.
        let items = snapshot(vec![
            record("1", "Blade", "2x2|3x1", 100),
            record("2", "Ingot", "4x3", 20),
            record("3", "Hilt", "", 5),
            record("4", "Ore", "", 1),
        ]);
        let reply = get_ingredients_for_item(&items, "blade").unwrap();
        assert!(reply.success);
        assert_eq!(
            reply.lines,
            vec![
                "**Ingredients for Blade**".to_string(),
                "2 x Ingot (20 bux ea): 40 bux".to_string(),
                "1 x Hilt (5 bux ea): 5 bux".to_string(),
                "Crafting costs: 45 bux".to_string(),
                String::new(),
                "1 x Hilt (5 bux ea): 5 bux".to_string(),
                "6 x Ore (1 bux ea): 6 bux".to_string(),
                "Crafting costs: 11 bux".to_string(),
                String::new(),
                MARKET_NOTE.to_string(),
            ]
        );
    }

    #[test]
    fn test_malformed_recipe_propagates_as_error() {
        let items = snapshot(vec![
            record("1", "Blade", "2xtwo", 100),
            record("2", "Ingot", "", 20),
        ]);
        let result = get_ingredients_for_item(&items, "blade");
        assert!(matches!(result, Err(BotError::DataError(_))));
    }

    #[test]
    fn test_not_found_reply() {
        let items = snapshot(vec![record("1", "Blade", "", 100)]);
        let reply = get_ingredients_for_item(&items, "axe").unwrap();
        assert!(!reply.success);
    }
}
