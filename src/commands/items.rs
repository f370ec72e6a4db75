use std::collections::HashMap;

use crate::commands::{find_records, BotReply};
use crate::models::ItemRecord;

const PRICE_NOTE: &str = "**Note:** 1st price is the market price. 2nd price is the fair \
     price. Market prices listed here may not always be accurate due to transfers between \
     alts/friends or other reasons.";

pub fn get_item_details(items: &HashMap<String, ItemRecord>, name: &str) -> BotReply {
    let matches = find_records(items, name, false);
    if matches.is_empty() {
        return BotReply::not_found(name);
    }
    BotReply::success(format_item_details(&matches))
}

pub fn get_item_price(items: &HashMap<String, ItemRecord>, name: &str) -> BotReply {
    let matches = find_records(items, name, false);
    if matches.is_empty() {
        return BotReply::not_found(name);
    }
    BotReply::success(format_item_prices(name, &matches))
}

fn format_item_details(records: &[&ItemRecord]) -> Vec<String> {
    let mut lines = vec!["**Item stats**".to_string()];

    for record in records {
        let bonus = if record.has_bonus() {
            format!(
                "{} +{}",
                record.enhancement_type,
                record.enhancement_display()
            )
        } else {
            record.enhancement_type.clone()
        };
        let slot = record
            .equipment_slot()
            .map(|slot| format!(" ({})", slot))
            .unwrap_or_default();
        lines.push(format!("{} ({}) - {}{}", record.name, record.rarity, bonus, slot));
    }

    lines
}

fn format_item_prices(query: &str, records: &[&ItemRecord]) -> Vec<String> {
    let mut lines = vec![format!("**Item prices matching '{}'**", query), String::new()];

    for record in records {
        let prices = if record.can_be_sold() {
            format!("{} ({})", record.market_price, record.fair_price)
        } else {
            "This item cannot be sold".to_string()
        };
        lines.push(format!("{} ({}) - {}", record.name, record.rarity, prices));
    }

    lines.push(String::new());
    lines.push(PRICE_NOTE.to_string());
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, name: &str, flags: u32) -> ItemRecord {
        ItemRecord {
            id: id.to_string(),
            name: name.to_string(),
            rarity: "Epic".to_string(),
            item_type: "Equipment".to_string(),
            item_subtype: "EquipmentHead".to_string(),
            enhancement_type: "Hp".to_string(),
            enhancement_value: 5.0,
            fair_price: 100,
            market_price: 250,
            flags,
            ingredients: String::new(),
        }
    }

    fn snapshot(records: Vec<ItemRecord>) -> HashMap<String, ItemRecord> {
        records
            .into_iter()
            .map(|record| (record.id.clone(), record))
            .collect()
    }

    #[test]
    fn test_details_line_includes_bonus_and_slot() {
        let items = snapshot(vec![record("1", "Gold Visor", 1)]);
        let reply = get_item_details(&items, "gold visor");
        assert!(reply.success);
        assert_eq!(reply.lines[0], "**Item stats**");
        assert_eq!(reply.lines[1], "Gold Visor (Epic) - Hp +5 (Head)");
    }

    #[test]
    fn test_details_without_bonus_prints_none() {
        let mut plain = record("1", "Iron Ore", 1);
        plain.item_type = "Mineral".to_string();
        plain.enhancement_type = "None".to_string();
        let items = snapshot(vec![plain]);
        let reply = get_item_details(&items, "iron ore");
        assert_eq!(reply.lines[1], "Iron Ore (Epic) - None");
    }

    #[test]
    fn test_details_not_found() {
        let items = snapshot(vec![record("1", "Gold Visor", 1)]);
        let reply = get_item_details(&items, "teapot");
        assert!(!reply.success);
        assert_eq!(
            reply.lines,
            vec!["Could not find an item named **teapot**.".to_string()]
        );
    }

    #[test]
    fn test_price_lists_market_and_fair() {
        let items = snapshot(vec![record("1", "Gold Visor", 1)]);
        let reply = get_item_price(&items, "gold visor");
        assert!(reply.success);
        assert_eq!(reply.lines[2], "Gold Visor (Epic) - 250 (100)");
        assert_eq!(reply.lines.last().unwrap(), &PRICE_NOTE.to_string());
    }

    #[test]
    fn test_unsellable_item_price() {
        let items = snapshot(vec![record("1", "Gold Visor", 0)]);
        let reply = get_item_price(&items, "gold visor");
        assert_eq!(reply.lines[2], "Gold Visor (Epic) - This item cannot be sold");
    }
}
