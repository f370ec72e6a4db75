use std::collections::HashMap;

use crate::commands::{BotReply, MARKET_NOTE};
use crate::models::lookups;
use crate::models::ItemRecord;

pub fn get_best_items(items: &HashMap<String, ItemRecord>, slot: &str, stat: &str) -> BotReply {
    if slot.trim().is_empty() {
        return BotReply::failure(vec![
            "You must specify an equipment slot!".to_string(),
            slots_available(),
        ]);
    }
    if stat.trim().is_empty() {
        return BotReply::failure(vec![
            "You must specify a stat!".to_string(),
            stats_available(),
        ]);
    }
    let Some(slot_filter) = lookups::slot_filter(slot) else {
        return BotReply::failure(vec![
            "The specified equipment slot is not valid!".to_string(),
            slots_available(),
        ]);
    };
    let Some(stat_filter) = lookups::stat_filter(stat) else {
        return BotReply::failure(vec![
            "The specified stat is not valid!".to_string(),
            stats_available(),
        ]);
    };

    let mut matches: Vec<&ItemRecord> = items
        .values()
        .filter(|record| {
            record.is_equipment()
                && record.item_subtype.eq_ignore_ascii_case(slot_filter)
                && record.enhancement_type.eq_ignore_ascii_case(stat_filter)
        })
        .collect();

    if matches.is_empty() {
        return BotReply::failure(vec![format!(
            "Could not find an item for slot **{}** providing bonus **{}**.",
            slot, stat
        )]);
    }

    // Ascending by value with a name tiebreak, so the best item lands last.
    matches.sort_by(|a, b| {
        a.enhancement_value
            .total_cmp(&b.enhancement_value)
            .then_with(|| a.name.cmp(&b.name))
    });

    BotReply::success(format_best_items(slot, stat, &matches))
}

fn slots_available() -> String {
    format!(
        "These are valid values for the _slot_ parameter: {}",
        lookups::slot_names().join(", ")
    )
}

fn stats_available() -> String {
    format!(
        "These are valid values for the _stat_ parameter: {}",
        lookups::stat_names().join(", ")
    )
}

fn format_best_items(slot: &str, stat: &str, records: &[&ItemRecord]) -> Vec<String> {
    let mut lines = vec![format!("**Best {} bonus for {} slot**", stat, slot)];

    for record in records {
        lines.push(format!(
            "{} ({}):  +{} ({} bux)",
            record.name,
            record.rarity,
            record.enhancement_display(),
            record.market_price
        ));
    }

    lines.push(String::new());
    lines.push(MARKET_NOTE.to_string());
    lines
}
