pub mod best;
pub mod ingredients;
pub mod items;

pub use best::get_best_items;
pub use ingredients::get_ingredients_for_item;
pub use items::{get_item_details, get_item_price};

use std::collections::HashMap;

use crate::lookup::resolve_item_ids;
use crate::models::ItemRecord;

pub(crate) const MARKET_NOTE: &str = "**Note**: bux prices listed here may not always be \
     accurate due to transfers between alts/friends or other reasons.";

// What every command hands back to the chat front end: the rendered lines
// and whether the request succeeded. Failures carry their message in the
// lines; nothing user-facing is raised as an error.
#[derive(Debug, Clone, PartialEq)]
pub struct BotReply {
    pub lines: Vec<String>,
    pub success: bool,
}

impl BotReply {
    pub fn success(lines: Vec<String>) -> Self {
        Self {
            lines,
            success: true,
        }
    }

    pub fn failure(lines: Vec<String>) -> Self {
        Self {
            lines,
            success: false,
        }
    }

    pub fn not_found(name: &str) -> Self {
        Self::failure(vec![format!("Could not find an item named **{}**.", name)])
    }
}

pub(crate) fn find_records<'a>(
    items: &'a HashMap<String, ItemRecord>,
    name: &str,
    first_only: bool,
) -> Vec<&'a ItemRecord> {
    resolve_item_ids(items, name, first_only)
        .iter()
        .filter_map(|id| items.get(id))
        .collect()
}
