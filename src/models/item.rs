use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use crate::errors::{BotError, Result};

pub const ITEM_DESIGN_KEY: &str = "ItemDesignId";
pub const ITEM_DESIGN_NAME: &str = "ItemDesignName";

// Bit 0 of the Flags attribute marks an item as sellable on the market.
const FLAG_SELLABLE: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemRecord {
    pub id: String,
    pub name: String,
    pub rarity: String,
    pub item_type: String,
    pub item_subtype: String,
    pub enhancement_type: String,
    pub enhancement_value: f64,
    pub fair_price: i64,
    pub market_price: i64,
    pub flags: u32,
    pub ingredients: String,
}

impl ItemRecord {
    pub fn can_be_sold(&self) -> bool {
        self.flags & FLAG_SELLABLE != 0
    }

    pub fn is_equipment(&self) -> bool {
        self.item_type.eq_ignore_ascii_case("Equipment")
    }

    // The sheet encodes slots as e.g. "EquipmentHead"; the bare slot name
    // is what gets shown to users.
    pub fn equipment_slot(&self) -> Option<&str> {
        if !self.is_equipment() {
            return None;
        }
        self.item_subtype.strip_prefix("Equipment")
    }

    pub fn has_bonus(&self) -> bool {
        !self.enhancement_type.eq_ignore_ascii_case("None")
    }

    // Enhancement values come through the feed as decimal strings, but most
    // of them are whole numbers and the bot prints those without a fraction.
    pub fn enhancement_display(&self) -> String {
        if self.enhancement_value.fract() == 0.0 {
            format!("{}", self.enhancement_value as i64)
        } else {
            format!("{}", self.enhancement_value)
        }
    }
}

impl TryFrom<&HashMap<String, String>> for ItemRecord {
    type Error = BotError;

    fn try_from(attributes: &HashMap<String, String>) -> Result<Self> {
        Ok(ItemRecord {
            id: required(attributes, ITEM_DESIGN_KEY)?.to_string(),
            name: required(attributes, ITEM_DESIGN_NAME)?.to_string(),
            rarity: required(attributes, "Rarity")?.to_string(),
            item_type: required(attributes, "ItemType")?.to_string(),
            item_subtype: required(attributes, "ItemSubType")?.to_string(),
            enhancement_type: required(attributes, "EnhancementType")?.to_string(),
            enhancement_value: numeric(attributes, "EnhancementValue")?,
            fair_price: numeric(attributes, "FairPrice")?,
            market_price: numeric(attributes, "MarketPrice")?,
            flags: numeric(attributes, "Flags")?,
            ingredients: attributes
                .get("Ingredients")
                .cloned()
                .unwrap_or_default(),
        })
    }
}

fn required<'a>(attributes: &'a HashMap<String, String>, key: &str) -> Result<&'a str> {
    attributes
        .get(key)
        .map(String::as_str)
        .ok_or_else(|| BotError::DataError(format!("item design is missing '{}'", key)))
}

fn numeric<T>(attributes: &HashMap<String, String>, key: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    required(attributes, key)?.parse().map_err(|e| {
        BotError::DataError(format!("item design has a non-numeric '{}': {}", key, e))
    })
}
