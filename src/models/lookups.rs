// Fixed alias tables for the `best` command parameters. Keys are what users
// type, values are the sheet's ItemSubType / EnhancementType spellings.

pub const EQUIPMENT_SLOTS: &[(&str, &str)] = &[
    ("head", "EquipmentHead"),
    ("body", "EquipmentBody"),
    ("leg", "EquipmentLeg"),
    ("weapon", "EquipmentWeapon"),
    ("accessory", "EquipmentAccessory"),
    ("pet", "EquipmentPet"),
];

pub const STAT_TYPES: &[(&str, &str)] = &[
    ("hp", "Hp"),
    ("attack", "Attack"),
    ("atk", "Attack"),
    ("repair", "Repair"),
    ("rpr", "Repair"),
    ("ability", "Ability"),
    ("abl", "Ability"),
    ("stamina", "Stamina"),
    ("stam", "Stamina"),
    ("engine", "Engine"),
    ("eng", "Engine"),
    ("pilot", "Pilot"),
    ("plt", "Pilot"),
    ("science", "Science"),
    ("sci", "Science"),
    ("weapon", "Weapon"),
    ("wpn", "Weapon"),
    ("fireresistance", "FireResistance"),
    ("fr", "FireResistance"),
];

pub fn slot_filter(slot: &str) -> Option<&'static str> {
    let slot = slot.to_lowercase();
    EQUIPMENT_SLOTS
        .iter()
        .find(|(key, _)| *key == slot)
        .map(|(_, value)| *value)
}

pub fn stat_filter(stat: &str) -> Option<&'static str> {
    let stat = stat.to_lowercase();
    STAT_TYPES
        .iter()
        .find(|(key, _)| *key == stat)
        .map(|(_, value)| *value)
}

pub fn slot_names() -> Vec<&'static str> {
    EQUIPMENT_SLOTS.iter().map(|(key, _)| *key).collect()
}

pub fn stat_names() -> Vec<&'static str> {
    STAT_TYPES.iter().map(|(key, _)| *key).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_filter_is_case_insensitive() {
        assert_eq!(slot_filter("Head"), Some("EquipmentHead"));
        assert_eq!(slot_filter("ACCESSORY"), Some("EquipmentAccessory"));
        assert_eq!(slot_filter("hat"), None);
    }

    #[test]
    fn test_stat_aliases_share_a_filter() {
        assert_eq!(stat_filter("attack"), stat_filter("atk"));
        assert_eq!(stat_filter("sci"), Some("Science"));
        assert_eq!(stat_filter("luck"), None);
    }

    #[test]
    fn test_name_lists_follow_table_order() {
        assert_eq!(slot_names()[0], "head");
        assert!(stat_names().contains(&"stam"));
    }
}
