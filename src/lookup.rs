use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;

use crate::models::ItemRecord;

fn non_alphanumeric() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new("[^a-z0-9]").expect("valid regex"))
}

fn dmr_spellings() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new("(darkmatterrifle|dmr)(mark|mk)?(ii|2)").expect("valid regex"))
}

// Collapses a free-text item name into the form used for matching:
// lower-cased, stripped of everything but letters and digits, with the
// known alternate spellings unified.
pub fn normalize_name(name: &str) -> String {
    let result = name.to_lowercase();
    let result = non_alphanumeric().replace_all(&result, "");
    let result = dmr_spellings().replace_all(&result, "dmrmarkii");
    let result = result.replace("anonmask", "anonymousmask");
    let result = result.replace("armour", "armor");
    let result = result.replace("bunny", "rabbit");
    result.replace("golden", "gold")
}

// Fuzzy lookup over the design snapshot. Exact normalized matches come
// first, then names merely containing the query; both groups are ordered
// by display name so results are stable across refreshes. Zero matches is
// a normal outcome, not an error.
pub fn resolve_item_ids(
    items: &HashMap<String, ItemRecord>,
    name: &str,
    first_only: bool,
) -> Vec<String> {
    let query = normalize_name(name);
    if query.is_empty() {
        return Vec::new();
    }

    let mut exact: Vec<&ItemRecord> = Vec::new();
    let mut partial: Vec<&ItemRecord> = Vec::new();
    for record in items.values() {
        let normalized = normalize_name(&record.name);
        if normalized == query {
            exact.push(record);
        } else if normalized.contains(&query) {
            partial.push(record);
        }
    }

    exact.sort_by(|a, b| a.name.cmp(&b.name));
    partial.sort_by(|a, b| a.name.cmp(&b.name));

    let mut ids: Vec<String> = exact
        .into_iter()
        .chain(partial)
        .map(|record| record.id.clone())
        .collect();
    if first_only {
        ids.truncate(1);
    }
    ids
}
