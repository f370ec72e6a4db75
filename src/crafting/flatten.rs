use std::collections::BTreeMap;

use crate::crafting::tree::IngredientNode;

// One crafting depth tier: aggregated item id -> required amount.
pub type FlattenedLevel = BTreeMap<String, u64>;

// Flattens a recipe tree into per-level totals, level 0 being the direct
// ingredients of the crafted item and the last level its raw base materials.
// Leaves are re-injected into the next level so a finished ingredient keeps
// appearing alongside the sub-ingredients still being broken down.
pub fn flatten_ingredient_tree(tree: &[IngredientNode]) -> Vec<FlattenedLevel> {
    flatten_level(tree.iter().collect())
}

fn flatten_level(nodes: Vec<&IngredientNode>) -> Vec<FlattenedLevel> {
    let mut level = FlattenedLevel::new();
    let mut next: Vec<&IngredientNode> = Vec::new();
    let mut leaves: Vec<&IngredientNode> = Vec::new();

    for &node in &nodes {
        *level.entry(node.item_id.clone()).or_insert(0) += node.amount;
        if node.children.is_empty() {
            leaves.push(node);
        } else {
            next.extend(node.children.iter());
        }
    }

    let mut result = vec![level];
    if leaves.len() != nodes.len() {
        next.append(&mut leaves);
        result.extend(flatten_level(next));
    }
    result
}
