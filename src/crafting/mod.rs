pub mod flatten;
pub mod tree;

pub use flatten::{flatten_ingredient_tree, FlattenedLevel};
pub use tree::{build_ingredient_tree, IngredientNode, NegligibleFilter};
