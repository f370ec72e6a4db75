pub mod item_store;
pub mod sheet;

pub use item_store::{initialize_item_store, ItemDataStore, CACHE_MAX_AGE, DEFAULT_CACHE_PATH};
pub use sheet::convert_design_sheet;
