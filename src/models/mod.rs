// Core modules that contain actual files
pub mod item;
pub mod lookups;

pub use item::{ItemRecord, ITEM_DESIGN_KEY, ITEM_DESIGN_NAME};
