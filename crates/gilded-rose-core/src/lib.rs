//! gilded-rose-core: Item model and daily update rules for the inn's inventory.
//!
//! This crate provides:
//! - `Item`: name, days left to sell, and quality score
//! - `Category`: the rule set an item follows, derived from its exact name
//! - `update_quality`: advances every item by one day in place
//! - `ItemChange`: before/after record of a single item's update

pub mod category;
pub mod change;
pub mod engine;
pub mod error;
pub mod inventory;
pub mod item;

pub use category::Category;
pub use change::ItemChange;
pub use engine::{update_item, update_quality, update_quality_with_changes, GildedRose};
pub use error::{CoreError, Result};
pub use inventory::stock_inventory;
pub use item::Item;
