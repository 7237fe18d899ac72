//! The inn's stock inventory.

use crate::category::{AGED_BRIE, BACKSTAGE_PASSES, SULFURAS};
use crate::item::Item;

/// Items the inn starts the day with.
#[must_use]
pub fn stock_inventory() -> Vec<Item> {
    vec![
        Item::new("+5 Dexterity Vest", 10, 20),
        Item::new(AGED_BRIE, 2, 0),
        Item::new("Elixir of the Mongoose", 5, 7),
        Item::new(SULFURAS, 0, 80),
        Item::new(SULFURAS, -1, 80),
        Item::new(BACKSTAGE_PASSES, 15, 20),
        Item::new(BACKSTAGE_PASSES, 10, 49),
        Item::new(BACKSTAGE_PASSES, 5, 49),
        // not a recognized category yet, so it degrades like any other item
        Item::new("Conjured Mana Cake", 3, 6),
    ]
}
