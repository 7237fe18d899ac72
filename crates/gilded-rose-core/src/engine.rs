//! Daily update rules.
//!
//! Each call advances every item by exactly one day. Quality thresholds are
//! read from `sell_in` before it is counted down; the expiry rule is checked
//! after.

use crate::category::Category;
use crate::change::ItemChange;
use crate::item::Item;
use tracing::{debug, trace};

/// Upper bound for quality of every non-legendary item.
pub const MAX_QUALITY: i32 = 50;

/// Lower bound for quality of every non-legendary item.
pub const MIN_QUALITY: i32 = 0;

/// An owned inventory that can be advanced day by day.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GildedRose {
    /// Items on the shelves, in display order.
    pub items: Vec<Item>,
}

impl GildedRose {
    /// Take ownership of an inventory.
    #[must_use]
    pub const fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// Advance every item by one day.
    pub fn update_quality(&mut self) {
        update_quality(&mut self.items);
    }
}

/// Advance every item by one day, in place.
pub fn update_quality(items: &mut [Item]) {
    debug!(items = items.len(), "Updating inventory");
    for item in items {
        update_item(item);
    }
}

/// Advance every item by one day and report what changed.
///
/// Mutates `items` exactly as [`update_quality`] does.
pub fn update_quality_with_changes(items: &mut [Item]) -> Vec<ItemChange> {
    debug!(items = items.len(), "Updating inventory");
    items
        .iter_mut()
        .map(|item| {
            let before = item.clone();
            update_item(item);
            ItemChange::between(&before, item)
        })
        .collect()
}

/// Advance a single item by one day.
pub fn update_item(item: &mut Item) {
    let category = item.category();
    match category {
        Category::Standard => degrade(item),
        Category::Aged => mature(item),
        Category::Legendary => {}
        Category::BackstagePass => approach_concert(item),
    }
    trace!(
        name = %item.name,
        category = %category,
        sell_in = item.sell_in,
        quality = item.quality,
        "Updated item"
    );
}

fn degrade(item: &mut Item) {
    item.quality = lower(item.quality, 1);
    count_down(item);
    if expired(item) {
        item.quality = lower(item.quality, 1);
    }
}

fn mature(item: &mut Item) {
    item.quality = raise(item.quality, 1);
    count_down(item);
    if expired(item) {
        item.quality = raise(item.quality, 1);
    }
}

fn approach_concert(item: &mut Item) {
    let gain = match item.sell_in {
        11.. => 1,
        6..=10 => 2,
        _ => 3,
    };
    item.quality = raise(item.quality, gain);
    count_down(item);
    if expired(item) {
        item.quality = 0;
    }
}

fn count_down(item: &mut Item) {
    if item.category().ages() {
        item.sell_in = item.sell_in.saturating_sub(1);
    }
}

const fn expired(item: &Item) -> bool {
    item.sell_in < 0
}

/// Add to quality, stopping at the cap. A value already above the cap is left alone.
const fn raise(quality: i32, by: i32) -> i32 {
    if quality >= MAX_QUALITY {
        quality
    } else if quality + by > MAX_QUALITY {
        MAX_QUALITY
    } else {
        quality + by
    }
}

/// Subtract from quality, stopping at the floor. A value already below the floor is left alone.
const fn lower(quality: i32, by: i32) -> i32 {
    if quality <= MIN_QUALITY {
        quality
    } else if quality - by < MIN_QUALITY {
        MIN_QUALITY
    } else {
        quality - by
    }
}
