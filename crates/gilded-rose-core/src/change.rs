//! Before/after record of one item's daily update.

use crate::category::Category;
use crate::item::Item;
use serde::{Deserialize, Serialize};

/// What a single update did to one item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemChange {
    /// Item name at the time of the update.
    pub name: String,

    /// Rule set that was applied.
    pub category: Category,

    /// `sell_in` before and after the update.
    pub sell_in: (i32, i32),

    /// `quality` before and after the update.
    pub quality: (i32, i32),
}

impl ItemChange {
    /// Pair an item's state from before an update with its current state.
    #[must_use]
    pub fn between(before: &Item, after: &Item) -> Self {
        Self {
            name: after.name.clone(),
            category: after.category(),
            sell_in: (before.sell_in, after.sell_in),
            quality: (before.quality, after.quality),
        }
    }

    /// Signed change in quality.
    #[must_use]
    pub const fn quality_delta(&self) -> i32 {
        self.quality.1.saturating_sub(self.quality.0)
    }

    /// Whether the item is past its sell-by date after the update.
    #[must_use]
    pub const fn expired(&self) -> bool {
        self.sell_in.1 < 0
    }
}
