//! Item categories and name-based classification.

use serde::{Deserialize, Serialize};

/// Exact name of the aged cheese that improves with time.
pub const AGED_BRIE: &str = "Aged Brie";

/// Exact name of the legendary item that never changes.
pub const SULFURAS: &str = "Sulfuras, Hand of Ragnaros";

/// Exact name of the concert ticket whose value peaks before the show.
pub const BACKSTAGE_PASSES: &str = "Backstage passes to a TAFKAL80ETC concert";

/// The rule set an item follows when a day passes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Loses quality every day, twice as fast once expired.
    #[default]
    Standard,
    /// Gains quality every day, twice as fast once expired.
    Aged,
    /// Never sold and never degrades.
    Legendary,
    /// Gains quality as the concert nears, worthless afterwards.
    BackstagePass,
}

impl Category {
    /// Classify an item by its exact name.
    ///
    /// Matching is case- and whitespace-sensitive; anything unrecognized is
    /// `Standard`.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            AGED_BRIE => Self::Aged,
            SULFURAS => Self::Legendary,
            BACKSTAGE_PASSES => Self::BackstagePass,
            _ => Self::Standard,
        }
    }

    /// Whether items of this category have their `sell_in` counted down.
    #[must_use]
    pub const fn ages(self) -> bool {
        !matches!(self, Self::Legendary)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Standard => write!(f, "standard"),
            Self::Aged => write!(f, "aged"),
            Self::Legendary => write!(f, "legendary"),
            Self::BackstagePass => write!(f, "backstage-pass"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_names() {
        assert_eq!(Category::from_name("Aged Brie"), Category::Aged);
        assert_eq!(
            Category::from_name("Sulfuras, Hand of Ragnaros"),
            Category::Legendary
        );
        assert_eq!(
            Category::from_name("Backstage passes to a TAFKAL80ETC concert"),
            Category::BackstagePass
        );
    }

    #[test]
    fn test_unmatched_names_are_standard() {
        assert_eq!(Category::from_name("+5 Dexterity Vest"), Category::Standard);
        assert_eq!(Category::from_name("Conjured Mana Cake"), Category::Standard);
        assert_eq!(Category::from_name(""), Category::Standard);

        // exact match only
        assert_eq!(Category::from_name("aged brie"), Category::Standard);
        assert_eq!(Category::from_name(" Aged Brie"), Category::Standard);
        assert_eq!(
            Category::from_name("Backstage passes to a Raging Kobolds concert"),
            Category::Standard
        );
    }

    #[test]
    fn test_only_legendary_does_not_age() {
        assert!(Category::Standard.ages());
        assert!(Category::Aged.ages());
        assert!(Category::BackstagePass.ages());
        assert!(!Category::Legendary.ages());
    }

    #[test]
    fn test_display_and_serde_agree() {
        for category in [
            Category::Standard,
            Category::Aged,
            Category::Legendary,
            Category::BackstagePass,
        ] {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{category}\""));
        }
    }
}
