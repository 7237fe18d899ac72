//! Inventory item model.

use crate::category::Category;
use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A single stock item on the inn's shelves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Item name; also decides which rules apply.
    pub name: String,

    /// Days left to sell the item. Negative once the sell-by date has passed.
    pub sell_in: i32,

    /// How valuable the item is.
    pub quality: i32,
}

impl Item {
    /// Create a new item.
    #[must_use]
    pub fn new(name: impl Into<String>, sell_in: i32, quality: i32) -> Self {
        Self {
            name: name.into(),
            sell_in,
            quality,
        }
    }

    /// Category derived from the item's name.
    #[must_use]
    pub fn category(&self) -> Category {
        Category::from_name(&self.name)
    }
}

impl std::fmt::Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}

impl FromStr for Item {
    type Err = CoreError;

    /// Parse `name,sell_in,quality`.
    ///
    /// The numbers are split off from the right, so names may contain commas.
    fn from_str(input: &str) -> Result<Self> {
        let mut parts = input.rsplitn(3, ',');
        let (Some(quality), Some(sell_in), Some(name)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(CoreError::InvalidItem(format!(
                "expected 'name,sell_in,quality', got '{input}'"
            )));
        };

        let name = name.trim();
        if name.is_empty() {
            return Err(CoreError::InvalidItem(format!("missing name in '{input}'")));
        }

        Ok(Self::new(
            name,
            parse_number("sell_in", sell_in)?,
            parse_number("quality", quality)?,
        ))
    }
}

fn parse_number(field: &'static str, raw: &str) -> Result<i32> {
    let raw = raw.trim();
    raw.parse().map_err(|_| CoreError::InvalidNumber {
        field,
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_item() {
        let item = Item::new("Elixir of the Mongoose", 5, 7);

        assert_eq!(item.name, "Elixir of the Mongoose");
        assert_eq!(item.sell_in, 5);
        assert_eq!(item.quality, 7);
        assert_eq!(item.category(), Category::Standard);
    }

    #[test]
    fn test_display() {
        let item = Item::new("Sulfuras, Hand of Ragnaros", -1, 80);
        assert_eq!(item.to_string(), "Sulfuras, Hand of Ragnaros, -1, 80");
    }

    #[test]
    fn test_parse() {
        let item: Item = "Aged Brie, 2, 0".parse().unwrap();
        assert_eq!(item, Item::new("Aged Brie", 2, 0));
    }

    #[test]
    fn test_parse_name_with_comma() {
        let item: Item = "Sulfuras, Hand of Ragnaros,0,80".parse().unwrap();
        assert_eq!(item, Item::new("Sulfuras, Hand of Ragnaros", 0, 80));
        assert_eq!(item.category(), Category::Legendary);
    }

    #[test]
    fn test_parse_negative_numbers() {
        let item: Item = "Standard Item,-1,4".parse().unwrap();
        assert_eq!(item, Item::new("Standard Item", -1, 4));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            "Aged Brie,2".parse::<Item>(),
            Err(CoreError::InvalidItem(_))
        ));
        assert!(matches!(
            " ,2,0".parse::<Item>(),
            Err(CoreError::InvalidItem(_))
        ));
        assert_eq!(
            "Aged Brie,two,0".parse::<Item>(),
            Err(CoreError::InvalidNumber {
                field: "sell_in",
                value: "two".to_string()
            })
        );
        assert_eq!(
            "Aged Brie,2,".parse::<Item>(),
            Err(CoreError::InvalidNumber {
                field: "quality",
                value: String::new()
            })
        );
    }

    #[test]
    fn test_serialization() {
        let item = Item::new("Aged Brie", 2, 0);
        let json = serde_json::to_string(&item).unwrap();

        assert_eq!(json, r#"{"name":"Aged Brie","sell_in":2,"quality":0}"#);
        assert_eq!(serde_json::from_str::<Item>(&json).unwrap(), item);
    }
}
