//! Display slot categories for newsletter content.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three fixed display positions in a newsletter issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotCategory {
    /// Lead stories at the top of the issue.
    Highlight,
    /// Standard article listing.
    Normal,
    /// Compact image grid at the bottom.
    Grid,
}

impl SlotCategory {
    /// All categories in display order.
    pub const ALL: [SlotCategory; 3] = [
        SlotCategory::Highlight,
        SlotCategory::Normal,
        SlotCategory::Grid,
    ];

    /// Overflow targets tried, in priority order, when this category is full.
    pub fn fallback_order(&self) -> [SlotCategory; 2] {
        match self {
            SlotCategory::Highlight => [SlotCategory::Normal, SlotCategory::Grid],
            SlotCategory::Normal => [SlotCategory::Grid, SlotCategory::Highlight],
            SlotCategory::Grid => [SlotCategory::Normal, SlotCategory::Highlight],
        }
    }
}

impl fmt::Display for SlotCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SlotCategory::Highlight => "highlight",
            SlotCategory::Normal => "normal",
            SlotCategory::Grid => "grid",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_order_matches_cascade() {
        assert_eq!(
            SlotCategory::Highlight.fallback_order(),
            [SlotCategory::Normal, SlotCategory::Grid]
        );
        assert_eq!(
            SlotCategory::Normal.fallback_order(),
            [SlotCategory::Grid, SlotCategory::Highlight]
        );
        assert_eq!(
            SlotCategory::Grid.fallback_order(),
            [SlotCategory::Normal, SlotCategory::Highlight]
        );
    }

    #[test]
    fn fallback_never_includes_self() {
        for category in SlotCategory::ALL {
            assert!(!category.fallback_order().contains(&category));
        }
    }

    #[test]
    fn serializes_to_snake_case() {
        assert_eq!(
            serde_json::to_string(&SlotCategory::Highlight).unwrap(),
            "\"highlight\""
        );
    }
}
