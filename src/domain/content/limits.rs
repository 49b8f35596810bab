//! Capacity policy for display categories.

use serde::{Deserialize, Serialize};

use super::SlotCategory;

/// Injected, immutable capacity policy for the display categories.
///
/// The production policy is fixed at highlight 3, normal 9, grid 9
/// (total 21); other values exist only for tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryLimits {
    highlight: usize,
    normal: usize,
    grid: usize,
}

impl CategoryLimits {
    /// Creates a custom capacity policy.
    pub fn new(highlight: usize, normal: usize, grid: usize) -> Self {
        Self {
            highlight,
            normal,
            grid,
        }
    }

    /// Returns the capacity for a category.
    pub fn limit_for(&self, category: SlotCategory) -> usize {
        match category {
            SlotCategory::Highlight => self.highlight,
            SlotCategory::Normal => self.normal,
            SlotCategory::Grid => self.grid,
        }
    }

    /// Returns the total capacity across all categories.
    pub fn total(&self) -> usize {
        self.highlight + self.normal + self.grid
    }
}

impl Default for CategoryLimits {
    fn default() -> Self {
        Self {
            highlight: 3,
            normal: 9,
            grid: 9,
        }
    }
}
