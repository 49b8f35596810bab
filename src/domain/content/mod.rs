//! Content module - Editorial items and slot allocation.
//!
//! Contains the content item value object, the fixed display categories
//! with their capacity policy, and the pure allocation algorithms that
//! place selected items into categories.

mod category;
mod limits;
mod item;
mod allocator;
mod errors;

pub use category::SlotCategory;
pub use limits::CategoryLimits;
pub use item::ContentItem;
pub use allocator::{allocate, recommend, CategorizedContent, RecommendOptions};
pub use errors::AllocationError;
