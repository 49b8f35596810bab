//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, enums, errors)
//! - `content` - Editorial items, category limits, and slot allocation
//! - `newsletter` - Newsletter aggregate, lifecycle, and delivery statistics
//! - `delivery` - Batch planning values and aggregate send results

pub mod content;
pub mod delivery;
pub mod foundation;
pub mod newsletter;
