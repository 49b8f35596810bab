//! Recipient value objects.

use serde::{Deserialize, Serialize};

/// One addressable newsletter recipient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipient {
    /// Email address.
    pub address: String,
    /// Group the recipient belongs to.
    pub group: String,
}

impl Recipient {
    pub fn new(address: impl Into<String>, group: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            group: group.into(),
        }
    }
}

/// Scope filter applied when resolving the recipient set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RecipientFilter {
    /// Restrict to one group, if set.
    pub group: Option<String>,
    /// Hard cap on the resolved set, if set.
    pub cap: Option<usize>,
}

impl RecipientFilter {
    /// Filter matching every recipient.
    pub fn all() -> Self {
        Self::default()
    }

    /// Filter scoped to one group.
    pub fn for_group(group: impl Into<String>) -> Self {
        Self {
            group: Some(group.into()),
            cap: None,
        }
    }

    /// Adds a hard cap to the filter.
    pub fn with_cap(mut self, cap: usize) -> Self {
        self.cap = Some(cap);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_builders_compose() {
        let filter = RecipientFilter::for_group("weekly").with_cap(100);
        assert_eq!(filter.group.as_deref(), Some("weekly"));
        assert_eq!(filter.cap, Some(100));
    }
}
