//! Allocation-specific error types.

use crate::domain::foundation::{ContentItemId, DomainError, ErrorCode};

/// Errors raised by the slot allocator.
///
/// Allocation failures are reported, never retried; the caller must
/// re-select items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllocationError {
    /// A selected item is not published.
    ContentNotEligible { id: ContentItemId },
    /// The selection order names an item that was not supplied.
    UnknownItem { id: ContentItemId },
    /// Neither the preferred category nor any fallback had room.
    ///
    /// Once one item cannot be placed every category is full, so the
    /// error names all items left without a slot.
    CapacityExceeded {
        rejected: Vec<ContentItemId>,
        capacity: usize,
    },
}

impl AllocationError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AllocationError::ContentNotEligible { .. } => ErrorCode::ContentNotEligible,
            AllocationError::UnknownItem { .. } => ErrorCode::ContentItemNotFound,
            AllocationError::CapacityExceeded { .. } => ErrorCode::CapacityExceeded,
        }
    }

    pub fn message(&self) -> String {
        match self {
            AllocationError::ContentNotEligible { id } => {
                format!("Content item {} is not published", id)
            }
            AllocationError::UnknownItem { id } => {
                format!("Selection references unknown content item {}", id)
            }
            AllocationError::CapacityExceeded { rejected, capacity } => format!(
                "{} content item(s) exceed the total capacity of {}",
                rejected.len(),
                capacity
            ),
        }
    }
}

impl std::fmt::Display for AllocationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for AllocationError {}

impl From<AllocationError> for DomainError {
    fn from(err: AllocationError) -> Self {
        DomainError::new(err.code(), err.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_exceeded_reports_count_and_capacity() {
        let err = AllocationError::CapacityExceeded {
            rejected: vec![ContentItemId::new(), ContentItemId::new()],
            capacity: 21,
        };
        assert!(err.message().contains("2 content item(s)"));
        assert!(err.message().contains("21"));
        assert_eq!(err.code(), ErrorCode::CapacityExceeded);
    }

    #[test]
    fn converts_to_domain_error_with_matching_code() {
        let err: DomainError = AllocationError::ContentNotEligible {
            id: ContentItemId::new(),
        }
        .into();
        assert_eq!(err.code, ErrorCode::ContentNotEligible);
    }
}
