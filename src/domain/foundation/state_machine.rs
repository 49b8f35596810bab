//! State machine trait for status enums.
//!
//! Provides a consistent interface for validating state transitions
//! across entity lifecycle statuses.

/// Trait for status enums that represent state machines.
///
/// Implementors define valid state transitions; the aggregate owning the
/// status decides what error to raise when a transition is rejected.
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns true if transition from self to target is valid.
    fn can_transition_to(&self, target: &Self) -> bool;

    /// Returns all valid target states from current state.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Checks if current state is terminal (no valid outgoing transitions).
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum TestStatus {
        Open,
        Closed,
    }

    impl StateMachine for TestStatus {
        fn can_transition_to(&self, target: &Self) -> bool {
            matches!((self, target), (TestStatus::Open, TestStatus::Closed))
        }

        fn valid_transitions(&self) -> Vec<Self> {
            match self {
                TestStatus::Open => vec![TestStatus::Closed],
                TestStatus::Closed => vec![],
            }
        }
    }

    #[test]
    fn is_terminal_follows_valid_transitions() {
        assert!(!TestStatus::Open.is_terminal());
        assert!(TestStatus::Closed.is_terminal());
    }

    #[test]
    fn can_transition_to_is_consistent_with_valid_transitions() {
        for status in [TestStatus::Open, TestStatus::Closed] {
            for target in status.valid_transitions() {
                assert!(status.can_transition_to(&target));
            }
        }
    }
}
