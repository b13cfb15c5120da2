//! Core State trait for the page's finite state machines.
//!
//! States are plain values; every method here is a pure query used by
//! controllers and views to decide what a state permits.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;

/// Trait for state machine states.
///
/// All methods are pure. A state describes where a machine currently is; it
/// never owns timers or field values.
///
/// # Required Traits
///
/// - `Copy` + `Eq`: states are small tags compared at timer fire time
/// - `Debug`: states must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: states appear in view models and history
///
/// # Example
///
/// ```rust
/// use bodyup_landing::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
/// enum Upload {
///     Waiting,
///     Sending,
///     Sent,
///     Broken,
/// }
///
/// impl State for Upload {
///     fn name(&self) -> &'static str {
///         match self {
///             Self::Waiting => "Waiting",
///             Self::Sending => "Sending",
///             Self::Sent => "Sent",
///             Self::Broken => "Broken",
///         }
///     }
///
///     fn is_outcome(&self) -> bool {
///         matches!(self, Self::Sent | Self::Broken)
///     }
///
///     fn is_error(&self) -> bool {
///         matches!(self, Self::Broken)
///     }
///
///     fn is_busy(&self) -> bool {
///         matches!(self, Self::Sending)
///     }
/// }
///
/// assert!(Upload::Broken.is_outcome());
/// assert!(!Upload::Waiting.is_busy());
/// ```
pub trait State: Copy + Eq + Debug + Serialize + DeserializeOwned + Send + Sync {
    /// Get the state's name for display/logging.
    fn name(&self) -> &'static str;

    /// Check if this state reports the result of an operation.
    ///
    /// Outcome states are shown to the user for a while and then the machine
    /// falls back to its resting state on its own.
    ///
    /// Default implementation returns `false`.
    fn is_outcome(&self) -> bool {
        false
    }

    /// Check if this is an error state.
    ///
    /// Default implementation returns `false`.
    fn is_error(&self) -> bool {
        false
    }

    /// Check if the machine is mid-operation and must reject writes.
    ///
    /// Default implementation returns `false`.
    fn is_busy(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
    enum TestState {
        Resting,
        Working,
        Done,
        Broken,
    }

    impl State for TestState {
        fn name(&self) -> &'static str {
            match self {
                Self::Resting => "Resting",
                Self::Working => "Working",
                Self::Done => "Done",
                Self::Broken => "Broken",
            }
        }

        fn is_outcome(&self) -> bool {
            matches!(self, Self::Done | Self::Broken)
        }

        fn is_error(&self) -> bool {
            matches!(self, Self::Broken)
        }

        fn is_busy(&self) -> bool {
            matches!(self, Self::Working)
        }
    }

    #[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
    struct Plain;

    impl State for Plain {
        fn name(&self) -> &'static str {
            "Plain"
        }
    }

    #[test]
    fn state_name_returns_correct_value() {
        assert_eq!(TestState::Resting.name(), "Resting");
        assert_eq!(TestState::Working.name(), "Working");
        assert_eq!(TestState::Done.name(), "Done");
        assert_eq!(TestState::Broken.name(), "Broken");
    }

    #[test]
    fn is_outcome_identifies_result_states() {
        assert!(!TestState::Resting.is_outcome());
        assert!(!TestState::Working.is_outcome());
        assert!(TestState::Done.is_outcome());
        assert!(TestState::Broken.is_outcome());
    }

    #[test]
    fn is_busy_only_while_working() {
        assert!(TestState::Working.is_busy());
        assert!(!TestState::Done.is_busy());
    }

    #[test]
    fn defaults_are_all_false() {
        assert!(!Plain.is_outcome());
        assert!(!Plain.is_error());
        assert!(!Plain.is_busy());
    }

    #[test]
    fn state_serializes_correctly() {
        let json = serde_json::to_string(&TestState::Working).unwrap();
        assert_eq!(json, "\"Working\"");
        let back: TestState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, TestState::Working);
    }
}
