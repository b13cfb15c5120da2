//! Guard predicates for gating transitions.
//!
//! A guard is a named, pure boolean function. Controllers hold guards for the
//! preconditions of their transitions (for example "the form may be
//! submitted") instead of scattering the checks through event handlers.

use std::fmt;

/// Pure predicate that determines if a transition may execute.
///
/// # Example
///
/// ```rust
/// use bodyup_landing::core::Guard;
///
/// let non_empty = Guard::new("non-empty", |text: &str| !text.is_empty());
///
/// assert!(non_empty.check("abc"));
/// assert!(!non_empty.check(""));
/// assert_eq!(non_empty.name(), "non-empty");
/// ```
pub struct Guard<T: ?Sized> {
    name: &'static str,
    predicate: Box<dyn Fn(&T) -> bool + Send + Sync>,
}

impl<T: ?Sized> Guard<T> {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be deterministic and free of side effects.
    pub fn new<F>(name: &'static str, predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Guard {
            name,
            predicate: Box::new(predicate),
        }
    }

    /// Check if the guard admits this value.
    pub fn check(&self, value: &T) -> bool {
        (self.predicate)(value)
    }

    /// Name used when logging a blocked transition.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl<T: ?Sized> fmt::Debug for Guard<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard").field("name", &self.name).finish()
    }
}
