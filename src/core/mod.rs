//! Core state machine types.
//!
//! This module holds the pure building blocks shared by the page's
//! controllers:
//! - State definitions via the `State` trait
//! - Guard predicates for transition gating
//! - Immutable history tracking
//!
//! Nothing in here schedules timers or touches field values.

mod guard;
mod history;
mod state;

pub use guard::Guard;
pub use history::{StateHistory, StateTransition};
pub use state::State;
