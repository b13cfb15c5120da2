//! Lead submission lifecycle.
//!
//! There is no network behind the form. A submission that passes validation
//! completes after a fixed simulated latency; any outcome is shown for a
//! fixed time and then the form returns to `Idle` on its own.

mod controller;
pub mod lead;
mod phase;

pub use controller::{Delay, SubmissionController, SubmissionEvent, SubmitOutcome};
pub use lead::{DiscardLeads, Lead, LeadSink};
pub use phase::Phase;
