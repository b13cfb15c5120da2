//! Submission lifecycle phases.

use crate::core::State;
use serde::{Deserialize, Serialize};

/// Where the signup form is in its submit lifecycle.
///
/// `Idle → Submitting → (Succeeded | Failed) → Idle`. A rejected submit goes
/// straight from `Idle`/`Failed` to `Failed`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

impl State for Phase {
    fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Submitting => "Submitting",
            Self::Succeeded => "Succeeded",
            Self::Failed => "Failed",
        }
    }

    fn is_outcome(&self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed)
    }

    fn is_error(&self) -> bool {
        matches!(self, Self::Failed)
    }

    fn is_busy(&self) -> bool {
        matches!(self, Self::Submitting)
    }
}

impl Phase {
    /// Phases from which a submit click is acted on.
    pub fn accepts_submit(&self) -> bool {
        matches!(self, Self::Idle | Self::Failed)
    }
}
