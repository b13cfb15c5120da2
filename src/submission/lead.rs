//! The simulated lead produced by a successful submission.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Contact details captured when a submission completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lead {
    pub id: Uuid,
    /// Eleven digits, no mask
    pub whatsapp: String,
    pub email: String,
    pub submitted_at: DateTime<Utc>,
}

impl Lead {
    pub fn new(whatsapp: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            whatsapp: whatsapp.into(),
            email: email.into(),
            submitted_at: Utc::now(),
        }
    }
}

/// Receives leads once their submission succeeds.
///
/// There is no backend behind the page; implementations decide what, if
/// anything, happens to a lead.
pub trait LeadSink {
    fn accept(&mut self, lead: &Lead);
}

/// Logs the lead id and drops it.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscardLeads;

impl LeadSink for DiscardLeads {
    fn accept(&mut self, lead: &Lead) {
        tracing::info!(lead_id = %lead.id, "Lead captured, not persisted");
    }
}

impl LeadSink for Vec<Lead> {
    fn accept(&mut self, lead: &Lead) {
        self.push(lead.clone());
    }
}
