//! Page-view telemetry hook.
//!
//! The page loads third-party analytics tags once at startup. Nothing else
//! in the crate depends on them; a failing tag is logged and forgotten.

use crate::config::TelemetryConfig;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TelemetryError {
    #[error("Telemetry unavailable: {0}")]
    Unavailable(String),
}

/// Fire-and-forget collaborator notified when the page loads.
pub trait Telemetry {
    fn page_view(&mut self, tags: &TelemetryConfig) -> Result<(), TelemetryError>;
}

/// Records page views in the log instead of contacting any tag endpoint.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingTelemetry;

impl Telemetry for TracingTelemetry {
    fn page_view(&mut self, tags: &TelemetryConfig) -> Result<(), TelemetryError> {
        info!(
            google_analytics = %tags.google_analytics_id,
            meta_pixel = %tags.meta_pixel_id,
            "PageView"
        );
        Ok(())
    }
}

/// Counts page views; useful when embedding the page in tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageViewCounter {
    pub page_views: usize,
}

impl Telemetry for PageViewCounter {
    fn page_view(&mut self, _tags: &TelemetryConfig) -> Result<(), TelemetryError> {
        self.page_views += 1;
        Ok(())
    }
}
