//! BodyUp landing page: interactive core.
//!
//! The page asks visitors to join the BodyUp beta with a WhatsApp number and
//! a Gmail address. Everything interactive on it is a small state machine,
//! and this crate holds those machines free of any UI toolkit:
//!
//! - **Phone masking**: raw keystrokes become `(DD) DDDDD-DDDD`
//! - **Validation**: strict submit gate plus ordered inline diagnostics
//! - **Submission**: `Idle → Submitting → Succeeded | Failed → Idle` with
//!   simulated latency and cancellable reset timers
//! - **Carousel**: cyclic three-slide deck with swipe detection
//!
//! Time is virtual. The host feeds elapsed time into [`page::LandingPage::advance`]
//! so every timeline is reproducible.
//!
//! # Example
//!
//! ```rust
//! use bodyup_landing::config::LandingConfig;
//! use bodyup_landing::page::{LandingPage, PageEvent};
//! use bodyup_landing::submission::{DiscardLeads, Phase};
//! use bodyup_landing::telemetry::TracingTelemetry;
//! use std::time::Duration;
//!
//! let mut page =
//!     LandingPage::load(LandingConfig::default(), &mut TracingTelemetry, DiscardLeads).unwrap();
//!
//! page.handle(PageEvent::OpenPopup).unwrap();
//! page.handle(PageEvent::WhatsappInput("11987654321".into())).unwrap();
//! page.handle(PageEvent::EmailInput("a@gmail.com".into())).unwrap();
//! assert_eq!(page.form_view().unwrap().whatsapp, "(11) 98765-4321");
//!
//! page.handle(PageEvent::Submit).unwrap();
//! page.advance(Duration::from_millis(1_500));
//! assert_eq!(page.form_view().unwrap().phase, Phase::Succeeded);
//! ```

pub mod carousel;
pub mod config;
pub mod core;
pub mod form;
pub mod page;
pub mod phone;
pub mod submission;
pub mod telemetry;
pub mod timer;
pub mod validation;

// Re-export commonly used types
pub use carousel::{Carousel, Slide, SlideDeck, Swipe};
pub use config::{ConfigError, LandingConfig};
pub use self::core::{Guard, State, StateHistory, StateTransition};
pub use form::{FormView, InputRejected, SignupForm};
pub use page::{Handled, LandingPage, PageError, PageEvent};
pub use phone::{format_whatsapp, PhoneNumber};
pub use submission::{Lead, LeadSink, Phase, SubmissionController, SubmissionEvent, SubmitOutcome};
pub use validation::{can_submit, email_field_message, is_email_valid, is_phone_valid, FieldError};
