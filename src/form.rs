//! The signup popup's form state and render model.

use crate::config::TimingConfig;
use crate::core::State;
use crate::phone::{self, PhoneNumber};
use crate::submission::{Phase, SubmissionController, SubmissionEvent, SubmitOutcome};
use crate::validation::email;
use crate::validation::{can_submit, email_field_message, is_phone_valid, PHONE_INVALID};
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

pub const SUBMIT_LABEL: &str = "Enviar Inscrição";
pub const SUBMITTING_LABEL: &str = "Enviando...";
pub const SUCCESS_MESSAGE: &str = "Inscrição realizada! Entraremos em contato via WhatsApp.";

/// Why a keystroke left a field unchanged.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum InputRejected {
    #[error("Input has {digits} digits, a WhatsApp number holds at most 11")]
    TooManyDigits { digits: usize },

    #[error("Fields are locked while a submission is in flight")]
    FieldLocked,
}

/// Everything the presentation layer needs to draw the popup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormView {
    pub whatsapp: String,
    pub whatsapp_placeholder: &'static str,
    pub email: String,
    pub email_placeholder: &'static str,
    pub phase: Phase,
    /// Shown only after a failed submit with an incomplete number
    pub phone_error: Option<&'static str>,
    /// Live diagnostic for the email field
    pub email_error: Option<&'static str>,
    pub success_message: Option<&'static str>,
    pub submit_label: &'static str,
    pub submit_enabled: bool,
    pub inputs_enabled: bool,
}

/// Field values plus the submission machine, for one opening of the popup.
#[derive(Debug)]
pub struct SignupForm {
    phone: PhoneNumber,
    email: String,
    submission: SubmissionController,
}

impl SignupForm {
    pub fn new(timing: TimingConfig) -> Self {
        Self {
            phone: PhoneNumber::new(),
            email: String::new(),
            submission: SubmissionController::new(timing),
        }
    }

    pub fn phone(&self) -> &PhoneNumber {
        &self.phone
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phase(&self) -> Phase {
        self.submission.phase()
    }

    pub fn submission(&self) -> &SubmissionController {
        &self.submission
    }

    fn ensure_writable(&self) -> Result<(), InputRejected> {
        if self.phase().is_busy() {
            return Err(InputRejected::FieldLocked);
        }
        Ok(())
    }

    /// Apply the WhatsApp field's new raw text.
    pub fn input_whatsapp(&mut self, raw: &str) -> Result<(), InputRejected> {
        self.ensure_writable()?;
        self.phone.apply_input(raw).map_err(|digits| {
            debug!(digits, "WhatsApp keystroke rejected");
            InputRejected::TooManyDigits { digits }
        })
    }

    /// Apply the email field's new raw text, stored as typed.
    pub fn input_email(&mut self, raw: &str) -> Result<(), InputRejected> {
        self.ensure_writable()?;
        self.email.clear();
        self.email.push_str(raw);
        Ok(())
    }

    pub fn can_submit(&self) -> bool {
        can_submit(&self.phone, &self.email)
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        self.submission.submit(&self.phone, &self.email)
    }

    /// Advance the submission timers. Fields are cleared when a submission
    /// succeeds.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<SubmissionEvent> {
        let events = self.submission.advance(elapsed);
        if events
            .iter()
            .any(|e| matches!(e, SubmissionEvent::Succeeded(_)))
        {
            self.phone.clear();
            self.email.clear();
        }
        events
    }

    pub fn view(&self) -> FormView {
        let phase = self.phase();
        let phone_error =
            (phase == Phase::Failed && !is_phone_valid(&self.phone)).then_some(PHONE_INVALID);

        FormView {
            whatsapp: self.phone.masked().to_string(),
            whatsapp_placeholder: phone::PLACEHOLDER,
            email: self.email.clone(),
            email_placeholder: email::PLACEHOLDER,
            phase,
            phone_error,
            email_error: email_field_message(&self.email),
            success_message: (phase == Phase::Succeeded).then_some(SUCCESS_MESSAGE),
            submit_label: if phase.is_busy() {
                SUBMITTING_LABEL
            } else {
                SUBMIT_LABEL
            },
            submit_enabled: phase.accepts_submit() && self.can_submit(),
            inputs_enabled: !phase.is_busy(),
        }
    }
}
