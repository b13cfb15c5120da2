//! One landing page session.
//!
//! Owns the carousel for the whole session and the signup form while the
//! popup is open. The presentation layer feeds it [`PageEvent`]s and elapsed
//! time, and reads back view models.

use crate::carousel::{Carousel, CarouselView, SlideDeck, Swipe, SwipeTracker};
use crate::config::{ConfigError, LandingConfig};
use crate::form::{FormView, InputRejected, SignupForm};
use crate::submission::{LeadSink, SubmissionEvent, SubmitOutcome};
use crate::telemetry::Telemetry;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

/// User interaction emitted by the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    OpenPopup,
    ClosePopup,
    WhatsappInput(String),
    EmailInput(String),
    Submit,
    NextSlide,
    PreviousSlide,
    GoToSlide(usize),
    TouchStart { x: f64 },
    TouchMove { x: f64 },
    TouchEnd,
}

/// What an accepted event did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Handled {
    Done,
    Submitted(SubmitOutcome),
    Swiped(Option<Swipe>),
}

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum PageError {
    #[error("Form event received while the signup popup is closed")]
    PopupClosed,

    #[error(transparent)]
    Input(#[from] InputRejected),
}

#[derive(Debug)]
pub struct LandingPage<L: LeadSink> {
    config: LandingConfig,
    carousel: Carousel,
    popup: Option<SignupForm>,
    leads: L,
}

impl<L: LeadSink> LandingPage<L> {
    /// Start a page session and fire the page-view tags once.
    pub fn load<T: Telemetry>(
        config: LandingConfig,
        telemetry: &mut T,
        leads: L,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        if let Err(err) = telemetry.page_view(&config.telemetry) {
            warn!(error = %err, "Page view telemetry failed");
        }

        let carousel = Carousel::new(
            SlideDeck::default(),
            SwipeTracker::new(config.carousel.swipe_threshold),
        );
        info!("Landing page loaded");

        Ok(Self {
            config,
            carousel,
            popup: None,
            leads,
        })
    }

    pub fn config(&self) -> &LandingConfig {
        &self.config
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    pub fn carousel_view(&self) -> CarouselView<'_> {
        self.carousel.view()
    }

    pub fn form(&self) -> Option<&SignupForm> {
        self.popup.as_ref()
    }

    pub fn form_view(&self) -> Option<FormView> {
        self.popup.as_ref().map(SignupForm::view)
    }

    pub fn is_popup_open(&self) -> bool {
        self.popup.is_some()
    }

    pub fn leads(&self) -> &L {
        &self.leads
    }

    /// Open the signup popup with a fresh form. Opening an already open
    /// popup keeps the current form.
    pub fn open_popup(&mut self) {
        if self.popup.is_none() {
            debug!("Signup popup opened");
            self.popup = Some(SignupForm::new(self.config.timing.clone()));
        }
    }

    /// Close the popup, discarding the form and any pending timers.
    pub fn close_popup(&mut self) {
        if let Some(form) = self.popup.take() {
            debug!(
                phase = ?form.phase(),
                pending = ?form.submission().time_to_next(),
                "Signup popup closed"
            );
        }
    }

    fn form_mut(&mut self) -> Result<&mut SignupForm, PageError> {
        self.popup.as_mut().ok_or(PageError::PopupClosed)
    }

    pub fn handle(&mut self, event: PageEvent) -> Result<Handled, PageError> {
        match event {
            PageEvent::OpenPopup => self.open_popup(),
            PageEvent::ClosePopup => self.close_popup(),
            PageEvent::WhatsappInput(raw) => self.form_mut()?.input_whatsapp(&raw)?,
            PageEvent::EmailInput(raw) => self.form_mut()?.input_email(&raw)?,
            PageEvent::Submit => {
                let outcome = self.form_mut()?.submit();
                return Ok(Handled::Submitted(outcome));
            }
            PageEvent::NextSlide => self.carousel.next(),
            PageEvent::PreviousSlide => self.carousel.previous(),
            PageEvent::GoToSlide(index) => self.carousel.go_to(index),
            PageEvent::TouchStart { x } => self.carousel.touch_start(x),
            PageEvent::TouchMove { x } => self.carousel.touch_move(x),
            PageEvent::TouchEnd => return Ok(Handled::Swiped(self.carousel.touch_end())),
        }
        Ok(Handled::Done)
    }

    /// Advance virtual time for the open form. Completed submissions are
    /// handed to the lead sink.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<SubmissionEvent> {
        let Some(form) = self.popup.as_mut() else {
            return Vec::new();
        };
        let events = form.advance(elapsed);
        for event in &events {
            if let SubmissionEvent::Succeeded(lead) = event {
                self.leads.accept(lead);
            }
        }
        events
    }
}
