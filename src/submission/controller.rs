//! Submission state machine with delayed, cancellable transitions.

use crate::config::TimingConfig;
use crate::core::{Guard, State, StateHistory, StateTransition};
use crate::phone::PhoneNumber;
use crate::submission::lead::Lead;
use crate::submission::phase::Phase;
use crate::timer::{Fired, TimerId, TimerQueue};
use crate::validation::{field_errors, validate_form, FieldError};
use chrono::Utc;
use std::time::Duration;
use stillwater::validation::Validation;
use tracing::{debug, info, warn};

/// Delayed transitions the controller schedules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delay {
    /// Simulated network latency, `Submitting → Succeeded`
    Latency,
    /// Outcome display timeout, `Succeeded | Failed → Idle`
    Reset,
}

/// Immediate result of a submit click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Fields passed the gate; the machine is now `Submitting`.
    Started,
    /// The gate failed; the machine went straight to `Failed`.
    Rejected(Vec<FieldError>),
    /// The current phase does not take submits; nothing changed.
    Ignored { phase: Phase },
}

/// Transitions produced by timers while advancing time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionEvent {
    Succeeded(Lead),
    Reset { from: Phase },
}

/// Drives one form's submit lifecycle.
///
/// Every transition bumps the generation counter and cancels whatever timer
/// was pending, then schedules the timer the new phase needs. A fired timer
/// only acts if its generation is still current and the phase is the one it
/// was scheduled for.
#[derive(Debug)]
pub struct SubmissionController {
    phase: Phase,
    generation: u64,
    timers: TimerQueue<Delay>,
    pending: Option<TimerId>,
    in_flight: Option<Lead>,
    history: StateHistory<Phase>,
    timing: TimingConfig,
    accepts_submit: Guard<Phase>,
}

impl SubmissionController {
    pub fn new(timing: TimingConfig) -> Self {
        Self {
            phase: Phase::Idle,
            generation: 0,
            timers: TimerQueue::new(),
            pending: None,
            in_flight: None,
            history: StateHistory::new(),
            timing,
            accepts_submit: Guard::new("accepts-submit", Phase::accepts_submit),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn history(&self) -> &StateHistory<Phase> {
        &self.history
    }

    /// Virtual time elapsed since the controller was created.
    pub fn now(&self) -> Duration {
        self.timers.now()
    }

    /// Time until the pending delayed transition, if one is scheduled.
    pub fn time_to_next(&self) -> Option<Duration> {
        self.timers
            .next_due()
            .map(|due| due.saturating_sub(self.timers.now()))
    }

    /// Handle a submit click with the current field values.
    pub fn submit(&mut self, phone: &PhoneNumber, email: &str) -> SubmitOutcome {
        if !self.accepts_submit.check(&self.phase) {
            debug!(
                phase = self.phase.name(),
                guard = self.accepts_submit.name(),
                "Submit ignored"
            );
            return SubmitOutcome::Ignored { phase: self.phase };
        }

        match validate_form(phone, email) {
            Validation::Success(()) => {
                self.in_flight = Some(Lead::new(phone.digits(), email));
                self.enter(Phase::Submitting);
                SubmitOutcome::Started
            }
            failure => {
                let errors = field_errors(failure);
                info!(failures = errors.len(), "Submit rejected by validation");
                self.enter(Phase::Failed);
                SubmitOutcome::Rejected(errors)
            }
        }
    }

    /// Advance virtual time, firing due timers in order.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<SubmissionEvent> {
        let until = self.timers.now().saturating_add(elapsed);
        let mut events = Vec::new();
        while let Some(fired) = self.timers.pop_due(until) {
            if let Some(event) = self.on_timer(fired) {
                events.push(event);
            }
        }
        self.timers.settle(until);
        events
    }

    fn on_timer(&mut self, fired: Fired<Delay>) -> Option<SubmissionEvent> {
        if self.pending == Some(fired.id) {
            self.pending = None;
        }
        if fired.generation != self.generation {
            warn!(
                timer = ?fired.kind,
                scheduled_at = fired.generation,
                current = self.generation,
                "Stale timer ignored"
            );
            return None;
        }

        match (fired.kind, self.phase) {
            (Delay::Latency, Phase::Submitting) => {
                let lead = self.in_flight.take();
                self.enter(Phase::Succeeded);
                match lead {
                    Some(lead) => Some(SubmissionEvent::Succeeded(lead)),
                    None => {
                        warn!("Submission completed without a captured lead");
                        None
                    }
                }
            }
            (Delay::Reset, from) if from.is_outcome() => {
                self.enter(Phase::Idle);
                Some(SubmissionEvent::Reset { from })
            }
            (kind, phase) => {
                warn!(timer = ?kind, phase = phase.name(), "Timer does not apply to phase");
                None
            }
        }
    }

    fn enter(&mut self, to: Phase) {
        if let Some(id) = self.pending.take() {
            self.timers.cancel(id);
        }

        let from = self.phase;
        self.generation += 1;
        self.history = self.history.record(StateTransition {
            from,
            to,
            timestamp: Utc::now(),
            generation: self.generation,
        });
        self.phase = to;
        info!(from = from.name(), to = to.name(), generation = self.generation, "Phase changed");

        let delay = match to {
            Phase::Submitting => Some((Delay::Latency, self.timing.submit_delay())),
            Phase::Succeeded | Phase::Failed => Some((Delay::Reset, self.timing.reset_delay())),
            Phase::Idle => None,
        };
        if let Some((kind, after)) = delay {
            self.pending = Some(self.timers.schedule(kind, after, self.generation));
        }
    }
}
