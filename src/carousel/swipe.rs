//! Horizontal swipe detection.

use crate::config::DEFAULT_SWIPE_THRESHOLD;
use serde::{Deserialize, Serialize};

/// Direction a completed gesture asks the carousel to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Swipe {
    /// Finger moved left: show the next slide
    Next,
    /// Finger moved right: show the previous slide
    Previous,
}

/// Tracks one touch gesture's start and latest x coordinate.
#[derive(Debug, Clone, PartialEq)]
pub struct SwipeTracker {
    threshold: f64,
    start_x: f64,
    end_x: f64,
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new(DEFAULT_SWIPE_THRESHOLD)
    }
}

impl SwipeTracker {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            start_x: 0.0,
            end_x: 0.0,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Begin a gesture. The end point starts where the finger lands, so a
    /// tap with no movement never counts as a swipe.
    pub fn touch_start(&mut self, x: f64) {
        self.start_x = x;
        self.end_x = x;
    }

    pub fn touch_move(&mut self, x: f64) {
        self.end_x = x;
    }

    /// Finish the gesture and classify it.
    ///
    /// Travel must strictly exceed the threshold in either direction.
    pub fn touch_end(&mut self) -> Option<Swipe> {
        classify(self.start_x - self.end_x, self.threshold)
    }
}

/// Classify a gesture by `start - end` travel.
///
/// ```rust
/// use bodyup_landing::carousel::{classify, Swipe};
///
/// assert_eq!(classify(100.0, 75.0), Some(Swipe::Next));
/// assert_eq!(classify(-100.0, 75.0), Some(Swipe::Previous));
/// assert_eq!(classify(75.0, 75.0), None);
/// ```
pub fn classify(delta: f64, threshold: f64) -> Option<Swipe> {
    if delta > threshold {
        Some(Swipe::Next)
    } else if delta < -threshold {
        Some(Swipe::Previous)
    } else {
        None
    }
}
