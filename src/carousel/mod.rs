//! The "Conheça o BodyUp por dentro!" screenshot carousel.
//!
//! Driven by arrow/indicator clicks and by horizontal touch gestures. The
//! deck is fixed at startup and never changes.

mod controller;
pub mod slides;
mod swipe;

pub use controller::{Carousel, CarouselView, Indicator};
pub use slides::{Slide, SlideDeck, SLIDE_COUNT};
pub use swipe::{classify, Swipe, SwipeTracker};
