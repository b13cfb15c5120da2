//! Cyclic slide navigation.

use crate::carousel::slides::{Slide, SlideDeck, FRAME_IMAGE, SLIDE_COUNT};
use crate::carousel::swipe::{Swipe, SwipeTracker};
use serde::Serialize;
use tracing::debug;

/// One dot under the carousel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Indicator {
    pub index: usize,
    pub active: bool,
    pub label: String,
}

/// Render model for the carousel section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CarouselView<'a> {
    pub active_index: usize,
    pub slide: &'a Slide,
    /// Phone frame drawn over the slide image
    pub frame_image: &'static str,
    pub indicators: Vec<Indicator>,
}

/// Active slide index over a fixed deck. Navigation wraps in both
/// directions; there are no dead ends.
#[derive(Debug, Clone)]
pub struct Carousel {
    deck: SlideDeck,
    active: usize,
    swipe: SwipeTracker,
}

impl Default for Carousel {
    fn default() -> Self {
        Self::new(SlideDeck::default(), SwipeTracker::default())
    }
}

impl Carousel {
    pub fn new(deck: SlideDeck, swipe: SwipeTracker) -> Self {
        Self {
            deck,
            active: 0,
            swipe,
        }
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn current(&self) -> &Slide {
        self.deck.get(self.active)
    }

    pub fn deck(&self) -> &SlideDeck {
        &self.deck
    }

    pub fn next(&mut self) {
        self.set((self.active + 1) % SLIDE_COUNT);
    }

    pub fn previous(&mut self) {
        self.set((self.active + SLIDE_COUNT - 1) % SLIDE_COUNT);
    }

    /// Jump straight to a slide, as the indicator dots do.
    pub fn go_to(&mut self, index: usize) {
        self.set(index % SLIDE_COUNT);
    }

    pub fn touch_start(&mut self, x: f64) {
        self.swipe.touch_start(x);
    }

    pub fn touch_move(&mut self, x: f64) {
        self.swipe.touch_move(x);
    }

    /// Finish a gesture, navigating if it was a swipe.
    pub fn touch_end(&mut self) -> Option<Swipe> {
        let swipe = self.swipe.touch_end()?;
        match swipe {
            Swipe::Next => self.next(),
            Swipe::Previous => self.previous(),
        }
        Some(swipe)
    }

    pub fn view(&self) -> CarouselView<'_> {
        CarouselView {
            active_index: self.active,
            slide: self.current(),
            frame_image: FRAME_IMAGE,
            indicators: (0..SLIDE_COUNT)
                .map(|index| Indicator {
                    index,
                    active: index == self.active,
                    label: format!("Ir para slide {}", index + 1),
                })
                .collect(),
        }
    }

    fn set(&mut self, index: usize) {
        if index != self.active {
            debug!(from = self.active, to = index, "Carousel moved");
        }
        self.active = index;
    }
}
