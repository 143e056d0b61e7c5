//! Carousel auto-advance state machine.
//!
//! The controller holds no timer. The host runs a recurring timer while
//! [`CarouselController::is_auto_playing`] is true and calls
//! [`CarouselController::tick`] on every firing.

use serde::{Deserialize, Serialize};

use crate::error::CommerceError;

/// Whether the carousel is advancing on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PlayState {
    #[default]
    AutoPlaying,
    Paused,
}

impl PlayState {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlayState::AutoPlaying => "auto-playing",
            PlayState::Paused => "paused",
        }
    }
}

/// Current slide index and play state over a fixed number of slides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarouselController {
    current: usize,
    slide_count: usize,
    state: PlayState,
}

impl CarouselController {
    /// A controller on the first slide, auto-playing.
    pub fn new(slide_count: usize) -> Self {
        Self {
            current: 0,
            slide_count,
            state: PlayState::AutoPlaying,
        }
    }

    /// Start paused instead of auto-playing.
    pub fn paused(mut self) -> Self {
        self.state = PlayState::Paused;
        self
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    pub fn state(&self) -> PlayState {
        self.state
    }

    /// Whether a recurring timer should be running.
    pub fn is_auto_playing(&self) -> bool {
        self.state == PlayState::AutoPlaying && self.slide_count > 0
    }

    /// Pointer entered the carousel.
    pub fn pointer_enter(&mut self) {
        self.state = PlayState::Paused;
    }

    /// Pointer left the carousel.
    pub fn pointer_leave(&mut self) {
        self.state = PlayState::AutoPlaying;
    }

    /// Timer fired. Advances only while auto-playing; returns whether it did.
    pub fn tick(&mut self) -> bool {
        if !self.is_auto_playing() {
            return false;
        }
        self.advance();
        true
    }

    /// Show the next slide, wrapping at the end.
    pub fn next(&mut self) {
        if self.slide_count > 0 {
            self.advance();
        }
    }

    /// Show the previous slide, wrapping at the start.
    pub fn previous(&mut self) {
        if self.slide_count > 0 {
            self.current = (self.current + self.slide_count - 1) % self.slide_count;
        }
    }

    /// Jump to a slide. Out-of-range indices leave the state unchanged.
    pub fn go_to(&mut self, index: usize) -> Result<(), CommerceError> {
        if index >= self.slide_count {
            return Err(CommerceError::SlideOutOfRange {
                index,
                count: self.slide_count,
            });
        }
        self.current = index;
        Ok(())
    }

    fn advance(&mut self) {
        self.current = (self.current + 1) % self.slide_count;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_advances_and_wraps() {
        let mut carousel = CarouselController::new(4);
        for expected in [1, 2, 3, 0] {
            assert!(carousel.tick());
            assert_eq!(carousel.current(), expected);
        }
    }

    #[test]
    fn test_pointer_pauses_ticks() {
        let mut carousel = CarouselController::new(4);
        carousel.pointer_enter();
        assert_eq!(carousel.state(), PlayState::Paused);
        assert!(!carousel.tick());
        assert_eq!(carousel.current(), 0);

        carousel.pointer_leave();
        assert!(carousel.is_auto_playing());
        assert!(carousel.tick());
        assert_eq!(carousel.current(), 1);
    }

    #[test]
    fn test_manual_navigation_while_paused() {
        let mut carousel = CarouselController::new(4).paused();
        carousel.previous();
        assert_eq!(carousel.current(), 3);
        carousel.next();
        assert_eq!(carousel.current(), 0);
        carousel.go_to(2).unwrap();
        assert_eq!(carousel.current(), 2);
        assert_eq!(carousel.state(), PlayState::Paused);
    }

    #[test]
    fn test_go_to_out_of_range() {
        let mut carousel = CarouselController::new(4);
        carousel.go_to(1).unwrap();
        assert_eq!(
            carousel.go_to(4),
            Err(CommerceError::SlideOutOfRange { index: 4, count: 4 })
        );
        assert_eq!(carousel.current(), 1);
    }

    #[test]
    fn test_empty_carousel_is_inert() {
        let mut carousel = CarouselController::new(0);
        assert!(!carousel.is_auto_playing());
        assert!(!carousel.tick());
        carousel.next();
        carousel.previous();
        assert_eq!(carousel.current(), 0);
        assert!(carousel.go_to(0).is_err());
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: slide_count consecutive next() calls return to the start.
            #[test]
            fn full_cycle_returns_to_start(count in 1usize..20, start in 0usize..20) {
                let mut carousel = CarouselController::new(count);
                carousel.go_to(start % count).unwrap();
                let origin = carousel.current();
                for _ in 0..count {
                    carousel.next();
                }
                prop_assert_eq!(carousel.current(), origin);
            }

            /// Property: previous undoes next.
            #[test]
            fn previous_undoes_next(count in 1usize..20, start in 0usize..20) {
                let mut carousel = CarouselController::new(count);
                carousel.go_to(start % count).unwrap();
                let origin = carousel.current();
                carousel.next();
                carousel.previous();
                prop_assert_eq!(carousel.current(), origin);
            }
        }
    }
}
