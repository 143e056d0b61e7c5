//! Hero carousel module.

mod controller;
mod slides;

pub use controller::{CarouselController, PlayState};
pub use slides::{default_slides, CarouselSlide};

use crate::error::CommerceError;

/// Slides plus the controller cycling over them.
#[derive(Debug, Clone, PartialEq)]
pub struct Carousel {
    slides: Vec<CarouselSlide>,
    controller: CarouselController,
}

impl Carousel {
    pub fn new(slides: Vec<CarouselSlide>) -> Self {
        let controller = CarouselController::new(slides.len());
        Self { slides, controller }
    }

    pub fn slides(&self) -> &[CarouselSlide] {
        &self.slides
    }

    pub fn controller(&self) -> &CarouselController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut CarouselController {
        &mut self.controller
    }

    /// The slide on screen, if there are any slides.
    pub fn current_slide(&self) -> Option<&CarouselSlide> {
        self.slides.get(self.controller.current())
    }

    pub fn tick(&mut self) -> bool {
        self.controller.tick()
    }

    pub fn next(&mut self) {
        self.controller.next();
    }

    pub fn previous(&mut self) {
        self.controller.previous();
    }

    pub fn go_to(&mut self, index: usize) -> Result<(), CommerceError> {
        self.controller.go_to(index)
    }
}

impl Default for Carousel {
    fn default() -> Self {
        Self::new(default_slides())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_carousel() {
        let mut carousel = Carousel::default();
        assert_eq!(carousel.slides().len(), 4);
        assert_eq!(
            carousel.current_slide().map(|s| s.title.as_str()),
            Some("Premium Fashion Collection")
        );

        carousel.previous();
        let last = carousel.current_slide().unwrap();
        assert_eq!(last.cta_label, "Explore Collection");
        assert_eq!(last.image, "/s4.jpg");
    }

    #[test]
    fn test_empty_carousel_has_no_slide() {
        let carousel = Carousel::new(Vec::new());
        assert!(carousel.current_slide().is_none());
    }
}
