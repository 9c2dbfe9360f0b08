//! Benefits carousel: a fixed ring of slides with one current index.
//!
//! The index only moves through [`Carousel::advance`] (timer driven) and
//! [`Carousel::select_slide`] (indicator dots). Auto-advance is delivered by
//! [`timer::CarouselTimer`] as `AppEvent::CarouselTick`.

pub mod timer;

use crate::content::Slide;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CarouselError {
    #[error("carousel needs at least one slide")]
    Empty,
    #[error("slide {index} out of range (carousel has {len} slides)")]
    OutOfRange { index: usize, len: usize },
}

#[derive(Debug)]
pub struct Carousel {
    slides: Vec<Slide>,
    current: usize,
}

impl Carousel {
    pub fn new(slides: Vec<Slide>) -> Result<Self, CarouselError> {
        if slides.is_empty() {
            return Err(CarouselError::Empty);
        }
        Ok(Self { slides, current: 0 })
    }

    /// Move to the next slide, wrapping after the last one.
    pub fn advance(&mut self) {
        self.current = (self.current + 1) % self.slides.len();
    }

    /// Jump straight to `index`. Out-of-range indices leave the carousel
    /// untouched.
    pub fn select_slide(&mut self, index: usize) -> Result<(), CarouselError> {
        if index >= self.slides.len() {
            return Err(CarouselError::OutOfRange {
                index,
                len: self.slides.len(),
            });
        }
        self.current = index;
        Ok(())
    }

    pub fn select_prev(&mut self) {
        let len = self.slides.len();
        self.current = (self.current + len - 1) % len;
    }

    pub fn index(&self) -> usize {
        self.current
    }

    pub fn current(&self) -> &Slide {
        &self.slides[self.current]
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }
}
