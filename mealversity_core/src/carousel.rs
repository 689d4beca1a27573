//! Hero image carousel: wrap-around stepping with pause-on-hover autoplay.

use thiserror::Error;

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("slide {index} out of range (have {len})")]
pub struct SlideOutOfRange {
    pub index: usize,
    pub len: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    current: usize,
    paused: bool,
}

impl Carousel {
    /// A carousel over `len` slides. An empty carousel never moves.
    pub fn new(len: usize) -> Self {
        Self {
            len,
            current: 0,
            paused: false,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.current = (self.current + 1) % self.len;
        }
    }

    pub fn prev(&mut self) {
        if self.len > 0 {
            self.current = (self.current + self.len - 1) % self.len;
        }
    }

    pub fn go_to(&mut self, index: usize) -> Result<(), SlideOutOfRange> {
        if index >= self.len {
            return Err(SlideOutOfRange {
                index,
                len: self.len,
            });
        }
        self.current = index;
        Ok(())
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    /// Called from the autoplay interval. Returns whether the slide moved.
    pub fn autoplay_tick(&mut self) -> bool {
        if self.paused || self.len < 2 {
            return false;
        }
        self.next();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_and_prev_wrap() {
        let mut c = Carousel::new(6);
        c.prev();
        assert_eq!(c.current(), 5);
        c.next();
        assert_eq!(c.current(), 0);
        for _ in 0..13 {
            c.next();
        }
        assert_eq!(c.current(), 1);
    }

    #[test]
    fn go_to_rejects_out_of_range() {
        let mut c = Carousel::new(6);
        assert_eq!(c.go_to(4), Ok(()));
        assert_eq!(c.current(), 4);
        assert_eq!(c.go_to(6), Err(SlideOutOfRange { index: 6, len: 6 }));
        assert_eq!(c.current(), 4);
    }

    #[test]
    fn autoplay_respects_pause() {
        let mut c = Carousel::new(3);
        c.set_paused(true);
        assert!(!c.autoplay_tick());
        assert_eq!(c.current(), 0);
        c.set_paused(false);
        assert!(c.autoplay_tick());
        assert_eq!(c.current(), 1);
    }

    #[test]
    fn empty_carousel_stays_put() {
        let mut c = Carousel::new(0);
        c.next();
        c.prev();
        assert!(!c.autoplay_tick());
        assert_eq!(c.current(), 0);
        assert!(c.go_to(0).is_err());
    }
}
