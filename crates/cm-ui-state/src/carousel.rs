//! Rotation state for the testimonial carousel
//!
//! One item of a fixed, non-empty sequence is active at a time. The index
//! advances automatically every [`ROTATION_PERIOD`] while the carousel is
//! mounted, and wraps around in both directions for the manual controls.
//! Manual navigation does not reset the automatic timer; a click and a
//! pending tick can land back to back, and the last write wins.

use std::time::Duration;

use crate::{UiStateError, UiStateResult};

/// Period of the automatic advance timer.
pub const ROTATION_PERIOD: Duration = Duration::from_millis(5000);

/// Active-index state over a fixed-length item sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    current: usize,
}

impl Carousel {
    /// Create a carousel over `len` items, starting at index 0.
    ///
    /// Fails for an empty sequence so that `advance` never has to divide
    /// by zero later.
    pub fn new(len: usize) -> UiStateResult<Self> {
        if len == 0 {
            return Err(UiStateError::Empty);
        }
        Ok(Self { len, current: 0 })
    }

    /// Step forward, wrapping past the last item.
    pub fn advance(&mut self) {
        self.current = (self.current + 1) % self.len;
    }

    /// Step backward, wrapping before the first item.
    pub fn retreat(&mut self) {
        self.current = (self.current + self.len - 1) % self.len;
    }

    /// Jump directly to `index`.
    ///
    /// Out-of-range indices leave the state untouched.
    pub fn jump_to(&mut self, index: usize) -> UiStateResult<()> {
        if index >= self.len {
            return Err(UiStateError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        self.current = index;
        Ok(())
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.len
    }
}

/// Gate between the repeating interval and the carousel it drives.
///
/// The browser can deliver an interval callback that was queued before
/// the owning view was torn down. The view clears the interval handle in
/// its cleanup hook and stops this gate; a stopped ticker turns any late
/// fire into a no-op instead of mutating state nobody renders anymore.
#[derive(Debug, Default)]
pub struct Ticker {
    stopped: bool,
}

impl Ticker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance `carousel` unless the ticker has been stopped.
    pub fn fire(&self, carousel: &mut Carousel) {
        if !self.stopped {
            carousel.advance();
        }
    }

    /// Permanently stop this ticker. Called on view teardown.
    pub fn stop(&mut self) {
        self.stopped = true;
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sequence_rejected() {
        assert_eq!(Carousel::new(0), Err(UiStateError::Empty));
    }

    #[test]
    fn test_advance_wraps_modulo_len() {
        for len in 1..=7 {
            let mut carousel = Carousel::new(len).unwrap();
            for k in 1..=20 {
                carousel.advance();
                assert_eq!(carousel.current(), k % len);
            }
        }
    }

    #[test]
    fn test_retreat_is_inverse_of_advance() {
        let mut carousel = Carousel::new(5).unwrap();
        carousel.jump_to(3).unwrap();
        carousel.advance();
        carousel.retreat();
        assert_eq!(carousel.current(), 3);

        // Also from the wraparound boundary.
        carousel.jump_to(4).unwrap();
        carousel.advance();
        assert_eq!(carousel.current(), 0);
        carousel.retreat();
        assert_eq!(carousel.current(), 4);
    }

    #[test]
    fn test_jump_to_every_valid_index() {
        let mut carousel = Carousel::new(4).unwrap();
        for i in 0..4 {
            carousel.jump_to(i).unwrap();
            assert_eq!(carousel.current(), i);
        }
    }

    #[test]
    fn test_jump_to_out_of_range_leaves_state_unchanged() {
        let mut carousel = Carousel::new(4).unwrap();
        carousel.jump_to(2).unwrap();
        let err = carousel.jump_to(4).unwrap_err();
        assert_eq!(err, UiStateError::IndexOutOfRange { index: 4, len: 4 });
        assert_eq!(carousel.current(), 2);
    }

    #[test]
    fn test_six_testimonials_three_ticks_then_retreat() {
        // Three automatic ticks from 0 land on 3; a manual retreat then
        // yields 2. The timer is not reset by the manual step.
        let mut carousel = Carousel::new(6).unwrap();
        let ticker = Ticker::new();
        for _ in 0..3 {
            ticker.fire(&mut carousel);
        }
        assert_eq!(carousel.current(), 3);
        carousel.retreat();
        assert_eq!(carousel.current(), 2);
    }

    #[test]
    fn test_stopped_ticker_never_advances() {
        let mut carousel = Carousel::new(6).unwrap();
        let mut ticker = Ticker::new();
        ticker.fire(&mut carousel);
        assert_eq!(carousel.current(), 1);

        ticker.stop();
        assert!(ticker.is_stopped());
        // Simulate an elapsed period that would otherwise tick repeatedly.
        for _ in 0..10 {
            ticker.fire(&mut carousel);
        }
        assert_eq!(carousel.current(), 1);
    }
}
