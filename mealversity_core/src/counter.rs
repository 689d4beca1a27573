//! Ease-out count-up ramp for the hero statistic.
//!
//! Each tick closes `1/divisor` of the remaining distance, rounded up, so
//! the value moves fast at first and always lands exactly on the target.

use std::num::NonZeroU32;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CountUp {
    current: u32,
    target: u32,
    divisor: NonZeroU32,
    cancelled: bool,
}

impl CountUp {
    pub fn new(target: u32, divisor: NonZeroU32) -> Self {
        Self {
            current: 0,
            target,
            divisor,
            cancelled: false,
        }
    }

    pub fn value(&self) -> u32 {
        self.current
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    pub fn is_finished(&self) -> bool {
        self.cancelled || self.current >= self.target
    }

    /// Advance one step. `None` once finished or cancelled.
    pub fn tick(&mut self) -> Option<u32> {
        if self.is_finished() {
            return None;
        }
        let step = (self.target - self.current).div_ceil(self.divisor.get());
        self.current = self.current.saturating_add(step).min(self.target);
        Some(self.current)
    }

    /// Stop for good; later ticks are no-ops.
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn twelve() -> NonZeroU32 {
        NonZeroU32::new(12).unwrap()
    }

    #[test]
    fn reaches_target_exactly_in_bounded_ticks() {
        let mut ramp = CountUp::new(2000, twelve());
        let mut seen = Vec::new();
        while let Some(v) = ramp.tick() {
            seen.push(v);
            assert!(seen.len() < 200, "ramp did not terminate");
        }
        assert_eq!(seen.last(), Some(&2000));
        assert!(seen.iter().all(|v| *v <= 2000));
        assert!(seen.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(seen.first(), Some(&167));
        assert_eq!(ramp.tick(), None);
    }

    #[test]
    fn no_ticks_after_cancel() {
        let mut ramp = CountUp::new(2000, twelve());
        ramp.tick();
        ramp.tick();
        let frozen = ramp.value();
        ramp.cancel();
        for _ in 0..10 {
            assert_eq!(ramp.tick(), None);
        }
        assert_eq!(ramp.value(), frozen);
    }

    #[test]
    fn zero_target_is_already_done() {
        let mut ramp = CountUp::new(0, twelve());
        assert!(ramp.is_finished());
        assert_eq!(ramp.tick(), None);
    }

    #[test]
    fn divisor_of_one_jumps_straight_to_target() {
        let mut ramp = CountUp::new(50, NonZeroU32::MIN);
        assert_eq!(ramp.tick(), Some(50));
        assert_eq!(ramp.tick(), None);
    }
}
