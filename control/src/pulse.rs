//! Rising edge detection over a compact set of directions.

use core::ops::{BitAnd, BitOr, Not};

/// Five bit set of joystick directions and the button.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Mask(u8);

impl Mask {
    pub const EMPTY: Self = Self(0);
    pub const UP: Self = Self(0b0_0001);
    pub const DOWN: Self = Self(0b0_0010);
    pub const LEFT: Self = Self(0b0_0100);
    pub const RIGHT: Self = Self(0b0_1000);
    pub const BUTTON: Self = Self(0b1_0000);
    pub const ALL: Self = Self(0b1_1111);

    /// Build a mask from raw bits, dropping any bit beyond the five known.
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & Self::ALL.0)
    }

    /// Build a mask out of the state of each direction and the button.
    #[must_use]
    pub const fn from_flags(up: bool, down: bool, left: bool, right: bool, button: bool) -> Self {
        Self(
            up as u8
                | (down as u8) << 1
                | (left as u8) << 2
                | (right as u8) << 3
                | (button as u8) << 4,
        )
    }

    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn set(&mut self, other: Self, value: bool) {
        if value {
            self.0 |= other.0;
        } else {
            self.0 &= !other.0;
        }
    }
}

impl BitOr for Mask {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitAnd for Mask {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl Not for Mask {
    type Output = Self;

    fn not(self) -> Self {
        Self::from_bits(!self.0)
    }
}

/// Use this to turn held states into one-cycle pulses.
///
/// Remembers the mask seen in the previous cycle and reports only the bits
/// that were off then and are on now. Releases never produce a pulse.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PulseDetector {
    previous: Mask,
}

impl PulseDetector {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            previous: Mask::EMPTY,
        }
    }

    #[must_use]
    pub fn update(&mut self, current: Mask) -> Mask {
        let pulses = current & !self.previous;
        self.previous = current;
        pulses
    }

    #[must_use]
    pub fn previous(&self) -> Mask {
        self.previous
    }

    pub fn reset(&mut self) {
        self.previous = Mask::EMPTY;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(test)]
    mod mask {
        use super::*;

        #[test]
        fn when_bits_beyond_five_are_given_they_are_dropped() {
            assert_eq!(Mask::from_bits(0b1110_0001), Mask::UP);
            assert_eq!((!Mask::EMPTY).bits(), 0b1_1111);
        }

        #[test]
        fn when_built_from_flags_each_flag_lands_on_its_bit() {
            assert_eq!(Mask::from_flags(true, false, false, false, false), Mask::UP);
            assert_eq!(Mask::from_flags(false, true, false, false, false), Mask::DOWN);
            assert_eq!(Mask::from_flags(false, false, true, false, false), Mask::LEFT);
            assert_eq!(Mask::from_flags(false, false, false, true, false), Mask::RIGHT);
            assert_eq!(Mask::from_flags(false, false, false, false, true), Mask::BUTTON);
            assert_eq!(Mask::from_flags(true, true, true, true, true), Mask::ALL);
            assert_eq!(Mask::from_flags(false, false, false, false, false), Mask::EMPTY);
        }

        #[test]
        fn when_flag_is_set_and_cleared_it_is_reflected_in_contains() {
            let mut mask = Mask::EMPTY;
            mask.set(Mask::LEFT, true);
            mask.set(Mask::BUTTON, true);
            assert!(mask.contains(Mask::LEFT | Mask::BUTTON));
            assert!(!mask.contains(Mask::RIGHT));
            mask.set(Mask::LEFT, false);
            assert_eq!(mask, Mask::BUTTON);
        }
    }

    #[test]
    fn when_bit_turns_on_it_pulses_for_one_cycle() {
        let mut detector = PulseDetector::new();
        assert_eq!(detector.update(Mask::UP), Mask::UP);
        assert_eq!(detector.update(Mask::UP), Mask::EMPTY);
        assert_eq!(detector.update(Mask::UP), Mask::EMPTY);
    }

    #[test]
    fn when_bit_turns_off_it_does_not_pulse() {
        let mut detector = PulseDetector::new();
        let _ = detector.update(Mask::DOWN);
        assert_eq!(detector.update(Mask::EMPTY), Mask::EMPTY);
    }

    #[test]
    fn when_bit_is_released_and_pressed_again_it_pulses_again() {
        let mut detector = PulseDetector::new();
        assert_eq!(detector.update(Mask::BUTTON), Mask::BUTTON);
        assert_eq!(detector.update(Mask::EMPTY), Mask::EMPTY);
        assert_eq!(detector.update(Mask::BUTTON), Mask::BUTTON);
    }

    #[test]
    fn when_another_bit_joins_only_it_pulses() {
        let mut detector = PulseDetector::new();
        let _ = detector.update(Mask::LEFT);
        assert_eq!(detector.update(Mask::LEFT | Mask::BUTTON), Mask::BUTTON);
        assert_eq!(detector.previous(), Mask::LEFT | Mask::BUTTON);
    }

    #[test]
    fn when_reset_it_forgets_previous_cycle() {
        let mut detector = PulseDetector::new();
        let _ = detector.update(Mask::RIGHT);
        detector.reset();
        assert_eq!(detector.update(Mask::RIGHT), Mask::RIGHT);
    }
}
