//! Validated thresholds of the axis hysteresis.

use crate::log;

/// Pair of thresholds defining the hysteresis band of an axis.
///
/// Both limits are measured as a distance from the centered rest position.
/// A direction turns on once the stick travels at least `high` from the
/// center, and turns off again only after it returns to `low` or closer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Calibration {
    low: i32,
    high: i32,
}

/// Returned when the low threshold lies above the high one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InvalidCalibration {
    pub low: i32,
    pub high: i32,
}

impl Calibration {
    /// # Errors
    ///
    /// This fails with `InvalidCalibration` when `low` is greater than
    /// `high`, since such a band would let a direction flip on and off
    /// within a single reading.
    pub fn try_new(low: i32, high: i32) -> Result<Self, InvalidCalibration> {
        if low > high {
            log::warn!("Rejected calibration low={} high={}", low, high);
            return Err(InvalidCalibration { low, high });
        }
        Ok(Self { low, high })
    }

    #[must_use]
    pub fn low(self) -> i32 {
        self.low
    }

    #[must_use]
    pub fn high(self) -> i32 {
        self.high
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn when_low_is_below_high_it_is_accepted() {
        let calibration = Calibration::try_new(100, 300).expect("Calibration failed");
        assert_eq!(calibration.low(), 100);
        assert_eq!(calibration.high(), 300);
    }

    #[test]
    fn when_low_equals_high_it_is_accepted() {
        assert!(Calibration::try_new(200, 200).is_ok());
    }

    #[test]
    fn when_low_is_above_high_by_one_it_is_rejected() {
        assert!(Calibration::try_new(-99, -100).is_err());
        assert!(Calibration::try_new(301, 300).is_err());
    }

    #[test]
    fn when_low_is_above_high_it_fails_with_both_limits() {
        assert_eq!(
            Calibration::try_new(300, 100),
            Err(InvalidCalibration {
                low: 300,
                high: 100
            })
        );
    }
}
