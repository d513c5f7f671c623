//! Hysteresis turning a centered axis into a pair of directions.

use crate::calibration::Calibration;

/// Side of the axis claiming the exact rest position.
///
/// A value of zero has to be attributed to one of the two directions. The
/// claiming direction is the one evaluated for hysteresis while the other
/// is forced off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Rest {
    Negative,
    Positive,
}

/// Two mutually exclusive directions of a single analog axis.
///
/// Only one of `negative` and `positive` can be active at a time. Whenever
/// the value leans towards one side, the opposite direction is released
/// immediately, no matter its previous state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Axis {
    pub negative: bool,
    pub positive: bool,
    rest: Rest,
}

impl Axis {
    #[must_use]
    pub const fn new(rest: Rest) -> Self {
        Self {
            negative: false,
            positive: false,
            rest,
        }
    }

    /// Axis with left on the negative side, zero counted as right.
    #[must_use]
    pub const fn horizontal() -> Self {
        Self::new(Rest::Positive)
    }

    /// Axis with up on the negative side, zero counted as up.
    #[must_use]
    pub const fn vertical() -> Self {
        Self::new(Rest::Negative)
    }

    pub fn update(&mut self, value: i32, calibration: Calibration) {
        let magnitude = value.saturating_abs();
        if self.leans_negative(value) {
            self.positive = false;
            self.negative = hysteresis(self.negative, magnitude, calibration);
        } else {
            self.negative = false;
            self.positive = hysteresis(self.positive, magnitude, calibration);
        }
    }

    pub fn reset(&mut self) {
        self.negative = false;
        self.positive = false;
    }

    fn leans_negative(&self, value: i32) -> bool {
        match self.rest {
            Rest::Negative => value <= 0,
            Rest::Positive => value < 0,
        }
    }
}

/// Advance the state of a single direction given its distance from center.
///
/// An inactive direction turns on once `magnitude` reaches the high limit,
/// an active one turns off once it falls to the low limit. Anything in
/// between keeps the previous state. Both checks run in this order, so in
/// the degenerate band where both limits equal the magnitude, the
/// direction ends up released.
#[must_use]
pub fn hysteresis(active: bool, magnitude: i32, calibration: Calibration) -> bool {
    let mut active = active;
    if !active && magnitude >= calibration.high() {
        active = true;
    }
    if active && magnitude <= calibration.low() {
        active = false;
    }
    active
}
