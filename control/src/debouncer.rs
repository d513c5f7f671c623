//! One poll cycle of the joystick, from raw readings to debounced inputs.

use crate::axis::Axis;
use crate::calibration::Calibration;
use crate::inputs::Inputs;
use crate::mapping;
use crate::pulse::{Mask, PulseDetector};
use crate::snapshot::Snapshot;

/// Stateful filter of a single joystick.
///
/// Holds everything that has to survive between cycles: the state of both
/// axes, the button and the mask of the previous cycle. Feed it a fresh
/// `Snapshot` once per poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Debouncer {
    calibration: Calibration,
    horizontal: Axis,
    vertical: Axis,
    button_pressed: bool,
    pulse_detector: PulseDetector,
}

impl Debouncer {
    #[must_use]
    pub const fn new(calibration: Calibration) -> Self {
        Self {
            calibration,
            horizontal: Axis::horizontal(),
            vertical: Axis::vertical(),
            button_pressed: false,
            pulse_detector: PulseDetector::new(),
        }
    }

    pub fn update(&mut self, snapshot: Snapshot) -> Inputs {
        // The button shares the limits of the axes but it is compared on
        // the raw reading, with no hysteresis nor memory.
        self.button_pressed = i32::from(snapshot.button) <= self.calibration.low();

        self.horizontal
            .update(mapping::center(snapshot.x), self.calibration);
        self.vertical
            .update(mapping::center(snapshot.y), self.calibration);

        let state = self.mask();
        let pulses = self.pulse_detector.update(state);
        Inputs::from_masks(state, pulses)
    }

    #[must_use]
    pub fn calibration(&self) -> Calibration {
        self.calibration
    }

    pub fn reset(&mut self) {
        self.horizontal.reset();
        self.vertical.reset();
        self.button_pressed = false;
        self.pulse_detector.reset();
    }

    fn mask(&self) -> Mask {
        Mask::from_flags(
            self.vertical.negative,
            self.vertical.positive,
            self.horizontal.negative,
            self.horizontal.positive,
            self.button_pressed,
        )
    }
}
