//! Debounced state of the joystick as returned from every poll.

use crate::pulse::Mask;

/// Held directions together with pulses of this cycle.
///
/// Held fields stay true for as long as the direction is engaged. Pulse
/// fields are true only in the cycle in which the matching held field
/// turned on.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Inputs {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub button_pressed: bool,
    pub up_pulse: bool,
    pub down_pulse: bool,
    pub left_pulse: bool,
    pub right_pulse: bool,
    pub button_pressed_pulse: bool,
}

impl Inputs {
    pub(crate) fn from_masks(state: Mask, pulses: Mask) -> Self {
        Self {
            up: state.contains(Mask::UP),
            down: state.contains(Mask::DOWN),
            left: state.contains(Mask::LEFT),
            right: state.contains(Mask::RIGHT),
            button_pressed: state.contains(Mask::BUTTON),
            up_pulse: pulses.contains(Mask::UP),
            down_pulse: pulses.contains(Mask::DOWN),
            left_pulse: pulses.contains(Mask::LEFT),
            right_pulse: pulses.contains(Mask::RIGHT),
            button_pressed_pulse: pulses.contains(Mask::BUTTON),
        }
    }

    #[must_use]
    pub fn state(&self) -> Mask {
        Mask::from_flags(
            self.up,
            self.down,
            self.left,
            self.right,
            self.button_pressed,
        )
    }

    #[must_use]
    pub fn pulses(&self) -> Mask {
        Mask::from_flags(
            self.up_pulse,
            self.down_pulse,
            self.left_pulse,
            self.right_pulse,
            self.button_pressed_pulse,
        )
    }

    #[must_use]
    pub fn any_pulse(&self) -> bool {
        !self.pulses().is_empty()
    }
}
