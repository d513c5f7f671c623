//! Structures used to pass the current state of the joystick hardware.

/// Raw readings of all joystick peripherals in a single cycle.
///
/// `Snapshot` is meant to be passed from the hardware binding to the
/// debouncer. It carries the converter output as it is, in `[0, 1023]`,
/// with no centering or filtering done by the caller.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Snapshot {
    pub x: u16,
    pub y: u16,
    pub button: u16,
}
