//! Joystick wired to three converter channels.

use crate::calibration::{Calibration, InvalidCalibration};
use crate::debouncer::Debouncer;
use crate::inputs::Inputs;
use crate::log;
use crate::snapshot::Snapshot;

/// Access to the analog and digital peripherals the joystick is wired to.
///
/// Implemented by the hardware binding. Reads are expected to complete
/// right away, within the poll cycle.
pub trait Hardware {
    type Channel: Copy;

    /// Configure the given channel as a digital input with pull-up.
    fn set_pull_up(&mut self, channel: Self::Channel);

    /// Sample the given channel, returning a value in `[0, 1023]`.
    fn analog_read(&mut self, channel: Self::Channel) -> u16;
}

/// Two axis joystick with a push button.
///
/// Use `begin` once during setup and then call `read` once per cycle of the
/// control loop.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Joystick<C> {
    x_axis: C,
    y_axis: C,
    button: C,
    debouncer: Debouncer,
}

impl<C: Copy> Joystick<C> {
    /// # Errors
    ///
    /// This fails with `InvalidCalibration` when `axis_low_limit` is above
    /// `axis_high_limit`.
    pub fn try_new(
        x_axis: C,
        y_axis: C,
        button: C,
        axis_low_limit: i32,
        axis_high_limit: i32,
    ) -> Result<Self, InvalidCalibration> {
        let calibration = Calibration::try_new(axis_low_limit, axis_high_limit)?;
        log::info!(
            "Joystick calibrated low={} high={}",
            calibration.low(),
            calibration.high()
        );
        Ok(Self {
            x_axis,
            y_axis,
            button,
            debouncer: Debouncer::new(calibration),
        })
    }

    pub fn begin<H: Hardware<Channel = C>>(&self, hardware: &mut H) {
        hardware.set_pull_up(self.button);
        log::info!("Joystick button set to pull-up");
    }

    pub fn read<H: Hardware<Channel = C>>(&mut self, hardware: &mut H) -> Inputs {
        let snapshot = Snapshot {
            button: hardware.analog_read(self.button),
            x: hardware.analog_read(self.x_axis),
            y: hardware.analog_read(self.y_axis),
        };
        self.debouncer.update(snapshot)
    }

    #[must_use]
    pub fn calibration(&self) -> Calibration {
        self.debouncer.calibration()
    }
}
