//! Turn a two axis analog joystick into debounced directional inputs.
//!
//! It is mainly targeted to run in a firmware polling the joystick in a
//! control loop, but it does not depend on any particular hardware. Raw
//! readings travel through the following stages every cycle:
//!
//! ```text
//!   [X] [Y] [Button]          raw readings in [0, 1023]
//!    |   |     |
//!    V   V     |
//!   (Centering)|              mapped to [-512, 512]
//!    |   |     |
//!    V   V     V
//!   (Hysteresis) (Threshold)  one boolean per direction
//!         |      |
//!         V      V
//!        {  Mask   } -------> (Pulse detection against previous mask)
//!              |                          |
//!              V                          V
//!           [ Inputs: held directions and one-cycle pulses ]
//! ```

#![no_std]
#![allow(clippy::module_name_repetitions)]

pub mod axis;
pub mod calibration;
pub mod debouncer;
pub mod inputs;
pub mod joystick;
mod log;
pub mod mapping;
pub mod pulse;
pub mod snapshot;

pub use calibration::{Calibration, InvalidCalibration};
pub use debouncer::Debouncer;
pub use inputs::Inputs;
pub use joystick::{Hardware, Joystick};
pub use pulse::{Mask, PulseDetector};
pub use snapshot::Snapshot;
