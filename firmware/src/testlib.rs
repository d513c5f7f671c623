use kiipeli_control::{Inputs, Joystick};

use crate::system::{Channel, Sampler};

/// Poll the joystick until the given condition holds, returning the inputs
/// that satisfied it.
pub fn sample_until(
    joystick: &mut Joystick<Channel>,
    sampler: &mut Sampler,
    condition: impl Fn(&Inputs) -> bool,
) -> Inputs {
    loop {
        let inputs = joystick.read(sampler);
        if condition(&inputs) {
            break inputs;
        }
        cortex_m::asm::delay(480_000_000 / 1000);
    }
}

/// Poll the joystick until it is released back to the rest position.
pub fn sample_until_released(joystick: &mut Joystick<Channel>, sampler: &mut Sampler) {
    sample_until(joystick, sampler, |inputs| inputs.state().is_empty());
}
