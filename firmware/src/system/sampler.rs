//! Binding of joystick channels to the board converter and GPIO.

use kiipeli_control::mapping::RAW_MAX;
use kiipeli_control::Hardware;
use nb::block;

use crate::system::hal::adc::{Adc, Enabled};
use crate::system::hal::gpio;
use crate::system::hal::pac::ADC1;

/// Identifier of a joystick line wired to the module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
pub enum Channel {
    XAxis,
    YAxis,
    Button,
}

pub struct Sampler {
    pins: Pins,
    adc: Adc<ADC1, Enabled>,
}

pub struct Pins {
    pub x_axis: XAxisPin,
    pub y_axis: YAxisPin,
    pub button: ButtonPin,
}

pub type XAxisPin = gpio::gpioa::PA7<gpio::Analog>;
pub type YAxisPin = gpio::gpioa::PA2<gpio::Analog>;
pub type ButtonPin = gpio::gpiog::PG14<gpio::Input>;

impl Sampler {
    pub fn new(pins: Pins, adc: Adc<ADC1, Enabled>) -> Self {
        Self { pins, adc }
    }

    #[allow(clippy::cast_possible_truncation)]
    #[allow(clippy::cast_sign_loss)]
    fn read_button(&self) -> u16 {
        // NOTE: The button is a plain switch to ground. It is reported on
        // the ends of the analog range so it can share the threshold of
        // the axes.
        if self.pins.button.is_low() {
            0
        } else {
            RAW_MAX as u16
        }
    }
}

impl Hardware for Sampler {
    type Channel = Channel;

    fn set_pull_up(&mut self, channel: Channel) {
        match channel {
            Channel::Button => self.pins.button.set_internal_resistor(gpio::Pull::Up),
            Channel::XAxis | Channel::YAxis => {
                defmt::warn!("Channel {} is analog, ignoring pull-up", channel);
            }
        }
    }

    fn analog_read(&mut self, channel: Channel) -> u16 {
        let sample: u32 = match channel {
            Channel::XAxis => {
                self.adc.start_conversion(&mut self.pins.x_axis);
                block!(self.adc.read_sample()).unwrap_or_default()
            }
            Channel::YAxis => {
                self.adc.start_conversion(&mut self.pins.y_axis);
                block!(self.adc.read_sample()).unwrap_or_default()
            }
            Channel::Button => return self.read_button(),
        };
        transpose_adc(sample, self.adc.slope())
    }
}

#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_sign_loss)]
fn transpose_adc(sample: u32, slope: u32) -> u16 {
    (sample.min(slope) * RAW_MAX as u32 / slope) as u16
}
