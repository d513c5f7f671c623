mod sampler;

pub use daisy::hal;

use daisy::led::LedUser;
use hal::adc::{AdcSampleTime, Resolution};
use hal::delay::DelayFromCountDownTimer;
use hal::pac::CorePeripherals;
use hal::pac::Peripherals as DevicePeripherals;
use hal::prelude::*;
use systick_monotonic::Systick;

pub use sampler::{Channel, Pins as SamplerPins, Sampler};

/// Distance from the center below which a direction gets released.
pub const AXIS_LOW_LIMIT: i32 = 100;

/// Distance from the center above which a direction gets engaged.
pub const AXIS_HIGH_LIMIT: i32 = 300;

pub struct System {
    pub mono: Systick<1000>,
    pub led_user: LedUser,
    pub sampler: Sampler,
}

impl System {
    /// Initialize system abstraction
    ///
    /// # Panics
    ///
    /// The system can be initialized only once. It panics otherwise.
    #[must_use]
    pub fn init(mut cp: CorePeripherals, dp: DevicePeripherals) -> Self {
        enable_cache(&mut cp);

        let board = daisy::Board::take().unwrap();
        let ccdr = daisy::board_freeze_clocks!(board, dp);
        let pins = daisy::board_split_gpios!(board, ccdr, dp);

        let mut delay = DelayFromCountDownTimer::new(dp.TIM2.timer(
            100.Hz(),
            ccdr.peripheral.TIM2,
            &ccdr.clocks,
        ));

        let adc = {
            let (mut adc_1, _) = hal::adc::adc12(
                dp.ADC1,
                dp.ADC2,
                &mut delay,
                ccdr.peripheral.ADC12,
                &ccdr.clocks,
            );
            adc_1.set_resolution(Resolution::SIXTEENBIT);
            adc_1.set_sample_time(AdcSampleTime::T_16);
            adc_1.enable()
        };

        let mono = Systick::new(cp.SYST, 480_000_000);
        let led_user = daisy::board_split_leds!(pins).USER;
        let sampler = Sampler::new(
            SamplerPins {
                x_axis: pins.GPIO.PIN_C4.into_analog(),
                y_axis: pins.GPIO.PIN_C3.into_analog(),
                button: pins.GPIO.PIN_B10.into_floating_input(),
            },
            adc,
        );

        Self {
            mono,
            led_user,
            sampler,
        }
    }
}

/// AN5212: Improve application performance when fetching instruction and
/// data, from both internal andexternal memories.
fn enable_cache(cp: &mut CorePeripherals) {
    cp.SCB.enable_icache();
    cp.SCB.enable_dcache(&mut cp.CPUID);
}
