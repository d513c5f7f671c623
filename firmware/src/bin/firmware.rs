#![no_main]
#![no_std]

use kiipeli_firmware as _; // global logger + panicking-behavior

#[rtic::app(device = stm32h7xx_hal::pac, peripherals = true, dispatchers = [EXTI0])]
mod app {
    use daisy::led::{Led, LedUser};
    use fugit::ExtU64;
    use systick_monotonic::Systick;

    use kiipeli_control::Joystick;
    use kiipeli_firmware::system::{Channel, Sampler, System, AXIS_HIGH_LIMIT, AXIS_LOW_LIMIT};

    #[monotonic(binds = SysTick, default = true)]
    type Mono = Systick<1000>; // 1 kHz / 1 ms granularity

    #[shared]
    struct Shared {}

    #[local]
    struct Local {
        status_led: LedUser,
        joystick: Joystick<Channel>,
        sampler: Sampler,
    }

    #[init]
    fn init(cx: init::Context) -> (Shared, Local, init::Monotonics) {
        defmt::info!("INIT");

        let system = System::init(cx.core, cx.device);
        let mono = system.mono;
        let status_led = system.led_user;
        let mut sampler = system.sampler;

        let joystick = Joystick::try_new(
            Channel::XAxis,
            Channel::YAxis,
            Channel::Button,
            AXIS_LOW_LIMIT,
            AXIS_HIGH_LIMIT,
        )
        .unwrap();
        joystick.begin(&mut sampler);

        control::spawn().unwrap();

        (
            Shared {},
            Local {
                status_led,
                joystick,
                sampler,
            },
            init::Monotonics(mono),
        )
    }

    #[task(local = [joystick, sampler, status_led])]
    fn control(cx: control::Context) {
        control::spawn_after(1.millis()).unwrap();

        let inputs = cx.local.joystick.read(cx.local.sampler);
        if inputs.any_pulse() {
            defmt::info!("Pulse: {}", inputs.pulses());
        }

        if inputs.state().is_empty() {
            cx.local.status_led.off();
        } else {
            cx.local.status_led.on();
        }
    }
}
