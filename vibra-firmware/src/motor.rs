//! RP2040 motor line

use embassy_rp::gpio::Output;

use vibra_hal::MotorOutput;

/// Vibration motor switched by a GPIO through a transistor (active high)
pub struct RpMotorPin {
    pin: Output<'static>,
}

impl RpMotorPin {
    pub fn new(pin: Output<'static>) -> Self {
        Self { pin }
    }
}

impl MotorOutput for RpMotorPin {
    fn set_on(&mut self) {
        self.pin.set_high();
    }

    fn set_off(&mut self) {
        self.pin.set_low();
    }

    fn is_on(&self) -> bool {
        self.pin.is_set_high()
    }
}
