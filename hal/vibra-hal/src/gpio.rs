//! Motor drive line abstraction
//!
//! Small vibration motors (ERM or coin type) are switched through a
//! transistor on a single GPIO. Chip-specific HALs implement this trait
//! on their output pin type.

/// Digital output that switches the vibration motor
pub trait MotorOutput {
    /// Energize the motor
    fn set_on(&mut self);

    /// De-energize the motor
    fn set_off(&mut self);

    /// Drive the motor to a specific state
    fn set_state(&mut self, on: bool) {
        if on {
            self.set_on();
        } else {
            self.set_off();
        }
    }

    /// Check if the motor is currently energized
    fn is_on(&self) -> bool;
}

impl<T: MotorOutput + ?Sized> MotorOutput for &mut T {
    fn set_on(&mut self) {
        (**self).set_on();
    }

    fn set_off(&mut self) {
        (**self).set_off();
    }

    fn is_on(&self) -> bool {
        (**self).is_on()
    }
}
