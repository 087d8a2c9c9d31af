//! embedded-hal PWM adapter.
//!
//! Wraps any `embedded_hal::pwm::SetDutyCycle` channel so it can serve as
//! a [`PwmOutput`] pin.  8-bit intensities are scaled onto the channel's
//! own duty range, so HALs with 10- or 16-bit timers work unchanged.

use embedded_hal::pwm::SetDutyCycle;
use log::warn;

use crate::channel::Intensity;
use crate::error::ActuatorError;
use crate::ports::PwmOutput;

pub struct HalPwm<P> {
    pwm: P,
}

impl<P: SetDutyCycle> HalPwm<P> {
    pub fn new(pwm: P) -> Self {
        Self { pwm }
    }

    pub fn inner(&self) -> &P {
        &self.pwm
    }

    pub fn into_inner(self) -> P {
        self.pwm
    }
}

impl<P: SetDutyCycle> PwmOutput for HalPwm<P> {
    fn configure_output(&mut self) {
        if let Err(e) = self.pwm.set_duty_cycle_fully_off() {
            warn!("HalPwm: {} while configuring output: {:?}", ActuatorError::PwmWriteFailed, e);
        }
    }

    fn write_duty(&mut self, value: Intensity) {
        let result = self
            .pwm
            .set_duty_cycle_fraction(u16::from(value), u16::from(Intensity::MAX));
        if let Err(e) = result {
            warn!("HalPwm: {} (duty={}): {:?}", ActuatorError::PwmWriteFailed, value, e);
        }
    }
}
