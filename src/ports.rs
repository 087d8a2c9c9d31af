//! Port traits: the boundary between the LED controller and the hardware.
//!
//! ```text
//!   Driver ──▶ PwmOutput ──▶ RgbLed
//!   Delay  ──▶ DelayNs   ──▶ RgbLed
//! ```
//!
//! Drivers in [`crate::drivers`] implement [`PwmOutput`]; the controller
//! consumes it via generics so it never touches registers directly.  The
//! blocking wait between fade steps is `embedded_hal::delay::DelayNs`.

use crate::channel::Intensity;

// ───────────────────────────────────────────────────────────────
// PWM output port (controller → hardware)
// ───────────────────────────────────────────────────────────────

/// One PWM-capable output pin owned by the controller.
///
/// Both operations are infallible here.  A driver whose HAL can fail
/// must log and absorb the failure itself.
pub trait PwmOutput {
    /// Put the pin into output mode.  Called once, when the controller
    /// takes ownership of the pin.
    fn configure_output(&mut self);

    /// Write `value` as the pin's duty cycle (0 = off, 255 = fully on).
    fn write_duty(&mut self, value: Intensity);
}

impl<T: PwmOutput + ?Sized> PwmOutput for &mut T {
    fn configure_output(&mut self) {
        (**self).configure_output();
    }

    fn write_duty(&mut self, value: Intensity) {
        (**self).write_duty(value);
    }
}
