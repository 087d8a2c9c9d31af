//! PWM and delay drivers implementing the hardware ports.

pub mod delay;
pub mod ledc;
pub mod pwm;
