//! PWM driver for an RGB LED.
//!
//! Drives an integrated tri-colour LED, or three discrete red/green/blue
//! LEDs, through three PWM outputs.  [`RgbLed`] offers per-channel and
//! whole-colour setters plus blocking linear fades over any subset of
//! channels.
//!
//! Hardware is reached only through [`ports::PwmOutput`] and
//! `embedded_hal::delay::DelayNs`.  ESP-IDF-specific code lives in
//! [`drivers`] and is guarded by `#[cfg(target_os = "espidf")]`; on the
//! host the same drivers run as in-memory simulations.

#![deny(unused_must_use)]

pub mod channel;
pub mod color;
pub mod config;
pub mod controller;
pub mod drivers;
pub mod error;
pub mod pins;
pub mod ports;

pub use channel::{Channel, ChannelMask, Intensity};
pub use color::Rgb;
pub use controller::{DEFAULT_DELAY_MS, RgbLed};
pub use ports::PwmOutput;
