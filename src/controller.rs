//! RGB channel controller.
//!
//! Owns the red, green and blue PWM outputs plus the blocking delay used
//! between fade steps, and caches the last intensity written to each
//! channel.  Reads never touch hardware; they return the cache.
//!
//! ## Fade timing
//!
//! A fade from `from` to `to` writes every intensity in `[from, to)`
//! (or `(to, from]` when fading down), waiting `delay_ms` after each,
//! then waits once more and writes `to`.  That last write is outside
//! the loop so `to == 255` and `to == 0` are reached without stepping
//! the `u8` past its range.  Total blocking time is always
//! `(|to - from| + 1) * delay_ms`.

use embedded_hal::delay::DelayNs;
use log::{debug, info, trace};

use crate::channel::{Channel, ChannelMask, Intensity};
use crate::color::Rgb;
use crate::ports::PwmOutput;

/// Inter-step fade delay a new controller starts with (milliseconds).
pub const DEFAULT_DELAY_MS: u16 = 5;

pub struct RgbLed<R, G, B, D> {
    red_pin: R,
    green_pin: G,
    blue_pin: B,
    delay: D,
    red_value: Intensity,
    green_value: Intensity,
    blue_value: Intensity,
    default_delay_ms: u16,
}

impl<R, G, B, D> RgbLed<R, G, B, D>
where
    R: PwmOutput,
    G: PwmOutput,
    B: PwmOutput,
    D: DelayNs,
{
    /// Take ownership of the three pins and configure them as outputs.
    ///
    /// Pins are not checked for duplicates; that is the board's concern.
    pub fn new(mut red_pin: R, mut green_pin: G, mut blue_pin: B, delay: D) -> Self {
        red_pin.configure_output();
        green_pin.configure_output();
        blue_pin.configure_output();
        info!("RgbLed: outputs configured, default delay {}ms", DEFAULT_DELAY_MS);

        Self {
            red_pin,
            green_pin,
            blue_pin,
            delay,
            red_value: 0,
            green_value: 0,
            blue_value: 0,
            default_delay_ms: DEFAULT_DELAY_MS,
        }
    }

    /// Last intensity written to `channel`.
    pub fn intensity(&self, channel: Channel) -> Intensity {
        match channel {
            Channel::Red => self.red_value,
            Channel::Green => self.green_value,
            Channel::Blue => self.blue_value,
        }
    }

    /// Write `value` to the pin behind `channel` and remember it.
    pub fn set_intensity(&mut self, channel: Channel, value: Intensity) {
        trace!("RgbLed: {} <- {}", channel, value);
        match channel {
            Channel::Red => {
                self.red_pin.write_duty(value);
                self.red_value = value;
            }
            Channel::Green => {
                self.green_pin.write_duty(value);
                self.green_value = value;
            }
            Channel::Blue => {
                self.blue_pin.write_duty(value);
                self.blue_value = value;
            }
        }
    }

    /// Set all three channels, red then green then blue.
    pub fn set_color(&mut self, red: Intensity, green: Intensity, blue: Intensity) {
        self.set_intensity(Channel::Red, red);
        self.set_intensity(Channel::Green, green);
        self.set_intensity(Channel::Blue, blue);
    }

    /// Set all three channels from `0xRRGGBB`; higher bits are ignored.
    pub fn set_packed_color(&mut self, color: u32) {
        self.set_rgb(Rgb::from_packed(color));
    }

    pub fn set_rgb(&mut self, color: Rgb) {
        self.set_color(color.red, color.green, color.blue);
    }

    /// Cached intensities of all three channels.
    pub fn color(&self) -> Rgb {
        Rgb::new(self.red_value, self.green_value, self.blue_value)
    }

    pub fn off(&mut self) {
        self.set_color(0, 0, 0);
    }

    /// Fade one channel.  See [`fade_channels`](Self::fade_channels).
    pub fn fade_channel(&mut self, channel: Channel, from: Intensity, to: Intensity, delay_ms: u16) {
        self.fade_channels(channel, from, to, delay_ms);
    }

    /// Step every channel in `mask` together from `from` to `to`, one
    /// intensity level per step, blocking `delay_ms` after each step.
    ///
    /// A `delay_ms` of 0 means "use [`default_delay`](Self::default_delay)".
    /// Channels outside `mask` are not written.
    pub fn fade_channels(
        &mut self,
        mask: impl Into<ChannelMask>,
        from: Intensity,
        to: Intensity,
        delay_ms: u16,
    ) {
        let mask = mask.into();
        let delay_ms = self.effective_delay(delay_ms);
        debug!(
            "RgbLed: fade mask=0b{:03b} {} -> {} step={}ms",
            mask.bits(),
            from,
            to,
            delay_ms
        );

        if from <= to {
            for value in from..to {
                self.write_channels(mask, value);
                self.delay.delay_ms(u32::from(delay_ms));
            }
        } else {
            for value in (to + 1..=from).rev() {
                self.write_channels(mask, value);
                self.delay.delay_ms(u32::from(delay_ms));
            }
        }

        self.delay.delay_ms(u32::from(delay_ms));
        self.write_channels(mask, to);
    }

    /// Blocking time, in milliseconds, that the matching
    /// [`fade_channels`](Self::fade_channels) call would take right now.
    pub fn fade_duration_ms(&self, from: Intensity, to: Intensity, delay_ms: u16) -> u32 {
        (u32::from(from.abs_diff(to)) + 1) * u32::from(self.effective_delay(delay_ms))
    }

    pub fn default_delay(&self) -> u16 {
        self.default_delay_ms
    }

    /// Any value is accepted, including 0 (fades then step without waiting).
    pub fn set_default_delay(&mut self, value: u16) {
        self.default_delay_ms = value;
    }

    fn effective_delay(&self, delay_ms: u16) -> u16 {
        if delay_ms == 0 {
            self.default_delay_ms
        } else {
            delay_ms
        }
    }

    fn write_channels(&mut self, mask: ChannelMask, value: Intensity) {
        for channel in mask.iter() {
            self.set_intensity(channel, value);
        }
    }
}
