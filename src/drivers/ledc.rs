//! ESP32 LEDC PWM driver for the RGB LED.
//!
//! One 8-bit LEDC timer feeds three LEDC channels, one per colour.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: raw `ledc_*` sys calls.
//! On host/test: tracks configuration and duty in-memory only.

#[cfg(target_os = "espidf")]
use esp_idf_sys::*;

use embedded_hal::delay::DelayNs;
use log::info;

use crate::channel::Intensity;
use crate::config::LedConfig;
use crate::controller::RgbLed;
use crate::error::{self, HwInitError};
use crate::pins;
use crate::ports::PwmOutput;

/// RGB LED driven by three LEDC channels.
pub type LedcRgbLed<D> = RgbLed<LedcChannel, LedcChannel, LedcChannel, D>;

// ── Timer ─────────────────────────────────────────────────────

/// Configure LEDC timer 0 (8-bit, `freq_hz`) shared by the LED channels.
#[cfg(target_os = "espidf")]
pub fn init_ledc_timer(freq_hz: u32) -> Result<(), HwInitError> {
    let timer = ledc_timer_config_t {
        speed_mode: ledc_mode_t_LEDC_LOW_SPEED_MODE,
        timer_num: ledc_timer_t_LEDC_TIMER_0,
        duty_resolution: ledc_timer_bit_t_LEDC_TIMER_8_BIT,
        freq_hz,
        clk_cfg: soc_periph_ledc_clk_src_legacy_t_LEDC_AUTO_CLK,
        ..Default::default()
    };
    // SAFETY: called once from the single main-task context before any
    // channel is configured.
    let ret = unsafe { ledc_timer_config(&timer) };
    if ret != ESP_OK as i32 {
        return Err(HwInitError::LedcTimerFailed(ret));
    }
    info!("ledc: timer 0 configured ({} Hz, {}-bit)", freq_hz, pins::PWM_RESOLUTION_BITS);
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
pub fn init_ledc_timer(freq_hz: u32) -> Result<(), HwInitError> {
    info!("ledc(sim): timer init skipped ({} Hz, {}-bit)", freq_hz, pins::PWM_RESOLUTION_BITS);
    Ok(())
}

// ── Channel ───────────────────────────────────────────────────

/// One LEDC channel bound to one GPIO.
pub struct LedcChannel {
    channel: u32,
    gpio: i32,
    #[cfg(not(target_os = "espidf"))]
    configured: bool,
    #[cfg(not(target_os = "espidf"))]
    duty: Intensity,
}

impl LedcChannel {
    pub fn new(channel: u32, gpio: i32) -> Self {
        Self {
            channel,
            gpio,
            #[cfg(not(target_os = "espidf"))]
            configured: false,
            #[cfg(not(target_os = "espidf"))]
            duty: 0,
        }
    }

    pub fn channel(&self) -> u32 {
        self.channel
    }

    pub fn gpio(&self) -> i32 {
        self.gpio
    }

    /// Last duty written (simulation only).
    #[cfg(not(target_os = "espidf"))]
    pub fn duty(&self) -> Intensity {
        self.duty
    }

    #[cfg(not(target_os = "espidf"))]
    pub fn is_configured(&self) -> bool {
        self.configured
    }
}

#[cfg(target_os = "espidf")]
impl PwmOutput for LedcChannel {
    fn configure_output(&mut self) {
        let cfg = ledc_channel_config_t {
            speed_mode: ledc_mode_t_LEDC_LOW_SPEED_MODE,
            channel: self.channel,
            timer_sel: ledc_timer_t_LEDC_TIMER_0,
            gpio_num: self.gpio,
            duty: 0,
            hpoint: 0,
            ..Default::default()
        };
        // SAFETY: the controller owns this channel exclusively; called once
        // from the main-task context.
        let ret = unsafe { ledc_channel_config(&cfg) };
        if ret != ESP_OK as i32 {
            log::error!(
                "ledc: {} (ch={}, gpio={})",
                HwInitError::LedcChannelFailed(ret),
                self.channel,
                self.gpio
            );
        }
    }

    fn write_duty(&mut self, value: Intensity) {
        // SAFETY: channel configured in configure_output(); duty register
        // writes are race-free since only the owning controller calls this.
        unsafe {
            ledc_set_duty(ledc_mode_t_LEDC_LOW_SPEED_MODE, self.channel, u32::from(value));
            ledc_update_duty(ledc_mode_t_LEDC_LOW_SPEED_MODE, self.channel);
        }
    }
}

#[cfg(not(target_os = "espidf"))]
impl PwmOutput for LedcChannel {
    fn configure_output(&mut self) {
        log::trace!("ledc(sim): ch{} -> gpio{} configured", self.channel, self.gpio);
        self.configured = true;
    }

    fn write_duty(&mut self, value: Intensity) {
        log::trace!("ledc(sim): ch{} duty={}", self.channel, value);
        self.duty = value;
    }
}

// ── Assembly ──────────────────────────────────────────────────

/// Validate `config`, start the LEDC timer and build the controller on
/// LEDC channels 0–2 with the configured default delay.
pub fn ledc_rgb_led<D: DelayNs>(config: &LedConfig, delay: D) -> error::Result<LedcRgbLed<D>> {
    config.validate()?;
    init_ledc_timer(config.pwm_freq_hz)?;

    let mut led = RgbLed::new(
        LedcChannel::new(pins::LEDC_CH_LED_R, config.red_gpio),
        LedcChannel::new(pins::LEDC_CH_LED_G, config.green_gpio),
        LedcChannel::new(pins::LEDC_CH_LED_B, config.blue_gpio),
        delay,
    );
    led.set_default_delay(config.default_delay_ms);
    info!(
        "ledc: RGB LED on gpio r={} g={} b={}",
        config.red_gpio, config.green_gpio, config.blue_gpio
    );
    Ok(led)
}
