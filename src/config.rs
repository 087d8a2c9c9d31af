//! LED configuration parameters.
//!
//! Board wiring and fade timing.  Defaults come from [`crate::pins`] and
//! [`DEFAULT_DELAY_MS`]; a JSON document may override any subset.

use serde::{Deserialize, Serialize};

use crate::controller::DEFAULT_DELAY_MS;
use crate::error::ConfigError;
use crate::pins;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LedConfig {
    // --- Wiring ---
    /// GPIO driving the red LED.
    pub red_gpio: i32,
    /// GPIO driving the green LED.
    pub green_gpio: i32,
    /// GPIO driving the blue LED.
    pub blue_gpio: i32,

    // --- Timing ---
    /// Fade step delay used when a fade call passes 0 (milliseconds).
    pub default_delay_ms: u16,
    /// PWM carrier frequency (Hz)
    pub pwm_freq_hz: u32,
}

impl Default for LedConfig {
    fn default() -> Self {
        Self {
            red_gpio: pins::LED_R_GPIO,
            green_gpio: pins::LED_G_GPIO,
            blue_gpio: pins::LED_B_GPIO,

            default_delay_ms: DEFAULT_DELAY_MS,
            pwm_freq_hz: pins::LED_PWM_FREQ_HZ,
        }
    }
}

impl LedConfig {
    /// Range-check the fields the hardware layer cannot absorb.
    ///
    /// GPIO numbers and the delay are passed through untouched.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(100..=40_000).contains(&self.pwm_freq_hz) {
            return Err(ConfigError::ValidationFailed(
                "pwm_freq_hz must be 100–40000",
            ));
        }
        Ok(())
    }

    /// Parse and validate a JSON document.  Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json).map_err(|e| {
            log::warn!("LedConfig: rejecting document: {}", e);
            ConfigError::Parse
        })?;
        config.validate()?;
        Ok(config)
    }
}
