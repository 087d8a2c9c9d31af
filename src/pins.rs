//! Default GPIO / LEDC assignments for the RGB LED.
//!
//! Used by [`LedConfig::default`](crate::config::LedConfig) and the LEDC
//! driver.  Boards with different wiring override the GPIOs in config.

// ---------------------------------------------------------------------------
// RGB LED (integrated tri-colour or three discrete LEDs)
// ---------------------------------------------------------------------------

pub const LED_R_GPIO: i32 = 11;
pub const LED_G_GPIO: i32 = 12;
pub const LED_B_GPIO: i32 = 13;

/// LEDC channels driving the red, green and blue pins.
pub const LEDC_CH_LED_R: u32 = 0;
pub const LEDC_CH_LED_G: u32 = 1;
pub const LEDC_CH_LED_B: u32 = 2;

// ---------------------------------------------------------------------------
// PWM configuration
// ---------------------------------------------------------------------------

/// LEDC timer resolution (bits).  8-bit gives 0 – 255 duty levels.
pub const PWM_RESOLUTION_BITS: u32 = 8;
/// LEDC frequency for the RGB LED (1 kHz).
pub const LED_PWM_FREQ_HZ: u32 = 1_000;
