//! RGB LED demo firmware.
//!
//! Brings up the LEDC peripheral from the default [`LedConfig`] and cycles
//! the LED through solid colours and fades forever.
#![deny(unused_must_use)]

use anyhow::Result;
use embedded_hal::delay::DelayNs;
use log::info;

use rgbled::config::LedConfig;
use rgbled::drivers::delay::SysDelay;
use rgbled::drivers::ledc::ledc_rgb_led;
use rgbled::{Channel, ChannelMask};

const PALETTE: [u32; 4] = [0xFF_00_00, 0x00_FF_00, 0x00_00_FF, 0xFF_FF_FF];

fn main() -> Result<()> {
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("rgbled demo v{}", env!("CARGO_PKG_VERSION"));

    let config = LedConfig::default();
    let mut led = ledc_rgb_led(&config, SysDelay::new())?;
    let mut delay = SysDelay::new();

    loop {
        for color in PALETTE {
            led.set_packed_color(color);
            delay.delay_ms(500);
        }
        led.off();

        for channel in Channel::ALL {
            info!("demo: fading {}", channel);
            led.fade_channel(channel, 0, 255, 0);
            led.fade_channel(channel, 255, 0, 0);
        }

        info!("demo: fading magenta ({}ms)", led.fade_duration_ms(0, 255, 2));
        led.fade_channels(Channel::Red | Channel::Blue, 0, 255, 2);
        led.fade_channels(ChannelMask::ALL, 255, 0, 2);
    }
}
