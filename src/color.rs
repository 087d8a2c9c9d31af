//! Packed 24-bit colour values.

use crate::channel::{Channel, Intensity};

/// Colour as one intensity per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub red: Intensity,
    pub green: Intensity,
    pub blue: Intensity,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(red: Intensity, green: Intensity, blue: Intensity) -> Self {
        Self { red, green, blue }
    }

    /// Decode `0xRRGGBB`.  Bits above bit 23 are ignored.
    pub const fn from_packed(color: u32) -> Self {
        Self {
            red: ((color & 0x00FF_0000) >> 16) as u8,
            green: ((color & 0x0000_FF00) >> 8) as u8,
            blue: (color & 0x0000_00FF) as u8,
        }
    }

    pub const fn to_packed(self) -> u32 {
        ((self.red as u32) << 16) | ((self.green as u32) << 8) | self.blue as u32
    }

    pub const fn channel(self, channel: Channel) -> Intensity {
        match channel {
            Channel::Red => self.red,
            Channel::Green => self.green,
            Channel::Blue => self.blue,
        }
    }
}

impl From<u32> for Rgb {
    fn from(color: u32) -> Self {
        Self::from_packed(color)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        Self { red, green, blue }
    }
}
