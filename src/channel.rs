//! Colour channels and channel sets.
//!
//! Each [`Channel`] carries a single-bit value (red = 1, green = 2,
//! blue = 4) so channels combine with `|` into a [`ChannelMask`].  The
//! mask only ever holds those three bits; anything above is dropped on
//! construction.

use core::ops::{BitOr, BitOrAssign};

/// PWM duty cycle of one channel, 0 (off) to 255 (fully on).
pub type Intensity = u8;

/// One colour line of the LED.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Channel {
    Red = 0b001,
    Green = 0b010,
    Blue = 0b100,
}

impl Channel {
    /// All channels, in hardware write order.
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    /// Return the bitmask for this channel.
    pub const fn mask(self) -> u8 {
        self as u8
    }
}

impl core::fmt::Display for Channel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Red => write!(f, "red"),
            Self::Green => write!(f, "green"),
            Self::Blue => write!(f, "blue"),
        }
    }
}

/// A set of channels targeted jointly by a fade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ChannelMask(u8);

impl ChannelMask {
    const VALID_BITS: u8 = 0b111;

    pub const NONE: Self = Self(0);
    pub const RED: Self = Self(Channel::Red.mask());
    pub const GREEN: Self = Self(Channel::Green.mask());
    pub const BLUE: Self = Self(Channel::Blue.mask());
    pub const ALL: Self = Self(Self::VALID_BITS);

    /// Build a mask from raw bits, ignoring bits that name no channel.
    pub const fn from_bits_truncate(bits: u8) -> Self {
        Self(bits & Self::VALID_BITS)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn contains(self, channel: Channel) -> bool {
        self.0 & channel.mask() != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn insert(&mut self, channel: Channel) {
        self.0 |= channel.mask();
    }

    pub fn remove(&mut self, channel: Channel) {
        self.0 &= !channel.mask();
    }

    /// Channels in the set, red first, then green, then blue.
    pub fn iter(self) -> impl Iterator<Item = Channel> {
        Channel::ALL.into_iter().filter(move |c| self.contains(*c))
    }
}

impl From<Channel> for ChannelMask {
    fn from(channel: Channel) -> Self {
        Self(channel.mask())
    }
}

impl BitOr for ChannelMask {
    type Output = ChannelMask;

    fn bitor(self, rhs: ChannelMask) -> ChannelMask {
        ChannelMask(self.0 | rhs.0)
    }
}

impl BitOr<Channel> for ChannelMask {
    type Output = ChannelMask;

    fn bitor(self, rhs: Channel) -> ChannelMask {
        self | ChannelMask::from(rhs)
    }
}

impl BitOr for Channel {
    type Output = ChannelMask;

    fn bitor(self, rhs: Channel) -> ChannelMask {
        ChannelMask::from(self) | rhs
    }
}

impl BitOr<ChannelMask> for Channel {
    type Output = ChannelMask;

    fn bitor(self, rhs: ChannelMask) -> ChannelMask {
        ChannelMask::from(self) | rhs
    }
}

impl BitOrAssign for ChannelMask {
    fn bitor_assign(&mut self, rhs: ChannelMask) {
        self.0 |= rhs.0;
    }
}

impl BitOrAssign<Channel> for ChannelMask {
    fn bitor_assign(&mut self, rhs: Channel) {
        self.insert(rhs);
    }
}
