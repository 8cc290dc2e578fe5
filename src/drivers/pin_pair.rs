//! Pin slot list and active pin-pair selection.
//!
//! The trigger configuration holds [`PIN_SLOTS`] channel indices, read as
//! consecutive pairs `(0,1) (2,3) (4,5)`.  The MAP2 only uses one pair: the
//! first one whose two slots are both valid.

use crate::error::ConfigError;

/// Number of pin slots in the trigger configuration (three pairs).
pub const PIN_SLOTS: usize = 6;

/// Sentinel for an unused slot.
pub const PIN_UNSET: i8 = -1;

/// Channels must fit the 32-bit channel-group bitmask.
pub const MAX_CHANNEL: i8 = 31;

/// Fixed-capacity ordered pin slot list.
pub type PinList = [i8; PIN_SLOTS];

/// All slots unset.
pub const NO_PINS: PinList = [PIN_UNSET; PIN_SLOTS];

/// The two channels wired to the MAP2 inputs.
///
/// Within a slot pair the lower slot drives input 2 (power / keep-alive)
/// and the upper slot drives input 1 (shutter).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinPair {
    shutter: u8,
    power: u8,
}

impl PinPair {
    /// Scan `pins` for the first pair of consecutive valid slots.
    pub fn find_first(pins: &PinList) -> Result<Self, ConfigError> {
        pins.chunks_exact(2)
            .find_map(|pair| match (channel(pair[0]), channel(pair[1])) {
                (Some(power), Some(shutter)) => Some(Self { shutter, power }),
                _ => None,
            })
            .ok_or(ConfigError::NoConsecutivePair)
    }

    /// Channel driving MAP2 input 1.
    pub fn shutter(&self) -> u8 {
        self.shutter
    }

    /// Channel driving MAP2 input 2.
    pub fn power(&self) -> u8 {
        self.power
    }

    /// Bitmask of both channels, as handed to the channel-group initialiser.
    pub fn channel_mask(&self) -> u32 {
        (1u32 << self.shutter) | (1u32 << self.power)
    }
}

fn channel(slot: i8) -> Option<u8> {
    (0..=MAX_CHANNEL).contains(&slot).then_some(slot as u8)
}
