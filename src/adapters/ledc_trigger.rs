//! LEDC-backed trigger output adapter.
//!
//! Implements [`TriggerPwmPort`] on top of the raw LEDC helpers in
//! [`hw_init`].  Tracks which channels belong to the active group so that
//! writes to anything else are dropped instead of reaching an unconfigured
//! peripheral.

use log::{info, warn};

use crate::app::ports::TriggerPwmPort;
use crate::drivers::hw_init;
use crate::error::PwmError;

pub struct LedcTriggerPort {
    freq_hz: u32,
    active_mask: u32,
}

impl LedcTriggerPort {
    pub fn new(freq_hz: u32) -> Self {
        Self {
            freq_hz,
            active_mask: 0,
        }
    }

    /// Channels currently configured for output.
    pub fn active_mask(&self) -> u32 {
        self.active_mask
    }

    fn channels(mask: u32) -> impl Iterator<Item = u8> {
        (0..32u8).filter(move |&ch| mask & (1u32 << ch) != 0)
    }
}

impl TriggerPwmPort for LedcTriggerPort {
    fn init(&mut self, channel_mask: u32) -> Result<(), PwmError> {
        hw_init::init_trigger_timer(self.freq_hz)?;
        for channel in Self::channels(channel_mask) {
            hw_init::init_trigger_channel(channel)?;
        }
        self.active_mask = channel_mask;
        info!("LEDC trigger: channel group 0b{:b} ready", channel_mask);
        Ok(())
    }

    fn set(&mut self, channel: u8, level_us: u16) {
        if channel >= 32 || self.active_mask & (1u32 << channel) == 0 {
            warn!("LEDC trigger: channel {} not in active group, write dropped", channel);
            return;
        }
        hw_init::ledc_set_pulse(channel, level_us, self.freq_hz);
    }

    fn deinit(&mut self) {
        for channel in Self::channels(self.active_mask) {
            hw_init::ledc_release(channel);
        }
        self.active_mask = 0;
    }
}
