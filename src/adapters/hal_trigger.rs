//! `embedded-hal` trigger output adapter.
//!
//! Implements [`TriggerPwmPort`] for any set of
//! [`SetDutyCycle`](embedded_hal::pwm::SetDutyCycle) channels, so boards
//! whose HAL already exposes PWM channels can host the driver without a
//! dedicated backend.  Logical channel `n` is `channels[n]`; pulse widths
//! become a duty fraction of the frame period.

use embedded_hal::pwm::SetDutyCycle;
use heapless::Vec;
use log::warn;

use crate::app::ports::TriggerPwmPort;
use crate::error::PwmError;

/// Most channels one adapter can hold.
pub const MAX_HAL_CHANNELS: usize = 8;

/// Standard 50 Hz servo frame.
pub const DEFAULT_FRAME_US: u16 = 20_000;

pub struct HalTriggerPort<C: SetDutyCycle> {
    channels: Vec<C, MAX_HAL_CHANNELS>,
    frame_us: u16,
    active_mask: u32,
}

impl<C: SetDutyCycle> HalTriggerPort<C> {
    /// The timers behind `channels` must already run at the frame rate.
    pub fn new(channels: Vec<C, MAX_HAL_CHANNELS>) -> Self {
        Self {
            channels,
            frame_us: DEFAULT_FRAME_US,
            active_mask: 0,
        }
    }

    /// Override the frame period (µs) used to convert pulse widths.
    #[must_use]
    pub fn with_frame_us(mut self, frame_us: u16) -> Self {
        self.frame_us = frame_us.max(1);
        self
    }

    pub fn channel(&self, channel: u8) -> Option<&C> {
        self.channels.get(usize::from(channel))
    }

    pub fn active_mask(&self) -> u32 {
        self.active_mask
    }

    fn is_active(&self, channel: u8) -> bool {
        channel < 32 && self.active_mask & (1u32 << channel) != 0
    }
}

impl<C: SetDutyCycle> TriggerPwmPort for HalTriggerPort<C> {
    fn init(&mut self, channel_mask: u32) -> Result<(), PwmError> {
        if let Some(missing) =
            (0..32u8).find(|&ch| channel_mask & (1u32 << ch) != 0 && usize::from(ch) >= self.channels.len())
        {
            return Err(PwmError::ChannelUnavailable(missing));
        }
        self.active_mask = channel_mask;
        Ok(())
    }

    fn set(&mut self, channel: u8, level_us: u16) {
        if !self.is_active(channel) {
            warn!("HAL trigger: channel {} not in active group, write dropped", channel);
            return;
        }
        let frame_us = self.frame_us;
        if let Some(out) = self.channels.get_mut(usize::from(channel)) {
            if let Err(e) = out.set_duty_cycle_fraction(level_us.min(frame_us), frame_us) {
                warn!("HAL trigger: channel {} write failed: {:?}", channel, e);
            }
        }
    }

    fn deinit(&mut self) {
        for (channel, out) in self.channels.iter_mut().enumerate() {
            if channel < 32 && self.active_mask & (1u32 << channel) != 0 {
                if let Err(e) = out.set_duty_cycle_fully_off() {
                    warn!("HAL trigger: channel {} release failed: {:?}", channel, e);
                }
            }
        }
        self.active_mask = 0;
    }
}
