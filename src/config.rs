//! Trigger configuration parameters
//!
//! Pin slots and the timing the firmware entry point uses around the driver.
//! Values can be supplied as JSON; every load is validated.

use serde::{Deserialize, Serialize};

use crate::drivers::pin_pair::{MAX_CHANNEL, PIN_UNSET, PinList};
use crate::error::ConfigError;
use crate::pins;

/// Highest frame rate at which a 2000 µs pulse still fits the frame.
pub const MAX_PWM_FREQUENCY_HZ: u32 = 400;

/// Core trigger configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TriggerConfig {
    /// Channel index per slot, `-1` = unused.  Slots pair up as (0,1) (2,3) (4,5).
    pub pins: PinList,
    /// Output frame rate in Hz
    pub pwm_frequency_hz: u32,
    /// How long the power input is held at ON_OFF for one power toggle (ms)
    pub power_pulse_ms: u32,
    /// Half-period of the keep-alive heartbeat (ms)
    pub keep_alive_interval_ms: u32,
}

impl Default for TriggerConfig {
    fn default() -> Self {
        Self {
            // Outputs 6 and 5: power on channel 5, shutter on channel 4.
            pins: [5, 4, PIN_UNSET, PIN_UNSET, PIN_UNSET, PIN_UNSET],
            pwm_frequency_hz: pins::TRIGGER_PWM_FREQ_HZ,
            power_pulse_ms: 1000,
            keep_alive_interval_ms: 500,
        }
    }
}

impl TriggerConfig {
    /// Decode and validate a JSON document.  Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json).map_err(|_| ConfigError::Corrupted)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject out-of-range values rather than clamping them.
    ///
    /// A pin list without a usable pair is *not* rejected here: the driver
    /// reports that itself and stays inert.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pins.iter().any(|&p| !(PIN_UNSET..=MAX_CHANNEL).contains(&p)) {
            return Err(ConfigError::ValidationFailed("pins must be -1 or 0..=31"));
        }
        if self.pwm_frequency_hz == 0 || self.pwm_frequency_hz > MAX_PWM_FREQUENCY_HZ {
            return Err(ConfigError::ValidationFailed("pwm_frequency_hz must be 1..=400"));
        }
        if self.power_pulse_ms == 0 {
            return Err(ConfigError::ValidationFailed("power_pulse_ms must be > 0"));
        }
        if self.keep_alive_interval_ms == 0 {
            return Err(ConfigError::ValidationFailed("keep_alive_interval_ms must be > 0"));
        }
        Ok(())
    }
}
