//! Unified error types for the MAP2 trigger driver.
//!
//! A single `Error` enum that every subsystem converts into, so the firmware
//! entry point can funnel failures through one type.  All variants are `Copy`
//! and carry only static data.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level error
// ---------------------------------------------------------------------------

/// Every fallible operation in the crate funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Trigger configuration is invalid or could not be loaded.
    Config(ConfigError),
    /// The PWM output backend rejected a request.
    Pwm(PwmError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Pwm(e) => write!(f, "pwm: {e}"),
        }
    }
}

impl std::error::Error for Error {}

// ---------------------------------------------------------------------------
// Configuration errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// The pin list holds no pair of consecutive valid slots.
    NoConsecutivePair,
    /// A config field failed range validation.
    /// The `&'static str` names the field and the constraint.
    ValidationFailed(&'static str),
    /// Serialized config could not be decoded.
    Corrupted,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoConsecutivePair => write!(
                f,
                "bad pin configuration - Seagull MAP2 requires 2 consecutive pins for control"
            ),
            Self::ValidationFailed(msg) => write!(f, "validation failed: {msg}"),
            Self::Corrupted => write!(f, "config corrupted"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

// ---------------------------------------------------------------------------
// PWM backend errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PwmError {
    /// The backend has no output wired to this logical channel.
    ChannelUnavailable(u8),
    /// Peripheral configuration failed (raw ESP-IDF return code).
    InitFailed(i32),
}

impl fmt::Display for PwmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ChannelUnavailable(ch) => write!(f, "no output for channel {ch}"),
            Self::InitFailed(rc) => write!(f, "channel init failed (rc={rc})"),
        }
    }
}

impl std::error::Error for PwmError {}

impl From<PwmError> for Error {
    fn from(e: PwmError) -> Self {
        Self::Pwm(e)
    }
}
