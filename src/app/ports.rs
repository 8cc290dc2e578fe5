//! Port traits — the boundary between the trigger logic and the outside world.
//!
//! ```text
//!   flight software ──▶ CameraInterface ──▶ SeagullMap2 ──▶ TriggerPwmPort ──▶ hardware
//! ```
//!
//! [`TriggerPwmPort`] is the driven side: PWM backends implement it and are
//! injected into the driver, so the encoding logic never touches hardware
//! directly.  [`CameraInterface`] is the driving side: the contract every
//! camera trigger backend offers to its caller.

use crate::error::PwmError;

// ───────────────────────────────────────────────────────────────
// PWM output port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port for the trigger PWM channel group.
///
/// Levels are pulse widths in microseconds.  The driver clamps every level
/// before calling [`set`](Self::set); backends may assume `1000..=2000`.
pub trait TriggerPwmPort {
    /// Prepare the channels in `channel_mask` (bit `n` = channel `n`) for output.
    fn init(&mut self, channel_mask: u32) -> Result<(), PwmError>;

    /// Command a channel's output level.  Fire-and-forget.
    fn set(&mut self, channel: u8, level_us: u16);

    /// Release the channel group.
    fn deinit(&mut self);
}

// ───────────────────────────────────────────────────────────────
// Camera interface (driving port: flight software → trigger backend)
// ───────────────────────────────────────────────────────────────

/// Generic camera trigger contract.
///
/// None of the calls block or report success: a momentary shutter press is
/// `trigger(true)` followed later by `trigger(false)`, and the heartbeat
/// cadence belongs to the caller.
pub trait CameraInterface {
    /// Drive the shutter line to its shoot (`true`) or idle (`false`) level.
    fn trigger(&mut self, enable: bool);

    /// One half-period of the keep-alive heartbeat.  Callers alternate
    /// `signal_on` at a steady rate to stop the camera from sleeping.
    fn keep_alive(&mut self, _signal_on: bool) {}

    /// Press (`true`) or release (`false`) the camera's power control.
    fn turn_on_off(&mut self, _enable: bool) {}

    /// Log the interface configuration.
    fn info(&self);

    /// Whether [`turn_on_off`](Self::turn_on_off) does anything.
    fn has_power_control(&self) -> bool {
        false
    }

    /// Whether the camera is believed to be powered.
    fn is_powered_on(&self) -> bool {
        true
    }
}
