//! GPIO / peripheral pin assignments for the trigger output header.
//!
//! Single source of truth: the LEDC backend references this module rather
//! than hard-coding pin numbers.  Logical trigger channel `n` is wired to
//! `TRIGGER_OUTPUT_GPIOS[n]` and driven by LEDC channel `n`.

// ---------------------------------------------------------------------------
// Trigger outputs (servo-style PWM into the MAP2 inputs)
// ---------------------------------------------------------------------------

/// GPIO for each logical trigger channel, indexed by channel number.
pub const TRIGGER_OUTPUT_GPIOS: [i32; 8] = [1, 2, 3, 4, 5, 6, 7, 8];

/// Number of logical trigger channels the board exposes.
pub const TRIGGER_OUTPUT_COUNT: usize = TRIGGER_OUTPUT_GPIOS.len();

// ---------------------------------------------------------------------------
// PWM configuration
// ---------------------------------------------------------------------------

/// LEDC timer resolution (bits).  14-bit gives ~1.2 µs steps at 50 Hz.
pub const TRIGGER_PWM_RESOLUTION_BITS: u32 = 14;
/// Frame rate expected by the MAP2 inputs (standard RC servo frame).
pub const TRIGGER_PWM_FREQ_HZ: u32 = 50;
