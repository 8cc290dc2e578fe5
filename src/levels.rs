//! PWM levels understood by the Seagull MAP2 converter.
//!
//! Pulse widths in microseconds, taken from the MAP2 manual's Multiport
//! input table.  Input 1 carries shutter commands, input 2 carries power
//! and keep-alive commands.  Every value leaves the driver through
//! [`constrain`].

/// Lowest pulse width the outputs ever carry.
pub const PWM_MIN: u16 = 1000;
/// Highest pulse width the outputs ever carry.
pub const PWM_MAX: u16 = 2000;

// ---------------------------------------------------------------------------
// Input 1 (shutter)
// ---------------------------------------------------------------------------

/// Output level at power-up.  Below [`PWM_MIN`], so it is emitted as 1000.
pub const DISARMED: u16 = 900;
pub const ON: u16 = 1100;
pub const AUTOFOCUS_SHOOT: u16 = 1300;
/// Idle level for both inputs.
pub const NEUTRAL: u16 = 1500;
pub const INSTANT_SHOOT: u16 = 1700;
pub const OFF: u16 = 1900;

// ---------------------------------------------------------------------------
// Input 2 (power / keep-alive)
// ---------------------------------------------------------------------------

pub const KEEP_ALIVE: u16 = 1700;
pub const ON_OFF: u16 = 1900;

/// Clamp a requested level into `[PWM_MIN, PWM_MAX]`.
pub const fn constrain(level: u16) -> u16 {
    if level < PWM_MIN {
        PWM_MIN
    } else if level > PWM_MAX {
        PWM_MAX
    } else {
        level
    }
}
