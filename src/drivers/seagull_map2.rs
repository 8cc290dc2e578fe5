//! Seagull MAP2 camera-trigger adapter driver.
//!
//! The MAP2 converts two servo-style PWM inputs into a camera's shutter and
//! power/keep-alive lines.  This driver encodes [`CameraInterface`] calls as
//! levels on those two channels (see [`levels`]) and tracks whether the
//! camera has been switched on, because shutter and keep-alive pulses are
//! only sent to a powered camera.
//!
//! ## Misconfiguration
//!
//! Without two consecutive valid pin slots (or if the PWM backend refuses
//! the channel group) construction logs an error and the driver goes inert:
//! it keeps answering calls but never writes a channel again.
//!
//! ## Power flag
//!
//! `turn_on_off(true)` holds the power input at ON_OFF and
//! `turn_on_off(false)` releases it to neutral.  The stored flag flips only
//! on release, so one press/release cycle toggles it once.

use core::fmt::Write as _;

use heapless::String;
use log::{error, info};

use crate::app::ports::{CameraInterface, TriggerPwmPort};
use crate::drivers::pin_pair::{PinList, PinPair};
use crate::error::Error;
use crate::levels;

/// Fixed-capacity buffer for the [`CameraInterface::info`] line.
pub type InfoLine = String<96>;

pub struct SeagullMap2<P: TriggerPwmPort> {
    pwm: P,
    pins: PinList,
    pair: Option<PinPair>,
    camera_is_on: bool,
}

impl<P: TriggerPwmPort> SeagullMap2<P> {
    /// Select the active pin pair from `pins`, initialise its channels and
    /// park both at the disarmed level.  The camera starts off.
    pub fn new(pwm: P, pins: PinList) -> Self {
        let mut driver = Self {
            pwm,
            pins,
            pair: None,
            camera_is_on: false,
        };

        match driver.setup() {
            Ok(pair) => driver.pair = Some(pair),
            Err(e) => error!("Seagull MAP2: {}", e),
        }

        driver
    }

    fn setup(&mut self) -> Result<PinPair, Error> {
        let pair = PinPair::find_first(&self.pins)?;
        self.pwm.init(pair.channel_mask())?;

        let disarmed = levels::constrain(levels::DISARMED);
        self.pwm.set(pair.shutter(), disarmed);
        self.pwm.set(pair.power(), disarmed);

        Ok(pair)
    }

    /// Whether an active pin pair was found and its channels initialised.
    pub fn is_configured(&self) -> bool {
        self.pair.is_some()
    }

    pub fn pin_pair(&self) -> Option<PinPair> {
        self.pair
    }

    /// Pin slots as configured.
    pub fn pins(&self) -> &PinList {
        &self.pins
    }

    /// Pin slots from the highest slot down to slot 0, as [`info`](CameraInterface::info) shows them.
    pub fn pins_reversed(&self) -> PinList {
        let mut pins = self.pins;
        pins.reverse();
        pins
    }

    pub fn info_line(&self) -> InfoLine {
        let mut line = InfoLine::new();
        // Capacity covers six slots of any i8 value.
        let _ = write!(line, "PWM trigger mode (Seagull MAP2), pins enabled :");
        for pin in self.pins_reversed() {
            let _ = write!(line, " [{}]", pin);
        }
        line
    }

    /// The injected PWM backend.
    pub fn port(&self) -> &P {
        &self.pwm
    }

    fn write(&mut self, channel: u8, level: u16) {
        self.pwm.set(channel, levels::constrain(level));
    }
}

impl<P: TriggerPwmPort> CameraInterface for SeagullMap2<P> {
    fn trigger(&mut self, enable: bool) {
        if !self.camera_is_on {
            return;
        }

        if let Some(pair) = self.pair {
            let level = if enable {
                levels::INSTANT_SHOOT
            } else {
                levels::NEUTRAL
            };
            self.write(pair.shutter(), level);
        }
    }

    fn keep_alive(&mut self, signal_on: bool) {
        if !self.camera_is_on {
            return;
        }

        if let Some(pair) = self.pair {
            let level = if signal_on {
                levels::KEEP_ALIVE
            } else {
                levels::NEUTRAL
            };
            self.write(pair.power(), level);
        }
    }

    fn turn_on_off(&mut self, enable: bool) {
        if let Some(pair) = self.pair {
            // Shutter line goes back to idle on every power transition.
            self.write(pair.shutter(), levels::NEUTRAL);
            let level = if enable {
                levels::ON_OFF
            } else {
                levels::NEUTRAL
            };
            self.write(pair.power(), level);
        }

        if !enable {
            self.camera_is_on = !self.camera_is_on;
        }
    }

    fn info(&self) {
        info!("{}", self.info_line());
    }

    fn has_power_control(&self) -> bool {
        true
    }

    fn is_powered_on(&self) -> bool {
        self.camera_is_on
    }
}

impl<P: TriggerPwmPort> Drop for SeagullMap2<P> {
    fn drop(&mut self) {
        self.pwm.deinit();
    }
}
