//! Seagull MAP2 camera-trigger adapter driver.
//!
//! Translates generic camera intents (shutter, keep-alive, power) into the
//! PWM levels the MAP2 converter expects on its two inputs.  Hardware access
//! goes through the injected [`TriggerPwmPort`](app::ports::TriggerPwmPort);
//! ESP-IDF-specific code is guarded by `#[cfg(target_os = "espidf")]`
//! within each module.

#![deny(unused_must_use)]

pub mod app;
pub mod config;
pub mod error;
pub mod levels;
pub mod pins;

pub mod adapters;
pub mod drivers;

pub use app::ports::{CameraInterface, TriggerPwmPort};
pub use drivers::seagull_map2::SeagullMap2;
