//! MAP2 trigger firmware — main entry point.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │  LedcTriggerPort (TriggerPwmPort) ── ESP32 LEDC      │
//! │  ─────────────── Port Trait Boundary ─────────────── │
//! │  SeagullMap2 (CameraInterface)                       │
//! │  power toggle · keep-alive heartbeat                 │
//! └──────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use std::thread;
use std::time::Duration;

use anyhow::Result;
use log::{info, warn};

use map2_trigger::adapters::ledc_trigger::LedcTriggerPort;
use map2_trigger::config::TriggerConfig;
use map2_trigger::{CameraInterface, SeagullMap2};

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("MAP2 trigger v{}", env!("CARGO_PKG_VERSION"));

    // ── 2. Configuration ──────────────────────────────────────
    let config = TriggerConfig::default();
    config.validate()?;

    // ── 3. Driver on the LEDC outputs ─────────────────────────
    let port = LedcTriggerPort::new(config.pwm_frequency_hz);
    let mut camera = SeagullMap2::new(port, config.pins);
    camera.info();

    if !camera.is_configured() {
        // Nothing will reach the camera; stay up so the log stays readable.
        warn!("MAP2 driver inert, check trigger pin configuration");
        loop {
            thread::sleep(Duration::from_secs(60));
        }
    }

    // ── 4. Power button press ─────────────────────────────────
    camera.turn_on_off(true);
    thread::sleep(Duration::from_millis(u64::from(config.power_pulse_ms)));
    camera.turn_on_off(false);
    info!("Camera powered: {}", camera.is_powered_on());

    // ── 5. Keep-alive heartbeat ───────────────────────────────
    let half_period = Duration::from_millis(u64::from(config.keep_alive_interval_ms));
    let mut signal_on = true;
    loop {
        camera.keep_alive(signal_on);
        signal_on = !signal_on;
        thread::sleep(half_period);
    }
}
