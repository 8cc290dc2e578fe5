//! LEDC peripheral access for the trigger outputs.
//!
//! Configures one LEDC timer for servo-style frames and one LEDC channel per
//! logical trigger channel, using raw ESP-IDF sys calls.  On non-espidf
//! targets every call is a simulation stub so the bookkeeping above it can be
//! exercised on the host.

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;
#[cfg(target_os = "espidf")]
use log::info;

use crate::error::PwmError;
use crate::pins;

/// Full-scale LEDC duty at the configured resolution.
const DUTY_FULL_SCALE: u32 = 1 << pins::TRIGGER_PWM_RESOLUTION_BITS;

/// Convert a pulse width into an LEDC duty value for a frame rate of `freq_hz`.
///
/// Pulses longer than the frame saturate at full scale.
pub fn pulse_to_duty(pulse_us: u16, freq_hz: u32) -> u32 {
    let period_us = 1_000_000 / freq_hz.max(1);
    let pulse_us = u32::from(pulse_us).min(period_us);
    (u64::from(pulse_us) * u64::from(DUTY_FULL_SCALE) / u64::from(period_us)) as u32
}

// ── Timer ─────────────────────────────────────────────────────

#[cfg(target_os = "espidf")]
pub fn init_trigger_timer(freq_hz: u32) -> Result<(), PwmError> {
    let timer = ledc_timer_config_t {
        speed_mode: ledc_mode_t_LEDC_LOW_SPEED_MODE,
        timer_num: ledc_timer_t_LEDC_TIMER_2,
        duty_resolution: ledc_timer_bit_t_LEDC_TIMER_14_BIT,
        freq_hz,
        clk_cfg: soc_periph_ledc_clk_src_legacy_t_LEDC_AUTO_CLK,
        ..Default::default()
    };
    // SAFETY: called from the single main-task context before any channel
    // on this timer is configured.
    let ret = unsafe { ledc_timer_config(&timer) };
    if ret != ESP_OK as i32 {
        return Err(PwmError::InitFailed(ret));
    }
    info!("hw_init: trigger timer configured ({} Hz, 14-bit)", freq_hz);
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
pub fn init_trigger_timer(_freq_hz: u32) -> Result<(), PwmError> {
    log::info!("hw_init(sim): trigger timer init skipped");
    Ok(())
}

// ── Channels ──────────────────────────────────────────────────

/// Attach LEDC channel `channel` to its header GPIO with zero duty.
#[cfg(target_os = "espidf")]
pub fn init_trigger_channel(channel: u8) -> Result<(), PwmError> {
    let gpio = *pins::TRIGGER_OUTPUT_GPIOS
        .get(usize::from(channel))
        .ok_or(PwmError::ChannelUnavailable(channel))?;

    // SAFETY: the timer was configured by init_trigger_timer(); channel
    // configuration only happens from the main task.
    let ret = unsafe {
        ledc_channel_config(&ledc_channel_config_t {
            speed_mode: ledc_mode_t_LEDC_LOW_SPEED_MODE,
            channel: u32::from(channel),
            timer_sel: ledc_timer_t_LEDC_TIMER_2,
            gpio_num: gpio,
            duty: 0,
            hpoint: 0,
            ..Default::default()
        })
    };
    if ret != ESP_OK as i32 {
        return Err(PwmError::InitFailed(ret));
    }
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
pub fn init_trigger_channel(channel: u8) -> Result<(), PwmError> {
    if usize::from(channel) >= pins::TRIGGER_OUTPUT_COUNT {
        return Err(PwmError::ChannelUnavailable(channel));
    }
    Ok(())
}

#[cfg(target_os = "espidf")]
pub fn ledc_set_pulse(channel: u8, pulse_us: u16, freq_hz: u32) {
    // SAFETY: channel was configured in init_trigger_channel(); duty
    // register writes only come from the main task.
    unsafe {
        ledc_set_duty(
            ledc_mode_t_LEDC_LOW_SPEED_MODE,
            u32::from(channel),
            pulse_to_duty(pulse_us, freq_hz),
        );
        ledc_update_duty(ledc_mode_t_LEDC_LOW_SPEED_MODE, u32::from(channel));
    }
}

#[cfg(not(target_os = "espidf"))]
pub fn ledc_set_pulse(_channel: u8, _pulse_us: u16, _freq_hz: u32) {}

/// Stop a channel and hold its output low.
#[cfg(target_os = "espidf")]
pub fn ledc_release(channel: u8) {
    // SAFETY: stopping a configured channel; main task only.
    unsafe {
        ledc_stop(ledc_mode_t_LEDC_LOW_SPEED_MODE, u32::from(channel), 0);
    }
}

#[cfg(not(target_os = "espidf"))]
pub fn ledc_release(_channel: u8) {}
