//! Integration tests: SeagullMap2 → TriggerPwmPort.

use map2_trigger::drivers::pin_pair::{NO_PINS, PinList};
use map2_trigger::levels;
use map2_trigger::{CameraInterface, SeagullMap2};

use super::mock_pwm::{MockTriggerPwm, PwmCall};

const PAIR_3_4: PinList = [3, 4, -1, -1, -1, -1];
const POWER: u8 = 3;
const SHUTTER: u8 = 4;

fn driver(pins: PinList) -> (SeagullMap2<MockTriggerPwm>, MockTriggerPwm) {
    let pwm = MockTriggerPwm::new();
    let camera = SeagullMap2::new(pwm.clone(), pins);
    (camera, pwm)
}

/// Driver on channels 3/4 after one power press/release, log cleared.
fn powered() -> (SeagullMap2<MockTriggerPwm>, MockTriggerPwm) {
    let (mut camera, pwm) = driver(PAIR_3_4);
    camera.turn_on_off(true);
    camera.turn_on_off(false);
    assert!(camera.is_powered_on());
    pwm.clear();
    (camera, pwm)
}

// ── Initialisation ────────────────────────────────────────────

#[test]
fn init_selects_first_pair_and_disarms() {
    let (camera, pwm) = driver(PAIR_3_4);

    assert!(camera.is_configured());
    assert_eq!(
        pwm.calls(),
        vec![
            PwmCall::Init { mask: (1 << 3) | (1 << 4) },
            PwmCall::Set { channel: SHUTTER, level: 1000 },
            PwmCall::Set { channel: POWER, level: 1000 },
        ]
    );
    assert!(!camera.is_powered_on());
}

#[test]
fn later_valid_pairs_are_ignored() {
    let (mut camera, pwm) = driver([3, 4, 5, 6, -1, -1]);
    camera.turn_on_off(true);
    camera.turn_on_off(false);
    camera.trigger(true);
    camera.keep_alive(true);

    assert_eq!(pwm.calls()[0], PwmCall::Init { mask: 0b1_1000 });
    assert!(pwm.sets().iter().all(|&(ch, _)| ch == POWER || ch == SHUTTER));
}

#[test]
fn unpaired_slots_leave_driver_inert() {
    for pins in [NO_PINS, [0, -1, -1, 1, -1, 2], [-1, 1, 2, -1, 3, -1]] {
        let (mut camera, pwm) = driver(pins);
        assert!(!camera.is_configured());

        camera.turn_on_off(true);
        camera.turn_on_off(false);
        camera.trigger(true);
        camera.keep_alive(true);
        camera.trigger(false);
        camera.keep_alive(false);

        assert!(pwm.calls().is_empty(), "pins {:?} produced {:?}", pins, pwm.calls());
    }
}

// ── Power gate ────────────────────────────────────────────────

#[test]
fn trigger_and_keep_alive_are_gated_while_off() {
    let (mut camera, pwm) = driver(PAIR_3_4);
    pwm.clear();

    camera.trigger(true);
    camera.keep_alive(true);
    camera.trigger(false);
    camera.keep_alive(false);

    assert!(pwm.calls().is_empty());
}

#[test]
fn power_press_alone_does_not_open_gate() {
    let (mut camera, pwm) = driver(PAIR_3_4);
    camera.turn_on_off(true);
    pwm.clear();

    camera.trigger(true);
    assert!(pwm.calls().is_empty());
}

// ── Shutter ───────────────────────────────────────────────────

#[test]
fn trigger_drives_shutter_only() {
    let (mut camera, pwm) = powered();

    camera.trigger(true);
    assert_eq!(pwm.sets(), vec![(SHUTTER, levels::INSTANT_SHOOT)]);

    camera.trigger(false);
    assert_eq!(
        pwm.sets(),
        vec![(SHUTTER, levels::INSTANT_SHOOT), (SHUTTER, levels::NEUTRAL)]
    );
    assert_eq!(pwm.level(POWER), None);
}

// ── Keep-alive ────────────────────────────────────────────────

#[test]
fn keep_alive_alternates_power_line() {
    let (mut camera, pwm) = powered();

    for signal_on in [true, false, true, false] {
        camera.keep_alive(signal_on);
    }

    assert_eq!(
        pwm.sets(),
        vec![
            (POWER, 1700),
            (POWER, 1500),
            (POWER, 1700),
            (POWER, 1500),
        ]
    );
}

// ── Power on/off ──────────────────────────────────────────────

#[test]
fn power_press_writes_both_lines() {
    let (mut camera, pwm) = driver(PAIR_3_4);
    pwm.clear();

    camera.turn_on_off(true);
    assert_eq!(pwm.sets(), vec![(SHUTTER, 1500), (POWER, 1900)]);

    pwm.clear();
    camera.turn_on_off(false);
    assert_eq!(pwm.sets(), vec![(SHUTTER, 1500), (POWER, 1500)]);
}

#[test]
fn power_flag_flips_only_on_release() {
    let (mut camera, _pwm) = driver(PAIR_3_4);
    let initial = camera.is_powered_on();

    camera.turn_on_off(true);
    assert_eq!(camera.is_powered_on(), initial);
    camera.turn_on_off(true);
    assert_eq!(camera.is_powered_on(), initial);

    camera.turn_on_off(false);
    assert_eq!(camera.is_powered_on(), !initial);
    camera.turn_on_off(false);
    assert_eq!(camera.is_powered_on(), initial);
}

#[test]
fn second_release_closes_gate_again() {
    let (mut camera, pwm) = powered();
    camera.turn_on_off(false);
    assert!(!camera.is_powered_on());
    pwm.clear();

    camera.trigger(true);
    camera.keep_alive(true);
    assert!(pwm.calls().is_empty());
}

#[test]
fn power_flag_toggles_even_when_unconfigured() {
    let (mut camera, pwm) = driver(NO_PINS);
    camera.turn_on_off(false);
    assert!(camera.is_powered_on());
    assert!(pwm.calls().is_empty());
}

// ── Diagnostics and teardown ──────────────────────────────────

#[test]
fn info_never_writes() {
    let (camera, pwm) = powered();
    camera.info();
    let _ = camera.info_line();
    assert!(pwm.calls().is_empty());
    assert_eq!(camera.pins_reversed(), [-1, -1, -1, -1, 4, 3]);
}

#[test]
fn drop_releases_channel_group() {
    let (camera, pwm) = driver(PAIR_3_4);
    drop(camera);
    assert_eq!(pwm.calls().last(), Some(&PwmCall::Deinit));
}

#[test]
fn every_write_is_in_range() {
    let (mut camera, pwm) = driver(PAIR_3_4);
    camera.turn_on_off(true);
    camera.turn_on_off(false);
    camera.trigger(true);
    camera.keep_alive(true);
    camera.trigger(false);
    camera.keep_alive(false);
    camera.turn_on_off(false);

    assert!(
        pwm.sets()
            .iter()
            .all(|&(_, level)| (levels::PWM_MIN..=levels::PWM_MAX).contains(&level))
    );
}
