//! Integration tests: SeagullMap2 on the real port adapters (host build).

use embedded_hal::pwm::{ErrorType, SetDutyCycle};
use heapless::Vec;
use map2_trigger::adapters::hal_trigger::HalTriggerPort;
use map2_trigger::adapters::ledc_trigger::LedcTriggerPort;
use map2_trigger::{CameraInterface, SeagullMap2};

/// Duty counts equal microseconds of a 20 ms frame.
#[derive(Debug, Default)]
struct ServoChannel {
    duty: u16,
}

impl ErrorType for ServoChannel {
    type Error = core::convert::Infallible;
}

impl SetDutyCycle for ServoChannel {
    fn max_duty_cycle(&self) -> u16 {
        20_000
    }

    fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
        self.duty = duty;
        Ok(())
    }
}

fn servo_bank(n: usize) -> HalTriggerPort<ServoChannel> {
    let mut channels = Vec::new();
    for _ in 0..n {
        let _ = channels.push(ServoChannel::default());
    }
    HalTriggerPort::new(channels)
}

#[test]
fn hal_outputs_follow_driver_levels() {
    let mut camera = SeagullMap2::new(servo_bank(4), [2, 3, -1, -1, -1, -1]);
    let duty = |cam: &SeagullMap2<HalTriggerPort<ServoChannel>>, ch: u8| {
        cam.port().channel(ch).map(|c| c.duty)
    };

    assert_eq!(duty(&camera, 3), Some(1000));
    assert_eq!(duty(&camera, 2), Some(1000));

    camera.turn_on_off(true);
    assert_eq!(duty(&camera, 2), Some(1900));
    camera.turn_on_off(false);
    assert_eq!(duty(&camera, 2), Some(1500));

    camera.trigger(true);
    assert_eq!(duty(&camera, 3), Some(1700));
    camera.keep_alive(true);
    assert_eq!(duty(&camera, 2), Some(1700));

    // Channels outside the pair never move.
    assert_eq!(duty(&camera, 0), Some(0));
    assert_eq!(duty(&camera, 1), Some(0));
}

#[test]
fn hal_bank_too_small_leaves_driver_inert() {
    let camera = SeagullMap2::new(servo_bank(2), [2, 3, -1, -1, -1, -1]);
    assert!(!camera.is_configured());
    assert_eq!(camera.port().active_mask(), 0);
}

#[test]
fn ledc_port_accepts_board_channels() {
    let camera = SeagullMap2::new(LedcTriggerPort::new(50), [5, 4, -1, -1, -1, -1]);
    assert!(camera.is_configured());
    assert_eq!(camera.port().active_mask(), (1 << 5) | (1 << 4));
}

#[test]
fn ledc_port_refuses_channels_beyond_header() {
    let camera = SeagullMap2::new(LedcTriggerPort::new(50), [8, 9, -1, -1, -1, -1]);
    assert!(!camera.is_configured());
}
