//! Adapters — concrete implementations of the port traits.
//!
//! | Adapter        | Implements      | Connects to                      |
//! |----------------|-----------------|----------------------------------|
//! | `hal_trigger`  | TriggerPwmPort  | any `embedded-hal` PWM channels  |
//! | `ledc_trigger` | TriggerPwmPort  | ESP32 LEDC (sim stubs on host)   |

pub mod hal_trigger;
pub mod ledc_trigger;
