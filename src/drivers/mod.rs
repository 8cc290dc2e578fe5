//! Trigger driver, pin-pair selection, and LEDC peripheral helpers.

pub mod hw_init;
pub mod pin_pair;
pub mod seagull_map2;
