//! Application boundary: the port traits the trigger driver is built against.

pub mod ports;
