//! Integration test driver for `tests/integration/` submodule.
//!
//! Each `mod` below maps to a file that exercises the driver against the
//! recording PWM mock.  All tests run on the host with no real hardware.

mod backend_tests;
mod seagull_map2_tests;
