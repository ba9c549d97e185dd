//! Terminal input module.
//!
//! Maps `crossterm` key events to robot directions and provides the
//! [`KeyboardService`] input source the director polls once per frame. Held
//! keys are tracked with a release timeout for terminals that never report
//! key releases.

pub mod held;
pub mod keyboard;
pub mod map;

pub use greed_core as core;
pub use greed_types as types;

pub use held::{HeldKeys, DEFAULT_KEY_RELEASE_TIMEOUT_MS};
pub use keyboard::KeyboardService;
pub use map::{direction_for_key, should_quit, Direction};
