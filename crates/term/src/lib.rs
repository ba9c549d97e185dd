//! Terminal "video" module.
//!
//! A small, game-oriented rendering layer: the cast is drawn into a
//! framebuffer of styled cells which is then flushed to the terminal with
//! run-length diffing. The [`TerminalVideoService`] wraps it all behind the
//! director's `VideoService` trait and paces frames to the configured rate.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep [`FieldView`] and [`FramePacer`] pure so they can be unit-tested
//! - Own every terminal side effect in [`TerminalRenderer`]

pub mod fb;
pub mod field_view;
pub mod pacer;
pub mod renderer;
pub mod video;

pub use greed_core as core;
pub use greed_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer};
pub use field_view::{FieldView, Viewport};
pub use pacer::FramePacer;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use video::TerminalVideoService;
