//! Collaborator seams used by the director.
//!
//! The simulation only ever talks to input and output through these traits,
//! so it can run against a real terminal or against in-memory fakes.

use anyhow::Result;

use crate::actor::Actor;
use crate::types::Point;

/// Produces the player's direction once per frame.
pub trait InputSource {
    /// Cell-size-scaled velocity for the currently held keys
    /// ([`Point::ZERO`] when none). Must not block.
    fn direction(&mut self) -> Point;
}

/// Owns the window and its frame buffer.
///
/// `width` and `height` are the wrap bounds for every actor and must stay
/// constant for the session. Frame pacing happens inside `flush_buffer`.
pub trait VideoService {
    fn open_window(&mut self) -> Result<()>;
    fn close_window(&mut self) -> Result<()>;
    fn is_window_open(&self) -> bool;
    fn width(&self) -> i32;
    fn height(&self) -> i32;
    fn clear_buffer(&mut self) -> Result<()>;
    fn draw_actors(&mut self, actors: &[&Actor]) -> Result<()>;
    fn flush_buffer(&mut self) -> Result<()>;
}
