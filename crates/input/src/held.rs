//! Held-direction tracking for terminal environments.
//!
//! Terminals usually report key presses (and auto-repeats) but not releases.
//! A direction therefore counts as held until either a release event arrives
//! or no press/repeat for it has been seen for the release timeout.

use arrayvec::ArrayVec;

use crate::map::Direction;
use crate::types::Point;

// Long enough to bridge the gap between terminal auto-repeat events, short
// enough that a single tap moves the robot only a step or two.
pub const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u64 = 150;

/// Set of currently held directions, each with the time it was last seen.
#[derive(Debug, Clone)]
pub struct HeldKeys {
    held: ArrayVec<(Direction, u64), 4>,
    release_timeout_ms: Option<u64>,
}

impl HeldKeys {
    pub fn new() -> Self {
        Self {
            held: ArrayVec::new(),
            release_timeout_ms: Some(DEFAULT_KEY_RELEASE_TIMEOUT_MS),
        }
    }

    /// Override the auto-release timeout; `None` holds keys until released.
    pub fn with_release_timeout_ms(mut self, timeout_ms: Option<u64>) -> Self {
        self.release_timeout_ms = timeout_ms;
        self
    }

    pub fn release_timeout_ms(&self) -> Option<u64> {
        self.release_timeout_ms
    }

    /// Record a press or auto-repeat of `dir` at `now_ms`.
    pub fn press(&mut self, dir: Direction, now_ms: u64) {
        match self.held.iter_mut().find(|(d, _)| *d == dir) {
            Some(entry) => entry.1 = now_ms,
            None => {
                // At most one entry per direction, so this never overflows.
                let _ = self.held.try_push((dir, now_ms));
            }
        }
    }

    pub fn release(&mut self, dir: Direction) {
        self.held.retain(|(d, _)| *d != dir);
    }

    pub fn clear(&mut self) {
        self.held.clear();
    }

    pub fn is_held(&self, dir: Direction) -> bool {
        self.held.iter().any(|(d, _)| *d == dir)
    }

    /// Combined, cell-size-scaled direction of every key still held at
    /// `now_ms`. Opposite directions cancel out.
    pub fn direction(&mut self, now_ms: u64, cell_size: i32) -> Point {
        if let Some(timeout) = self.release_timeout_ms {
            self.held
                .retain(|(_, seen)| now_ms.saturating_sub(*seen) <= timeout);
        }

        self.held
            .iter()
            .fold(Point::ZERO, |acc, (d, _)| acc + d.unit())
            .scale(cell_size)
    }
}

impl Default for HeldKeys {
    fn default() -> Self {
        Self::new()
    }
}
