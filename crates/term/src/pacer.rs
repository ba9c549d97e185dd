//! Fixed-rate frame pacing.
//!
//! Frames are scheduled on a fixed cadence. [`FramePacer::delay`] tells the
//! caller how long to sleep so the next frame starts on time; when a frame
//! overruns, the schedule restarts from "now" instead of trying to catch up
//! with a burst of back-to-back frames.

use std::time::Duration;

#[derive(Debug, Clone)]
pub struct FramePacer {
    interval_ms: u64,
    next_frame_ms: Option<u64>,
}

impl FramePacer {
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            next_frame_ms: None,
        }
    }

    /// Pacer for `frame_rate` frames per second.
    pub fn from_frame_rate(frame_rate: u32) -> Self {
        Self::new(1000 / u64::from(frame_rate.max(1)))
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// Time to wait at `now_ms` (end of a frame) before starting the next one.
    pub fn delay(&mut self, now_ms: u64) -> Duration {
        let due = match self.next_frame_ms {
            // First frame: the cadence starts now.
            None => now_ms + self.interval_ms,
            Some(due) if due < now_ms => {
                // Overran: resynchronise rather than catch up.
                self.next_frame_ms = Some(now_ms + self.interval_ms);
                return Duration::ZERO;
            }
            Some(due) => due,
        };
        self.next_frame_ms = Some(due + self.interval_ms);
        Duration::from_millis(due - now_ms)
    }

    /// Forget the schedule; the next [`FramePacer::delay`] starts a new one.
    pub fn reset(&mut self) {
        self.next_frame_ms = None;
    }
}
