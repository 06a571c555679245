// src/pacing.rs

use std::time::{Duration, Instant};

/// Caps redraws at a fixed frame rate.
#[derive(Debug)]
pub struct FramePacer {
    interval: Duration,
    next_frame: Instant,
}

impl FramePacer {
    pub fn new(frame_rate: u32, now: Instant) -> Self {
        Self {
            interval: Duration::from_secs(1) / frame_rate.max(1),
            next_frame: now,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// When the next frame should be drawn.
    pub fn deadline(&self) -> Instant {
        self.next_frame
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next_frame
    }

    /// Schedules the next frame one interval on, never earlier than `now`
    /// so a stall does not cause a burst of catch-up frames. Called when the
    /// redraw is requested, since a hidden window may never deliver it.
    pub fn frame_requested(&mut self, now: Instant) {
        self.next_frame += self.interval;
        if self.next_frame < now {
            self.next_frame = now + self.interval;
        }
    }
}
