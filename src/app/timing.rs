//! Frame timing

use std::time::{Duration, Instant};

/// Measures the time between consecutive frames
#[derive(Debug, Default)]
pub struct FrameClock {
    last_frame: Option<Instant>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a frame at `now` and returns seconds since the previous one
    ///
    /// The first frame reports zero.
    pub fn tick(&mut self, now: Instant) -> f32 {
        let delta = self
            .last_frame
            .map(|last| now.saturating_duration_since(last).as_secs_f32())
            .unwrap_or(0.0);
        self.last_frame = Some(now);
        delta
    }

    /// Forgets the previous frame so a long pause is not reported as one delta
    pub fn reset(&mut self) {
        self.last_frame = None;
    }
}

/// Schedules redraws at a capped frame rate
#[derive(Debug, Default)]
pub struct FramePacer {
    next_frame: Option<Instant>,
}

impl FramePacer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time between frames for a cap, or None when uncapped
    pub fn interval(fps: u32) -> Option<Duration> {
        (fps > 0).then(|| Duration::from_nanos(1_000_000_000 / u64::from(fps)))
    }

    /// Returns true if a frame is due at `now`, scheduling the next one
    pub fn poll(&mut self, now: Instant, fps: u32) -> bool {
        let Some(interval) = Self::interval(fps) else {
            self.next_frame = None;
            return true;
        };

        match self.next_frame {
            Some(next) if now < next => false,
            Some(next) => {
                // Stay on the original cadence unless we fell more than a frame behind
                let scheduled = next + interval;
                self.next_frame = Some(if scheduled <= now { now + interval } else { scheduled });
                true
            }
            None => {
                self.next_frame = Some(now + interval);
                true
            }
        }
    }

    /// When the next frame is due, if capped
    pub fn next_frame(&self) -> Option<Instant> {
        self.next_frame
    }
}
