//! Fixed-rate frame pacing.

use std::time::{Duration, Instant};

/// Caps the frame loop at a fixed rate by sleeping off the rest of each frame.
pub struct FrameClock {
    frame: Duration,
    frame_start: Instant,
}

impl FrameClock {
    pub fn new(frame: Duration) -> Self {
        Self {
            frame,
            frame_start: Instant::now(),
        }
    }

    /// Time left in the current frame.
    pub fn remaining(&self) -> Duration {
        self.frame.saturating_sub(self.frame_start.elapsed())
    }

    /// Sleep until the current frame is over and start the next one.
    ///
    /// A frame that overran is not made up for; the next frame starts now.
    pub fn wait(&mut self) {
        let remaining = self.remaining();
        if !remaining.is_zero() {
            std::thread::sleep(remaining);
        }
        self.frame_start = Instant::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wait_paces_frames() {
        let mut clock = FrameClock::new(Duration::from_millis(20));
        let start = Instant::now();
        clock.wait();
        clock.wait();
        assert!(start.elapsed() >= Duration::from_millis(40));
    }

    #[test]
    fn test_overrun_frame_does_not_sleep() {
        let mut clock = FrameClock::new(Duration::from_millis(1));
        std::thread::sleep(Duration::from_millis(5));
        assert_eq!(clock.remaining(), Duration::ZERO);
        let start = Instant::now();
        clock.wait();
        assert!(start.elapsed() < Duration::from_millis(50));
    }
}
