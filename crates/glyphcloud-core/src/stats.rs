use instant::Instant;
use std::time::Duration;

const WINDOW: Duration = Duration::from_secs(1);

/// Frames-per-second counter reporting once per elapsed second.
#[derive(Clone, Debug)]
pub struct FpsCounter {
    frames: u32,
    window_start: Instant,
    fps: u32,
}

impl FpsCounter {
    pub fn new(now: Instant) -> Self {
        Self {
            frames: 0,
            window_start: now,
            fps: 0,
        }
    }

    /// Count a frame at `now`. Returns the new reading when a window closes.
    pub fn record(&mut self, now: Instant) -> Option<u32> {
        self.frames += 1;
        let elapsed = now.saturating_duration_since(self.window_start);
        if elapsed < WINDOW {
            return None;
        }
        self.fps = (self.frames as f64 / elapsed.as_secs_f64()).round() as u32;
        self.frames = 0;
        self.window_start = now;
        Some(self.fps)
    }

    /// Last completed reading (0 before the first second).
    pub fn fps(&self) -> u32 {
        self.fps
    }
}
