use web_time::{Duration, Instant};

/// Upper bound on a single reported frame delta. A stalled frame (debugger,
/// backgrounded window) would otherwise jump the snap straight to its target.
pub const MAX_FRAME_DELTA: Duration = Duration::from_millis(250);

/// Turns frame timestamps into per-frame deltas in seconds.
///
/// The first tick reports zero because there is no previous frame to measure
/// against.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last_frame: Option<Instant>,
    frame_count: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a frame at the current instant.
    pub fn tick(&mut self) -> f32 {
        self.tick_at(Instant::now())
    }

    /// Records a frame at `now` and returns the clamped delta since the
    /// previous frame.
    pub fn tick_at(&mut self, now: Instant) -> f32 {
        let delta = match self.last_frame {
            Some(last) => now.saturating_duration_since(last).min(MAX_FRAME_DELTA),
            None => Duration::ZERO,
        };
        self.last_frame = Some(now);
        self.frame_count += 1;
        delta.as_secs_f32()
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn reset(&mut self) {
        self.last_frame = None;
        self.frame_count = 0;
    }
}
