use std::time::{Duration, Instant};

/// A frame this long advances the timer by exactly one angular step.
pub const TARGET_FRAME_INTERVAL: Duration = Duration::from_millis(30);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThrottleMode {
    /// Slow frames never advance more than one step.
    #[default]
    Clamped,
    /// A stalled host produces one large jump on its next frame.
    Unclamped,
}

/// Scales each tick's angular advance by the real time since the last drawn frame.
#[derive(Clone, Copy, Debug)]
pub struct FrameThrottle {
    mode: ThrottleMode,
    min_frame_interval: Option<Duration>,
    last_frame: Instant,
}

impl FrameThrottle {
    pub fn new(mode: ThrottleMode, min_frame_interval: Option<Duration>, now: Instant) -> Self {
        Self {
            mode,
            min_frame_interval,
            last_frame: now,
        }
    }

    /// `None` means the frame came too soon and should not be drawn.
    pub fn factor(&mut self, now: Instant) -> Option<f64> {
        let elapsed = now.saturating_duration_since(self.last_frame);
        if let Some(min_interval) = self.min_frame_interval
            && elapsed <= min_interval
        {
            return None;
        }
        self.last_frame = now;

        let factor = elapsed.as_secs_f64() / TARGET_FRAME_INTERVAL.as_secs_f64();
        Some(match self.mode {
            ThrottleMode::Clamped => factor.min(1.0),
            ThrottleMode::Unclamped => factor,
        })
    }
}
