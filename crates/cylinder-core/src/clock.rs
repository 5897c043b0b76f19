use crate::constants::MAX_FRAME_SECONDS;
use instant::Instant;

/// Wall-clock frame timer.
///
/// Steps are clamped to [`MAX_FRAME_SECONDS`] so a stalled window does not
/// spin the cylinder by a large jump on the next frame.
pub struct FrameClock {
    last: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }

    /// Seconds since the previous tick.
    pub fn tick(&mut self) -> f64 {
        let now = Instant::now();
        let dt = now - self.last;
        self.last = now;
        clamp_step(dt.as_secs_f64())
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[inline]
pub fn clamp_step(seconds: f64) -> f64 {
    seconds.clamp(0.0, MAX_FRAME_SECONDS)
}
