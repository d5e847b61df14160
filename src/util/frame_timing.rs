use web_time::{Duration, Instant};

/// How often the smoothed frame rate is logged.
const REPORT_INTERVAL: Duration = Duration::from_secs(5);

/// Frame-rate bookkeeping for a redraw-on-demand viewport.
///
/// Frames arrive irregularly (only when input or the window system asks for
/// a redraw), so the rate is smoothed and idle gaps longer than the
/// report interval are left out of the average.
#[derive(Debug, Clone)]
pub struct FrameTiming {
    last_frame: Instant,
    last_report: Instant,
    frames_since_report: u32,
    smoothed_fps: f32,
    /// Weight of the newest sample (0.0-1.0).
    smoothing: f32,
}

impl Default for FrameTiming {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameTiming {
    /// Start timing from now.
    #[must_use]
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            last_frame: now,
            last_report: now,
            frames_since_report: 0,
            smoothed_fps: 0.0,
            smoothing: 0.1,
        }
    }

    /// Record a finished frame.
    pub fn end_frame(&mut self) {
        let now = Instant::now();
        self.record(now.duration_since(self.last_frame));
        self.last_frame = now;

        if now.duration_since(self.last_report) >= REPORT_INTERVAL {
            log::debug!(
                "{} frames in the last {:.1}s, {:.1} fps while active",
                self.frames_since_report,
                now.duration_since(self.last_report).as_secs_f32(),
                self.smoothed_fps
            );
            self.frames_since_report = 0;
            self.last_report = now;
        }
    }

    fn record(&mut self, elapsed: Duration) {
        self.frames_since_report += 1;
        let frame_time = elapsed.as_secs_f32();
        if frame_time <= 0.0 || elapsed >= REPORT_INTERVAL {
            return;
        }
        let instant_fps = 1.0 / frame_time;
        self.smoothed_fps = if self.smoothed_fps <= 0.0 {
            instant_fps
        } else {
            self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing
        };
    }

    /// Smoothed frames per second over active (non-idle) frames.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_sample_seeds_the_average() {
        let mut timing = FrameTiming::new();
        timing.record(Duration::from_millis(10));
        assert!((timing.fps() - 100.0).abs() < 1e-3);
    }

    #[test]
    fn average_moves_towards_new_samples() {
        let mut timing = FrameTiming::new();
        timing.record(Duration::from_millis(10));
        timing.record(Duration::from_millis(20));
        let fps = timing.fps();
        assert!(fps < 100.0 && fps > 50.0, "fps = {fps}");
    }

    #[test]
    fn idle_gaps_are_ignored() {
        let mut timing = FrameTiming::new();
        timing.record(Duration::from_millis(10));
        timing.record(Duration::from_secs(30));
        assert!((timing.fps() - 100.0).abs() < 1e-3);
        assert_eq!(timing.frames_since_report, 2);
    }
}
