/// Normalized progress tracker over a wall-clock duration.
/// Progress runs from 0.0 to 1.0 and never decreases until `reset`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timer {
    /// Clock time (ms) when the timer started.
    start: f64,
    /// Duration in milliseconds.
    duration: f64,
    /// Completion fraction in [0, 1].
    progress: f32,
}

impl Timer {
    /// Create a timer bound to the instant `now` (ms).
    pub fn new(duration_ms: f64, now: f64) -> Self {
        let mut timer = Self {
            start: now,
            duration: duration_ms,
            progress: 0.0,
        };
        if duration_ms <= 0.0 {
            timer.progress = 1.0;
        }
        timer
    }

    /// Recompute progress from the current clock sample.
    pub fn update(&mut self, now: f64) {
        if self.duration <= 0.0 {
            self.progress = 1.0;
            return;
        }
        let p = ((now - self.start) / self.duration).clamp(0.0, 1.0) as f32;
        self.progress = self.progress.max(p);
    }

    /// Restart the timer from `now`.
    pub fn reset(&mut self, now: f64) {
        *self = Self::new(self.duration, now);
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Whether progress has reached its terminal value.
    pub fn is_elapsed(&self) -> bool {
        self.progress >= 1.0
    }

    pub fn duration_ms(&self) -> f64 {
        self.duration
    }

    /// Milliseconds left as of the last update.
    pub fn remaining_ms(&self) -> f64 {
        (1.0 - self.progress as f64) * self.duration.max(0.0)
    }
}

/// Per-frame clock: samples a monotonic time source once per frame and
/// derives elapsed time and frame delta from it.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    previous: Option<f64>,
    now: f64,
    /// Total elapsed milliseconds since the first frame.
    elapsed: f64,
    /// Seconds since the previous frame.
    delta: f32,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance to a new frame sampled at `now` (ms).
    /// The first frame has a zero delta; a clock going backwards is treated as zero delta.
    pub fn advance(&mut self, now: f64) {
        let previous = self.previous.unwrap_or(now);
        let delta_ms = (now - previous).max(0.0);
        self.elapsed += delta_ms;
        self.delta = (delta_ms / 1000.0) as f32;
        self.previous = Some(now);
        self.now = now;
    }

    /// Clock time (ms) of the current frame.
    pub fn now(&self) -> f64 {
        self.now
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed
    }

    /// Frame delta in seconds.
    pub fn delta(&self) -> f32 {
        self.delta
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_clamped_fraction() {
        let mut t = Timer::new(1000.0, 0.0);
        assert_eq!(t.progress(), 0.0);
        t.update(250.0);
        assert!((t.progress() - 0.25).abs() < 1e-6);
        t.update(5000.0);
        assert_eq!(t.progress(), 1.0);
        assert!(t.is_elapsed());
    }

    #[test]
    fn reaches_exactly_one_at_duration() {
        let mut t = Timer::new(3000.0, 100.0);
        t.update(3099.0);
        assert!(!t.is_elapsed());
        t.update(3100.0);
        assert_eq!(t.progress(), 1.0);
    }

    #[test]
    fn progress_never_decreases() {
        let mut t = Timer::new(1000.0, 0.0);
        let mut last = 0.0;
        for now in [0.0, 10.0, 10.0, 400.0, 399.0, 999.0, 1200.0] {
            t.update(now);
            assert!(t.progress() >= last, "progress went from {} to {}", last, t.progress());
            last = t.progress();
        }
    }

    #[test]
    fn zero_duration_is_complete() {
        let t = Timer::new(0.0, 50.0);
        assert!(t.is_elapsed());
        assert_eq!(t.remaining_ms(), 0.0);
    }

    #[test]
    fn reset_restarts_from_now() {
        let mut t = Timer::new(100.0, 0.0);
        t.update(100.0);
        assert!(t.is_elapsed());
        t.reset(200.0);
        assert_eq!(t.progress(), 0.0);
        t.update(250.0);
        assert!((t.progress() - 0.5).abs() < 1e-6);
        assert!((t.remaining_ms() - 50.0).abs() < 1e-3);
    }

    #[test]
    fn clock_first_frame_has_zero_delta() {
        let mut clock = FrameClock::new();
        clock.advance(1000.0);
        assert_eq!(clock.delta(), 0.0);
        assert_eq!(clock.elapsed_ms(), 0.0);
        clock.advance(1016.0);
        assert!((clock.delta() - 0.016).abs() < 1e-6);
        assert_eq!(clock.elapsed_ms(), 16.0);
        assert_eq!(clock.now(), 1016.0);
    }
}
