use std::time::{Duration, Instant};

/// Accumulating stopwatch for detector latency.
///
/// Each `start`/`stop` pair adds one sample. `fps` is the number of samples
/// divided by the accumulated time, so after a single sample it is the
/// instantaneous rate of that call.
#[derive(Debug, Default)]
pub struct FrameTimer {
    started: Option<Instant>,
    total: Duration,
    samples: u32,
}

impl FrameTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self) {
        self.started = Some(Instant::now());
    }

    /// Ends the running measurement. No-op if `start` was not called.
    pub fn stop(&mut self) {
        if let Some(started) = self.started.take() {
            self.record(started.elapsed());
        }
    }

    fn record(&mut self, elapsed: Duration) {
        self.total += elapsed;
        self.samples += 1;
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.total.as_secs_f64() * 1000.0
    }

    /// Samples per second, or 0 when nothing has been measured.
    pub fn fps(&self) -> f64 {
        let secs = self.total.as_secs_f64();
        if self.samples == 0 || secs <= 0.0 {
            return 0.0;
        }
        self.samples as f64 / secs
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_fresh_timer_reports_zero() {
        let timer = FrameTimer::new();
        assert_eq!(timer.elapsed_ms(), 0.0);
        assert_eq!(timer.fps(), 0.0);
    }

    #[test]
    fn test_single_sample_fps_is_inverse_latency() {
        let mut timer = FrameTimer::new();
        timer.record(Duration::from_millis(25));
        assert_relative_eq!(timer.elapsed_ms(), 25.0, epsilon = 1e-9);
        assert_relative_eq!(timer.fps(), 40.0, epsilon = 1e-9);
    }

    #[test]
    fn test_samples_accumulate() {
        let mut timer = FrameTimer::new();
        timer.record(Duration::from_millis(10));
        timer.record(Duration::from_millis(30));
        assert_relative_eq!(timer.elapsed_ms(), 40.0, epsilon = 1e-9);
        assert_relative_eq!(timer.fps(), 50.0, epsilon = 1e-9);
    }

    #[test]
    fn test_reset_clears_samples() {
        let mut timer = FrameTimer::new();
        timer.record(Duration::from_millis(10));
        timer.reset();
        assert_eq!(timer.elapsed_ms(), 0.0);
        assert_eq!(timer.fps(), 0.0);
    }

    #[test]
    fn test_stop_without_start_is_ignored() {
        let mut timer = FrameTimer::new();
        timer.stop();
        assert_eq!(timer.samples, 0);
    }

    #[test]
    fn test_start_stop_records_one_sample() {
        let mut timer = FrameTimer::new();
        timer.start();
        timer.stop();
        assert_eq!(timer.samples, 1);
        assert!(timer.elapsed_ms() >= 0.0);
        timer.stop();
        assert_eq!(timer.samples, 1);
    }
}
