/// Totals collected by an acquisition loop.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RunStats {
    pub frames: usize,
    pub faces: usize,
    pub total_detect_ms: f64,
}

impl RunStats {
    pub fn record(&mut self, detect_ms: f64, faces: usize) {
        self.frames += 1;
        self.faces += faces;
        self.total_detect_ms += detect_ms;
    }

    pub fn mean_detect_ms(&self) -> Option<f64> {
        (self.frames > 0).then(|| self.total_detect_ms / self.frames as f64)
    }

    pub fn summary(&self) -> String {
        match self.mean_detect_ms() {
            Some(mean) => format!(
                "{} frames, {} faces, mean detection time {mean:.2}ms",
                self.frames, self.faces
            ),
            None => "no frames processed".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_empty_stats() {
        let stats = RunStats::default();
        assert_eq!(stats.mean_detect_ms(), None);
        assert_eq!(stats.summary(), "no frames processed");
    }

    #[test]
    fn test_record_accumulates() {
        let mut stats = RunStats::default();
        stats.record(10.0, 2);
        stats.record(20.0, 0);
        assert_eq!(stats.frames, 2);
        assert_eq!(stats.faces, 2);
        assert_relative_eq!(stats.mean_detect_ms().unwrap(), 15.0);
        assert_eq!(
            stats.summary(),
            "2 frames, 2 faces, mean detection time 15.00ms"
        );
    }
}
