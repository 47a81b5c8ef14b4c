//! Frame counter reporting frames per second once per second.

use std::time::{Duration, Instant};

pub struct FpsTracker {
    last_frame: Instant,
    last_report: Instant,
    frames: u32,
}

impl FpsTracker {
    pub fn new(now: Instant) -> Self {
        Self {
            last_frame: now,
            last_report: now,
            frames: 0,
        }
    }

    /// Count a frame starting at `now`; returns the frame delta in seconds
    /// and, once a second has elapsed, the frames counted in it
    pub fn record_frame_at(&mut self, now: Instant) -> (f32, Option<u32>) {
        let dt = now.saturating_duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;
        self.frames += 1;

        if now.saturating_duration_since(self.last_report) < Duration::from_secs(1) {
            return (dt, None);
        }

        let fps = self.frames;
        log::info!("FPS: {}", fps);
        self.frames = 0;
        self.last_report = now;
        (dt, Some(fps))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reports_once_per_second() {
        let start = Instant::now();
        let mut tracker = FpsTracker::new(start);
        let frame = Duration::from_millis(100);

        let mut reports = Vec::new();
        for i in 1..=25 {
            let (dt, report) = tracker.record_frame_at(start + frame * i);
            assert!((dt - 0.1).abs() < 1e-4);
            if let Some(fps) = report {
                reports.push(fps);
            }
        }
        assert_eq!(reports, vec![10, 10]);
    }

    #[test]
    fn test_first_frame_delta_is_measured_from_creation() {
        let start = Instant::now();
        let mut tracker = FpsTracker::new(start);
        let (dt, report) = tracker.record_frame_at(start + Duration::from_millis(20));
        assert!((dt - 0.02).abs() < 1e-4);
        assert_eq!(report, None);
    }
}
