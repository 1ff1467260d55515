//! Frame pacing by tick rate

use std::time::{Duration, Instant};

/// Schedules frames so consecutive frame starts are at least `1/tick_rate`
/// seconds apart.
#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    next_frame: Instant,
}

impl FrameClock {
    /// A clock whose first frame is due at `now`
    pub fn new(now: Instant) -> Self {
        Self { next_frame: now }
    }

    pub fn interval(tick_rate: u32) -> Duration {
        Duration::from_secs(1) / tick_rate.max(1)
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next_frame
    }

    /// Record a frame started at `now` and schedule the next one
    pub fn schedule(&mut self, now: Instant, tick_rate: u32) {
        self.next_frame = now + Self::interval(tick_rate);
    }

    pub fn deadline(&self) -> Instant {
        self.next_frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval() {
        assert_eq!(FrameClock::interval(5), Duration::from_millis(200));
        assert_eq!(FrameClock::interval(20), Duration::from_millis(50));
        assert_eq!(FrameClock::interval(0), Duration::from_secs(1));
    }

    #[test]
    fn test_first_frame_is_due_immediately() {
        let now = Instant::now();
        assert!(FrameClock::new(now).is_due(now));
    }

    #[test]
    fn test_schedule_spaces_frames() {
        let start = Instant::now();
        let mut clock = FrameClock::new(start);
        clock.schedule(start, 5);

        assert_eq!(clock.deadline(), start + Duration::from_millis(200));
        assert!(!clock.is_due(start + Duration::from_millis(199)));
        assert!(clock.is_due(start + Duration::from_millis(200)));
    }

    #[test]
    fn test_faster_rate_shortens_wait() {
        let start = Instant::now();
        let mut slow = FrameClock::new(start);
        let mut fast = FrameClock::new(start);
        slow.schedule(start, 5);
        fast.schedule(start, 6);
        assert!(fast.deadline() < slow.deadline());
    }
}
