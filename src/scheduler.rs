/// Fixed-interval tick clock driven by the frame loop.
///
/// The loop polls [`TickClock::due`] once per frame; at most one tick fires per
/// poll, so a slow frame never produces a burst of overlapping ticks.
#[derive(Clone, Debug, Default)]
pub struct TickClock {
    interval: f64,
    last_tick_at: Option<f64>,
}

impl TickClock {
    pub fn new(interval_ms: u64) -> Self {
        Self { interval: interval_ms as f64 / 1000.0, last_tick_at: None }
    }

    pub fn set_interval_ms(&mut self, interval_ms: u64) {
        self.interval = interval_ms as f64 / 1000.0;
    }

    pub fn start(&mut self, now: f64) {
        self.last_tick_at = Some(now);
    }

    pub fn stop(&mut self) {
        self.last_tick_at = None;
    }

    pub fn is_running(&self) -> bool {
        self.last_tick_at.is_some()
    }

    pub fn due(&mut self, now: f64) -> bool {
        let Some(last) = self.last_tick_at else {
            return false;
        };
        if now - last < self.interval {
            return false;
        }
        // Keep the fractional remainder so ticks stay on the interval grid
        // instead of snapping to frame boundaries; after a stall, resync.
        let next = last + self.interval;
        self.last_tick_at = Some(if now - next >= self.interval { now } else { next });
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stopped_clock_never_fires() {
        let mut clock = TickClock::new(150);
        assert!(!clock.due(10.0));
    }

    #[test]
    fn fires_once_per_interval() {
        let mut clock = TickClock::new(100);
        clock.start(0.0);
        assert!(!clock.due(0.05));
        assert!(clock.due(0.1));
        assert!(!clock.due(0.15));
        // A long stall still yields a single tick.
        assert!(clock.due(5.0));
        assert!(!clock.due(5.01));
    }

    #[test]
    fn frame_rate_does_not_stretch_the_interval() {
        for interval_ms in [70u64, 110, 150] {
            let mut clock = TickClock::new(interval_ms);
            clock.start(0.0);
            let ticks = (1..=600).filter(|frame| clock.due(*frame as f64 / 60.0)).count();
            let expected = (10_000 / interval_ms) as usize;
            assert!(
                ticks + 1 >= expected && ticks <= expected + 1,
                "{}ms: {} ticks, expected about {}",
                interval_ms,
                ticks,
                expected
            );
        }
    }

    #[test]
    fn stop_cancels_pending_tick() {
        let mut clock = TickClock::new(100);
        clock.start(0.0);
        clock.stop();
        assert!(!clock.is_running());
        assert!(!clock.due(1.0));
    }
}
