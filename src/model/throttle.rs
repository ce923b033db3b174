use std::time::{Duration, Instant};

/// Decides when the viewer should redraw, independently of how often the
/// simulation itself is stepped.
#[derive(Debug, Clone)]
pub struct RedrawThrottle {
    interval: Duration,
    last_redraw: Option<Instant>,
}

impl RedrawThrottle {
    pub fn new(interval: Duration) -> Self {
        RedrawThrottle {
            interval,
            last_redraw: None,
        }
    }

    /// True the first time it's asked, and afterwards only once more than
    /// `interval` has passed since the last time it said yes.
    pub fn should_redraw(&mut self, now: Instant) -> bool {
        let due = match self.last_redraw {
            None => true,
            Some(last) => now.saturating_duration_since(last) > self.interval,
        };
        if due {
            self.last_redraw = Some(now);
        }
        due
    }

    /// Forget the last redraw, so the next call to `should_redraw` says yes.
    pub fn reset(&mut self) {
        self.last_redraw = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cadence() {
        let mut throttle = RedrawThrottle::new(Duration::from_millis(10));
        let t0 = Instant::now();

        assert!(throttle.should_redraw(t0));
        assert!(!throttle.should_redraw(t0 + Duration::from_millis(4)));
        // Exactly one interval isn't enough
        assert!(!throttle.should_redraw(t0 + Duration::from_millis(10)));
        assert!(throttle.should_redraw(t0 + Duration::from_millis(11)));
        // Measured from the last redraw, not the first
        assert!(!throttle.should_redraw(t0 + Duration::from_millis(20)));
        assert!(throttle.should_redraw(t0 + Duration::from_millis(22)));
    }

    #[test]
    fn test_clock_going_backwards() {
        let mut throttle = RedrawThrottle::new(Duration::from_millis(10));
        let t0 = Instant::now() + Duration::from_secs(1);

        assert!(throttle.should_redraw(t0));
        assert!(!throttle.should_redraw(t0 - Duration::from_millis(500)));

        throttle.reset();
        assert!(throttle.should_redraw(t0));
    }
}
