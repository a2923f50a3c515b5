/// Repeating auto-advance timer driven by the host clock.
///
/// The timer never reads a clock itself: the host passes the current time
/// (seconds, monotonic) to [`AutoAdvanceTimer::poll`] each frame. One timer
/// belongs to exactly one tour run; once cancelled it stays cancelled.
#[derive(Debug, Clone, PartialEq)]
pub struct AutoAdvanceTimer {
    interval: f64,
    next_fire: Option<f64>,
    started: bool,
}

impl AutoAdvanceTimer {
    pub fn new(interval: f64) -> Self {
        Self {
            interval,
            next_fire: None,
            started: false,
        }
    }

    /// Arms the timer. Only the first call per timer has an effect.
    pub fn start(&mut self, now: f64) {
        if self.started {
            log::trace!("Auto-advance timer already started, ignoring");
            return;
        }
        self.started = true;
        self.next_fire = Some(now + self.interval);
    }

    /// Stops the timer for good. Cancelling twice is harmless.
    pub fn cancel(&mut self) {
        if self.next_fire.take().is_some() {
            log::debug!("Auto-advance timer cancelled");
        }
    }

    pub fn is_active(&self) -> bool {
        self.next_fire.is_some()
    }

    pub fn interval(&self) -> f64 {
        self.interval
    }

    /// Returns true once per elapsed interval and re-arms from `now`.
    ///
    /// A host that was stalled for several intervals gets one tick, not a
    /// burst, so the tour never skips nodes.
    pub fn poll(&mut self, now: f64) -> bool {
        match self.next_fire {
            Some(deadline) if now >= deadline => {
                self.next_fire = Some(now + self.interval);
                true
            }
            _ => false,
        }
    }

    /// Seconds until the next tick, for scheduling a repaint
    pub fn remaining(&self, now: f64) -> Option<f64> {
        self.next_fire.map(|deadline| (deadline - now).max(0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_after_interval() {
        let mut timer = AutoAdvanceTimer::new(2.0);
        timer.start(10.0);
        assert!(!timer.poll(11.9));
        assert!(timer.poll(12.0));
        assert!(!timer.poll(12.5));
        assert!(timer.poll(14.0));
    }

    #[test]
    fn test_unstarted_timer_never_fires() {
        let mut timer = AutoAdvanceTimer::new(1.0);
        assert!(!timer.is_active());
        assert!(!timer.poll(100.0));
    }

    #[test]
    fn test_stall_produces_single_tick() {
        let mut timer = AutoAdvanceTimer::new(1.0);
        timer.start(0.0);
        assert!(timer.poll(10.0));
        assert!(!timer.poll(10.5));
        assert_eq!(timer.remaining(10.5), Some(0.5));
    }

    #[test]
    fn test_cancel_is_permanent() {
        let mut timer = AutoAdvanceTimer::new(1.0);
        timer.start(0.0);
        timer.cancel();
        timer.cancel();
        assert!(!timer.is_active());
        assert!(!timer.poll(5.0));

        // restarting a cancelled timer does nothing
        timer.start(5.0);
        assert!(!timer.poll(10.0));
        assert_eq!(timer.remaining(10.0), None);
    }
}
