//! Clock-driven one-shot deadlines.
//!
//! Time is whatever monotonic millisecond clock the host passes in
//! (`performance.now()` in the browser). A deadline never fires on its own;
//! the owner polls it once per tick.

/// A cancellable one-shot deadline.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Deadline {
    at: Option<f64>,
}

impl Deadline {
    pub const fn disarmed() -> Self {
        Deadline { at: None }
    }

    /// Arm (or re-arm) the deadline `delay_ms` after `now_ms`.
    /// Any previously armed time is forgotten.
    pub fn arm(&mut self, now_ms: f64, delay_ms: f64) {
        self.at = Some(now_ms + delay_ms.max(0.0));
    }

    /// Cancelling an unarmed or already-fired deadline does nothing.
    pub fn cancel(&mut self) {
        self.at = None;
    }

    pub fn is_armed(&self) -> bool {
        self.at.is_some()
    }

    pub fn expires_at(&self) -> Option<f64> {
        self.at
    }

    /// Returns true exactly once, on the first poll at or after the deadline.
    pub fn poll(&mut self, now_ms: f64) -> bool {
        match self.at {
            Some(at) if now_ms >= at => {
                self.at = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_at_deadline() {
        let mut d = Deadline::disarmed();
        d.arm(100.0, 50.0);
        assert!(!d.poll(149.9));
        assert!(d.poll(150.0));
        assert!(!d.poll(200.0), "Deadline should only fire once");
        assert!(!d.is_armed());
    }

    #[test]
    fn rearm_replaces_previous_time() {
        let mut d = Deadline::disarmed();
        d.arm(0.0, 3000.0);
        d.arm(10.0, 100.0);
        assert_eq!(d.expires_at(), Some(110.0));
        assert!(d.poll(110.0));
    }

    #[test]
    fn cancel_is_idempotent() {
        let mut d = Deadline::disarmed();
        d.cancel();
        d.arm(0.0, 10.0);
        assert!(d.poll(10.0));
        d.cancel();
        d.cancel();
        assert!(!d.poll(1000.0));
    }

    #[test]
    fn negative_delay_fires_immediately() {
        let mut d = Deadline::disarmed();
        d.arm(5.0, -20.0);
        assert!(d.poll(5.0));
    }
}
