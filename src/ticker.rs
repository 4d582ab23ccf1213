use std::time::{Duration, Instant};

/// Timer lifecycle owned by the host loop.
pub trait TickDriver {
    /// Arms the driver with `interval`, the first tick due one interval from now.
    fn start(&mut self, interval: Duration);

    /// Cancels the pending deadline and re-arms with `interval`.
    fn reschedule(&mut self, interval: Duration);

    /// Disarms the driver; no further ticks are reported.
    fn stop(&mut self);
}

/// Deadline-based ticker polled from a frame loop.
///
/// At most one deadline is pending at any time, so a reschedule can never
/// leave an older interval running alongside the new one.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntervalTicker {
    interval: Duration,
    next_deadline: Option<Instant>,
}

impl IntervalTicker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when a tick is due at `now` and arms the following one.
    ///
    /// Missed deadlines collapse into a single tick; the next deadline is
    /// measured from `now`.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.next_deadline {
            Some(deadline) if now >= deadline => {
                self.next_deadline = Some(now + self.interval);
                true
            }
            _ => false,
        }
    }

    /// Time left until the next tick, or `None` when stopped.
    #[must_use]
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.next_deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.next_deadline.is_some()
    }

    fn arm_at(&mut self, now: Instant, interval: Duration) {
        self.interval = interval;
        self.next_deadline = Some(now + interval);
    }
}

impl TickDriver for IntervalTicker {
    fn start(&mut self, interval: Duration) {
        self.arm_at(Instant::now(), interval);
    }

    fn reschedule(&mut self, interval: Duration) {
        self.next_deadline = None;
        self.arm_at(Instant::now(), interval);
    }

    fn stop(&mut self) {
        self.next_deadline = None;
    }
}
