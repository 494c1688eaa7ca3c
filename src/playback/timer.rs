use crate::foundation::clock::Millis;

/// One-shot countdown.
///
/// Arming replaces any pending deadline, so at most one firing is ever
/// outstanding. A fired timer disarms itself and must be re-armed explicitly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OneShotTimer {
    deadline: Option<Millis>,
}

impl OneShotTimer {
    /// Disarmed timer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fire `interval_ms` after `now_ms`, dropping any earlier deadline.
    pub fn start(&mut self, now_ms: Millis, interval_ms: Millis) {
        self.deadline = Some(now_ms.saturating_add(interval_ms));
    }

    /// Disarm without firing.
    pub fn stop(&mut self) {
        self.deadline = None;
    }

    /// Whether a firing is pending.
    pub fn is_active(&self) -> bool {
        self.deadline.is_some()
    }

    /// Absolute deadline, if armed.
    pub fn deadline(&self) -> Option<Millis> {
        self.deadline
    }

    /// Time left until the deadline, if armed.
    pub fn remaining(&self, now_ms: Millis) -> Option<Millis> {
        self.deadline.map(|d| d.saturating_sub(now_ms))
    }

    /// Returns true exactly once when `now_ms` reaches the deadline.
    pub fn poll(&mut self, now_ms: Millis) -> bool {
        match self.deadline {
            Some(d) if now_ms >= d => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/playback/timer.rs"]
mod tests;
