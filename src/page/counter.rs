//! Profile stat counters that tick up from zero.

/// Interval between counter steps
pub const COUNTER_TICK_MS: u64 = 20;
/// Number of steps to reach the target
pub const COUNTER_STEPS: u64 = 100;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CounterAnimation {
    target: u32,
    started_ms: u64,
}

impl CounterAnimation {
    pub fn new(target: u32, started_ms: u64) -> Self {
        Self { target, started_ms }
    }

    /// Displayed value: `floor(step * target / 100)`, exactly `target` once
    /// all steps have run.
    pub fn value_at(&self, now_ms: u64) -> u32 {
        let steps = now_ms.saturating_sub(self.started_ms) / COUNTER_TICK_MS;
        if steps >= COUNTER_STEPS {
            return self.target;
        }
        (self.target as u64 * steps / COUNTER_STEPS) as u32
    }
}
