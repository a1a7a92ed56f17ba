// rosterview/rosterview-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::time::Duration;

use chrono::{DateTime, Utc};

/// A restartable single-shot timer without a clock of its own. Every `schedule` pushes the
/// deadline out and bumps the generation, so a burst of requests fires exactly once.
#[derive(Debug, Clone)]
pub struct CoalescingScheduler {
    delay: Duration,
    deadline: Option<DateTime<Utc>>,
    generation: u64,
}

impl CoalescingScheduler {
    pub fn new(delay: Duration) -> Self {
        CoalescingScheduler {
            delay,
            deadline: None,
            generation: 0,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn set_delay(&mut self, delay: Duration) {
        self.delay = delay
    }

    /// (Re)starts the timer and returns the generation identifying this request.
    pub fn schedule(&mut self, now: DateTime<Utc>) -> u64 {
        let delay = chrono::Duration::from_std(self.delay).unwrap_or(chrono::Duration::zero());
        self.generation += 1;
        self.deadline = Some(now + delay);
        self.generation
    }

    pub fn cancel(&mut self) {
        self.generation += 1;
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<DateTime<Utc>> {
        self.deadline
    }

    /// The generation of the pending request, if any.
    pub fn pending_generation(&self) -> Option<u64> {
        self.deadline.map(|_| self.generation)
    }

    /// Consumes the pending request if its deadline has passed.
    pub fn fire_if_due(&mut self, now: DateTime<Utc>) -> bool {
        match self.deadline {
            Some(deadline) if deadline <= now => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Consumes the pending request if it is still the one tagged with `generation`.
    /// Timers of superseded requests are no-ops.
    pub fn fire_generation(&mut self, generation: u64) -> bool {
        if self.deadline.is_none() || self.generation != generation {
            return false;
        }
        self.deadline = None;
        true
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn at_ms(ms: i64) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap() + chrono::Duration::milliseconds(ms)
    }

    #[test]
    fn test_burst_collapses_to_one_execution() {
        let mut scheduler = CoalescingScheduler::new(Duration::from_millis(250));

        scheduler.schedule(at_ms(0));
        scheduler.schedule(at_ms(100));
        scheduler.schedule(at_ms(200));

        assert!(!scheduler.fire_if_due(at_ms(300)));
        assert!(scheduler.fire_if_due(at_ms(450)));
        assert!(!scheduler.fire_if_due(at_ms(1000)));
    }

    #[test]
    fn test_stale_generations_are_ignored() {
        let mut scheduler = CoalescingScheduler::new(Duration::from_millis(250));

        let first = scheduler.schedule(at_ms(0));
        let second = scheduler.schedule(at_ms(10));

        assert!(!scheduler.fire_generation(first));
        assert!(scheduler.fire_generation(second));
        assert!(!scheduler.fire_generation(second));
    }

    #[test]
    fn test_cancel() {
        let mut scheduler = CoalescingScheduler::new(Duration::from_millis(250));
        let generation = scheduler.schedule(at_ms(0));
        scheduler.cancel();

        assert!(!scheduler.is_pending());
        assert!(!scheduler.fire_generation(generation));
        assert!(!scheduler.fire_if_due(at_ms(500)));
    }
}
