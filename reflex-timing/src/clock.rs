use crate::timer::{TickStats, Timer};
use std::time::Duration;

/// Catch-up beyond this many ticks is dropped and the schedule restarts from now.
pub const MAX_CATCH_UP: u32 = 50;

/// Turns a free-running timer into a fixed-period tick schedule.
///
/// Deadlines stay aligned with the first one, so a late wake-up is paid back
/// by reporting several due ticks at once rather than by stretching time.
#[derive(Debug, Clone)]
pub struct TickClock<T: Timer<Timestamp = u64>> {
    timer: T,
    period_ns: u64,
    next_deadline: u64,
    last_tick: Option<u64>,
    total: u64,
}

impl<T: Timer<Timestamp = u64>> TickClock<T> {
    /// First tick is due one period from now.
    pub fn new(timer: T, period: Duration) -> Self {
        let period_ns = (period.as_nanos() as u64).max(1);
        let next_deadline = timer.now() + period_ns;
        Self {
            timer,
            period_ns,
            next_deadline,
            last_tick: None,
            total: 0,
        }
    }

    /// Number of ticks whose deadline has passed since the last call.
    pub fn due(&mut self) -> u32 {
        let now = self.timer.now();
        if now < self.next_deadline {
            return 0;
        }
        let behind = (now - self.next_deadline) / self.period_ns + 1;
        let due = if behind > MAX_CATCH_UP as u64 {
            log::warn!(
                "tick clock fell {} ticks behind, resynchronising",
                behind
            );
            self.next_deadline = now + self.period_ns;
            MAX_CATCH_UP
        } else {
            self.next_deadline += behind * self.period_ns;
            behind as u32
        };

        if let Some(last) = self.last_tick {
            self.timer
                .record_tick(Duration::from_nanos(now.saturating_sub(last) / due as u64));
        }
        self.last_tick = Some(now);
        self.total += due as u64;
        due
    }

    /// Sleeps until the next deadline, then returns the due tick count (at least one).
    pub fn wait(&mut self) -> u32 {
        let now = self.timer.now();
        if now < self.next_deadline {
            self.timer
                .sleep(Duration::from_nanos(self.next_deadline - now));
        }
        loop {
            let due = self.due();
            if due > 0 {
                return due;
            }
            // Woke a little early.
            std::hint::spin_loop();
        }
    }

    /// Time left before the next tick is due.
    pub fn remaining(&self) -> Duration {
        Duration::from_nanos(self.next_deadline.saturating_sub(self.timer.now()))
    }

    pub fn total_ticks(&self) -> u64 {
        self.total
    }

    pub fn stats(&self) -> TickStats {
        self.timer.tick_stats()
    }

    pub fn timer(&self) -> &T {
        &self.timer
    }
}
