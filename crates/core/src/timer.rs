//! Session timer - whole-second countdown over a millisecond feed
//!
//! Host loops tick in small deltas (16 ms by default); the timer accumulates
//! them and burns one second of `remaining` per 1000 ms crossed. It never
//! goes below zero and never decides the session outcome itself; the session
//! observes `expired` and finishes exactly once.

use crate::types::TIMER_TICK_MS;

/// Countdown from a configured limit, decremented once per elapsed second
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountdownTimer {
    /// Whole seconds left
    remaining: u32,
    /// Sub-second carry, always < `TIMER_TICK_MS`
    acc_ms: u32,
}

impl CountdownTimer {
    /// Create a countdown starting at `limit` seconds
    pub fn new(limit: u32) -> Self {
        Self {
            remaining: limit,
            acc_ms: 0,
        }
    }

    /// Whole seconds left on the clock
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// True once the countdown has reached zero
    pub fn expired(&self) -> bool {
        self.remaining == 0
    }

    /// Feed elapsed wall time; returns how many whole seconds were consumed
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        if self.remaining == 0 {
            return 0;
        }

        self.acc_ms += elapsed_ms;

        let mut ticked = 0;
        while self.acc_ms >= TIMER_TICK_MS && self.remaining > 0 {
            self.acc_ms -= TIMER_TICK_MS;
            self.remaining -= 1;
            ticked += 1;
        }
        ticked
    }

    /// Restart the countdown from a fresh limit
    pub fn reset(&mut self, limit: u32) {
        self.remaining = limit;
        self.acc_ms = 0;
    }
}
