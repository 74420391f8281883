//! Match resolver timing - the Idle/Resolving gate
//!
//! Once a pair is buffered the session arms this countdown; while it runs,
//! every new pick is rejected. The comparison itself happens in the session
//! when `advance` reports the delay has elapsed, so both cards stay visible
//! for the configured window first.

/// Visibility-delay countdown between buffering a pair and comparing it
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Resolver {
    /// Remaining delay in milliseconds; None while idle
    pending_ms: Option<u32>,
}

impl Resolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a resolution is in flight
    pub fn is_resolving(&self) -> bool {
        self.pending_ms.is_some()
    }

    /// Start the countdown for a freshly buffered pair
    pub fn arm(&mut self, delay_ms: u32) {
        self.pending_ms = Some(delay_ms);
    }

    /// Advance the countdown; returns true exactly once, when it completes
    pub fn advance(&mut self, elapsed_ms: u32) -> bool {
        let Some(remaining) = self.pending_ms else {
            return false;
        };

        let remaining = remaining.saturating_sub(elapsed_ms);
        if remaining == 0 {
            self.pending_ms = None;
            true
        } else {
            self.pending_ms = Some(remaining);
            false
        }
    }

    /// Drop any in-flight countdown (restart/teardown path)
    pub fn cancel(&mut self) {
        self.pending_ms = None;
    }
}
