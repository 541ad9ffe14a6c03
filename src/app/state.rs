//! Loop-owned state: the heartbeat counter and its timing reference.

/// Mutable loop state, reset at boot and never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoopState {
    counter: u32,
    last_tick_ms: u32,
}

impl LoopState {
    pub const fn new() -> Self {
        Self {
            counter: 0,
            last_tick_ms: 0,
        }
    }

    /// Next value to be emitted.
    pub fn counter(&self) -> u32 {
        self.counter
    }

    /// Timestamp of the last heartbeat check that fired.
    pub fn last_tick_ms(&self) -> u32 {
        self.last_tick_ms
    }

    /// `true` once strictly more than `interval_ms` has passed since the
    /// last tick.  Uses wrapping arithmetic so the ms clock may roll over.
    pub fn is_due(&self, now_ms: u32, interval_ms: u32) -> bool {
        now_ms.wrapping_sub(self.last_tick_ms) > interval_ms
    }

    /// Return the current counter and advance it (wraps at `u32::MAX`).
    pub fn take_counter(&mut self) -> u32 {
        let value = self.counter;
        self.counter = self.counter.wrapping_add(1);
        value
    }

    pub fn mark_tick(&mut self, now_ms: u32) {
        self.last_tick_ms = now_ms;
    }

    #[cfg(test)]
    pub(crate) fn with_counter(counter: u32) -> Self {
        Self {
            counter,
            last_tick_ms: 0,
        }
    }
}
