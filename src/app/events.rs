//! Outbound application events.
//!
//! The [`AppService`](super::service::AppService) emits these through the
//! [`EventSink`](super::ports::EventSink) port.  They are diagnostics only;
//! the serial wire protocol is written through
//! [`SerialPort`](super::ports::SerialPort) independently.

/// Structured events emitted by the loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// The loop has been initialised.
    Started { interval_ms: u32 },

    /// A heartbeat line carrying `counter` went out at `at_ms`.
    Heartbeat { counter: u32, at_ms: u32 },

    /// The heartbeat check fired while the bell was held; nothing was sent.
    HeartbeatSuppressed { at_ms: u32 },

    /// The bell was seen pressed: output raised, RING sent, loop paused.
    AlarmRaised { at_ms: u32, hold_ms: u32 },
}
