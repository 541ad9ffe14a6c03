//! Port traits — the hexagonal boundary between the loop and the board.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ AppService (domain)
//! ```
//!
//! Driven adapters (pins, UART, clock, event sinks) implement these traits.
//! The [`AppService`](super::service::AppService) consumes them via
//! generics, so the loop never touches hardware directly.
//!
//! Every port is infallible.  Adapters over fallible HAL calls log the
//! failure and carry on; a fault shows up as missing output on the wire.

// ───────────────────────────────────────────────────────────────
// Bell input port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port for the bell button.
pub trait BellInputPort {
    /// Sample the pin now.  `true` = pressed (active level).
    fn is_pressed(&mut self) -> bool;
}

// ───────────────────────────────────────────────────────────────
// Alarm output port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port for the alarm output pin.
///
/// There is deliberately no `clear`: the loop only ever drives the pin
/// active, and a board reset is the only way back.
pub trait AlarmOutputPort {
    /// Drive the alarm pin to its active level.
    fn set_active(&mut self);

    /// Last level written by the firmware.
    fn is_active(&self) -> bool;
}

// ───────────────────────────────────────────────────────────────
// Serial port (driven adapter: domain → UART)
// ───────────────────────────────────────────────────────────────

/// Line-oriented serial sink.  No read path.
pub trait SerialPort {
    /// Append `line` followed by the line terminator.
    fn write_line(&mut self, line: &str);
}

// ───────────────────────────────────────────────────────────────
// Time port (driven adapter: domain ↔ system timer)
// ───────────────────────────────────────────────────────────────

/// Monotonic millisecond clock plus a blocking delay.
pub trait TimePort {
    /// Milliseconds since boot.  Wraps at `u32::MAX`.
    fn now_ms(&self) -> u32;

    /// Block the calling task for `ms` milliseconds.
    fn delay_ms(&mut self, ms: u32);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging)
// ───────────────────────────────────────────────────────────────

/// The loop reports structured [`AppEvent`](super::events::AppEvent)s
/// through this port.  Adapters decide where they go.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
