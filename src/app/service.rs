//! Application service — the hexagonal core.
//!
//! [`AppService`] owns the loop state and runs the two per-pass checks:
//! the heartbeat (counter line once per interval while the bell is idle)
//! and the alarm (raise output, send `RING`, block).  All I/O flows
//! through port traits injected at call sites, making the whole loop
//! testable against a simulated clock.
//!
//! ```text
//!  BellInputPort ──▶ ┌──────────────────────┐ ──▶ SerialPort
//!                    │      AppService      │
//! AlarmOutputPort ◀──│  heartbeat · alarm   │ ──▶ EventSink
//!                    └──────────────────────┘
//!                           ▲      │
//!                           └──────┘ TimePort (now / delay)
//! ```

use log::info;

use crate::config::LoopConfig;
use crate::protocol;

use super::events::AppEvent;
use super::ports::{AlarmOutputPort, BellInputPort, EventSink, SerialPort, TimePort};
use super::state::LoopState;

/// Result of the heartbeat check within one pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heartbeat {
    /// The interval has not elapsed yet.
    NotDue,
    /// A counter line carrying this value was written.
    Sent(u32),
    /// The interval elapsed but the bell was pressed; nothing was written.
    Suppressed,
}

/// What one call to [`AppService::tick`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickOutcome {
    pub heartbeat: Heartbeat,
    /// `true` if the alarm branch ran (and blocked for the hold time).
    pub alarm: bool,
}

// ───────────────────────────────────────────────────────────────
// AppService
// ───────────────────────────────────────────────────────────────

/// The doorbell control loop.
pub struct AppService {
    config: LoopConfig,
    state: LoopState,
}

impl AppService {
    /// Construct the loop with counter and last tick at zero.
    pub fn new(config: LoopConfig) -> Self {
        Self {
            config,
            state: LoopState::new(),
        }
    }

    pub fn start(&mut self, sink: &mut impl EventSink) {
        sink.emit(&AppEvent::Started {
            interval_ms: self.config.heartbeat_interval_ms,
        });
        info!(
            "AppService started (heartbeat every >{} ms, alarm hold {} ms)",
            self.config.heartbeat_interval_ms, self.config.alarm_hold_ms
        );
    }

    // ── Per-pass orchestration ────────────────────────────────

    /// Run one pass: heartbeat check, then alarm check.
    ///
    /// The bell pin is sampled once by each check, so a press that lands
    /// between the two samples raises the alarm in the same pass.
    pub fn tick(
        &mut self,
        hw: &mut (impl BellInputPort + AlarmOutputPort),
        serial: &mut impl SerialPort,
        time: &mut impl TimePort,
        sink: &mut impl EventSink,
    ) -> TickOutcome {
        let now_ms = time.now_ms();
        let heartbeat = self.heartbeat_check(now_ms, hw, serial, sink);
        let alarm = self.alarm_check(now_ms, hw, serial, time, sink);
        TickOutcome { heartbeat, alarm }
    }

    /// Tick forever, yielding `poll_interval_ms` between passes.
    pub fn run(
        &mut self,
        hw: &mut (impl BellInputPort + AlarmOutputPort),
        serial: &mut impl SerialPort,
        time: &mut impl TimePort,
        sink: &mut impl EventSink,
    ) -> ! {
        loop {
            self.tick(hw, serial, time, sink);
            if self.config.poll_interval_ms > 0 {
                time.delay_ms(self.config.poll_interval_ms);
            }
        }
    }

    fn heartbeat_check(
        &mut self,
        now_ms: u32,
        hw: &mut impl BellInputPort,
        serial: &mut impl SerialPort,
        sink: &mut impl EventSink,
    ) -> Heartbeat {
        if !self.state.is_due(now_ms, self.config.heartbeat_interval_ms) {
            return Heartbeat::NotDue;
        }

        let outcome = if hw.is_pressed() {
            sink.emit(&AppEvent::HeartbeatSuppressed { at_ms: now_ms });
            Heartbeat::Suppressed
        } else {
            let counter = self.state.take_counter();
            serial.write_line(&protocol::heartbeat_line(counter));
            sink.emit(&AppEvent::Heartbeat {
                counter,
                at_ms: now_ms,
            });
            Heartbeat::Sent(counter)
        };

        // The reference moves even when suppressed so a held bell does not
        // stall the cadence.
        self.state.mark_tick(now_ms);
        outcome
    }

    fn alarm_check(
        &mut self,
        now_ms: u32,
        hw: &mut (impl BellInputPort + AlarmOutputPort),
        serial: &mut impl SerialPort,
        time: &mut impl TimePort,
        sink: &mut impl EventSink,
    ) -> bool {
        if !hw.is_pressed() {
            return false;
        }

        hw.set_active();
        serial.write_line(protocol::RING);
        sink.emit(&AppEvent::AlarmRaised {
            at_ms: now_ms,
            hold_ms: self.config.alarm_hold_ms,
        });
        time.delay_ms(self.config.alarm_hold_ms);
        true
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn state(&self) -> &LoopState {
        &self.state
    }

    pub fn config(&self) -> &LoopConfig {
        &self.config
    }
}
