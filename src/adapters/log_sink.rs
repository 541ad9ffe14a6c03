//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing loop events to the ESP-IDF logger
//! (console UART in production).  Heartbeats go out at `debug` so the
//! console stays readable at the default level.

use log::{debug, info};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the console.
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started { interval_ms } => {
                info!("START | heartbeat interval={}ms", interval_ms);
            }
            AppEvent::Heartbeat { counter, at_ms } => {
                debug!("BEAT  | n={} t={}ms", counter, at_ms);
            }
            AppEvent::HeartbeatSuppressed { at_ms } => {
                debug!("MUTE  | bell held, heartbeat skipped t={}ms", at_ms);
            }
            AppEvent::AlarmRaised { at_ms, hold_ms } => {
                info!("RING  | t={}ms, holding {}ms", at_ms, hold_ms);
            }
        }
    }
}
