//! Loop configuration parameters
//!
//! All timing constants for the doorbell loop. Values are fixed at build
//! time through [`LoopConfig::default`]; tests construct their own.

use serde::{Deserialize, Serialize};

use crate::pins;

/// Core loop configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoopConfig {
    // --- Heartbeat ---
    /// Minimum gap between heartbeat checks (milliseconds, strict `>`)
    pub heartbeat_interval_ms: u32,

    // --- Alarm ---
    /// Blocking pause after each RING line (milliseconds)
    pub alarm_hold_ms: u32,

    // --- Timing ---
    /// Yield between loop passes so the RTOS idle task can run (milliseconds)
    pub poll_interval_ms: u32,

    // --- Serial ---
    /// UART bit rate
    pub baud_rate: u32,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            heartbeat_interval_ms: 2000,
            alarm_hold_ms: 2000,
            poll_interval_ms: 10,
            baud_rate: pins::UART_BAUD,
        }
    }
}
