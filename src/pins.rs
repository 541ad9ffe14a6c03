//! GPIO / peripheral pin assignments for the doorbell board.
//!
//! Single source of truth: every driver references this module rather than
//! hard-coding pin numbers.

// ---------------------------------------------------------------------------
// Alarm output
// ---------------------------------------------------------------------------

/// Digital output: driven HIGH when the bell input fires. Never driven LOW
/// again by the firmware; only a reset clears it.
pub const ALARM_OUTPUT_GPIO: i32 = 13;

// ---------------------------------------------------------------------------
// Bell input
// ---------------------------------------------------------------------------

/// Digital input: HIGH = bell pressed. Internal pull-down holds it LOW at rest.
pub const BELL_INPUT_GPIO: i32 = 11;

// ---------------------------------------------------------------------------
// UART link to the host
// ---------------------------------------------------------------------------

pub const UART_TX_GPIO: i32 = 17;
pub const UART_RX_GPIO: i32 = 18;

/// Serial bit rate shared with the host listener.
pub const UART_BAUD: u32 = 115_200;
