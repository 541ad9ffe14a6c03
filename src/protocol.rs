//! Serial line protocol between the doorbell board and its host.
//!
//! The board writes one ASCII line per event, terminated `\r\n`:
//!
//! | Line      | Meaning                                             |
//! |-----------|-----------------------------------------------------|
//! | `0`, `1`… | Heartbeat counter, at most once per interval        |
//! | `RING`    | Bell pressed; repeated every alarm hold while held  |
//!
//! The board side only needs [`heartbeat_line`] and [`RING`].  The host
//! side reads the port with [`wait_for_ring`], which blocks until a bell
//! press arrives.

use core::fmt::Write as _;

use log::{debug, info, warn};

/// Alarm line literal.
pub const RING: &str = "RING";

/// Line terminator written after every line.
pub const LINE_END: &str = "\r\n";

/// `u32::MAX` is ten decimal digits.
pub const HEARTBEAT_LINE_CAP: usize = 10;

/// A classified line received from the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SerialLine {
    Heartbeat(u32),
    Ring,
}

/// Render a heartbeat counter as its decimal line (without terminator).
pub fn heartbeat_line(counter: u32) -> heapless::String<HEARTBEAT_LINE_CAP> {
    let mut line = heapless::String::new();
    // Cannot overflow: capacity covers every u32.
    let _ = write!(line, "{}", counter);
    line
}

/// Classify one received line.  Surrounding whitespace, including a
/// trailing `\r`, is ignored.  Anything else unknown yields `None`.
pub fn classify(line: &str) -> Option<SerialLine> {
    let line = line.trim();
    if line == RING {
        return Some(SerialLine::Ring);
    }
    if line.is_empty() || !line.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    line.parse().ok().map(SerialLine::Heartbeat)
}

/// How a [`wait_for_ring`] call ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitOutcome {
    /// A `RING` line arrived.
    Ring { heartbeats: u32 },
    /// The stream reached end-of-file before any `RING`.
    Closed { heartbeats: u32 },
}

/// Block on `reader` until the board reports a bell press.
///
/// Read timeouts and lines that are not valid UTF-8 are logged and the
/// wait continues; any other I/O error is returned.  A line split by a
/// timeout is reassembled.  Heartbeat lines seen on the way are counted.
///
/// A host listener opens the board's port with a read timeout and wraps
/// it in a [`BufReader`](std::io::BufReader):
///
/// ```ignore
/// use std::io::BufReader;
/// use std::time::Duration;
///
/// use doorbell::protocol::{wait_for_ring, WaitOutcome};
///
/// let port = serialport::new("/dev/ttyUSB0", doorbell::pins::UART_BAUD)
///     .timeout(Duration::from_millis(5000))
///     .open()?;
/// let mut reader = BufReader::new(port);
/// match wait_for_ring(&mut reader)? {
///     WaitOutcome::Ring { .. } => place_call(),
///     WaitOutcome::Closed { .. } => reconnect(),
/// }
/// ```
pub fn wait_for_ring<R: std::io::BufRead>(reader: &mut R) -> std::io::Result<WaitOutcome> {
    use std::io::ErrorKind;

    let mut line = String::new();
    let mut heartbeats: u32 = 0;

    loop {
        // A timed-out read leaves its partial bytes in `line`; the next
        // read appends to them.
        match reader.read_line(&mut line) {
            Ok(0) => {
                if classify(&line) == Some(SerialLine::Ring) {
                    info!("bell press detected");
                    return Ok(WaitOutcome::Ring { heartbeats });
                }
                warn!("serial stream closed while waiting for {}", RING);
                return Ok(WaitOutcome::Closed { heartbeats });
            }
            Ok(_) => {
                match classify(&line) {
                    Some(SerialLine::Ring) => {
                        info!("bell press detected");
                        return Ok(WaitOutcome::Ring { heartbeats });
                    }
                    Some(SerialLine::Heartbeat(n)) => {
                        debug!("heartbeat {}", n);
                        heartbeats = heartbeats.saturating_add(1);
                    }
                    None => debug!("ignoring line {:?}", line.trim()),
                }
                line.clear();
            }
            Err(e) if e.kind() == ErrorKind::TimedOut => {
                warn!("serial read timed out, still waiting");
            }
            Err(e) if e.kind() == ErrorKind::InvalidData => {
                debug!("invalid data on serial line, skipped");
                line.clear();
            }
            Err(e) => return Err(e),
        }
    }
}
