//! Fuzz target: `protocol::classify` and `protocol::wait_for_ring`
//!
//! Feeds arbitrary bytes, as a host would read them off a noisy serial
//! line, through the RING watcher.  It must never panic, must only stop
//! on a real `RING` line or end of input, and must agree with `classify`.
//!
//! cargo fuzz run fuzz_serial_lines

#![no_main]

use doorbell::protocol::{self, SerialLine, WaitOutcome};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = core::str::from_utf8(data) {
        for line in text.lines() {
            if let Some(SerialLine::Heartbeat(n)) = protocol::classify(line) {
                let rendered = protocol::heartbeat_line(n);
                assert_eq!(protocol::classify(&rendered), Some(SerialLine::Heartbeat(n)));
            }
        }
    }

    let mut reader = std::io::Cursor::new(data);
    let outcome = protocol::wait_for_ring(&mut reader).expect("in-memory reads cannot fail");
    let consumed = reader.position() as usize;
    match outcome {
        WaitOutcome::Ring { .. } => {
            let seen = String::from_utf8_lossy(&data[..consumed]);
            assert!(seen.lines().any(|l| l.trim() == protocol::RING));
        }
        WaitOutcome::Closed { .. } => assert_eq!(consumed, data.len()),
    }
});
