//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter    | Implements                      | Connects to               |
//! |------------|---------------------------------|---------------------------|
//! | `hardware` | BellInputPort, AlarmOutputPort  | embedded-hal GPIO pins    |
//! | `serial`   | SerialPort                      | UART (any `fmt::Write`)   |
//! | `time`     | TimePort                        | ESP32 system timer        |
//! | `log_sink` | EventSink                       | Serial log output         |

pub mod hardware;
pub mod log_sink;
pub mod serial;
pub mod time;
