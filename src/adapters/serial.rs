//! UART line adapter.
//!
//! Implements [`SerialPort`] over any [`core::fmt::Write`] byte sink.  On
//! the board that is `esp_idf_hal::uart::UartDriver` opened at 115200 baud
//! by [`init_board`](crate::drivers::hw_init); in host tests it is a plain
//! `String`.
//!
//! Every line ends with `\r\n`.  A write error drops the rest of that line
//! and is logged; the loop never sees it.

use core::fmt::Write;

use log::warn;

use crate::app::ports::SerialPort;
use crate::protocol::LINE_END;

pub struct SerialLineAdapter<W> {
    tx: W,
}

impl<W: Write> SerialLineAdapter<W> {
    pub fn new(tx: W) -> Self {
        Self { tx }
    }

    /// Borrow the underlying writer.
    pub fn inner(&self) -> &W {
        &self.tx
    }
}

impl<W: Write> SerialPort for SerialLineAdapter<W> {
    fn write_line(&mut self, line: &str) {
        if self
            .tx
            .write_str(line)
            .and_then(|()| self.tx.write_str(LINE_END))
            .is_err()
        {
            warn!("serial write failed, line dropped: {:?}", line);
        }
    }
}
