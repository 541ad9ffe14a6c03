//! Hardware adapter: bridges the two GPIOs to the domain port traits.
//!
//! Generic over the embedded-hal 1.0 digital traits, so the same adapter
//! wraps `esp_idf_hal::gpio::PinDriver` on the board and plain mock pins
//! on the host.  HAL errors are logged and swallowed: a failed read counts
//! as "not pressed", a failed write leaves the pin where it was.

use embedded_hal::digital::{InputPin, OutputPin};
use log::warn;

use crate::app::ports::{AlarmOutputPort, BellInputPort};

/// Concrete adapter that puts the bell input and alarm output behind ports.
pub struct HardwareAdapter<I, O> {
    bell: I,
    alarm: O,
    alarm_active: bool,
}

impl<I, O> HardwareAdapter<I, O>
where
    I: InputPin,
    O: OutputPin,
{
    /// Take ownership of already-configured pins.  The alarm output is
    /// assumed low, as left by [`init_board`](crate::drivers::hw_init).
    pub fn new(bell: I, alarm: O) -> Self {
        Self {
            bell,
            alarm,
            alarm_active: false,
        }
    }

    /// Hand the pins back (tests inspect them after a run).
    pub fn release(self) -> (I, O) {
        (self.bell, self.alarm)
    }
}

// ── BellInputPort implementation ──────────────────────────────

impl<I, O> BellInputPort for HardwareAdapter<I, O>
where
    I: InputPin,
    O: OutputPin,
{
    fn is_pressed(&mut self) -> bool {
        match self.bell.is_high() {
            Ok(level) => level,
            Err(e) => {
                warn!("bell input read failed: {:?}", e);
                false
            }
        }
    }
}

// ── AlarmOutputPort implementation ────────────────────────────

impl<I, O> AlarmOutputPort for HardwareAdapter<I, O>
where
    I: InputPin,
    O: OutputPin,
{
    fn set_active(&mut self) {
        match self.alarm.set_high() {
            Ok(()) => self.alarm_active = true,
            Err(e) => warn!("alarm output write failed: {:?}", e),
        }
    }

    fn is_active(&self) -> bool {
        self.alarm_active
    }
}
