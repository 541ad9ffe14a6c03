//! End-to-end wire output: the loop driving the real adapters over
//! embedded-hal mock pins and an in-memory UART.

use std::cell::Cell;
use std::convert::Infallible;
use std::rc::Rc;

use embedded_hal::digital::{ErrorType, InputPin, OutputPin};

use doorbell::adapters::hardware::HardwareAdapter;
use doorbell::adapters::log_sink::LogEventSink;
use doorbell::adapters::serial::SerialLineAdapter;
use doorbell::app::service::AppService;
use doorbell::config::LoopConfig;
use doorbell::protocol::{self, SerialLine};

use super::mock_hw::SimClock;

/// Input pin whose level the test flips through a shared cell.
struct BellPin(Rc<Cell<bool>>);

impl ErrorType for BellPin {
    type Error = Infallible;
}

impl InputPin for BellPin {
    fn is_high(&mut self) -> Result<bool, Infallible> {
        Ok(self.0.get())
    }
    fn is_low(&mut self) -> Result<bool, Infallible> {
        Ok(!self.0.get())
    }
}

/// Output pin recording every level written.
#[derive(Default)]
struct AlarmPin {
    writes: Vec<bool>,
}

impl ErrorType for AlarmPin {
    type Error = Infallible;
}

impl OutputPin for AlarmPin {
    fn set_low(&mut self) -> Result<(), Infallible> {
        self.writes.push(false);
        Ok(())
    }
    fn set_high(&mut self) -> Result<(), Infallible> {
        self.writes.push(true);
        Ok(())
    }
}

#[test]
fn wire_output_matches_line_protocol() {
    let level = Rc::new(Cell::new(false));
    let now = Rc::new(Cell::new(0u32));

    let mut hw = HardwareAdapter::new(BellPin(level.clone()), AlarmPin::default());
    let mut serial = SerialLineAdapter::new(String::new());
    let mut clock = SimClock::new(now.clone());
    let mut sink = LogEventSink::new();
    let mut app = AppService::new(LoopConfig::default());
    app.start(&mut sink);

    for t in [2001, 4002] {
        now.set(t);
        app.tick(&mut hw, &mut serial, &mut clock, &mut sink);
    }
    level.set(true);
    now.set(4100);
    app.tick(&mut hw, &mut serial, &mut clock, &mut sink);
    level.set(false);
    now.set(6200);
    app.tick(&mut hw, &mut serial, &mut clock, &mut sink);

    assert_eq!(serial.inner(), "0\r\n1\r\nRING\r\n2\r\n");

    let parsed: Vec<_> = serial
        .inner()
        .lines()
        .filter_map(protocol::classify)
        .collect();
    assert_eq!(
        parsed,
        vec![
            SerialLine::Heartbeat(0),
            SerialLine::Heartbeat(1),
            SerialLine::Ring,
            SerialLine::Heartbeat(2),
        ]
    );

    let (_, alarm) = hw.release();
    assert_eq!(alarm.writes, vec![true], "alarm pin only ever driven high");
}

#[test]
fn host_watcher_sees_board_ring() {
    let level = Rc::new(Cell::new(false));
    let now = Rc::new(Cell::new(0u32));

    let mut hw = HardwareAdapter::new(BellPin(level.clone()), AlarmPin::default());
    let mut serial = SerialLineAdapter::new(String::new());
    let mut clock = SimClock::new(now.clone());
    let mut sink = LogEventSink::new();
    let mut app = AppService::new(LoopConfig::default());

    for t in (0..10_000).step_by(50) {
        // The alarm hold advances the clock past the loop's schedule.
        now.set(now.get().max(t));
        if t == 7_000 {
            level.set(true);
        }
        app.tick(&mut hw, &mut serial, &mut clock, &mut sink);
        level.set(false);
    }
    assert_eq!(now.get(), 9_950);
    assert_eq!(serial.inner(), "0\r\n1\r\n2\r\nRING\r\n3\r\n");

    let mut reader = std::io::Cursor::new(serial.inner().as_bytes().to_vec());
    assert_eq!(
        protocol::wait_for_ring(&mut reader).unwrap(),
        protocol::WaitOutcome::Ring { heartbeats: 3 }
    );
}
