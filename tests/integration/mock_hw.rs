//! Mock board for integration tests.
//!
//! A shared simulated clock drives everything: the bell follows a press
//! schedule in simulated time, the serial mock stamps every line with the
//! time it was written, and `delay_ms` simply advances the clock.

use std::cell::Cell;
use std::rc::Rc;

use doorbell::app::events::AppEvent;
use doorbell::app::ports::{AlarmOutputPort, BellInputPort, EventSink, SerialPort, TimePort};
use doorbell::app::service::{AppService, TickOutcome};
use doorbell::config::LoopConfig;

pub type SharedClock = Rc<Cell<u32>>;

// ── Clock ─────────────────────────────────────────────────────

pub struct SimClock {
    now: SharedClock,
    pub delays: Vec<u32>,
}

impl SimClock {
    pub fn new(now: SharedClock) -> Self {
        Self {
            now,
            delays: Vec::new(),
        }
    }
}

impl TimePort for SimClock {
    fn now_ms(&self) -> u32 {
        self.now.get()
    }

    fn delay_ms(&mut self, ms: u32) {
        self.delays.push(ms);
        self.now.set(self.now.get().wrapping_add(ms));
    }
}

// ── Output call record ────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum OutputCall {
    SetActive { at_ms: u32 },
}

// ── Bell + alarm pins ─────────────────────────────────────────

pub struct MockPins {
    now: SharedClock,
    /// Half-open `[from, to)` windows in which the bell reads pressed.
    pub presses: Vec<(u32, u32)>,
    /// Simulated time of every bell sample.
    pub reads: Vec<u32>,
    pub calls: Vec<OutputCall>,
    active: bool,
}

#[allow(dead_code)]
impl MockPins {
    pub fn new(now: SharedClock) -> Self {
        Self {
            now,
            presses: Vec::new(),
            reads: Vec::new(),
            calls: Vec::new(),
            active: false,
        }
    }

    pub fn press(&mut self, from_ms: u32, to_ms: u32) {
        self.presses.push((from_ms, to_ms));
    }

    pub fn hold_forever(&mut self) {
        self.presses.push((0, u32::MAX));
    }
}

impl BellInputPort for MockPins {
    fn is_pressed(&mut self) -> bool {
        let now = self.now.get();
        self.reads.push(now);
        self.presses.iter().any(|&(from, to)| now >= from && now < to)
    }
}

impl AlarmOutputPort for MockPins {
    fn set_active(&mut self) {
        self.calls.push(OutputCall::SetActive {
            at_ms: self.now.get(),
        });
        self.active = true;
    }

    fn is_active(&self) -> bool {
        self.active
    }
}

// ── Serial ────────────────────────────────────────────────────

pub struct MockSerial {
    now: SharedClock,
    pub lines: Vec<(u32, String)>,
}

#[allow(dead_code)]
impl MockSerial {
    pub fn new(now: SharedClock) -> Self {
        Self {
            now,
            lines: Vec::new(),
        }
    }

    pub fn texts(&self) -> Vec<&str> {
        self.lines.iter().map(|(_, l)| l.as_str()).collect()
    }

    /// `(time, value)` of every heartbeat line.
    pub fn heartbeats(&self) -> Vec<(u32, u32)> {
        self.lines
            .iter()
            .filter_map(|(t, l)| l.parse::<u32>().ok().map(|n| (*t, n)))
            .collect()
    }

    pub fn rings(&self) -> Vec<u32> {
        self.lines
            .iter()
            .filter(|(_, l)| l == "RING")
            .map(|(t, _)| *t)
            .collect()
    }
}

impl SerialPort for MockSerial {
    fn write_line(&mut self, line: &str) {
        self.lines.push((self.now.get(), line.to_string()));
    }
}

// ── Event sink ────────────────────────────────────────────────

pub struct RecordingSink {
    pub events: Vec<AppEvent>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }
}

impl Default for RecordingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(event.clone());
    }
}

// ── Rig: the whole simulated board plus the loop ──────────────

pub struct Rig {
    pub now: SharedClock,
    pub app: AppService,
    pub pins: MockPins,
    pub serial: MockSerial,
    pub clock: SimClock,
    pub sink: RecordingSink,
}

#[allow(dead_code)]
impl Rig {
    pub fn new() -> Self {
        Self::with_config(LoopConfig::default())
    }

    pub fn with_config(config: LoopConfig) -> Self {
        Self::starting_at(config, 0)
    }

    pub fn starting_at(config: LoopConfig, start_ms: u32) -> Self {
        let now: SharedClock = Rc::new(Cell::new(start_ms));
        Self {
            app: AppService::new(config),
            pins: MockPins::new(now.clone()),
            serial: MockSerial::new(now.clone()),
            clock: SimClock::new(now.clone()),
            sink: RecordingSink::new(),
            now,
        }
    }

    pub fn now(&self) -> u32 {
        self.now.get()
    }

    pub fn set_time(&self, ms: u32) {
        self.now.set(ms);
    }

    /// One loop pass at the current simulated time.
    pub fn tick(&mut self) -> TickOutcome {
        self.app
            .tick(&mut self.pins, &mut self.serial, &mut self.clock, &mut self.sink)
    }

    /// Tick every `step_ms` until the clock reaches `until_ms`, advancing
    /// time between passes the way the run loop's yield does.
    pub fn run_until(&mut self, until_ms: u32, step_ms: u32) {
        while self.now() < until_ms {
            self.tick();
            self.now.set(self.now().saturating_add(step_ms));
        }
    }
}
