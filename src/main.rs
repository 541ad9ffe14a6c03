//! Doorbell Firmware — Main Entry Point
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                  Adapters (outer ring)                   │
//! │                                                          │
//! │  HardwareAdapter     SerialLineAdapter   Esp32Time       │
//! │  (Bell + Alarm pin)  (UART1 lines)       (TimePort)      │
//! │  LogEventSink (EventSink)                                │
//! │                                                          │
//! │  ───────────── Port Trait Boundary ─────────────         │
//! │                                                          │
//! │  ┌────────────────────────────────────────────────┐      │
//! │  │         AppService (pure logic)                │      │
//! │  │     heartbeat counter · RING alarm             │      │
//! │  └────────────────────────────────────────────────┘      │
//! └──────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::Result;
use log::info;

use doorbell::adapters::hardware::HardwareAdapter;
use doorbell::adapters::log_sink::LogEventSink;
use doorbell::adapters::serial::SerialLineAdapter;
use doorbell::adapters::time::Esp32TimeAdapter;
use doorbell::app::service::AppService;
use doorbell::config::LoopConfig;
use doorbell::drivers::hw_init;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("Doorbell v{}", env!("CARGO_PKG_VERSION"));

    // ── 2. Peripherals ────────────────────────────────────────
    let config = LoopConfig::default();
    let board = hw_init::init_board(&config)?;

    // ── 3. Adapters ───────────────────────────────────────────
    let mut hw = HardwareAdapter::new(board.bell, board.alarm);
    let mut serial = SerialLineAdapter::new(board.uart);
    let mut time = Esp32TimeAdapter::new();
    let mut log_sink = LogEventSink::new();

    // ── 4. Loop ───────────────────────────────────────────────
    let mut app = AppService::new(config);
    app.start(&mut log_sink);

    info!("System ready. Entering control loop.");
    app.run(&mut hw, &mut serial, &mut time, &mut log_sink)
}
