//! One-shot hardware peripheral initialization.
//!
//! Takes the ESP-IDF peripheral singleton, configures the bell input
//! (pull-down, so it rests LOW), the alarm output (driven LOW), and the
//! host UART at the configured baud rate.  Called once from `main()`
//! before the loop starts.
//!
//! Host builds get a simulated [`Board`]: pins that hold their level in
//! memory and a `String` standing in for the UART.

#[cfg(target_os = "espidf")]
use esp_idf_hal::{
    gpio::{AnyIOPin, IOPin, Input, Output, PinDriver, Pull},
    peripherals::Peripherals,
    uart::{config::Config as UartConfig, UartDriver},
    units::Hertz,
};
#[cfg(target_os = "espidf")]
use log::info;

use crate::config::LoopConfig;
use crate::pins;

// ── Error type ────────────────────────────────────────────────

/// Errors during one-shot peripheral initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HwInitError {
    /// `Peripherals::take()` was refused (already taken).
    PeripheralsUnavailable(i32),
    GpioConfigFailed { gpio: i32, rc: i32 },
    UartInitFailed(i32),
}

impl core::fmt::Display for HwInitError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::PeripheralsUnavailable(rc) => write!(f, "peripherals unavailable (rc={})", rc),
            Self::GpioConfigFailed { gpio, rc } => {
                write!(f, "GPIO{} config failed (rc={})", gpio, rc)
            }
            Self::UartInitFailed(rc) => write!(f, "UART init failed (rc={})", rc),
        }
    }
}

impl std::error::Error for HwInitError {}

// ── Board bundle ──────────────────────────────────────────────

/// Configured peripherals, ready to hand to the adapters.
#[cfg(target_os = "espidf")]
pub struct Board {
    pub bell: PinDriver<'static, AnyIOPin, Input>,
    pub alarm: PinDriver<'static, AnyIOPin, Output>,
    pub uart: UartDriver<'static>,
}

#[cfg(target_os = "espidf")]
pub fn init_board(config: &LoopConfig) -> Result<Board, HwInitError> {
    let p = Peripherals::take().map_err(|e| HwInitError::PeripheralsUnavailable(e.code()))?;

    let gpio_err = |gpio: i32| {
        move |e: esp_idf_hal::sys::EspError| HwInitError::GpioConfigFailed {
            gpio,
            rc: e.code(),
        }
    };

    let mut bell = PinDriver::input(p.pins.gpio11.downgrade())
        .map_err(gpio_err(pins::BELL_INPUT_GPIO))?;
    bell.set_pull(Pull::Down).map_err(gpio_err(pins::BELL_INPUT_GPIO))?;
    debug_assert_eq!(bell.pin(), pins::BELL_INPUT_GPIO);

    let mut alarm = PinDriver::output(p.pins.gpio13.downgrade())
        .map_err(gpio_err(pins::ALARM_OUTPUT_GPIO))?;
    alarm.set_low().map_err(gpio_err(pins::ALARM_OUTPUT_GPIO))?;
    debug_assert_eq!(alarm.pin(), pins::ALARM_OUTPUT_GPIO);

    info!(
        "hw_init: GPIO{} input (pull-down), GPIO{} output (low)",
        pins::BELL_INPUT_GPIO,
        pins::ALARM_OUTPUT_GPIO
    );

    let uart_cfg = UartConfig::new().baudrate(Hertz(config.baud_rate));
    let uart = UartDriver::new(
        p.uart1,
        p.pins.gpio17,
        p.pins.gpio18,
        Option::<AnyIOPin>::None,
        Option::<AnyIOPin>::None,
        &uart_cfg,
    )
    .map_err(|e| HwInitError::UartInitFailed(e.code()))?;

    info!(
        "hw_init: UART1 {} baud (tx=GPIO{}, rx=GPIO{})",
        config.baud_rate,
        pins::UART_TX_GPIO,
        pins::UART_RX_GPIO
    );

    Ok(Board { bell, alarm, uart })
}

// ── Host simulation ───────────────────────────────────────────

/// In-memory pin used by host builds.  Reads back whatever level was
/// last driven; never fails.
#[cfg(not(target_os = "espidf"))]
#[derive(Debug, Default)]
pub struct SimPin {
    pub gpio: i32,
    high: bool,
}

#[cfg(not(target_os = "espidf"))]
impl SimPin {
    pub fn new(gpio: i32) -> Self {
        Self { gpio, high: false }
    }
}

#[cfg(not(target_os = "espidf"))]
impl embedded_hal::digital::ErrorType for SimPin {
    type Error = core::convert::Infallible;
}

#[cfg(not(target_os = "espidf"))]
impl embedded_hal::digital::InputPin for SimPin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.high)
    }
    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.high)
    }
}

#[cfg(not(target_os = "espidf"))]
impl embedded_hal::digital::OutputPin for SimPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.high = false;
        Ok(())
    }
    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.high = true;
        Ok(())
    }
}

/// Simulated peripherals: the UART is a `String` collecting every line.
#[cfg(not(target_os = "espidf"))]
pub struct Board {
    pub bell: SimPin,
    pub alarm: SimPin,
    pub uart: String,
}

#[cfg(not(target_os = "espidf"))]
pub fn init_board(config: &LoopConfig) -> Result<Board, HwInitError> {
    log::info!(
        "hw_init(sim): peripheral init skipped (GPIO{} in, GPIO{} out, {} baud)",
        pins::BELL_INPUT_GPIO,
        pins::ALARM_OUTPUT_GPIO,
        config.baud_rate
    );
    Ok(Board {
        bell: SimPin::new(pins::BELL_INPUT_GPIO),
        alarm: SimPin::new(pins::ALARM_OUTPUT_GPIO),
        uart: String::new(),
    })
}
