//! RP2040-specific HAL for the wind station firmware
//!
//! This crate provides RP2040 implementations of the shared
//! `capitainerie-hal` traits:
//!
//! - GPIO outputs (RS-485 driver enable, display backlight)
//! - Stop button input, latched as a slideshow stop signal
//! - Buffered UART for the sensor bus
//! - RTC-backed wall clock

#![no_std]

pub mod gpio;
pub mod rtc;
pub mod uart;

pub use gpio::{GpioInput, GpioOutput, StopButton};
pub use rtc::{ClockError, RtcClock};
pub use uart::{embassy_uart_config, BusUart, UartBusError};
