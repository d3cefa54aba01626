//! Sensor bus UART
//!
//! Wraps any blocking `embedded-io` serial port (on the RP2040, the
//! interrupt-driven `BufferedUart`) in the `capitainerie-hal` UART traits.
//! Reads only drain what the receive ring buffer already holds.

use capitainerie_hal::uart::{DataBits, Parity, StopBits, UartConfig};
use capitainerie_hal::{UartRx, UartTx};
use embassy_rp::uart;
use embedded_io::{Read, ReadReady, Write};

/// Sensor bus UART errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UartBusError {
    Write,
    Read,
}

/// Map bus line settings onto the embassy-rp UART configuration
pub fn embassy_uart_config(config: &UartConfig) -> uart::Config {
    let mut cfg = uart::Config::default();
    cfg.baudrate = config.baudrate;
    cfg.data_bits = match config.data_bits {
        DataBits::Seven => uart::DataBits::DataBits7,
        DataBits::Eight => uart::DataBits::DataBits8,
    };
    cfg.parity = match config.parity {
        Parity::None => uart::Parity::ParityNone,
        Parity::Even => uart::Parity::ParityEven,
        Parity::Odd => uart::Parity::ParityOdd,
    };
    cfg.stop_bits = match config.stop_bits {
        StopBits::One => uart::StopBits::STOP1,
        StopBits::Two => uart::StopBits::STOP2,
    };
    cfg
}

pub struct BusUart<T> {
    port: T,
}

impl<T> BusUart<T> {
    pub fn new(port: T) -> Self {
        Self { port }
    }
}

impl<T: Write> UartTx for BusUart<T> {
    type Error = UartBusError;

    fn write_blocking(&mut self, data: &[u8]) -> Result<(), UartBusError> {
        self.port.write_all(data).map_err(|_| UartBusError::Write)
    }

    fn flush(&mut self) -> Result<(), UartBusError> {
        self.port.flush().map_err(|_| UartBusError::Write)
    }
}

impl<T: Read + ReadReady> UartRx for BusUart<T> {
    type Error = UartBusError;

    fn read_available(&mut self, buf: &mut [u8]) -> Result<usize, UartBusError> {
        let mut len = 0;
        while len < buf.len() && self.port.read_ready().map_err(|_| UartBusError::Read)? {
            len += self
                .port
                .read(&mut buf[len..])
                .map_err(|_| UartBusError::Read)?;
        }
        Ok(len)
    }
}
