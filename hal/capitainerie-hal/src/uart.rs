//! UART serial communication abstractions
//!
//! Blocking traits for the half-duplex sensor bus. Transmit is a
//! write-then-flush pair so callers can time the bus turnaround after the
//! last byte has left the shift register. Receive is a non-blocking drain
//! of whatever is already buffered.

/// UART transmitter
pub trait UartTx {
    /// Error type for transmit operations
    type Error;

    /// Write data to the UART
    ///
    /// Blocks until all data has been queued or an error occurs.
    fn write_blocking(&mut self, data: &[u8]) -> Result<(), Self::Error>;

    /// Block until all queued data has been transmitted
    fn flush(&mut self) -> Result<(), Self::Error>;
}

/// UART receiver
pub trait UartRx {
    /// Error type for receive operations
    type Error;

    /// Read all bytes that are already buffered, without waiting
    ///
    /// Returns the number of bytes copied into `buf` (0 when nothing has
    /// arrived). Never waits for more data, so a silent peer cannot stall
    /// the caller.
    fn read_available(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error>;
}

/// Half-duplex bus UART
///
/// Both directions on one peripheral; the RS-485 transceiver takes this as
/// its serial port.
pub trait Uart: UartTx + UartRx {}

// Blanket implementation
impl<T: UartTx + UartRx> Uart for T {}

/// Line settings for the RS-485 sensor bus
pub const RS485_UART_CONFIG: UartConfig = UartConfig {
    baudrate: 4800,
    data_bits: DataBits::Eight,
    parity: Parity::None,
    stop_bits: StopBits::One,
};

/// UART configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UartConfig {
    /// Baud rate in bits per second
    pub baudrate: u32,
    /// Number of data bits (typically 8)
    pub data_bits: DataBits,
    /// Parity mode
    pub parity: Parity,
    /// Number of stop bits
    pub stop_bits: StopBits,
}

impl Default for UartConfig {
    fn default() -> Self {
        RS485_UART_CONFIG
    }
}

/// Number of data bits per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DataBits {
    Seven,
    Eight,
}

/// Parity mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Parity {
    None,
    Even,
    Odd,
}

/// Number of stop bits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StopBits {
    One,
    Two,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rs485_defaults() {
        let config = UartConfig::default();
        assert_eq!(config, RS485_UART_CONFIG);
        assert_eq!(config.baudrate, 4800);
        assert_eq!(config.data_bits, DataBits::Eight);
        assert_eq!(config.parity, Parity::None);
        assert_eq!(config.stop_bits, StopBits::One);
    }

    struct Loopback {
        pending: usize,
    }

    impl UartTx for Loopback {
        type Error = ();

        fn write_blocking(&mut self, data: &[u8]) -> Result<(), ()> {
            self.pending += data.len();
            Ok(())
        }

        fn flush(&mut self) -> Result<(), ()> {
            Ok(())
        }
    }

    impl UartRx for Loopback {
        type Error = ();

        fn read_available(&mut self, buf: &mut [u8]) -> Result<usize, ()> {
            let n = self.pending.min(buf.len());
            self.pending -= n;
            Ok(n)
        }
    }

    fn echo<U: Uart>(uart: &mut U, frame: &[u8], buf: &mut [u8]) -> usize {
        if uart.write_blocking(frame).and_then(|()| uart.flush()).is_err() {
            return 0;
        }
        uart.read_available(buf).unwrap_or(0)
    }

    #[test]
    fn test_tx_rx_pair_is_uart() {
        let mut uart = Loopback { pending: 0 };
        let mut buf = [0u8; 4];

        assert_eq!(echo(&mut uart, &[1, 2, 3, 4, 5, 6], &mut buf), 4);
        assert_eq!(uart.read_available(&mut buf), Ok(2));
        assert_eq!(uart.read_available(&mut buf), Ok(0));
    }
}
