//! RS-485 half-duplex transceiver control
//!
//! The sensors share a two-wire RS-485 line driven through a transceiver
//! (MAX485 or similar) whose DE/RE pins are tied together on one GPIO:
//! high enables the driver (transmit), low enables the receiver.
//!
//! # Turnaround
//!
//! ```text
//! direction  ___/‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾\_____________________
//!               │ enable │ bytes + flush │ drain │ settle │
//!               │ guard  │               │ guard │        │
//! ```
//!
//! The line is transmit only between the two guards. It is driven to
//! receive on construction and at the end of every `send`, including when
//! the UART reports an error.

use capitainerie_core::config::BusTiming;
use capitainerie_hal::{OutputPin, Uart};
use embedded_hal::delay::DelayNs;

/// Owner of the shared sensor bus
///
/// Holds the UART, the direction line and the delay used for turnaround
/// waits. All bus access goes through `&mut self`, so exchanges cannot
/// overlap.
pub struct Rs485Transceiver<U, P, D> {
    uart: U,
    direction: P,
    delay: D,
    timing: BusTiming,
    /// If true, transmit = pin LOW
    inverted: bool,
}

impl<U, P, D> Rs485Transceiver<U, P, D>
where
    U: Uart,
    P: OutputPin,
    D: DelayNs,
{
    /// Create a transceiver with an active-high direction line
    ///
    /// The line is driven to receive immediately.
    pub fn new(uart: U, direction: P, delay: D, timing: BusTiming) -> Self {
        Self::with_polarity(uart, direction, delay, timing, false)
    }

    /// Create a transceiver whose direction line is active-low
    pub fn new_inverted(uart: U, direction: P, delay: D, timing: BusTiming) -> Self {
        Self::with_polarity(uart, direction, delay, timing, true)
    }

    fn with_polarity(uart: U, direction: P, delay: D, timing: BusTiming, inverted: bool) -> Self {
        let mut bus = Self {
            uart,
            direction,
            delay,
            timing,
            inverted,
        };
        bus.drive_transmit(false);
        bus
    }

    fn drive_transmit(&mut self, transmit: bool) {
        // transmit XOR inverted gives the pin level
        self.direction.set_level(transmit != self.inverted);
    }

    /// Whether the transceiver driver is currently enabled
    pub fn is_transmitting(&self) -> bool {
        self.direction.is_set_high() != self.inverted
    }

    /// Transmit `bytes` with full turnaround
    ///
    /// Fire-and-forget: a UART failure is logged and the frame is lost, but
    /// the line is always returned to receive and the settle wait is always
    /// observed.
    pub fn send(&mut self, bytes: &[u8]) {
        self.drive_transmit(true);
        self.delay.delay_ms(self.timing.tx_enable_guard_ms);

        let written = self
            .uart
            .write_blocking(bytes)
            .and_then(|()| self.uart.flush());
        if written.is_err() {
            #[cfg(feature = "defmt")]
            defmt::warn!("RS-485 write of {} bytes failed", bytes.len());
        }

        self.delay.delay_ms(self.timing.tx_drain_guard_ms);
        self.drive_transmit(false);
        self.delay.delay_ms(self.timing.rx_settle_ms);
    }

    /// Copy whatever the peripheral has buffered into `buf`
    ///
    /// Single, non-waiting read. A receive error counts as nothing received.
    pub fn receive(&mut self, buf: &mut [u8]) -> usize {
        match self.uart.read_available(buf) {
            Ok(len) => len,
            Err(_) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("RS-485 read failed");
                0
            }
        }
    }

    /// Fixed wait on the bus timer
    pub fn wait_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::mock::{new_log, BusEvent, MockDelay, MockPin, MockUart};
    use std::vec;

    #[test]
    fn test_constructor_releases_line() {
        let log = new_log();
        let bus = Rs485Transceiver::new(
            MockUart::new(&log),
            MockPin::new(&log),
            MockDelay::new(&log),
            BusTiming::DEFAULT,
        );

        assert!(!bus.is_transmitting());
        assert_eq!(*log.borrow(), [BusEvent::Pin(false)]);
    }

    #[test]
    fn test_send_turnaround_sequence() {
        let log = new_log();
        let mut bus = Rs485Transceiver::new(
            MockUart::new(&log),
            MockPin::new(&log),
            MockDelay::new(&log),
            BusTiming::DEFAULT,
        );
        log.borrow_mut().clear();

        bus.send(&[0x01, 0x03]);

        assert_eq!(
            *log.borrow(),
            [
                BusEvent::Pin(true),
                BusEvent::Delay(10),
                BusEvent::Write(vec![0x01, 0x03]),
                BusEvent::Flush,
                BusEvent::Delay(10),
                BusEvent::Pin(false),
                BusEvent::Delay(50),
            ]
        );
        assert!(!bus.is_transmitting());
    }

    #[test]
    fn test_single_transition_per_send() {
        let log = new_log();
        let mut bus = Rs485Transceiver::new(
            MockUart::new(&log),
            MockPin::new(&log),
            MockDelay::new(&log),
            BusTiming::DEFAULT,
        );
        log.borrow_mut().clear();

        bus.send(&[0xAA; 8]);
        bus.send(&[0x55; 8]);

        let levels: vec::Vec<bool> = log
            .borrow()
            .iter()
            .filter_map(|event| match event {
                BusEvent::Pin(level) => Some(*level),
                _ => None,
            })
            .collect();
        assert_eq!(levels, [true, false, true, false]);
    }

    #[test]
    fn test_write_failure_still_releases_line() {
        let log = new_log();
        let mut uart = MockUart::new(&log);
        uart.fail_writes = true;
        let mut bus = Rs485Transceiver::new(
            uart,
            MockPin::new(&log),
            MockDelay::new(&log),
            BusTiming::DEFAULT,
        );

        bus.send(&[0x01]);

        assert!(!bus.is_transmitting());
        assert_eq!(log.borrow().last(), Some(&BusEvent::Delay(50)));
    }

    #[test]
    fn test_inverted_polarity() {
        let log = new_log();
        let mut bus = Rs485Transceiver::new_inverted(
            MockUart::new(&log),
            MockPin::new(&log),
            MockDelay::new(&log),
            BusTiming::DEFAULT,
        );

        // Receive on an inverted line is pin HIGH
        assert_eq!(*log.borrow(), [BusEvent::Pin(true)]);
        assert!(!bus.is_transmitting());

        bus.send(&[0x02]);
        assert!(!bus.is_transmitting());
        assert!(log.borrow().contains(&BusEvent::Pin(false)));
    }

    #[test]
    fn test_receive_error_reads_nothing() {
        let log = new_log();
        let mut uart = MockUart::new(&log).respond(&[0x01, 0x03, 0x02, 0x00, 0x01]);
        uart.fail_reads = true;
        let mut bus = Rs485Transceiver::new(
            uart,
            MockPin::new(&log),
            MockDelay::new(&log),
            BusTiming::DEFAULT,
        );

        let mut buf = [0u8; 16];
        assert_eq!(bus.receive(&mut buf), 0);
    }
}
