//! Recording mocks of the HAL traits
//!
//! Pin, UART and delay share one log so tests can assert on the exact
//! interleaving of line changes, writes and waits.

extern crate std;

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::vec::Vec;

use capitainerie_hal::{OutputPin, UartRx, UartTx};
use embedded_hal::delay::DelayNs;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BusEvent {
    /// Direction pin driven to this level
    Pin(bool),
    Write(Vec<u8>),
    Flush,
    /// Read returning this many bytes
    Read(usize),
    Delay(u32),
}

pub type BusLog = Rc<RefCell<Vec<BusEvent>>>;

pub fn new_log() -> BusLog {
    Rc::new(RefCell::new(Vec::new()))
}

pub struct MockPin {
    log: BusLog,
    high: bool,
}

impl MockPin {
    /// Starts high so tests can see the constructor release the line
    pub fn new(log: &BusLog) -> Self {
        Self {
            log: log.clone(),
            high: true,
        }
    }
}

impl OutputPin for MockPin {
    fn set_high(&mut self) {
        self.high = true;
        self.log.borrow_mut().push(BusEvent::Pin(true));
    }

    fn set_low(&mut self) {
        self.high = false;
        self.log.borrow_mut().push(BusEvent::Pin(false));
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockUartError;

pub struct MockUart {
    log: BusLog,
    /// One entry consumed per read call
    responses: VecDeque<Vec<u8>>,
    pub fail_writes: bool,
    pub fail_reads: bool,
}

impl MockUart {
    pub fn new(log: &BusLog) -> Self {
        Self {
            log: log.clone(),
            responses: VecDeque::new(),
            fail_writes: false,
            fail_reads: false,
        }
    }

    pub fn respond(mut self, bytes: &[u8]) -> Self {
        self.responses.push_back(bytes.to_vec());
        self
    }
}

impl UartTx for MockUart {
    type Error = MockUartError;

    fn write_blocking(&mut self, data: &[u8]) -> Result<(), MockUartError> {
        if self.fail_writes {
            return Err(MockUartError);
        }
        self.log.borrow_mut().push(BusEvent::Write(data.to_vec()));
        Ok(())
    }

    fn flush(&mut self) -> Result<(), MockUartError> {
        self.log.borrow_mut().push(BusEvent::Flush);
        Ok(())
    }
}

impl UartRx for MockUart {
    type Error = MockUartError;

    fn read_available(&mut self, buf: &mut [u8]) -> Result<usize, MockUartError> {
        if self.fail_reads {
            return Err(MockUartError);
        }
        let response = self.responses.pop_front().unwrap_or_default();
        let len = response.len().min(buf.len());
        buf[..len].copy_from_slice(&response[..len]);
        self.log.borrow_mut().push(BusEvent::Read(len));
        Ok(len)
    }
}

pub struct MockDelay {
    log: BusLog,
}

impl MockDelay {
    pub fn new(log: &BusLog) -> Self {
        Self { log: log.clone() }
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.log.borrow_mut().push(BusEvent::Delay(ns / 1_000_000));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.log.borrow_mut().push(BusEvent::Delay(ms));
    }
}
