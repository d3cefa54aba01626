//! Wind vane and anemometer over Modbus-RTU
//!
//! Both sensors answer a read of holding register 0 with a single 16-bit
//! value. A query is one request/response exchange:
//!
//! 1. send the fixed request frame (with bus turnaround)
//! 2. wait for the sensor to answer
//! 3. drain the receive buffer once
//! 4. accept the frame on length and address, decode bytes 3-4
//!
//! Anything else (silence, a short frame, another sensor's address) is an
//! absent reading. With the default [`QueryConfig`] there is exactly one
//! attempt; `retries` adds further attempts after a fixed backoff.

use capitainerie_core::config::QueryConfig;
use capitainerie_core::reading::Reading;
use capitainerie_core::traits::WindSensors;
use capitainerie_hal::{OutputPin, Uart};
use capitainerie_protocol::{
    parse_response, RequestFrame, DIRECTION_REQUEST, MAX_RESPONSE_SIZE, SPEED_REQUEST,
};
use embedded_hal::delay::DelayNs;

use crate::transceiver::Rs485Transceiver;

/// Run one query against a sensor
///
/// Never fails: every transport problem collapses to `None`.
pub fn query<U, P, D>(
    bus: &mut Rs485Transceiver<U, P, D>,
    request: &RequestFrame,
    expected_address: u8,
    config: &QueryConfig,
) -> Reading
where
    U: Uart,
    P: OutputPin,
    D: DelayNs,
{
    for attempt in 0..config.attempts() {
        if attempt > 0 {
            bus.wait_ms(config.retry_backoff_ms);
        }
        if let Some(value) = exchange(bus, request, expected_address, config.response_settle_ms) {
            return Some(value);
        }
    }
    None
}

fn exchange<U, P, D>(
    bus: &mut Rs485Transceiver<U, P, D>,
    request: &RequestFrame,
    expected_address: u8,
    settle_ms: u32,
) -> Reading
where
    U: Uart,
    P: OutputPin,
    D: DelayNs,
{
    bus.send(request.as_bytes());
    bus.wait_ms(settle_ms);

    let mut response = [0u8; MAX_RESPONSE_SIZE];
    let len = bus.receive(&mut response);

    match parse_response(&response[..len], expected_address) {
        Ok(value) => {
            #[cfg(feature = "defmt")]
            defmt::trace!("Sensor {} read {}", expected_address, value);
            Some(value)
        }
        Err(_e) => {
            #[cfg(feature = "defmt")]
            defmt::debug!("Sensor {} reading absent: {}", expected_address, _e);
            None
        }
    }
}

/// The station's two wind sensors on one RS-485 bus
pub struct WindStation<U, P, D> {
    bus: Rs485Transceiver<U, P, D>,
    config: QueryConfig,
}

impl<U, P, D> WindStation<U, P, D>
where
    U: Uart,
    P: OutputPin,
    D: DelayNs,
{
    pub fn new(bus: Rs485Transceiver<U, P, D>, config: QueryConfig) -> Self {
        Self { bus, config }
    }

    fn read(&mut self, request: &RequestFrame) -> Reading {
        query(&mut self.bus, request, request.address(), &self.config)
    }
}

impl<U, P, D> WindSensors for WindStation<U, P, D>
where
    U: Uart,
    P: OutputPin,
    D: DelayNs,
{
    fn wind_direction(&mut self) -> Reading {
        self.read(&DIRECTION_REQUEST)
    }

    fn wind_speed(&mut self) -> Reading {
        self.read(&SPEED_REQUEST)
    }
}
