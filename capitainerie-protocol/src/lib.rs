//! Wind sensor bus protocol
//!
//! The wind vane and the anemometer share one RS-485 line and speak a
//! minimal subset of Modbus-RTU: a single "read holding registers" request
//! for one register, answered with one 16-bit value.
//!
//! # Request Frame
//!
//! ```text
//! ┌─────────┬──────────┬────────────────┬────────────────┬──────────┐
//! │ ADDRESS │ FUNCTION │ REGISTER START │ REGISTER COUNT │ CRC16    │
//! │ 1B      │ 1B 0x03  │ 2B BE 0x0000   │ 2B BE 0x0001   │ 2B LE    │
//! └─────────┴──────────┴────────────────┴────────────────┴──────────┘
//! ```
//!
//! # Response Frame
//!
//! ```text
//! ┌─────────┬──────────┬────────────┬──────────────┬───────┐
//! │ ADDRESS │ FUNCTION │ BYTE COUNT │ VALUE (BE)   │ CRC16 │
//! │ 1B      │ 1B       │ 1B         │ 2B           │ 2B    │
//! └─────────┴──────────┴────────────┴──────────────┴───────┘
//! ```
//!
//! Responses are accepted on address and length alone; the trailing CRC is
//! not checked, matching what the deployed sensors are known to tolerate.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod crc;
pub mod frame;

pub use crc::crc16;
pub use frame::{
    decode_reading, parse_response, RequestFrame, ResponseError, DIRECTION_REQUEST,
    DIRECTION_SENSOR_ADDRESS, MAX_RESPONSE_SIZE, MIN_RESPONSE_LEN, SPEED_REQUEST,
    SPEED_SENSOR_ADDRESS,
};
