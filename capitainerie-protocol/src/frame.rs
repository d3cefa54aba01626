//! Request frame construction and response decoding.
//!
//! Request frame format (8 bytes):
//! - ADDRESS (1 byte): sensor slave address
//! - FUNCTION (1 byte): 0x03, read holding registers
//! - START (2 bytes, big-endian): first register, always 0x0000
//! - COUNT (2 bytes, big-endian): register count, always 0x0001
//! - CRC (2 bytes, little-endian): CRC-16/MODBUS of the first six bytes
//!
//! Both sensor requests are fixed, so they are built once as constants and
//! the checksum is folded in at compile time.

use crate::crc::crc16;

/// Slave address of the wind vane
pub const DIRECTION_SENSOR_ADDRESS: u8 = 0x01;

/// Slave address of the anemometer
pub const SPEED_SENSOR_ADDRESS: u8 = 0x02;

/// Modbus function code: read holding registers
pub const READ_HOLDING_REGISTERS: u8 = 0x03;

/// Encoded size of a request frame
pub const REQUEST_LEN: usize = 8;

/// Shortest response that carries a value (address, function, count, value)
pub const MIN_RESPONSE_LEN: usize = 5;

/// Largest Modbus-RTU frame; sizes the receive buffer
pub const MAX_RESPONSE_SIZE: usize = 256;

/// Request for the wind direction register
pub const DIRECTION_REQUEST: RequestFrame =
    RequestFrame::read_holding(DIRECTION_SENSOR_ADDRESS, 0x0000, 1);

/// Request for the wind speed register
pub const SPEED_REQUEST: RequestFrame =
    RequestFrame::read_holding(SPEED_SENSOR_ADDRESS, 0x0000, 1);

/// Reasons a response is rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ResponseError {
    /// Nothing was received
    Empty,
    /// Fewer than [`MIN_RESPONSE_LEN`] bytes
    TooShort,
    /// First byte is not the address that was queried
    AddressMismatch,
}

/// An encoded, immutable read request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestFrame {
    bytes: [u8; REQUEST_LEN],
}

impl RequestFrame {
    /// Build a read-holding-registers request
    pub const fn read_holding(address: u8, start: u16, count: u16) -> Self {
        let start = start.to_be_bytes();
        let count = count.to_be_bytes();
        let head = [
            address,
            READ_HOLDING_REGISTERS,
            start[0],
            start[1],
            count[0],
            count[1],
        ];
        let crc = crc16(&head).to_le_bytes();

        Self {
            bytes: [
                head[0], head[1], head[2], head[3], head[4], head[5], crc[0], crc[1],
            ],
        }
    }

    /// Target slave address
    pub const fn address(&self) -> u8 {
        self.bytes[0]
    }

    /// Frame as sent on the wire
    pub const fn as_bytes(&self) -> &[u8; REQUEST_LEN] {
        &self.bytes
    }
}

/// Validate a response and extract its 16-bit value
///
/// Only structure is checked: the buffer must hold at least
/// [`MIN_RESPONSE_LEN`] bytes and start with `expected_address`. The value
/// is bytes 3 and 4, big-endian.
pub fn parse_response(response: &[u8], expected_address: u8) -> Result<u16, ResponseError> {
    if response.is_empty() {
        return Err(ResponseError::Empty);
    }
    if response.len() < MIN_RESPONSE_LEN {
        return Err(ResponseError::TooShort);
    }
    if response[0] != expected_address {
        return Err(ResponseError::AddressMismatch);
    }

    Ok(u16::from_be_bytes([response[3], response[4]]))
}

/// Decode a response into a reading, `None` when it fails validation
pub fn decode_reading(response: &[u8], expected_address: u8) -> Option<u16> {
    parse_response(response, expected_address).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_direction_request_bytes() {
        assert_eq!(
            DIRECTION_REQUEST.as_bytes(),
            &[0x01, 0x03, 0x00, 0x00, 0x00, 0x01, 0x84, 0x0A]
        );
        assert_eq!(DIRECTION_REQUEST.address(), DIRECTION_SENSOR_ADDRESS);
    }

    #[test]
    fn test_speed_request_bytes() {
        assert_eq!(
            SPEED_REQUEST.as_bytes(),
            &[0x02, 0x03, 0x00, 0x00, 0x00, 0x01, 0x84, 0x39]
        );
        assert_eq!(SPEED_REQUEST.address(), SPEED_SENSOR_ADDRESS);
    }

    #[test]
    fn test_parse_direction_response() {
        let response = [0x01, 0x03, 0x02, 0x00, 0x03];
        assert_eq!(parse_response(&response, 1), Ok(3));
    }

    #[test]
    fn test_parse_full_response_with_crc() {
        let response = [0x02, 0x03, 0x02, 0x01, 0x2C, 0xFC, 0x09];
        assert_eq!(parse_response(&response, 2), Ok(300));
    }

    #[test]
    fn test_empty_response() {
        assert_eq!(parse_response(&[], 1), Err(ResponseError::Empty));
        assert_eq!(decode_reading(&[], 1), None);
    }

    #[test]
    fn test_four_bytes_rejected() {
        let response = [0x01, 0x03, 0x02, 0x00];
        assert_eq!(parse_response(&response, 1), Err(ResponseError::TooShort));
    }

    #[test]
    fn test_wrong_address_rejected() {
        let response = [0x02, 0x03, 0x02, 0x00, 0x03, 0x00, 0x00];
        assert_eq!(
            parse_response(&response, 1),
            Err(ResponseError::AddressMismatch)
        );
    }

    proptest! {
        #[test]
        fn prop_short_responses_always_rejected(
            bytes in proptest::collection::vec(any::<u8>(), 0..MIN_RESPONSE_LEN),
            address in any::<u8>(),
        ) {
            prop_assert_eq!(decode_reading(&bytes, address), None);
        }

        #[test]
        fn prop_mismatched_address_always_rejected(
            bytes in proptest::collection::vec(any::<u8>(), MIN_RESPONSE_LEN..64),
            address in any::<u8>(),
        ) {
            prop_assume!(bytes[0] != address);
            prop_assert_eq!(
                parse_response(&bytes, address),
                Err(ResponseError::AddressMismatch)
            );
        }

        #[test]
        fn prop_valid_header_decodes_value(
            mut bytes in proptest::collection::vec(any::<u8>(), MIN_RESPONSE_LEN..64),
            address in any::<u8>(),
        ) {
            bytes[0] = address;
            let expected = u16::from_be_bytes([bytes[3], bytes[4]]);
            prop_assert_eq!(decode_reading(&bytes, address), Some(expected));
        }
    }
}
