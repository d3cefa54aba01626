//! CRC-16/MODBUS
//!
//! Polynomial 0xA001 (reflected 0x8005), initial value 0xFFFF, no final XOR.
//! The result goes on the wire low byte first.

/// Compute the Modbus CRC of `data`
///
/// `const` so request frames can embed their checksum at compile time.
pub const fn crc16(data: &[u8]) -> u16 {
    let mut crc: u16 = 0xFFFF;
    let mut i = 0;
    while i < data.len() {
        crc ^= data[i] as u16;
        let mut bit = 0;
        while bit < 8 {
            if crc & 0x0001 != 0 {
                crc = (crc >> 1) ^ 0xA001;
            } else {
                crc >>= 1;
            }
            bit += 1;
        }
        i += 1;
    }
    crc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crc16_check_value() {
        // Standard check input for CRC-16/MODBUS
        assert_eq!(crc16(b"123456789"), 0x4B37);
    }

    #[test]
    fn test_crc16_empty() {
        assert_eq!(crc16(&[]), 0xFFFF);
    }

    #[test]
    fn test_crc16_read_request() {
        assert_eq!(crc16(&[0x01, 0x03, 0x00, 0x00, 0x00, 0x01]), 0x0A84);
    }
}
