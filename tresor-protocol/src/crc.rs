//! CRC-8 checksum
//!
//! Polynomial 0x07 (x^8 + x^2 + x + 1), initial value 0x00, no final
//! XOR - the variant the HA40+ status frames use.

/// CRC-8 polynomial
const POLY: u8 = 0x07;

/// Continue a CRC-8 computation over `data`, starting from `crc`.
///
/// Lets callers checksum a frame in pieces as the bytes arrive.
pub fn crc8_add(data: &[u8], mut crc: u8) -> u8 {
    for &byte in data {
        crc ^= byte;
        for _ in 0..8 {
            if crc & 0x80 != 0 {
                crc = (crc << 1) ^ POLY;
            } else {
                crc <<= 1;
            }
        }
    }
    crc
}

/// CRC-8 over `data` from a zero initial value.
pub fn crc8(data: &[u8]) -> u8 {
    crc8_add(data, 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_vectors() {
        // Standard CRC-8 check value for "123456789"
        assert_eq!(crc8(b"123456789"), 0xF4);
        assert_eq!(crc8(&[]), 0x00);
        assert_eq!(crc8(&[0x00]), 0x00);
        assert_eq!(crc8(&[0x01]), 0x07);
    }

    #[test]
    fn incremental_matches_one_shot() {
        let data = [0xAA, 0x55, 0x01, 0x02, 0x03];
        let (head, tail) = data.split_at(2);
        assert_eq!(crc8_add(tail, crc8(head)), crc8(&data));
    }

    #[test]
    fn single_bit_errors_detected() {
        let data = [0x5A, 0x04, 0x10, 0xDE, 0xAD, 0xBE, 0xEF];
        let good = crc8(&data);
        for i in 0..data.len() {
            for bit in 0..8 {
                let mut corrupted = data;
                corrupted[i] ^= 1 << bit;
                assert_ne!(crc8(&corrupted), good);
            }
        }
    }
}
