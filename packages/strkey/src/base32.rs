//! Strict RFC 4648 base32 without padding
//!
//! Only the uppercase alphabet is accepted; lowercase, padding and
//! whitespace are rejected so that every strkey has a single text form.

use crate::error::StrkeyError;

const ALPHABET: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

/// Decode an unpadded uppercase base32 string.
///
/// Trailing bits that do not form a whole byte are dropped; callers
/// enforce input lengths for which no such bits exist.
#[allow(clippy::cast_possible_truncation)] // matched arms are ASCII, pushed bytes are masked
pub fn decode(input: &str) -> Result<Vec<u8>, StrkeyError> {
    let mut out = Vec::with_capacity(input.len() * 5 / 8);
    let mut buffer: u16 = 0;
    let mut bits: u32 = 0;

    for ch in input.chars() {
        let value = match ch {
            'A'..='Z' => ch as u8 - b'A',
            '2'..='7' => ch as u8 - b'2' + 26,
            _ => return Err(StrkeyError::InvalidChar { ch }),
        };
        buffer = (buffer << 5) | u16::from(value);
        bits += 5;
        if bits >= 8 {
            bits -= 8;
            out.push((buffer >> bits) as u8);
        }
    }

    Ok(out)
}

/// Encode bytes as unpadded uppercase base32.
pub fn encode(data: &[u8]) -> String {
    let mut out = String::with_capacity(data.len().div_ceil(5) * 8);
    let mut buffer: u16 = 0;
    let mut bits: u32 = 0;

    for &byte in data {
        buffer = (buffer << 8) | u16::from(byte);
        bits += 8;
        while bits >= 5 {
            bits -= 5;
            out.push(char::from(ALPHABET[((buffer >> bits) & 0x1F) as usize]));
        }
    }
    if bits > 0 {
        out.push(char::from(ALPHABET[((buffer << (5 - bits)) & 0x1F) as usize]));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_whole_byte_groups() {
        // 5 bytes -> 8 characters, no partial group.
        let data = [0x00, 0xFF, 0xA5, 0x5A, 0x13];
        let text = encode(&data);
        assert_eq!(text.len(), 8);
        assert_eq!(decode(&text).expect("must decode"), data);
    }

    #[test]
    fn encodes_rfc4648_vector() {
        assert_eq!(encode(b"foobar"), "MZXW6YTBOI");
        assert_eq!(decode("MZXW6YTBOI").expect("must decode"), b"foobar");
    }

    #[test]
    fn rejects_lowercase_and_padding() {
        assert!(matches!(
            decode("mzxw6"),
            Err(StrkeyError::InvalidChar { ch: 'm' })
        ));
        assert!(matches!(
            decode("MZXW6YTB=="),
            Err(StrkeyError::InvalidChar { ch: '=' })
        ));
    }

    #[test]
    fn decodes_empty_input_to_empty_output() {
        assert_eq!(decode("").expect("must decode"), Vec::<u8>::new());
    }
}
