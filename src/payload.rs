//! ASCII payload conversion
//!
//! A payload is text restricted to the ASCII range. Each character maps to
//! exactly one byte of the same value, so the wire form is the text itself
//! with no prefix, terminator or checksum.

use crate::error::{Error, Result};

/// Validated, immutable datagram body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payload {
    bytes: Vec<u8>,
}

impl Payload {
    /// Encode `text` one byte per character.
    ///
    /// Fails on the first character above 0x7F; the reported index counts
    /// characters, not bytes.
    pub fn from_ascii(text: &str) -> Result<Self> {
        if let Some((index, character)) = text.chars().enumerate().find(|(_, c)| !c.is_ascii()) {
            return Err(Error::Encoding { index, character });
        }

        // All chars are ASCII here, so the UTF-8 bytes are the ASCII bytes
        Ok(Self {
            bytes: text.as_bytes().to_vec(),
        })
    }

    #[inline(always)]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Decode bytes under the same ASCII rule
pub fn decode_ascii(bytes: &[u8]) -> Result<String> {
    if let Some((index, &byte)) = bytes.iter().enumerate().find(|(_, b)| !b.is_ascii()) {
        return Err(Error::Decoding { index, byte });
    }

    Ok(bytes.iter().map(|&b| b as char).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_decode_identity() {
        let text = "do not go gently into the good night. Rage, rage against the dying of the light";
        let payload = Payload::from_ascii(text).unwrap();

        assert_eq!(payload.len(), text.len());
        assert_eq!(decode_ascii(payload.as_bytes()).unwrap(), text);
    }

    #[test]
    fn test_control_characters_are_ascii() {
        let text = "\0\t\r\n\x7f";
        let payload = Payload::from_ascii(text).unwrap();

        assert_eq!(payload.as_bytes(), &[0x00, 0x09, 0x0d, 0x0a, 0x7f]);
        assert_eq!(decode_ascii(payload.as_bytes()).unwrap(), text);
    }

    #[test]
    fn test_empty_payload() {
        let payload = Payload::from_ascii("").unwrap();

        assert!(payload.is_empty());
        assert_eq!(payload.as_bytes(), b"");
    }

    #[test]
    fn test_non_ascii_rejected_with_char_index() {
        match Payload::from_ascii("caf\u{e9}") {
            Err(Error::Encoding { index, character }) => {
                assert_eq!(index, 3);
                assert_eq!(character, '\u{e9}');
            }
            other => panic!("expected encoding error, got {:?}", other),
        }

        // Index counts characters even after a multi-byte one
        match Payload::from_ascii("\u{1f600}ok\u{80}") {
            Err(Error::Encoding { index, character }) => {
                assert_eq!(index, 0);
                assert_eq!(character, '\u{1f600}');
            }
            other => panic!("expected encoding error, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_rejects_high_byte() {
        match decode_ascii(b"ok\xff") {
            Err(Error::Decoding { index, byte }) => {
                assert_eq!(index, 2);
                assert_eq!(byte, 0xff);
            }
            other => panic!("expected decoding error, got {:?}", other),
        }
    }

    #[test]
    fn test_every_ascii_code_point_maps_to_itself() {
        let text: String = (0u8..=127).map(char::from).collect();
        let payload = Payload::from_ascii(&text).unwrap();

        let expected: Vec<u8> = (0u8..=127).collect();
        assert_eq!(payload.as_bytes(), expected.as_slice());
    }
}
