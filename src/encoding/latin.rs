//! Latin-1 (ISO-8859-1) decoding and encoding. Latin-1 bytes map one-to-one
//! onto the first 256 Unicode code points, so decoding cannot fail.

use super::Encoding;
use crate::{Result, TextFileError};

/// Decode Latin-1 bytes to a String.
pub fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

/// Encode text as Latin-1 bytes.
///
/// Fails for any character above U+00FF.
pub fn encode_latin1(text: &str) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(text.len());
    for ch in text.chars() {
        let code = ch as u32;
        if code > 0xFF {
            return Err(TextFileError::Encode {
                encoding: Encoding::Latin1,
            });
        }
        out.push(code as u8);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_extended_range() {
        let decoded = decode_latin1(&[0x48, 0x65, 0x6C, 0x6C, 0x6F, 0xA9, 0xAE]);
        assert_eq!(decoded, "Hello©®");
    }

    #[test]
    fn encodes_extended_range() {
        let encoded = encode_latin1("Hello©®").unwrap();
        assert_eq!(encoded, vec![0x48, 0x65, 0x6C, 0x6C, 0x6F, 0xA9, 0xAE]);
    }

    #[test]
    fn round_trips_all_byte_values() {
        let bytes: Vec<u8> = (0..=255).collect();
        let encoded = encode_latin1(&decode_latin1(&bytes)).unwrap();
        assert_eq!(encoded, bytes);
    }

    #[test]
    fn rejects_unrepresentable_characters() {
        let result = encode_latin1("日本語");
        assert!(matches!(
            result,
            Err(TextFileError::Encode {
                encoding: Encoding::Latin1
            })
        ));
    }
}
