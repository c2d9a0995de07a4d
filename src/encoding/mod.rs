use std::fmt;

use crate::{Result, TextFileError};

pub mod latin;
pub mod utf16;

/// Text encodings supported for file reads and writes.
///
/// No detection is performed anywhere in this crate; the encoding is always
/// whatever the caller passed (or [`DEFAULT_ENCODING`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    Utf8,
    Utf16Le,
    Utf16Be,
    Latin1,
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Encoding::Utf8 => write!(f, "UTF-8"),
            Encoding::Utf16Le => write!(f, "UTF-16LE"),
            Encoding::Utf16Be => write!(f, "UTF-16BE"),
            Encoding::Latin1 => write!(f, "Latin-1"),
        }
    }
}

/// Encoding used when the caller does not specify one.
pub const DEFAULT_ENCODING: Encoding = Encoding::Utf8;

/// Decode raw file bytes into text under the given encoding.
///
/// Decoding is strict: malformed input yields [`TextFileError::Decode`]
/// rather than replacement characters.
pub fn decode(bytes: Vec<u8>, encoding: Encoding) -> Result<String> {
    match encoding {
        Encoding::Utf8 => {
            String::from_utf8(bytes).map_err(|_| TextFileError::Decode { encoding })
        }
        Encoding::Utf16Le => utf16::decode_utf16le(&bytes),
        Encoding::Utf16Be => utf16::decode_utf16be(&bytes),
        Encoding::Latin1 => Ok(latin::decode_latin1(&bytes)),
    }
}

/// Encode text into the byte sequence the given encoding prescribes.
pub fn encode(text: &str, encoding: Encoding) -> Result<Vec<u8>> {
    match encoding {
        Encoding::Utf8 => Ok(text.as_bytes().to_vec()),
        Encoding::Utf16Le => Ok(utf16::encode_utf16le(text)),
        Encoding::Utf16Be => Ok(utf16::encode_utf16be(text)),
        Encoding::Latin1 => latin::encode_latin1(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_encoding_is_utf8() {
        assert_eq!(DEFAULT_ENCODING, Encoding::Utf8);
    }

    #[test]
    fn utf8_round_trip() {
        let text = "héllo wörld";
        let bytes = encode(text, Encoding::Utf8).unwrap();
        assert_eq!(decode(bytes, Encoding::Utf8).unwrap(), text);
    }

    #[test]
    fn utf8_decode_rejects_malformed_bytes() {
        let result = decode(vec![0xC3, 0x28], Encoding::Utf8);
        assert!(matches!(
            result,
            Err(TextFileError::Decode {
                encoding: Encoding::Utf8
            })
        ));
    }

    #[test]
    fn round_trips_every_encoding() {
        for encoding in [
            Encoding::Utf8,
            Encoding::Utf16Le,
            Encoding::Utf16Be,
            Encoding::Latin1,
        ] {
            let text = "plain ascii survives all of them";
            let bytes = encode(text, encoding).unwrap();
            assert_eq!(decode(bytes, encoding).unwrap(), text, "{}", encoding);
        }
    }

    #[test]
    fn display_names() {
        assert_eq!(Encoding::Utf8.to_string(), "UTF-8");
        assert_eq!(Encoding::Utf16Le.to_string(), "UTF-16LE");
        assert_eq!(Encoding::Utf16Be.to_string(), "UTF-16BE");
        assert_eq!(Encoding::Latin1.to_string(), "Latin-1");
    }
}
