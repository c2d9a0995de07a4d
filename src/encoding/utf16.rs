//! UTF-16 decoding and encoding. Byte order is always caller-specified;
//! no BOM is read, written, or stripped.

use super::Encoding;
use crate::{Result, TextFileError};

/// Decode UTF-16LE bytes to a String.
pub fn decode_utf16le(bytes: &[u8]) -> Result<String> {
    if bytes.len() % 2 != 0 {
        return Err(TextFileError::Decode {
            encoding: Encoding::Utf16Le,
        });
    }

    let mut units = Vec::with_capacity(bytes.len() / 2);
    for chunk in bytes.chunks_exact(2) {
        units.push(u16::from_le_bytes([chunk[0], chunk[1]]));
    }

    String::from_utf16(&units).map_err(|_| TextFileError::Decode {
        encoding: Encoding::Utf16Le,
    })
}

/// Decode UTF-16BE bytes to a String.
pub fn decode_utf16be(bytes: &[u8]) -> Result<String> {
    if bytes.len() % 2 != 0 {
        return Err(TextFileError::Decode {
            encoding: Encoding::Utf16Be,
        });
    }

    let mut units = Vec::with_capacity(bytes.len() / 2);
    for chunk in bytes.chunks_exact(2) {
        units.push(u16::from_be_bytes([chunk[0], chunk[1]]));
    }

    String::from_utf16(&units).map_err(|_| TextFileError::Decode {
        encoding: Encoding::Utf16Be,
    })
}

/// Encode text as UTF-16LE bytes.
pub fn encode_utf16le(text: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len() * 2);
    for unit in text.encode_utf16() {
        out.extend_from_slice(&unit.to_le_bytes());
    }
    out
}

/// Encode text as UTF-16BE bytes.
pub fn encode_utf16be(text: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len() * 2);
    for unit in text.encode_utf16() {
        out.extend_from_slice(&unit.to_be_bytes());
    }
    out
}
