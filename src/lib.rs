//! # textfile - Whole-file text reading and writing
//!
//! Convenience wrappers for reading an entire file into a `String` and
//! writing a `String` back out, with an explicit text encoding, plus quiet
//! variants that absorb failures and substitute a caller-supplied default.
//!
//! Modules:
//! - `encoding` for decoding/encoding between bytes and text (UTF-8, UTF-16, Latin-1)
//! - `file` for the read/write operations and their quiet variants
//!
//! Every call is synchronous and blocking, acquires its own file handle,
//! and releases it on all exit paths. Nothing is cached or shared between
//! calls. Callers coordinating concurrent access to the same path are on
//! their own: the last write to complete wins, and concurrent reads may
//! observe any interleaving.

mod encoding;
mod file;

pub use encoding::{DEFAULT_ENCODING, Encoding};
pub use file::{
    read_text, read_text_quiet, read_text_with_encoding, write_text, write_text_quiet,
    write_text_with_encoding,
};

use std::fmt;
use std::io;

/// Errors that can occur while reading or writing a text file
#[derive(Debug)]
pub enum TextFileError {
    /// Path does not exist (or, on write, its parent directory does not)
    NotFound(io::Error),
    /// Caller lacks permission for the requested access
    PermissionDenied(io::Error),
    /// Path names a directory, not a regular file
    IsADirectory(io::Error),
    /// Any other lower-level I/O failure
    Io(io::Error),
    /// File bytes are not a valid sequence for the requested encoding
    Decode { encoding: Encoding },
    /// Text contains characters the requested encoding cannot represent
    Encode { encoding: Encoding },
}

impl fmt::Display for TextFileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextFileError::NotFound(err) => write!(f, "path not found: {}", err),
            TextFileError::PermissionDenied(err) => write!(f, "permission denied: {}", err),
            TextFileError::IsADirectory(err) => write!(f, "path is a directory: {}", err),
            TextFileError::Io(err) => write!(f, "I/O error: {}", err),
            TextFileError::Decode { encoding } => {
                write!(f, "malformed {} byte sequence", encoding)
            }
            TextFileError::Encode { encoding } => {
                write!(f, "text contains characters not representable in {}", encoding)
            }
        }
    }
}

impl std::error::Error for TextFileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TextFileError::NotFound(err)
            | TextFileError::PermissionDenied(err)
            | TextFileError::IsADirectory(err)
            | TextFileError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for TextFileError {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => TextFileError::NotFound(err),
            io::ErrorKind::PermissionDenied => TextFileError::PermissionDenied(err),
            io::ErrorKind::IsADirectory => TextFileError::IsADirectory(err),
            _ => TextFileError::Io(err),
        }
    }
}

/// Result type for text file operations
pub type Result<T> = std::result::Result<T, TextFileError>;
