//! Whole-file reads with a caller-specified encoding.

use std::fs;
use std::path::Path;

use log::warn;

use crate::Result;
use crate::encoding::{self, DEFAULT_ENCODING, Encoding};

/// Read an entire file into a String, decoding its bytes with `encoding`.
///
/// The whole file is read in one pass and materialized in memory before
/// decoding, so this is only appropriate for files known to fit in memory.
/// The result is the exact decoding of the file's full byte content; no
/// BOM stripping or line-ending normalization is applied.
pub fn read_text_with_encoding<P: AsRef<Path>>(path: P, encoding: Encoding) -> Result<String> {
    let bytes = fs::read(path)?;
    encoding::decode(bytes, encoding)
}

/// Read an entire file into a String, decoding as [`DEFAULT_ENCODING`].
pub fn read_text<P: AsRef<Path>>(path: P) -> Result<String> {
    read_text_with_encoding(path, DEFAULT_ENCODING)
}

/// Read an entire file into a String, substituting `default` on any failure.
///
/// Never fails: a missing file, a permission error, or malformed bytes all
/// yield `default`. When `log_failure` is true the failure detail is emitted
/// through the `log` facade; when false it is discarded without a trace.
/// Decodes as [`DEFAULT_ENCODING`].
pub fn read_text_quiet<P: AsRef<Path>>(
    path: P,
    default: impl Into<String>,
    log_failure: bool,
) -> String {
    let path = path.as_ref();
    match read_text(path) {
        Ok(content) => content,
        Err(err) => {
            if log_failure {
                warn!("failed to read {}: {}", path.display(), err);
            }
            default.into()
        }
    }
}
