//! Whole-file writes that replace the destination's content.

use std::fs;
use std::path::Path;

use log::warn;

use crate::Result;
use crate::encoding::{self, DEFAULT_ENCODING, Encoding};

/// Write text to a file, encoding it with `encoding`.
///
/// Creates the file if absent and truncates it if present; the file's byte
/// content afterwards is exactly the encoding of `text`. The parent
/// directory must already exist. Not atomic: a failure mid-write can leave
/// the destination partially written.
pub fn write_text_with_encoding<P: AsRef<Path>>(
    path: P,
    text: &str,
    encoding: Encoding,
) -> Result<()> {
    let bytes = encoding::encode(text, encoding)?;
    fs::write(path, bytes)?;
    Ok(())
}

/// Write text to a file, encoded as [`DEFAULT_ENCODING`].
pub fn write_text<P: AsRef<Path>>(path: P, text: &str) -> Result<()> {
    write_text_with_encoding(path, text, DEFAULT_ENCODING)
}

/// Write text to a file, discarding any failure.
///
/// Never fails and reports nothing: the caller observes a normal return
/// whether or not the write happened. When `log_failure` is true the
/// failure detail is emitted through the `log` facade; when false it is
/// discarded without a trace. Encodes as [`DEFAULT_ENCODING`].
pub fn write_text_quiet<P: AsRef<Path>>(path: P, text: &str, log_failure: bool) {
    let path = path.as_ref();
    if let Err(err) = write_text(path, text) {
        if log_failure {
            warn!("failed to write {}: {}", path.display(), err);
        }
    }
}
