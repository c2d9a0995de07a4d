//! Whole-file text operations.
//!
//! This module provides:
//! - Bulk reads that materialize the entire file before decoding
//! - Bulk writes that replace the destination's full content
//! - Quiet variants that absorb failures instead of propagating them

pub mod read;
pub mod write;

pub use read::{read_text, read_text_quiet, read_text_with_encoding};
pub use write::{write_text, write_text_quiet, write_text_with_encoding};
