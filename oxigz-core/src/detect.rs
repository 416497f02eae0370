//! Gzip format auto-detection.
//!
//! Classification is based on the two gzip magic bytes at offset 0. Two entry
//! points exist: [`classify`] for in-memory buffers (standard input cannot be
//! rewound, so the stream pipeline reads first and classifies after), and
//! [`classify_reader`] for seekable files, which peeks at a prefix and
//! restores the read position so later full reads start from the beginning.

use crate::error::{OxigzError, Result};
use std::io::{Read, Seek, SeekFrom};

/// Gzip magic bytes.
pub const GZIP_MAGIC: [u8; 2] = [0x1F, 0x8B];

/// Prefix length read from seekable sources for classification.
pub const PREFIX_LEN: usize = 512;

/// Detected content format of a byte stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    /// Content is a gzip container.
    Gzip,
    /// Content is anything else.
    Plain,
}

impl ContentKind {
    /// Whether the content was detected as gzip-encoded.
    pub fn is_gzip(self) -> bool {
        matches!(self, Self::Gzip)
    }
}

/// Classify an in-memory buffer by its magic bytes.
///
/// Fewer than two available bytes is a detection failure
/// ([`OxigzError::TooShort`]), distinct from a definitive
/// [`ContentKind::Plain`]. Never mutates the buffer and is idempotent.
pub fn classify(buf: &[u8]) -> Result<ContentKind> {
    if buf.len() < GZIP_MAGIC.len() {
        return Err(OxigzError::too_short(buf.len()));
    }
    if buf[..2] == GZIP_MAGIC {
        Ok(ContentKind::Gzip)
    } else {
        Ok(ContentKind::Plain)
    }
}

/// Classify a seekable source without consuming it.
///
/// Reads up to [`PREFIX_LEN`] bytes from the current position and seeks back
/// before returning, on both the success and the error path.
pub fn classify_reader<R: Read + Seek>(reader: &mut R) -> Result<ContentKind> {
    let start = reader.stream_position()?;

    let mut prefix = [0u8; PREFIX_LEN];
    let mut filled = 0;
    while filled < PREFIX_LEN {
        let n = reader.read(&mut prefix[filled..])?;
        if n == 0 {
            break;
        }
        filled += n;
    }

    reader.seek(SeekFrom::Start(start))?;
    classify(&prefix[..filled])
}
