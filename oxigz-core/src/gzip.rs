//! Gzip transcoding.
//!
//! Pure byte-buffer transforms built on the `flate2` gzip container
//! (RFC 1952: magic bytes, DEFLATE payload, CRC32/ISIZE trailer). Both
//! directions allocate a fresh output buffer and never touch the file system.

use crate::error::{OxigzError, Result};
use flate2::Compression;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use std::io::{Read, Write};

/// Compression level in the closed range 0..=9.
///
/// Out-of-range values are corrected to [`Level::DEFAULT`] rather than
/// rejected, mirroring the documented CLI coercion behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Level(u32);

impl Level {
    /// The default compression level.
    pub const DEFAULT: Level = Level(6);

    /// Create a level, coercing out-of-range values to the default.
    pub fn new(level: u32) -> Self {
        if Self::is_valid(level) {
            Self(level)
        } else {
            Self::DEFAULT
        }
    }

    /// Whether `level` lies in the valid 0..=9 range.
    pub fn is_valid(level: u32) -> bool {
        level <= 9
    }

    /// The raw level value.
    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for Level {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Compress a buffer into a gzip container at the requested level.
pub fn compress(data: &[u8], level: Level) -> Result<Vec<u8>> {
    let output = Vec::with_capacity(data.len() / 2 + 64);
    let mut encoder = GzEncoder::new(output, Compression::new(level.get()));
    encoder
        .write_all(data)
        .map_err(|e| OxigzError::codec(e.to_string()))?;
    encoder
        .finish()
        .map_err(|e| OxigzError::codec(e.to_string()))
}

/// Decompress a gzip container into the original bytes.
///
/// Fails with [`OxigzError::Format`] when the input is not a valid container:
/// unreadable header, corrupt stream, or truncated data.
pub fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    let mut decoder = GzDecoder::new(data);
    let mut output = Vec::new();
    decoder
        .read_to_end(&mut output)
        .map_err(|e| OxigzError::format(e.to_string()))?;
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect::{ContentKind, GZIP_MAGIC, classify};

    #[test]
    fn test_level_coercion() {
        assert_eq!(Level::new(0).get(), 0);
        assert_eq!(Level::new(9).get(), 9);
        assert_eq!(Level::new(10).get(), 6);
        assert_eq!(Level::new(u32::MAX).get(), 6);
        assert_eq!(Level::default().get(), 6);
    }

    #[test]
    fn test_roundtrip() {
        let original = b"Hello, gzip world! Hello, gzip world!";
        for level in 0..=9 {
            let compressed = compress(original, Level::new(level)).unwrap();
            let decompressed = decompress(&compressed).unwrap();
            assert_eq!(decompressed, original);
        }
    }

    #[test]
    fn test_roundtrip_empty() {
        let compressed = compress(b"", Level::DEFAULT).unwrap();
        assert_eq!(decompress(&compressed).unwrap(), b"");
    }

    #[test]
    fn test_output_carries_magic() {
        let compressed = compress(b"payload", Level::DEFAULT).unwrap();
        assert_eq!(&compressed[..2], &GZIP_MAGIC);
        assert_eq!(classify(&compressed).unwrap(), ContentKind::Gzip);
    }

    #[test]
    fn test_repeated_data_compresses() {
        let original = vec![b'A'; 10000];
        let compressed = compress(&original, Level::new(9)).unwrap();
        assert!(compressed.len() < original.len() / 10);
        assert_eq!(decompress(&compressed).unwrap(), original);
    }

    #[test]
    fn test_decompress_rejects_plain() {
        let err = decompress(b"definitely not gzip").unwrap_err();
        assert!(matches!(err, OxigzError::Format { .. }));
    }

    #[test]
    fn test_decompress_rejects_truncated() {
        let compressed = compress(b"some data worth keeping around", Level::DEFAULT).unwrap();
        let truncated = &compressed[..compressed.len() / 2];
        assert!(decompress(truncated).is_err());
    }

    #[test]
    fn test_decompress_rejects_corrupt() {
        let mut compressed = compress(&vec![7u8; 4096], Level::DEFAULT).unwrap();
        let mid = compressed.len() / 2;
        compressed[mid] ^= 0xFF;
        assert!(decompress(&compressed).is_err());
    }
}
