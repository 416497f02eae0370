//! Read-only listing and integrity reporting.

use crate::detect::classify_reader;
use crate::error::{OxigzError, Result};
use crate::gzip;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Compression statistics for one gzip file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntry {
    /// The gzip file.
    pub path: PathBuf,
    /// Size on disk of the compressed file.
    pub compressed: u64,
    /// Length after decompression (computed, never written).
    pub uncompressed: u64,
}

impl ListEntry {
    /// Compressed-to-uncompressed ratio as a percentage.
    pub fn ratio(&self) -> f64 {
        if self.uncompressed == 0 {
            0.0
        } else {
            self.compressed as f64 / self.uncompressed as f64 * 100.0
        }
    }
}

/// Outcome of a list pass over a set of paths.
#[derive(Debug, Default)]
pub struct Listing {
    /// One row per gzip file, in processing order.
    pub entries: Vec<ListEntry>,
    /// Per-path failures (unreadable or undecodable files).
    pub errors: Vec<OxigzError>,
}

impl Listing {
    /// Aggregate totals row, present only when more than one file qualified.
    pub fn totals(&self) -> Option<ListEntry> {
        if self.entries.len() < 2 {
            return None;
        }
        Some(ListEntry {
            path: PathBuf::from("(totals)"),
            compressed: self.entries.iter().map(|e| e.compressed).sum(),
            uncompressed: self.entries.iter().map(|e| e.uncompressed).sum(),
        })
    }
}

/// Build a listing for the given paths.
///
/// Non-gzip paths are silently excluded; they are not an error in list mode.
/// Decode or read failures are collected per path.
pub fn list_paths(paths: &[PathBuf]) -> Listing {
    let mut listing = Listing::default();

    for path in paths {
        match list_one(path) {
            Ok(Some(entry)) => listing.entries.push(entry),
            Ok(None) => {}
            Err(e) => listing.errors.push(e),
        }
    }

    listing
}

fn list_one(path: &Path) -> Result<Option<ListEntry>> {
    let mut file = File::open(path).map_err(|e| OxigzError::path(path, e))?;

    let is_gzip = match classify_reader(&mut file) {
        Ok(kind) => kind.is_gzip(),
        Err(OxigzError::TooShort { .. }) => false,
        Err(e) => return Err(e),
    };
    if !is_gzip {
        return Ok(None);
    }

    let compressed = file
        .metadata()
        .map_err(|e| OxigzError::path(path, e))?
        .len();

    let mut data = Vec::new();
    file.read_to_end(&mut data)
        .map_err(|e| OxigzError::path(path, e))?;
    let uncompressed = gzip::decompress(&data)?.len() as u64;

    Ok(Some(ListEntry {
        path: path.to_path_buf(),
        compressed,
        uncompressed,
    }))
}

/// Verify the integrity of one gzip file without writing anything.
///
/// Unlike list mode, a non-gzip path is an error here.
pub fn test_path(path: &Path) -> Result<()> {
    let mut file = File::open(path).map_err(|e| OxigzError::path(path, e))?;

    let kind = match classify_reader(&mut file) {
        Ok(kind) => kind,
        Err(OxigzError::TooShort { .. }) => {
            return Err(OxigzError::mismatch(path, "not in gzip format"));
        }
        Err(e) => return Err(e),
    };
    if !kind.is_gzip() {
        return Err(OxigzError::mismatch(path, "not in gzip format"));
    }

    let mut data = Vec::new();
    file.read_to_end(&mut data)
        .map_err(|e| OxigzError::path(path, e))?;
    gzip::decompress(&data)?;
    Ok(())
}
