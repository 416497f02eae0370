//! Per-file transform orchestration.
//!
//! [`process_path`] runs the full state machine for one path: open and
//! classify the source, check the requested direction against the detected
//! state, compute the destination name, confirm overwrites, transcode, write,
//! and conditionally remove the original. Every failure is scoped to the one
//! path; the caller's loop decides nothing more than "continue".

use crate::detect::{ContentKind, classify_reader};
use crate::error::{OxigzError, Result};
use crate::gzip;
use crate::options::Options;
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

/// Suffix appended by compression and stripped by decompression.
pub const GZIP_SUFFIX: &str = ".gz";

/// Capability to confirm overwriting an existing destination.
///
/// The CLI wires this to an interactive prompt; tests supply a closure.
pub trait Confirm {
    /// Return true to allow overwriting `path`.
    fn confirm(&mut self, path: &Path) -> bool;
}

impl<F: FnMut(&Path) -> bool> Confirm for F {
    fn confirm(&mut self, path: &Path) -> bool {
        self(path)
    }
}

/// Result of processing one path.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The destination was written.
    Written {
        /// The path that was created.
        destination: PathBuf,
        /// Set when the source should have been removed but could not be;
        /// the destination is retained either way.
        remove_error: Option<String>,
    },
    /// The destination exists and the confirmation provider declined.
    Declined {
        /// The destination that was left untouched.
        destination: PathBuf,
    },
}

/// Compute the destination path for a source name and direction.
///
/// Compression appends [`GZIP_SUFFIX`]; decompression strips exactly that
/// suffix and is only defined when the name ends with it. The result is never
/// equal to the source.
pub fn destination(path: &Path, decompress: bool) -> Result<PathBuf> {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| OxigzError::mismatch(path, "invalid file name"))?;

    if decompress {
        let stem = name
            .strip_suffix(GZIP_SUFFIX)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| {
                OxigzError::mismatch(path, format!("unknown suffix, expected {GZIP_SUFFIX}"))
            })?;
        Ok(path.with_file_name(stem))
    } else {
        Ok(path.with_file_name(format!("{name}{GZIP_SUFFIX}")))
    }
}

/// Run the transform state machine for one path.
pub fn process_path(
    path: &Path,
    options: &Options,
    confirm: &mut dyn Confirm,
) -> Result<Outcome> {
    let mut source = File::open(path).map_err(|e| OxigzError::path(path, e))?;

    // A file too short to carry the magic cannot be gzip, but it is still
    // compressible.
    let kind = match classify_reader(&mut source) {
        Ok(kind) => kind,
        Err(OxigzError::TooShort { .. }) if !options.decompress => ContentKind::Plain,
        Err(OxigzError::TooShort { .. }) => {
            return Err(OxigzError::mismatch(path, "not in gzip format"));
        }
        Err(e) => return Err(e),
    };

    // Direction/state mismatch is a skip, never a silent override.
    if options.decompress && !kind.is_gzip() {
        return Err(OxigzError::mismatch(path, "not in gzip format"));
    }
    if !options.decompress && kind.is_gzip() {
        return Err(OxigzError::mismatch(path, "already gzipped"));
    }

    let dest = destination(path, options.decompress)?;

    if dest.exists() && !options.force && !confirm.confirm(&dest) {
        return Ok(Outcome::Declined { destination: dest });
    }

    let mut data = Vec::new();
    source
        .read_to_end(&mut data)
        .map_err(|e| OxigzError::path(path, e))?;
    drop(source);

    let transformed = if options.decompress {
        gzip::decompress(&data)?
    } else {
        gzip::compress(&data, options.level)?
    };

    let mut out = File::create(&dest).map_err(|e| OxigzError::path(&dest, e))?;
    out.write_all(&transformed)
        .map_err(|e| OxigzError::path(&dest, e))?;
    out.flush().map_err(|e| OxigzError::path(&dest, e))?;
    drop(out);

    // Removal happens only after the destination is safely on disk; a failed
    // removal never rolls the destination back.
    let remove_error = if options.keep {
        None
    } else {
        fs::remove_file(path)
            .err()
            .map(|e| OxigzError::path(path, e).to_string())
    };

    Ok(Outcome::Written {
        destination: dest,
        remove_error,
    })
}
