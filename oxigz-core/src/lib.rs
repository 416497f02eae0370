//! # oxigz core
//!
//! Core logic for the `oxigz` command-line utility: a gzip-compatible
//! compressor/decompressor.
//!
//! This crate provides everything except the terminal surface:
//!
//! - [`detect`]: gzip format detection for buffers and seekable files
//! - [`gzip`]: pure byte-buffer compression/decompression (flate2)
//! - [`resolve`]: expansion of raw arguments into existing paths
//! - [`process`]: the per-file transform state machine
//! - [`report`]: list-mode statistics and test-mode integrity checks
//! - [`stream`]: the stdin/stdout pipeline for the no-path case
//! - [`options`]: the read-only configuration snapshot
//! - [`error`]: error types
//!
//! ## Example
//!
//! ```rust
//! use oxigz_core::gzip::{self, Level};
//!
//! let compressed = gzip::compress(b"Hello, world!", Level::DEFAULT).unwrap();
//! let original = gzip::decompress(&compressed).unwrap();
//! assert_eq!(original, b"Hello, world!");
//! ```
//!
//! ## Error model
//!
//! [`OxigzError::Config`] is fatal and aborts a run before any path is
//! touched. Every other variant is caught at the path boundary by the caller
//! and skips only that path.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod detect;
pub mod error;
pub mod gzip;
pub mod options;
pub mod process;
pub mod report;
pub mod resolve;
pub mod stream;

// Re-exports
pub use detect::{ContentKind, GZIP_MAGIC, classify, classify_reader};
pub use error::{OxigzError, Result};
pub use gzip::Level;
pub use options::Options;
pub use process::{Confirm, GZIP_SUFFIX, Outcome, destination, process_path};
pub use report::{ListEntry, Listing, list_paths, test_path};
pub use resolve::{Resolved, resolve};
pub use stream::run_stream;
