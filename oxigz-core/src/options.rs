//! Resolved run configuration.

use crate::error::{OxigzError, Result};
use crate::gzip::Level;

/// A resolved configuration snapshot for one run.
///
/// Built once at startup from the parsed command line and read-only for the
/// lifetime of the run; every core operation receives it explicitly.
#[derive(Debug, Clone)]
pub struct Options {
    /// Decompress instead of compress.
    pub decompress: bool,
    /// Compression level (0..=9).
    pub level: Level,
    /// Keep the original file after a successful transform.
    pub keep: bool,
    /// Overwrite existing destinations without confirmation.
    pub force: bool,
    /// Suppress non-fatal error and status messages.
    pub quiet: bool,
    /// Write to standard output instead of files.
    pub stdout: bool,
    /// Verify integrity without writing output.
    pub test: bool,
    /// Report compression statistics without writing output.
    pub list: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            decompress: false,
            level: Level::DEFAULT,
            keep: false,
            force: false,
            quiet: false,
            stdout: false,
            test: false,
            list: false,
        }
    }
}

impl Options {
    /// Validate the option combination against the number of supplied paths.
    ///
    /// Configuration errors are fatal and abort the run before any path is
    /// touched.
    pub fn validate(&self, path_count: usize) -> Result<()> {
        if self.stdout && path_count > 0 {
            return Err(OxigzError::config("files specified along with --stdout"));
        }
        if self.list && self.test {
            return Err(OxigzError::config("--list cannot be combined with --test"));
        }
        if (self.list || self.test) && path_count == 0 {
            let flag = if self.list { "--list" } else { "--test" };
            return Err(OxigzError::config(format!("{flag} requires file paths")));
        }
        Ok(())
    }
}
