//! Expansion of raw path arguments into concrete, existing paths.

use crate::error::OxigzError;
use std::io;
use std::path::{Path, PathBuf};

/// Result of resolving a set of raw path arguments.
#[derive(Debug, Default)]
pub struct Resolved {
    /// Existing paths, in input order (glob matches sorted within a pattern).
    pub paths: Vec<PathBuf>,
    /// Per-entry errors for arguments that produced no usable path.
    pub errors: Vec<OxigzError>,
}

/// Whether a raw argument contains glob metacharacters.
fn is_pattern(raw: &str) -> bool {
    raw.contains(['*', '?', '['])
}

/// Resolve raw arguments (literal paths or glob patterns) into existing paths.
///
/// Each entry is checked independently: a missing or inaccessible literal
/// path is reported and excluded without aborting the batch, and a pattern
/// matching zero paths yields no work item and no error.
pub fn resolve(raw_paths: &[String]) -> Resolved {
    let mut resolved = Resolved::default();

    for raw in raw_paths {
        let literal = Path::new(raw);
        if literal.exists() {
            resolved.paths.push(literal.to_path_buf());
            continue;
        }

        if !is_pattern(raw) {
            resolved.errors.push(OxigzError::path(
                literal,
                io::Error::new(io::ErrorKind::NotFound, "no such file or directory"),
            ));
            continue;
        }

        match glob::glob(raw) {
            Ok(matches) => {
                for entry in matches {
                    match entry {
                        Ok(path) => resolved.paths.push(path),
                        // Matched but unreadable (e.g. permission denied)
                        Err(e) => {
                            let path = e.path().to_path_buf();
                            resolved
                                .errors
                                .push(OxigzError::path(path, e.into_error()));
                        }
                    }
                }
            }
            Err(e) => resolved.errors.push(OxigzError::path(
                literal,
                io::Error::new(io::ErrorKind::InvalidInput, e.to_string()),
            )),
        }
    }

    resolved
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(dir: &TempDir, name: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, b"x").unwrap();
        path
    }

    #[test]
    fn test_literal_existing_path() {
        let dir = TempDir::new().unwrap();
        let file = touch(&dir, "a.txt");

        let resolved = resolve(&[file.display().to_string()]);
        assert_eq!(resolved.paths, vec![file]);
        assert!(resolved.errors.is_empty());
    }

    #[test]
    fn test_missing_literal_is_reported_not_fatal() {
        let dir = TempDir::new().unwrap();
        let good = touch(&dir, "good.txt");
        let missing = dir.path().join("missing.txt");

        let resolved = resolve(&[
            good.display().to_string(),
            missing.display().to_string(),
        ]);
        assert_eq!(resolved.paths, vec![good]);
        assert_eq!(resolved.errors.len(), 1);
        assert!(!resolved.errors[0].is_fatal());
    }

    #[test]
    fn test_pattern_expansion_sorted() {
        let dir = TempDir::new().unwrap();
        touch(&dir, "b.log");
        touch(&dir, "a.log");
        touch(&dir, "c.txt");

        let pattern = dir.path().join("*.log").display().to_string();
        let resolved = resolve(&[pattern]);
        let names: Vec<_> = resolved
            .paths
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["a.log", "b.log"]);
        assert!(resolved.errors.is_empty());
    }

    #[test]
    fn test_pattern_matching_nothing_is_silent() {
        let dir = TempDir::new().unwrap();
        let pattern = dir.path().join("*.nope").display().to_string();

        let resolved = resolve(&[pattern]);
        assert!(resolved.paths.is_empty());
        assert!(resolved.errors.is_empty());
    }

    #[test]
    fn test_input_order_preserved() {
        let dir = TempDir::new().unwrap();
        let second = touch(&dir, "zz.txt");
        let first = touch(&dir, "aa.txt");

        let resolved = resolve(&[
            second.display().to_string(),
            first.display().to_string(),
        ]);
        assert_eq!(resolved.paths, vec![second, first]);
    }
}
