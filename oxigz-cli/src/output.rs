//! Terminal rendering: colorized status/error messages and list-mode rows.

use console::style;
use oxigz_core::{ListEntry, Listing};
use std::fmt::Display;

/// Print a per-path or fatal error to stderr, bright red on terminals.
pub fn error(message: impl Display) {
    eprintln!("{}", style(message).red().bright().for_stderr());
}

/// Print a warning to stderr, bright yellow on terminals.
pub fn warn(message: impl Display) {
    eprintln!("{}", style(message).yellow().bright().for_stderr());
}

/// Print a successful status line to stdout, bright green on terminals.
pub fn success(message: impl Display) {
    println!("{}", style(message).green().bright());
}

fn row(entry: &ListEntry, name: &str) {
    println!(
        "{:>12} {:>12} {:>7.2}% {}",
        entry.compressed,
        entry.uncompressed,
        entry.ratio(),
        name
    );
}

/// Print a list-mode report: one row per file plus totals when applicable.
pub fn print_listing(listing: &Listing) {
    if listing.entries.is_empty() {
        return;
    }

    println!(
        "{:>12} {:>12} {:>8} name",
        "compressed", "uncompressed", "ratio"
    );
    for entry in &listing.entries {
        row(entry, &entry.path.display().to_string());
    }
    if let Some(totals) = listing.totals() {
        row(&totals, "(totals)");
    }
}
