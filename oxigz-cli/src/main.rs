//! oxigz - a gzip-compatible compressor/decompressor.
//!
//! Files given on the command line are transformed in place (`file` becomes
//! `file.gz` and vice versa); with no files, standard input is transcoded to
//! standard output.

mod output;

use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use oxigz_core::{
    Confirm, Level, Options, Outcome, list_paths, process_path, resolve, run_stream, test_path,
};
use std::io::{self, IsTerminal};
use std::path::Path;

#[derive(Parser)]
#[command(name = "oxigz")]
#[command(author, version, about = "A gzip-compatible compressor/decompressor")]
#[command(long_about = "
oxigz compresses plain files into gzip containers and decompresses gzip
files, with gzip-style in-place renaming (file <-> file.gz).

Examples:
  oxigz notes.txt              compress to notes.txt.gz, remove notes.txt
  oxigz -dk notes.txt.gz       decompress, keeping notes.txt.gz
  oxigz -L *.gz                list compression statistics
  oxigz -t backup.gz           verify integrity without writing
  cat notes.txt | oxigz > notes.txt.gz
")]
struct Cli {
    /// Decompress input
    #[arg(short, long)]
    decompress: bool,

    /// Compression level (0-9); out-of-range values fall back to 6
    #[arg(short = 'l', long, value_name = "LEVEL", default_value_t = 6)]
    level: u32,

    /// Keep the original file after a successful transform
    #[arg(short, long)]
    keep: bool,

    /// Overwrite existing output files without prompting
    #[arg(short, long)]
    force: bool,

    /// Suppress non-fatal error and status messages
    #[arg(short, long)]
    quiet: bool,

    /// Write to standard output; implied when no paths are given
    #[arg(short = 'c', long)]
    stdout: bool,

    /// Test compressed file integrity without writing output
    #[arg(short, long)]
    test: bool,

    /// List compression statistics for gzip files
    #[arg(short = 'L', long)]
    list: bool,

    /// Generate shell completions and exit
    #[arg(long, value_name = "SHELL")]
    completions: Option<Shell>,

    /// Files or glob patterns to process
    #[arg(value_name = "PATH")]
    paths: Vec<String>,
}

impl Cli {
    fn options(&self) -> Options {
        if !Level::is_valid(self.level) && !self.quiet {
            output::warn(format!(
                "invalid compression level {}, using {}",
                self.level,
                Level::DEFAULT
            ));
        }
        Options {
            decompress: self.decompress,
            level: Level::new(self.level),
            keep: self.keep,
            force: self.force,
            quiet: self.quiet,
            stdout: self.stdout,
            test: self.test,
            list: self.list,
        }
    }
}

/// Overwrite confirmation backed by an interactive terminal prompt.
struct PromptConfirm;

impl Confirm for PromptConfirm {
    fn confirm(&mut self, path: &Path) -> bool {
        dialoguer::Confirm::new()
            .with_prompt(format!("{} already exists; overwrite?", path.display()))
            .default(false)
            .interact()
            .unwrap_or(false)
    }
}

fn main() {
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        clap_complete::generate(shell, &mut cmd, "oxigz", &mut io::stdout());
        return;
    }

    let options = cli.options();
    if let Err(e) = run(&cli.paths, &options) {
        // Fatal errors print even under --quiet
        output::error(&e);
        std::process::exit(1);
    }
}

fn run(patterns: &[String], options: &Options) -> oxigz_core::Result<()> {
    options.validate(patterns.len())?;

    if patterns.is_empty() {
        // No paths means stdout mode unconditionally; an interactive
        // terminal on stdin would only hang, so produce nothing.
        if io::stdin().is_terminal() {
            return Ok(());
        }
        let mut stdin = io::stdin().lock();
        let mut stdout = io::stdout().lock();
        return run_stream(&mut stdin, &mut stdout, options);
    }

    let resolved = resolve(patterns);
    for err in &resolved.errors {
        if !options.quiet {
            output::error(err);
        }
    }

    if options.list {
        let listing = list_paths(&resolved.paths);
        for err in &listing.errors {
            if !options.quiet {
                output::error(err);
            }
        }
        output::print_listing(&listing);
        return Ok(());
    }

    if options.test {
        for path in &resolved.paths {
            match test_path(path) {
                Ok(()) => {
                    if !options.quiet {
                        output::success(format!("{}: OK", path.display()));
                    }
                }
                Err(e) => {
                    if !options.quiet {
                        output::error(e);
                    }
                }
            }
        }
        return Ok(());
    }

    let mut confirm = PromptConfirm;
    for path in &resolved.paths {
        match process_path(path, options, &mut confirm) {
            Ok(Outcome::Written {
                destination,
                remove_error,
            }) => {
                if !options.quiet {
                    println!("{}", destination.display());
                }
                if let Some(message) = remove_error {
                    if !options.quiet {
                        output::error(message);
                    }
                }
            }
            Ok(Outcome::Declined { destination }) => {
                if !options.quiet {
                    output::warn(format!("{}: not overwritten", destination.display()));
                }
            }
            // Per-path failures skip this path only; the batch still exits 0
            Err(e) => {
                if !options.quiet {
                    output::error(e);
                }
            }
        }
    }

    Ok(())
}
