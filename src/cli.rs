//! CLI argument parser and input validation.
//!
//! The file path is optional at the clap level so that a missing argument
//! flows through the tool's own exit-code contract (exit 1 with usage)
//! instead of clap's default error status.

use std::path::{Path, PathBuf};

use clap::Parser;

use crate::error::{CheckError, Result};

/// hires-check: report whether an audio file is hi-res based on its sample rate
#[derive(Parser, Debug)]
#[command(name = "hires-check")]
#[command(about = "Checks whether an audio file is hi-res (sample rate above 44.1 kHz)")]
#[command(version)]
pub struct Cli {
    /// Path to the audio file to inspect
    pub file: Option<PathBuf>,
}

impl Cli {
    /// Parses command-line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// Validates the positional argument and returns the file path.
    ///
    /// Fails with MissingArgument if no path was supplied, and with
    /// FileNotFound if the path does not reference an existing regular file.
    pub fn validated_path(&self) -> Result<&Path> {
        let path = self.file.as_deref().ok_or_else(CheckError::missing_argument)?;
        validate_file(path)?;
        Ok(path)
    }
}

/// Checks that the path references an existing regular file.
///
/// Directories, sockets, and dangling symlinks are rejected the same way
/// as a nonexistent path.
pub fn validate_file(path: &Path) -> Result<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(CheckError::file_not_found(path.display().to_string()))
    }
}

/// Prints usage information for the missing-argument case.
pub fn print_usage() {
    eprintln!("Usage: hires-check <FILE>");
    eprintln!();
    eprintln!("Example:");
    eprintln!("  hires-check ~/Music/track.flac");
    eprintln!();
    eprintln!("Run 'hires-check --help' for full options.");
}
