//! Hi-res classification and report formatting.
//!
//! A sample rate strictly above the CD standard of 44100 Hz counts as
//! hi-res. The report is four fixed lines so existing callers can parse
//! the output by line position.

use std::fmt;
use std::path::{Path, PathBuf};

/// CD-quality sample rate in Hz. Anything strictly above this is hi-res.
pub const HI_RES_THRESHOLD_HZ: u32 = 44_100;

/// Classification of an audio file by sample rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// Sample rate strictly above 44100 Hz.
    HiRes,
    /// Sample rate at or below 44100 Hz.
    Standard,
}

impl Category {
    /// Classifies a sample rate against the hi-res threshold.
    pub fn from_sample_rate(sample_rate: u32) -> Self {
        if sample_rate > HI_RES_THRESHOLD_HZ {
            Category::HiRes
        } else {
            Category::Standard
        }
    }

    /// Returns the string representation used in the report.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::HiRes => "HI-RES",
            Category::Standard => "Standard",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Inspection result for a single file.
#[derive(Debug, Clone)]
pub struct Report {
    /// Path as supplied by the caller.
    pub path: PathBuf,
    /// Sample rate in Hz reported by the probe.
    pub sample_rate: u32,
}

impl Report {
    /// Creates a report for the given file and probed sample rate.
    pub fn new(path: impl Into<PathBuf>, sample_rate: u32) -> Self {
        Self {
            path: path.into(),
            sample_rate,
        }
    }

    /// Returns the classification for this file.
    pub fn category(&self) -> Category {
        Category::from_sample_rate(self.sample_rate)
    }

    /// Renders the four-line report.
    ///
    /// Line order (file, path, rate, category) is part of the output
    /// contract. The kHz figure is integer-truncated.
    pub fn render(&self) -> String {
        let name = base_name(&self.path);

        format!(
            "File:     {}\n\
             Path:     {}\n\
             Rate:     {} Hz ({} kHz)\n\
             Category: {}",
            name,
            self.path.display(),
            self.sample_rate,
            self.sample_rate / 1000,
            self.category(),
        )
    }
}

/// Basename shown on the first report line, falling back to the full
/// display form for paths without a file name component.
pub fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
