//! hires-check: reports whether an audio file qualifies as hi-res.
//!
//! The tool probes a single file with ffprobe, reads the sample rate of
//! the first audio stream, and classifies the file as HI-RES (strictly
//! above 44100 Hz) or Standard.
//!
//! # Modules
//!
//! - [`cli`]: Argument parsing and input validation
//! - [`error`]: Error codes and the process exit-code contract
//! - [`probe`]: ffprobe invocation and output parsing
//! - [`report`]: Classification and report formatting

pub mod cli;
pub mod error;
pub mod probe;
pub mod report;

// Re-export commonly used types at crate root for convenience
pub use error::{CheckError, ErrorCode, Result};
pub use report::{Category, Report, HI_RES_THRESHOLD_HZ};
