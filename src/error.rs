//! Error types for hires-check.
//!
//! Defines all error codes and types used by the tool for consistent
//! error reporting and a stable process exit-code contract.

use std::fmt;

/// Error codes returned by the tool, each mapped to a distinct exit code.
///
/// The exit-code mapping is part of the CLI contract and must not change
/// without coordinating with existing callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// No file path was supplied on the command line.
    /// Trigger: invoked with zero positional arguments.
    MissingArgument,

    /// The supplied path does not reference an existing regular file.
    /// Trigger: nonexistent path, or a directory/special file.
    FileNotFound,

    /// ffprobe output could not be parsed as a positive sample rate.
    /// Trigger: empty output, error marker, no audio stream, non-numeric rate.
    UnreadableSampleRate,

    /// The ffprobe binary is not installed or not on PATH.
    /// Trigger: `ffprobe -version` preflight failed to run.
    ProbeUnavailable,
}

impl ErrorCode {
    /// Returns the string representation of the error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::MissingArgument => "MISSING_ARGUMENT",
            ErrorCode::FileNotFound => "FILE_NOT_FOUND",
            ErrorCode::UnreadableSampleRate => "UNREADABLE_SAMPLE_RATE",
            ErrorCode::ProbeUnavailable => "PROBE_UNAVAILABLE",
        }
    }

    /// Returns a human-readable description of the error.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::MissingArgument => "No audio file path was supplied",
            ErrorCode::FileNotFound => "Path does not reference an existing regular file",
            ErrorCode::UnreadableSampleRate => "ffprobe did not report a usable sample rate",
            ErrorCode::ProbeUnavailable => "ffprobe is not installed or not on PATH",
        }
    }

    /// Returns the process exit code mapped to this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            ErrorCode::MissingArgument => 1,
            ErrorCode::FileNotFound => 2,
            ErrorCode::UnreadableSampleRate => 3,
            ErrorCode::ProbeUnavailable => 4,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Main error type for hires-check operations.
#[derive(Debug)]
pub struct CheckError {
    /// The error code identifying the type of error.
    pub code: ErrorCode,
    /// Human-readable error message with context.
    pub message: String,
    /// Optional underlying cause of the error.
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl CheckError {
    /// Creates a new CheckError with the given code and message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Creates a new CheckError with an underlying cause.
    pub fn with_source(
        code: ErrorCode,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates a MISSING_ARGUMENT error.
    pub fn missing_argument() -> Self {
        Self::new(ErrorCode::MissingArgument, "No audio file path supplied")
    }

    /// Creates a FILE_NOT_FOUND error.
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::FileNotFound,
            format!("File not found: {}", path.into()),
        )
    }

    /// Creates an UNREADABLE_SAMPLE_RATE error.
    pub fn unreadable_sample_rate(reason: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::UnreadableSampleRate,
            format!("Could not read sample rate: {}", reason.into()),
        )
    }

    /// Creates a PROBE_UNAVAILABLE error.
    pub fn probe_unavailable() -> Self {
        Self::new(
            ErrorCode::ProbeUnavailable,
            "ffprobe not found; install ffmpeg to use this tool",
        )
    }
}

impl fmt::Display for CheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for CheckError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Result type alias using CheckError.
pub type Result<T> = std::result::Result<T, CheckError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_code_as_str() {
        assert_eq!(ErrorCode::MissingArgument.as_str(), "MISSING_ARGUMENT");
        assert_eq!(ErrorCode::FileNotFound.as_str(), "FILE_NOT_FOUND");
        assert_eq!(
            ErrorCode::UnreadableSampleRate.as_str(),
            "UNREADABLE_SAMPLE_RATE"
        );
        assert_eq!(ErrorCode::ProbeUnavailable.as_str(), "PROBE_UNAVAILABLE");
    }

    #[test]
    fn exit_codes_are_distinct_and_stable() {
        assert_eq!(ErrorCode::MissingArgument.exit_code(), 1);
        assert_eq!(ErrorCode::FileNotFound.exit_code(), 2);
        assert_eq!(ErrorCode::UnreadableSampleRate.exit_code(), 3);
        assert_eq!(ErrorCode::ProbeUnavailable.exit_code(), 4);
    }

    #[test]
    fn error_code_descriptions_not_empty() {
        assert!(!ErrorCode::MissingArgument.description().is_empty());
        assert!(!ErrorCode::FileNotFound.description().is_empty());
        assert!(!ErrorCode::UnreadableSampleRate.description().is_empty());
        assert!(!ErrorCode::ProbeUnavailable.description().is_empty());
    }

    #[test]
    fn check_error_display() {
        let err = CheckError::file_not_found("/tmp/missing.flac");
        assert!(err.to_string().contains("FILE_NOT_FOUND"));
        assert!(err.to_string().contains("/tmp/missing.flac"));
    }

    #[test]
    fn check_error_with_source_preserves_cause() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no ffprobe");
        let err =
            CheckError::with_source(ErrorCode::ProbeUnavailable, "failed to spawn ffprobe", io);
        assert!(std::error::Error::source(&err).is_some());
    }
}
