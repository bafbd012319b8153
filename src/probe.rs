//! Sample-rate probe backed by ffprobe.
//!
//! Invokes ffprobe as a subprocess, asking for the sample rate of the first
//! audio stream as JSON, and parses the captured output. Parsing is kept
//! separate from process spawning so it can be tested without ffmpeg
//! installed.

use std::io::ErrorKind;
use std::path::Path;
use std::process::{Command, Stdio};

use serde::Deserialize;

use crate::error::{CheckError, ErrorCode, Result};

/// Top-level shape of `ffprobe -of json` output.
///
/// Only the fields we ask for are modeled; everything else is ignored.
#[derive(Debug, Deserialize)]
struct ProbeOutput {
    #[serde(default)]
    streams: Vec<ProbeStream>,
    /// Present when ffprobe reports a demux/decode error in JSON form.
    #[serde(default)]
    error: Option<serde_json::Value>,
}

/// Per-stream entries. ffprobe reports `sample_rate` as a JSON string,
/// so accept either a string or a bare number.
#[derive(Debug, Deserialize)]
struct ProbeStream {
    #[serde(default)]
    sample_rate: Option<serde_json::Value>,
}

/// Probes the sample rate (Hz) of the first audio stream of `path`.
///
/// Diagnostic output from ffprobe is suppressed; only the JSON result on
/// stdout is inspected.
pub fn probe_sample_rate(path: &Path) -> Result<u32> {
    let output = Command::new("ffprobe")
        .arg("-v")
        .arg("quiet")
        .arg("-select_streams")
        .arg("a:0")
        .arg("-show_entries")
        .arg("stream=sample_rate")
        .arg("-of")
        .arg("json")
        .arg(path)
        .stdin(Stdio::null())
        .output()
        .map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                CheckError::probe_unavailable()
            } else {
                CheckError::with_source(ErrorCode::UnreadableSampleRate, "failed to run ffprobe", e)
            }
        })?;

    let stdout = String::from_utf8_lossy(&output.stdout);
    parse_sample_rate(&stdout)
}

/// Parses captured ffprobe output into a positive sample rate.
///
/// Empty output, an error marker, a missing audio stream, and a
/// non-numeric or zero rate all map to UnreadableSampleRate.
pub fn parse_sample_rate(raw: &str) -> Result<u32> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CheckError::unreadable_sample_rate("ffprobe produced no output"));
    }

    let parsed: ProbeOutput = serde_json::from_str(trimmed)
        .map_err(|e| CheckError::unreadable_sample_rate(format!("invalid ffprobe JSON: {}", e)))?;

    if parsed.error.is_some() {
        return Err(CheckError::unreadable_sample_rate(
            "ffprobe reported an error for this file",
        ));
    }

    let stream = parsed
        .streams
        .first()
        .ok_or_else(|| CheckError::unreadable_sample_rate("no audio stream found"))?;

    let rate = match &stream.sample_rate {
        Some(serde_json::Value::String(s)) => s.trim().parse::<u32>().ok(),
        Some(serde_json::Value::Number(n)) => n.as_u64().and_then(|v| u32::try_from(v).ok()),
        _ => None,
    };

    match rate {
        Some(hz) if hz > 0 => Ok(hz),
        _ => Err(CheckError::unreadable_sample_rate(
            "stream has no numeric sample rate",
        )),
    }
}

/// Returns true if the ffprobe binary can be executed.
///
/// Used as a startup preflight so a missing ffmpeg install produces a
/// clear message instead of a confusing parse failure.
pub fn ffprobe_available() -> bool {
    Command::new("ffprobe")
        .arg("-version")
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn parses_string_sample_rate() {
        let json = r#"{ "programs": [], "streams": [{ "sample_rate": "48000" }] }"#;
        assert_eq!(parse_sample_rate(json).unwrap(), 48000);
    }

    #[test]
    fn parses_numeric_sample_rate() {
        let json = r#"{ "streams": [{ "sample_rate": 96000 }] }"#;
        assert_eq!(parse_sample_rate(json).unwrap(), 96000);
    }

    #[test]
    fn empty_output_is_unreadable() {
        let err = parse_sample_rate("").unwrap_err();
        assert_eq!(err.code, ErrorCode::UnreadableSampleRate);

        let err = parse_sample_rate("   \n").unwrap_err();
        assert_eq!(err.code, ErrorCode::UnreadableSampleRate);
    }

    #[test]
    fn error_marker_is_unreadable() {
        let json = r#"{ "error": { "code": -2, "string": "No such file or directory" } }"#;
        let err = parse_sample_rate(json).unwrap_err();
        assert_eq!(err.code, ErrorCode::UnreadableSampleRate);
    }

    #[test]
    fn missing_streams_is_unreadable() {
        let err = parse_sample_rate(r#"{ "programs": [], "streams": [] }"#).unwrap_err();
        assert_eq!(err.code, ErrorCode::UnreadableSampleRate);
        assert!(err.message.contains("no audio stream"));

        // Video-only files report a stream without a sample rate entry
        let err = parse_sample_rate(r#"{ "streams": [{}] }"#).unwrap_err();
        assert_eq!(err.code, ErrorCode::UnreadableSampleRate);
    }

    #[test]
    fn non_numeric_rate_is_unreadable() {
        let json = r#"{ "streams": [{ "sample_rate": "N/A" }] }"#;
        let err = parse_sample_rate(json).unwrap_err();
        assert_eq!(err.code, ErrorCode::UnreadableSampleRate);
    }

    #[test]
    fn zero_rate_is_unreadable() {
        let json = r#"{ "streams": [{ "sample_rate": "0" }] }"#;
        let err = parse_sample_rate(json).unwrap_err();
        assert_eq!(err.code, ErrorCode::UnreadableSampleRate);
    }

    #[test]
    fn garbage_output_is_unreadable() {
        let err = parse_sample_rate("not json at all").unwrap_err();
        assert_eq!(err.code, ErrorCode::UnreadableSampleRate);
    }

    #[test]
    fn cd_rate_parses() {
        let json = r#"{ "streams": [{ "sample_rate": "44100" }] }"#;
        assert_eq!(parse_sample_rate(json).unwrap(), 44100);
    }
}
