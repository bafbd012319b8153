//! hires-check: inspect an audio file's sample rate via ffprobe and
//! report whether it qualifies as hi-res.
//!
//! Exit codes: 0 success, 1 missing argument, 2 file not found,
//! 3 unreadable sample rate, 4 ffprobe not installed.

use hires_check::cli::{print_usage, Cli};
use hires_check::error::{CheckError, ErrorCode, Result};
use hires_check::probe::{ffprobe_available, probe_sample_rate};
use hires_check::report::Report;

fn main() {
    if let Err(e) = run() {
        if e.code == ErrorCode::MissingArgument {
            print_usage();
        } else {
            eprintln!("Error: {}", e);
        }
        std::process::exit(e.code.exit_code());
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse_args();
    let path = cli.validated_path()?;

    if !ffprobe_available() {
        return Err(CheckError::probe_unavailable());
    }

    let sample_rate = probe_sample_rate(path)?;
    let report = Report::new(path, sample_rate);
    println!("{}", report.render());

    Ok(())
}
