//! Convert command implementation.
//!
//! The convert command:
//! 1. Loads a folded-stack aggregate
//! 2. Resolves the capture window
//! 3. Encodes it as folded text or a pprof profile

use super::utils::{is_stdio, load_aggregate};
use crate::format::{encode, Format};
use crate::output::create_output;
use crate::utils::config::DEFAULT_SAMPLING_HZ;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use log::{debug, info};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

/// Arguments for the convert command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct ConvertArgs {
    /// Folded-stack input (`-` for stdin)
    pub input: PathBuf,

    /// Output path; stdout when `None` or `-`
    pub output: Option<PathBuf>,

    pub format: Format,

    /// Sampling frequency the input was captured at
    pub hz: u32,

    /// Capture start; defaults to `end`
    pub start: Option<DateTime<Utc>>,

    /// Capture end; defaults to now
    pub end: Option<DateTime<Utc>>,
}

impl Default for ConvertArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::from("-"),
            output: None,
            format: Format::Pprof,
            hz: DEFAULT_SAMPLING_HZ,
            start: None,
            end: None,
        }
    }
}

impl ConvertArgs {
    /// Capture window with defaults applied
    pub fn window(&self) -> (DateTime<Utc>, DateTime<Utc>) {
        let end = self.end.unwrap_or_else(Utc::now);
        let start = self.start.unwrap_or(end);
        (start, end)
    }
}

/// Validate convert arguments
///
/// **Public** - can be called before execute_convert for early validation
pub fn validate_args(args: &ConvertArgs) -> Result<()> {
    if args.input.as_os_str().is_empty() {
        anyhow::bail!("Input path cannot be empty");
    }

    if args.hz == 0 {
        anyhow::bail!("Sampling frequency must be greater than 0");
    }

    if let (Some(start), Some(end)) = (args.start, args.end) {
        if end < start {
            anyhow::bail!("Capture end ({}) is before start ({})", end, start);
        }
    }

    Ok(())
}

/// Execute the convert command
///
/// **Public** - main entry point called from main.rs
pub fn execute_convert(args: ConvertArgs) -> Result<()> {
    let started = Instant::now();

    info!("Step 1/2: Loading stacks from {}...", args.input.display());
    let aggregate = load_aggregate(&args.input)?;
    debug!("Loaded {} unique stacks", aggregate.len());

    let (start, end) = args.window();
    info!("Step 2/2: Encoding as {} ({} Hz)...", args.format, args.hz);

    let mut sink: Box<dyn Write> = match &args.output {
        Some(path) if !is_stdio(path) => Box::new(
            create_output(path)
                .with_context(|| format!("Failed to create {}", path.display()))?,
        ),
        _ => Box::new(BufWriter::new(io::stdout().lock())),
    };

    encode(&mut sink, &aggregate, args.format, args.hz, start, end)
        .with_context(|| format!("Failed to encode {} output", args.format))?;
    sink.flush().context("Failed to flush output")?;

    if let Some(path) = args.output.as_ref().filter(|p| !is_stdio(p)) {
        info!("✓ {} output written to: {}", args.format, path.display());
    }

    info!("Convert completed in {:.2}s", started.elapsed().as_secs_f64());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_validate_args_valid() {
        let args = ConvertArgs {
            input: PathBuf::from("stacks.folded"),
            ..Default::default()
        };
        assert!(validate_args(&args).is_ok());
    }

    #[test]
    fn test_validate_args_zero_hz() {
        let args = ConvertArgs {
            hz: 0,
            ..Default::default()
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_empty_input() {
        let args = ConvertArgs {
            input: PathBuf::new(),
            ..Default::default()
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_inverted_window() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 10).unwrap();
        let args = ConvertArgs {
            start: Some(start),
            end: Some(start - chrono::Duration::seconds(1)),
            ..Default::default()
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_window_defaults_start_to_end() {
        let end = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 10).unwrap();
        let args = ConvertArgs {
            end: Some(end),
            ..Default::default()
        };
        assert_eq!(args.window(), (end, end));
    }
}
