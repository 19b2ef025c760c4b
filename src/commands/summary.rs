//! Summary command implementation.

use super::utils::load_aggregate;
use crate::aggregator::summarize;
use crate::output::{summary_to_string, write_summary};
use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;

/// Arguments for the summary command
#[derive(Debug, Clone)]
pub struct SummaryArgs {
    pub input: PathBuf,

    /// Number of hot stacks to list
    pub top: usize,

    /// Print JSON instead of text
    pub json: bool,

    /// Write JSON to this path instead of printing
    pub output: Option<PathBuf>,
}

pub fn validate_args(args: &SummaryArgs) -> Result<()> {
    if args.top > 1000 {
        anyhow::bail!("top is too large (max 1000)");
    }

    Ok(())
}

/// Execute the summary command
///
/// **Public** - main entry point called from main.rs
pub fn execute_summary(args: SummaryArgs) -> Result<()> {
    let aggregate = load_aggregate(&args.input)?;
    let summary = summarize(&aggregate, args.top);

    if let Some(path) = &args.output {
        write_summary(&summary, path).context("Failed to write summary JSON")?;
        info!("✓ Summary written to: {}", path.display());
    } else if args.json {
        println!("{}", summary_to_string(&summary)?);
    } else {
        println!("{}", summary.to_text());
    }

    Ok(())
}
