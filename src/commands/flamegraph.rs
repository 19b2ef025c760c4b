//! Flamegraph command implementation.

use super::utils::load_aggregate;
use crate::flamegraph::{generate_flamegraph, FlamegraphConfig};
use crate::output::write_svg;
use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;

/// Arguments for the flamegraph command
#[derive(Debug, Clone)]
pub struct FlamegraphArgs {
    /// Folded-stack input (`-` for stdin)
    pub input: PathBuf,

    /// SVG output path
    pub output: PathBuf,

    pub config: FlamegraphConfig,
}

pub fn validate_args(args: &FlamegraphArgs) -> Result<()> {
    if args.input.as_os_str().is_empty() {
        anyhow::bail!("Input path cannot be empty");
    }

    if args.config.width == Some(0) {
        anyhow::bail!("Flamegraph width must be greater than 0");
    }

    Ok(())
}

/// Execute the flamegraph command
///
/// **Public** - main entry point called from main.rs
pub fn execute_flamegraph(args: FlamegraphArgs) -> Result<()> {
    let aggregate = load_aggregate(&args.input)?;

    let svg = generate_flamegraph(&aggregate, Some(&args.config))
        .context("Failed to generate flamegraph")?;

    write_svg(&svg, &args.output).context("Failed to write flamegraph SVG")?;

    info!("✓ Flamegraph written to: {}", args.output.display());

    Ok(())
}
