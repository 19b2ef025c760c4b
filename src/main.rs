//! fgprof CLI
//!
//! Converts folded wall-clock stacks into pprof profiles, flamegraphs and
//! summaries.

use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use fgprof::commands::{
    convert, execute_convert, execute_flamegraph, execute_summary, flamegraph, parse_timestamp,
    summary, ConvertArgs, FlamegraphArgs, SummaryArgs,
};
use fgprof::flamegraph::FlamegraphConfig;
use fgprof::utils::config::{DEFAULT_FLAMEGRAPH_TITLE, DEFAULT_SAMPLING_HZ, DEFAULT_TOP_STACKS};
use fgprof::Format;

/// fgprof - wall-clock stack profile encoder
#[derive(Parser, Debug)]
#[command(name = "fgprof")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Encode folded stacks as folded text or a pprof profile
    Convert {
        /// Folded-stack input file (`-` for stdin)
        #[arg(short, long, default_value = "-")]
        input: PathBuf,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format: folded or pprof
        #[arg(short, long, env = "FGPROF_FORMAT", default_value_t = Format::Pprof)]
        format: Format,

        /// Sampling frequency the stacks were captured at, in Hz
        #[arg(long, env = "FGPROF_HZ", default_value_t = DEFAULT_SAMPLING_HZ)]
        hz: u32,

        /// Capture start (RFC 3339); defaults to the end time
        #[arg(long, value_parser = parse_timestamp)]
        start: Option<DateTime<Utc>>,

        /// Capture end (RFC 3339); defaults to now
        #[arg(long, value_parser = parse_timestamp)]
        end: Option<DateTime<Utc>>,
    },

    /// Render folded stacks as an SVG flamegraph
    Flamegraph {
        /// Folded-stack input file (`-` for stdin)
        #[arg(short, long, default_value = "-")]
        input: PathBuf,

        /// Output path for the SVG
        #[arg(short, long, default_value = "flamegraph.svg")]
        output: PathBuf,

        /// Flamegraph title
        #[arg(long, default_value = DEFAULT_FLAMEGRAPH_TITLE)]
        title: String,

        /// Flamegraph width in pixels
        #[arg(long)]
        width: Option<usize>,
    },

    /// Print totals and the hottest stacks
    Summary {
        /// Folded-stack input file (`-` for stdin)
        #[arg(short, long, default_value = "-")]
        input: PathBuf,

        /// Number of hot stacks to list
        #[arg(long, default_value_t = DEFAULT_TOP_STACKS)]
        top: usize,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,

        /// Write JSON summary to a file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    match cli.command {
        Commands::Convert {
            input,
            output,
            format,
            hz,
            start,
            end,
        } => {
            let args = ConvertArgs {
                input,
                output,
                format,
                hz,
                start,
                end,
            };

            convert::validate_args(&args)?;
            execute_convert(args)?;
        }

        Commands::Flamegraph {
            input,
            output,
            title,
            width,
        } => {
            let mut config = FlamegraphConfig::new().with_title(title);
            if let Some(width) = width {
                config = config.with_width(width);
            }

            let args = FlamegraphArgs {
                input,
                output,
                config,
            };

            flamegraph::validate_args(&args)?;
            execute_flamegraph(args)?;
        }

        Commands::Summary {
            input,
            top,
            json,
            output,
        } => {
            let args = SummaryArgs {
                input,
                top,
                json,
                output,
            };

            summary::validate_args(&args)?;
            execute_summary(args)?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}

/// Display version information
fn display_version() {
    println!("fgprof v{}", env!("CARGO_PKG_VERSION"));
    println!("Output formats: {}", Format::ALL.map(|f| f.as_str()).join(", "));
}
