//! JSON summary output writer.

use super::file::{create_output, file_size};
use crate::aggregator::ProfileSummary;
use crate::utils::error::OutputError;
use log::info;
use std::io::Write;
use std::path::Path;

/// Write a summary to a JSON file (pretty printed)
///
/// **Public** - used by the summary command's `--output`
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
pub fn write_summary(
    summary: &ProfileSummary,
    output_path: impl AsRef<Path>,
) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing summary to: {}", output_path.display());

    let mut writer = create_output(output_path)?;
    serde_json::to_writer_pretty(&mut writer, summary)?;
    writer.flush()?;

    info!("Summary written successfully ({} bytes)", file_size(output_path));

    Ok(())
}

/// Summary as a pretty JSON string
pub fn summary_to_string(summary: &ProfileSummary) -> Result<String, OutputError> {
    Ok(serde_json::to_string_pretty(summary)?)
}
