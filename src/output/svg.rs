//! SVG flamegraph output writer.

use super::file::create_output;
use crate::utils::error::OutputError;
use log::info;
use std::io::Write;
use std::path::Path;

/// Write SVG content to a file
///
/// **Public** - main entry point for SVG output
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::InvalidPath` - Path is invalid
///
/// # Example
/// ```
/// use fgprof::flamegraph::generate_flamegraph;
/// use fgprof::output::write_svg;
/// use fgprof::Aggregate;
///
/// let mut aggregate = Aggregate::new();
/// aggregate.insert("main:1:main.go;work:9:work.go".to_string(), 5);
///
/// let svg: Vec<u8> = generate_flamegraph(&aggregate, None)?;
/// let dir = tempfile::tempdir()?;
/// write_svg(&svg, dir.path().join("flamegraph.svg"))?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn write_svg(svg_content: &[u8], output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing SVG to: {}", output_path.display());

    let mut writer = create_output(output_path)?;
    writer.write_all(svg_content)?;
    writer.flush()?;

    info!(
        "SVG written successfully ({} bytes, {:.2} KB)",
        svg_content.len(),
        svg_content.len() as f64 / 1024.0
    );

    Ok(())
}
