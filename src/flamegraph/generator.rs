//! SVG flamegraph generation using the inferno library.
//!
//! The aggregate is rendered through the same sorted folded lines the
//! folded encoder writes, so the SVG is as reproducible as the text.

use crate::aggregator::Aggregate;
use crate::output::folded_lines;
use crate::utils::config::DEFAULT_FLAMEGRAPH_TITLE;
use crate::utils::error::FlamegraphError;
use inferno::flamegraph::{self, Options};
use log::info;

/// Flamegraph configuration
#[derive(Debug, Clone)]
pub struct FlamegraphConfig {
    pub title: String,

    /// Image width in pixels; inferno's default when `None`
    pub width: Option<usize>,

    /// Label for sample counts in tooltips
    pub count_name: String,
}

impl Default for FlamegraphConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_FLAMEGRAPH_TITLE.to_string(),
            width: None,
            count_name: "samples".to_string(),
        }
    }
}

impl FlamegraphConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }
}

/// Generate an SVG flamegraph from an aggregate
///
/// **Public** - main entry point for flamegraph rendering
///
/// # Errors
/// * `FlamegraphError::EmptyStacks` - nothing to render
/// * `FlamegraphError::GenerationFailed` - inferno could not render the stacks
pub fn generate_flamegraph(
    aggregate: &Aggregate,
    config: Option<&FlamegraphConfig>,
) -> Result<Vec<u8>, FlamegraphError> {
    if aggregate.is_empty() {
        return Err(FlamegraphError::EmptyStacks);
    }

    let config = config.cloned().unwrap_or_default();
    info!("Generating flamegraph with {} stacks", aggregate.len());

    let mut options = Options::default();
    options.title = config.title;
    options.count_name = config.count_name;
    options.image_width = config.width;

    let lines = folded_lines(aggregate);
    let mut svg = Vec::new();
    flamegraph::from_lines(&mut options, lines.iter().map(String::as_str), &mut svg)
        .map_err(|e| FlamegraphError::GenerationFailed(e.to_string()))?;

    info!("Flamegraph generated successfully ({} bytes)", svg.len());
    Ok(svg)
}
