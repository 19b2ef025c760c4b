//! Output writers.
//!
//! This module handles writing data in various formats:
//! - Folded stacks (to any `Write` sink)
//! - SVG flamegraphs
//! - JSON summaries

pub mod file;
pub mod folded;
pub mod json;
pub mod svg;

// Re-export main functions
pub use file::{create_output, validate_path};
pub use folded::{folded_lines, write_folded};
pub use json::{summary_to_string, write_summary};
pub use svg::write_svg;
