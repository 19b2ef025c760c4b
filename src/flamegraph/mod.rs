//! Flamegraph generation using the inferno library.
//!
//! This module converts an aggregate into an interactive SVG flamegraph.

pub mod generator;

// Re-export main types
pub use generator::{generate_flamegraph, FlamegraphConfig};
