//! Summary metrics over an aggregate.
//!
//! Hot stacks are the stack keys with the most samples; they are what a
//! reader looks at first before opening a flamegraph.

use super::sorter::sorted_entries;
use super::Aggregate;
use crate::parser::frame_count;
use log::debug;
use serde::Serialize;

/// One of the most-sampled stacks
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HotStack {
    /// Stack key (root first)
    pub stack: String,

    /// Samples observed for this stack
    pub samples: u64,

    /// Percentage of all samples in the aggregate
    pub percentage: f64,
}

/// Summary statistics for an aggregate
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProfileSummary {
    /// Sum of all counts
    pub total_samples: u64,

    /// Number of distinct stack keys
    pub unique_stacks: usize,

    /// Frame tokens across all keys; equals the function and location
    /// table sizes of the pprof encoding
    pub total_frames: usize,

    /// Deepest stack, in frames
    pub max_depth: usize,

    /// Most-sampled stacks, descending
    pub hot_stacks: Vec<HotStack>,
}

/// Calculate summary statistics
///
/// **Public** - main entry point for metrics calculation
///
/// # Arguments
/// * `aggregate` - Stack key to sample count mapping
/// * `top_n` - Number of hot stacks to include
pub fn summarize(aggregate: &Aggregate, top_n: usize) -> ProfileSummary {
    debug!("Summarizing {} stacks (top {})", aggregate.len(), top_n);

    if aggregate.is_empty() {
        return ProfileSummary::default();
    }

    // Sorted by key first so equal counts keep a stable order.
    let mut entries = sorted_entries(aggregate);

    let total_samples: u64 = entries.iter().map(|(_, count)| *count).sum();
    let depths: Vec<usize> = entries.iter().map(|(key, _)| frame_count(key)).collect();

    entries.sort_by(|a, b| b.1.cmp(&a.1));

    let hot_stacks = entries
        .iter()
        .take(top_n)
        .map(|(key, count)| create_hot_stack(key, *count, total_samples))
        .collect();

    ProfileSummary {
        total_samples,
        unique_stacks: aggregate.len(),
        total_frames: depths.iter().sum(),
        max_depth: depths.iter().copied().max().unwrap_or(0),
        hot_stacks,
    }
}

fn create_hot_stack(stack: &str, samples: u64, total_samples: u64) -> HotStack {
    let percentage = if total_samples > 0 {
        (samples as f64 / total_samples as f64) * 100.0
    } else {
        0.0
    };

    HotStack {
        stack: stack.to_string(),
        samples,
        percentage,
    }
}

impl ProfileSummary {
    /// Plain-text rendering for terminal output
    pub fn to_text(&self) -> String {
        let mut lines = vec![
            format!("Total samples:  {}", self.total_samples),
            format!("Unique stacks:  {}", self.unique_stacks),
            format!("Total frames:   {}", self.total_frames),
            format!("Max depth:      {}", self.max_depth),
        ];

        if !self.hot_stacks.is_empty() {
            lines.push(String::new());
            lines.push("Hot stacks:".to_string());
            for (i, hot) in self.hot_stacks.iter().enumerate() {
                lines.push(format!(
                    "  {:>2}. {:>8} ({:>5.1}%)  {}",
                    i + 1,
                    hot.samples,
                    hot.percentage,
                    leaf_of(&hot.stack)
                ));
            }
        }

        lines.join("\n")
    }
}

/// Innermost frame token of a stack key
fn leaf_of(stack: &str) -> &str {
    stack.rsplit(';').next().unwrap_or(stack)
}
