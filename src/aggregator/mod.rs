//! The sampled-stack aggregate and operations over it.
//!
//! This module provides:
//! - The `Aggregate` type handed over by the sampler
//! - Deterministic key ordering for every encoder
//! - Summary metrics (totals, hot stacks)

use std::collections::HashMap;

pub mod metrics;
pub mod sorter;

/// Stack key to observed sample count, for one capture window
pub type Aggregate = HashMap<String, u64>;

// Re-export main types and functions
pub use metrics::{summarize, HotStack, ProfileSummary};
pub use sorter::{sorted_entries, sorted_keys};
