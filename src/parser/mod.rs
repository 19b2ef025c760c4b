//! Stack key parsing and folded input reading.
//!
//! This module handles:
//! - Splitting stack keys into structured frame records
//! - Loading folded-stack text into an aggregate

pub mod folded;
pub mod stack_key;

// Re-export main types
pub use folded::{parse_folded_line, read_folded};
pub use stack_key::{frame_count, parse_frame, parse_stack, FrameRecord};
