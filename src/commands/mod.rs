//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod convert;
pub mod flamegraph;
pub mod summary;
pub mod utils;

// Re-export main command functions
pub use convert::{execute_convert, ConvertArgs};
pub use flamegraph::{execute_flamegraph, FlamegraphArgs};
pub use summary::{execute_summary, SummaryArgs};
pub use utils::{load_aggregate, parse_timestamp};
