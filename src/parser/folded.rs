//! Read folded stacks back into an aggregate.
//!
//! Each non-blank line is `<stack key> <count>`. The count is taken from
//! after the LAST space, so keys that contain spaces still load as long as
//! the count is the final field.

use crate::aggregator::Aggregate;
use crate::utils::error::FoldedError;
use log::debug;
use std::io::BufRead;

/// Read folded-format lines into an aggregate
///
/// **Public** - the CLI uses this to load captured stacks
///
/// Blank lines are skipped. A key that appears more than once has its
/// counts summed.
///
/// # Errors
/// * `FoldedError::Io` - reader failure
/// * `FoldedError::MissingCount` - line without a space separator
/// * `FoldedError::InvalidCount` - count field is not a non-negative integer
pub fn read_folded(reader: impl BufRead) -> Result<Aggregate, FoldedError> {
    let mut aggregate = Aggregate::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }

        let (key, count) = parse_folded_line(line, index + 1)?;
        *aggregate.entry(key.to_string()).or_insert(0) += count;
    }

    debug!("Read {} unique stacks from folded input", aggregate.len());

    Ok(aggregate)
}

/// Split one folded line into its stack key and count
///
/// **Public** - `line_number` is only used for error reporting
pub fn parse_folded_line(line: &str, line_number: usize) -> Result<(&str, u64), FoldedError> {
    let (key, count) = line
        .rsplit_once(' ')
        .ok_or(FoldedError::MissingCount { line: line_number })?;

    let count = count.parse().map_err(|_| FoldedError::InvalidCount {
        line: line_number,
        value: count.to_string(),
    })?;

    Ok((key, count))
}
