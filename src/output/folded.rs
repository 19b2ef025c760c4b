//! Folded stack output.
//!
//! One line per stack, `<stack key> <count>\n`, sorted by key. This is the
//! input format of Brendan Gregg's `flamegraph.pl` and of `inferno`.

use crate::aggregator::{sorted_keys, Aggregate};
use log::debug;
use std::io::{self, Write};

/// Write the aggregate as folded stacks
///
/// **Public** - folded encoder behind the format dispatcher
///
/// Keys are written verbatim. The first failed write aborts and is
/// returned; lines already written stay in the sink.
pub fn write_folded<W: Write>(mut sink: W, aggregate: &Aggregate) -> io::Result<()> {
    for key in sorted_keys(aggregate) {
        writeln!(sink, "{} {}", key, aggregate[key])?;
    }

    debug!("Wrote {} folded stacks", aggregate.len());

    Ok(())
}

/// Folded lines as owned strings (without trailing newlines), in sorted order
pub fn folded_lines(aggregate: &Aggregate) -> Vec<String> {
    sorted_keys(aggregate)
        .into_iter()
        .map(|key| format!("{} {}", key, aggregate[key]))
        .collect()
}
