//! Output format selection and the public encode entry points.

use crate::aggregator::Aggregate;
use crate::output::write_folded;
use crate::profile::build_profile;
use crate::utils::error::EncodeError;
use chrono::{DateTime, Utc};
use log::debug;
use std::fmt;
use std::io::Write;
use std::str::FromStr;

/// Supported output encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// `<stack> <count>` lines, as consumed by FlameGraph and inferno
    Folded,
    /// gzip-compressed `perftools.profiles.Profile`, as consumed by `pprof`
    Pprof,
}

impl Format {
    pub const ALL: [Format; 2] = [Format::Folded, Format::Pprof];

    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Folded => "folded",
            Format::Pprof => "pprof",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = EncodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "folded" => Ok(Format::Folded),
            "pprof" => Ok(Format::Pprof),
            other => Err(EncodeError::UnknownFormat(other.to_string())),
        }
    }
}

/// Encode an aggregate into `sink`
///
/// **Public** - main library entry point
///
/// The sink is neither flushed nor closed.
///
/// # Errors
/// * `EncodeError::Parse` - pprof only; a stack key is malformed, nothing written
/// * `EncodeError::Io` - the sink failed; folded lines already written remain
pub fn encode<W: Write>(
    sink: W,
    aggregate: &Aggregate,
    format: Format,
    hz: u32,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Result<(), EncodeError> {
    debug!("Encoding {} stacks as {}", aggregate.len(), format);

    match format {
        Format::Folded => write_folded(sink, aggregate)?,
        Format::Pprof => build_profile(aggregate, hz, start, end)?.write(sink)?,
    }

    Ok(())
}

/// Encode with the format given by name (`"folded"` or `"pprof"`)
///
/// # Errors
/// * `EncodeError::UnknownFormat` - any other selector; nothing is written
/// * everything `encode` returns
pub fn write_format<W: Write>(
    sink: W,
    aggregate: &Aggregate,
    selector: &str,
    hz: u32,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Result<(), EncodeError> {
    let format: Format = selector.parse()?;
    encode(sink, aggregate, format, hz, start, end)
}
