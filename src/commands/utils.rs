use crate::aggregator::Aggregate;
use crate::parser::read_folded;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use log::debug;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

/// Path value meaning stdin (for inputs) or stdout (for outputs)
pub const STDIO_PATH: &str = "-";

pub fn is_stdio(path: &Path) -> bool {
    path.as_os_str() == STDIO_PATH
}

/// Load a folded-stack file (or stdin for `-`) into an aggregate
pub fn load_aggregate(input: &Path) -> Result<Aggregate> {
    let aggregate = if is_stdio(input) {
        debug!("Reading folded stacks from stdin");
        read_folded(io::stdin().lock())
    } else {
        debug!("Reading folded stacks from: {}", input.display());
        let file = File::open(input)
            .with_context(|| format!("Failed to open {}", input.display()))?;
        read_folded(BufReader::new(file))
    };

    aggregate.with_context(|| format!("Invalid folded input: {}", input.display()))
}

/// Parse an RFC 3339 timestamp such as `2024-01-01T00:00:00Z`
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>> {
    let parsed = DateTime::parse_from_rfc3339(value)
        .with_context(|| format!("Invalid RFC 3339 timestamp: {}", value))?;
    Ok(parsed.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_timestamp_normalizes_to_utc() {
        let ts = parse_timestamp("2024-01-01T02:00:00+02:00").unwrap();
        assert_eq!(ts.to_rfc3339(), "2024-01-01T00:00:00+00:00");
    }

    #[test]
    fn test_parse_timestamp_rejects_garbage() {
        assert!(parse_timestamp("yesterday").is_err());
    }

    #[test]
    fn test_load_aggregate_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "main:1:m.go 4").unwrap();

        let aggregate = load_aggregate(file.path()).unwrap();
        assert_eq!(aggregate["main:1:m.go"], 4);
    }

    #[test]
    fn test_load_aggregate_missing_file() {
        assert!(load_aggregate(Path::new("/definitely/not/here.folded")).is_err());
    }
}
