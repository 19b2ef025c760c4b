//! Logical profile model.
//!
//! These types mirror the pprof `Profile` message but keep strings inline
//! and reference other records by ID. `writer` lowers them to the wire
//! messages in `proto`, building the string table on the way.

use serde::Serialize;

/// A `(type, unit)` descriptor such as `("samples", "count")`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValueType {
    pub r#type: String,
    pub unit: String,
}

impl ValueType {
    pub fn new(r#type: impl Into<String>, unit: impl Into<String>) -> Self {
        Self {
            r#type: r#type.into(),
            unit: unit.into(),
        }
    }
}

/// The binary image locations are attributed to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mapping {
    pub id: u64,
    pub has_functions: bool,
    pub has_filenames: bool,
    pub has_line_numbers: bool,
}

/// One function record; emitted once per frame occurrence
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Function {
    pub id: u64,
    pub name: String,
    pub file_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Line {
    pub function_id: u64,
    pub line: i64,
}

/// One call-site record; 1:1 with `Function`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Location {
    pub id: u64,
    pub mapping_id: u64,
    pub lines: Vec<Line>,
}

/// One aggregated stack
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sample {
    /// `[count, count * period]`, matching `Profile::sample_types`
    pub values: Vec<i64>,

    /// Location IDs, leaf first
    pub location_ids: Vec<u64>,
}

/// A complete profile ready for serialization
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Profile {
    /// Nanoseconds between samples
    pub period: i64,

    /// Capture start, nanoseconds since the Unix epoch
    pub time_nanos: i64,

    /// Capture length in nanoseconds
    pub duration_nanos: i64,

    pub sample_types: Vec<ValueType>,
    pub period_type: ValueType,
    pub mappings: Vec<Mapping>,
    pub functions: Vec<Function>,
    pub locations: Vec<Location>,
    pub samples: Vec<Sample>,
}

impl Profile {
    /// Sum of the sample counts (first value of every sample)
    pub fn total_samples(&self) -> i64 {
        self.samples
            .iter()
            .filter_map(|s| s.values.first())
            .sum()
    }

    pub fn function(&self, id: u64) -> Option<&Function> {
        self.functions.iter().find(|f| f.id == id)
    }

    pub fn location(&self, id: u64) -> Option<&Location> {
        self.locations.iter().find(|l| l.id == id)
    }
}
