//! Configuration and constants shared by the encoders and the CLI.

/// Nanoseconds in one second; the numerator of the sampling period
pub const NANOS_PER_SECOND: i64 = 1_000_000_000;

/// Default sampling frequency in hertz
pub const DEFAULT_SAMPLING_HZ: u32 = 99;

/// Sample value descriptors, in the order values appear in every sample
pub const SAMPLE_TYPES: &[(&str, &str)] = &[("samples", "count"), ("time", "nanoseconds")];

/// Period descriptor: samples are taken on a wall-clock timer
pub const PERIOD_TYPE: (&str, &str) = ("wallclock", "nanoseconds");

/// ID of the single synthetic mapping standing in for "this binary"
pub const MAPPING_ID: u64 = 1;

/// Default flamegraph title
pub const DEFAULT_FLAMEGRAPH_TITLE: &str = "Wall-clock Profile";

/// Default number of stacks listed by the summary command
pub const DEFAULT_TOP_STACKS: usize = 10;
