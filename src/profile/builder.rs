//! Build a `Profile` from an aggregate.
//!
//! Every frame occurrence gets a fresh `Function` and `Location`, IDs
//! counting up from 1 across the whole pass. Identical frames in different
//! stacks are NOT interned; consumers see one record per occurrence.

use super::schema::{Function, Line, Location, Mapping, Profile, Sample, ValueType};
use crate::aggregator::{sorted_keys, Aggregate};
use crate::parser::parse_stack;
use crate::utils::config::{MAPPING_ID, NANOS_PER_SECOND, PERIOD_TYPE, SAMPLE_TYPES};
use crate::utils::error::ParseError;
use chrono::{DateTime, Utc};
use log::debug;

/// Sampling period in nanoseconds for a frequency in hertz
///
/// Truncating division; a frequency of 0 yields a period of 0.
pub fn sampling_period_nanos(hz: u32) -> i64 {
    NANOS_PER_SECOND.checked_div(i64::from(hz)).unwrap_or(0)
}

/// Function and location ID counters for one encode pass
#[derive(Debug)]
struct IdAllocator {
    next_function: u64,
    next_location: u64,
}

impl IdAllocator {
    fn new() -> Self {
        Self {
            next_function: 1,
            next_location: 1,
        }
    }

    fn function(&mut self) -> u64 {
        let id = self.next_function;
        self.next_function += 1;
        id
    }

    fn location(&mut self) -> u64 {
        let id = self.next_location;
        self.next_location += 1;
        id
    }
}

/// Incremental profile construction, one stack at a time
///
/// **Public** - `build_profile` covers the common case; use this directly to
/// feed stacks in a custom order
#[derive(Debug)]
pub struct ProfileBuilder {
    profile: Profile,
    ids: IdAllocator,
}

impl ProfileBuilder {
    /// Start a profile with header fields filled in
    pub fn new(hz: u32, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        let profile = Profile {
            period: sampling_period_nanos(hz),
            time_nanos: start.timestamp_nanos_opt().unwrap_or(0),
            duration_nanos: duration_nanos(start, end),
            sample_types: SAMPLE_TYPES
                .iter()
                .map(|(t, unit)| ValueType::new(*t, *unit))
                .collect(),
            period_type: ValueType::new(PERIOD_TYPE.0, PERIOD_TYPE.1),
            mappings: vec![Mapping {
                id: MAPPING_ID,
                has_functions: true,
                has_filenames: true,
                has_line_numbers: true,
            }],
            functions: Vec::new(),
            locations: Vec::new(),
            samples: Vec::new(),
        };

        Self {
            profile,
            ids: IdAllocator::new(),
        }
    }

    /// Append one stack and its sample count
    ///
    /// # Errors
    /// * `ParseError::MalformedFrame` - the key does not follow the stack
    ///   grammar. Tables may already hold records from earlier stacks; the
    ///   builder should be discarded.
    pub fn add_stack(&mut self, key: &str, count: u64) -> Result<(), ParseError> {
        let frames = parse_stack(key)?;
        let mut location_ids = Vec::with_capacity(frames.len());

        for frame in frames {
            let function_id = self.ids.function();
            let location_id = self.ids.location();

            self.profile.functions.push(Function {
                id: function_id,
                name: frame.function_name,
                file_name: frame.file_name,
            });
            self.profile.locations.push(Location {
                id: location_id,
                mapping_id: MAPPING_ID,
                lines: vec![Line {
                    function_id,
                    line: frame.line,
                }],
            });
            location_ids.push(location_id);
        }

        // Keys are root first; pprof wants the leaf at index 0.
        location_ids.reverse();

        // Counts beyond i64::MAX saturate, as does the time value; the
        // sample total then no longer equals the aggregate total.
        let count = i64::try_from(count).unwrap_or(i64::MAX);
        self.profile.samples.push(Sample {
            values: vec![count, self.profile.period.saturating_mul(count)],
            location_ids,
        });

        Ok(())
    }

    pub fn finish(self) -> Profile {
        self.profile
    }
}

/// Build a profile from every stack in the aggregate, in sorted key order
///
/// **Public** - main entry point for the pprof encoder
///
/// # Arguments
/// * `aggregate` - Stack key to sample count mapping
/// * `hz` - Sampling frequency the aggregate was captured at
/// * `start` / `end` - Capture window
///
/// # Errors
/// * `ParseError::MalformedFrame` - any key is malformed; no profile is returned
pub fn build_profile(
    aggregate: &Aggregate,
    hz: u32,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Result<Profile, ParseError> {
    let mut builder = ProfileBuilder::new(hz, start, end);

    for key in sorted_keys(aggregate) {
        builder.add_stack(key, aggregate[key])?;
    }

    let profile = builder.finish();
    debug!(
        "Built profile: {} samples, {} functions, {} locations",
        profile.samples.len(),
        profile.functions.len(),
        profile.locations.len()
    );

    Ok(profile)
}

fn duration_nanos(start: DateTime<Utc>, end: DateTime<Utc>) -> i64 {
    let delta = end.signed_duration_since(start);
    delta.num_nanoseconds().unwrap_or(if delta < chrono::Duration::zero() {
        i64::MIN
    } else {
        i64::MAX
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn window() -> (DateTime<Utc>, DateTime<Utc>) {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        (start, start + chrono::Duration::seconds(30))
    }

    fn aggregate(entries: &[(&str, u64)]) -> Aggregate {
        entries.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn test_sampling_period() {
        assert_eq!(sampling_period_nanos(100), 10_000_000);
        assert_eq!(sampling_period_nanos(99), 10_101_010);
        assert_eq!(sampling_period_nanos(0), 0);
    }

    #[test]
    fn test_header_fields() {
        let (start, end) = window();
        let profile = build_profile(&Aggregate::new(), 100, start, end).unwrap();

        assert_eq!(profile.period, 10_000_000);
        assert_eq!(profile.time_nanos, 1_704_067_200_000_000_000);
        assert_eq!(profile.duration_nanos, 30_000_000_000);
        assert_eq!(profile.period_type, ValueType::new("wallclock", "nanoseconds"));
        assert_eq!(
            profile.sample_types,
            vec![
                ValueType::new("samples", "count"),
                ValueType::new("time", "nanoseconds")
            ]
        );
        assert_eq!(profile.mappings.len(), 1);
        assert!(profile.samples.is_empty());
    }

    #[test]
    fn test_single_stack_leaf_first() {
        let (start, end) = window();
        let agg = aggregate(&[("main:1:main.go;foo:10:bar.go", 3)]);
        let profile = build_profile(&agg, 100, start, end).unwrap();

        assert_eq!(profile.functions.len(), 2);
        assert_eq!(profile.functions[0].name, "main");
        assert_eq!(profile.functions[1].name, "foo");
        assert_eq!(profile.functions[1].file_name, "bar.go");
        assert_eq!(profile.locations[1].lines[0].line, 10);

        let sample = &profile.samples[0];
        assert_eq!(sample.values, vec![3, 30_000_000]);
        assert_eq!(sample.location_ids, vec![2, 1]);

        let leaf = profile.location(sample.location_ids[0]).unwrap();
        assert_eq!(profile.function(leaf.lines[0].function_id).unwrap().name, "foo");
        assert_eq!(profile.total_samples(), 3);
    }

    #[test]
    fn test_ids_continue_across_stacks_without_dedup() {
        let (start, end) = window();
        let agg = aggregate(&[("a:1:x;b:2:y", 1), ("a:1:x;c:3:z", 1)]);
        let profile = build_profile(&agg, 100, start, end).unwrap();

        let ids: Vec<u64> = profile.functions.iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        // "a" occurs twice and gets two records
        assert_eq!(profile.functions[0].name, "a");
        assert_eq!(profile.functions[2].name, "a");
        assert_eq!(profile.samples[1].location_ids, vec![4, 3]);
    }

    #[test]
    fn test_malformed_key_aborts() {
        let (start, end) = window();
        let agg = aggregate(&[("main;foo:10:bar.go", 3)]);
        let err = build_profile(&agg, 100, start, end).unwrap_err();
        assert!(matches!(err, ParseError::MalformedFrame(ref t) if t == "main"));
    }

    #[test]
    fn test_builder_independent_counters() {
        let (start, end) = window();
        let mut first = ProfileBuilder::new(100, start, end);
        let mut second = ProfileBuilder::new(100, start, end);

        first.add_stack("a:1:x", 1).unwrap();
        first.add_stack("b:1:x", 1).unwrap();
        second.add_stack("c:1:x", 1).unwrap();

        assert_eq!(second.finish().functions[0].id, 1);
        assert_eq!(first.finish().functions[1].id, 2);
    }

    #[test]
    fn test_huge_count_saturates() {
        let (start, end) = window();
        let agg = aggregate(&[("a:1:x", u64::MAX)]);
        let profile = build_profile(&agg, 100, start, end).unwrap();

        assert_eq!(profile.samples[0].values, vec![i64::MAX, i64::MAX]);
    }

    #[test]
    fn test_negative_window() {
        let (start, end) = window();
        let profile = build_profile(&Aggregate::new(), 100, end, start).unwrap();
        assert_eq!(profile.duration_nanos, -30_000_000_000);
    }
}
