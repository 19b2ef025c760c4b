//! Serialize a `Profile` to pprof bytes.
//!
//! Strings are interned into the profile's string table (index 0 is the
//! empty string), the result is protobuf-encoded with `prost`, and `write`
//! wraps it in gzip the way `pprof` itself stores profiles.

use super::proto;
use super::schema::{Profile, ValueType};
use flate2::write::GzEncoder;
use flate2::Compression;
use log::debug;
use prost::Message;
use std::collections::HashMap;
use std::io::{self, Write};

/// Interned strings, in first-seen order
struct StringTable {
    entries: Vec<String>,
    index: HashMap<String, i64>,
}

impl StringTable {
    fn new() -> Self {
        let mut table = Self {
            entries: Vec::new(),
            index: HashMap::new(),
        };
        table.intern("");
        table
    }

    fn intern(&mut self, s: &str) -> i64 {
        if let Some(&idx) = self.index.get(s) {
            return idx;
        }
        let idx = self.entries.len() as i64;
        self.entries.push(s.to_string());
        self.index.insert(s.to_string(), idx);
        idx
    }

    fn value_type(&mut self, value_type: &ValueType) -> proto::ValueType {
        proto::ValueType {
            r#type: self.intern(&value_type.r#type),
            unit: self.intern(&value_type.unit),
        }
    }

    fn finish(self) -> Vec<String> {
        self.entries
    }
}

impl Profile {
    /// Lower to the wire message, building the string table
    pub fn to_proto(&self) -> proto::Profile {
        let mut strings = StringTable::new();

        let sample_type = self
            .sample_types
            .iter()
            .map(|vt| strings.value_type(vt))
            .collect();

        let sample = self
            .samples
            .iter()
            .map(|s| proto::Sample {
                location_id: s.location_ids.clone(),
                value: s.values.clone(),
            })
            .collect();

        let mapping = self
            .mappings
            .iter()
            .map(|m| proto::Mapping {
                id: m.id,
                has_functions: m.has_functions,
                has_filenames: m.has_filenames,
                has_line_numbers: m.has_line_numbers,
                ..Default::default()
            })
            .collect();

        let location = self
            .locations
            .iter()
            .map(|l| proto::Location {
                id: l.id,
                mapping_id: l.mapping_id,
                line: l
                    .lines
                    .iter()
                    .map(|line| proto::Line {
                        function_id: line.function_id,
                        line: line.line,
                    })
                    .collect(),
                ..Default::default()
            })
            .collect();

        let function = self
            .functions
            .iter()
            .map(|f| proto::Function {
                id: f.id,
                name: strings.intern(&f.name),
                filename: strings.intern(&f.file_name),
                ..Default::default()
            })
            .collect();

        let period_type = Some(strings.value_type(&self.period_type));

        proto::Profile {
            sample_type,
            sample,
            mapping,
            location,
            function,
            time_nanos: self.time_nanos,
            duration_nanos: self.duration_nanos,
            period_type,
            period: self.period,
            string_table: strings.finish(),
            ..Default::default()
        }
    }

    /// Write gzip-compressed protobuf bytes to `sink`
    ///
    /// The sink is not flushed or closed.
    pub fn write<W: Write>(&self, sink: W) -> io::Result<()> {
        let bytes = self.to_proto().encode_to_vec();
        debug!("Encoded profile: {} bytes before compression", bytes.len());

        let mut encoder = GzEncoder::new(sink, Compression::default());
        encoder.write_all(&bytes)?;
        encoder.finish()?;
        Ok(())
    }

    /// Write raw protobuf bytes to `sink`, without gzip framing
    pub fn write_uncompressed<W: Write>(&self, mut sink: W) -> io::Result<()> {
        sink.write_all(&self.to_proto().encode_to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::schema::{Function, Line, Location, Mapping, Sample};

    fn tiny_profile() -> Profile {
        Profile {
            period: 10,
            time_nanos: 5,
            duration_nanos: 50,
            sample_types: vec![ValueType::new("samples", "count")],
            period_type: ValueType::new("wallclock", "nanoseconds"),
            mappings: vec![Mapping {
                id: 1,
                has_functions: true,
                has_filenames: true,
                has_line_numbers: true,
            }],
            functions: vec![
                Function { id: 1, name: "main".into(), file_name: "m.go".into() },
                Function { id: 2, name: "main".into(), file_name: "m.go".into() },
            ],
            locations: vec![
                Location { id: 1, mapping_id: 1, lines: vec![Line { function_id: 1, line: 3 }] },
                Location { id: 2, mapping_id: 1, lines: vec![Line { function_id: 2, line: 4 }] },
            ],
            samples: vec![Sample { values: vec![2], location_ids: vec![2, 1] }],
        }
    }

    #[test]
    fn test_string_table_starts_empty_and_interns() {
        let mut table = StringTable::new();
        assert_eq!(table.intern(""), 0);
        assert_eq!(table.intern("a"), 1);
        assert_eq!(table.intern("b"), 2);
        assert_eq!(table.intern("a"), 1);
        assert_eq!(table.finish(), vec!["", "a", "b"]);
    }

    #[test]
    fn test_to_proto_resolves_strings() {
        let message = tiny_profile().to_proto();
        let name = |idx: i64| message.string_table[idx as usize].as_str();

        assert_eq!(message.string_table[0], "");
        assert_eq!(name(message.function[0].name), "main");
        assert_eq!(name(message.function[1].filename), "m.go");
        assert_eq!(message.function.len(), 2);
        assert_eq!(message.location[1].mapping_id, 1);
        assert_eq!(message.sample[0].location_id, vec![2, 1]);

        let period_type = message.period_type.clone().unwrap();
        assert_eq!(name(period_type.r#type), "wallclock");
        assert_eq!(message.period, 10);
    }

    #[test]
    fn test_uncompressed_decodes() {
        let profile = tiny_profile();
        let mut buf = Vec::new();
        profile.write_uncompressed(&mut buf).unwrap();

        let decoded = proto::Profile::decode(buf.as_slice()).unwrap();
        assert_eq!(decoded, profile.to_proto());
    }

    #[test]
    fn test_write_is_gzip() {
        let mut buf = Vec::new();
        tiny_profile().write(&mut buf).unwrap();
        assert_eq!(&buf[..2], &[0x1f, 0x8b]);
    }
}
