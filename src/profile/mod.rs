//! pprof profile construction and serialization.
//!
//! - `schema`: logical profile model
//! - `builder`: aggregate -> profile
//! - `proto`: protobuf wire messages
//! - `writer`: profile -> (gzip) protobuf bytes

pub mod builder;
pub mod proto;
pub mod schema;
pub mod writer;

// Re-export main types
pub use builder::{build_profile, sampling_period_nanos, ProfileBuilder};
pub use schema::{Function, Line, Location, Mapping, Profile, Sample, ValueType};
