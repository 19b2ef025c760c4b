//! fgprof
//!
//! Encoders for wall-clock stack samples. A sampler hands over an
//! aggregate (stack key -> sample count) for one capture window; this crate
//! writes it as folded stacks or as a pprof profile.
//!
//! ## Getting Started
//!
//! ```
//! use chrono::Utc;
//! use fgprof::{encode, Aggregate, Format};
//!
//! let mut aggregate = Aggregate::new();
//! aggregate.insert("main:12:main.go;handle:40:server.go".to_string(), 7);
//!
//! let now = Utc::now();
//! let mut out = Vec::new();
//! encode(&mut out, &aggregate, Format::Folded, 99, now, now).unwrap();
//! assert_eq!(out, b"main:12:main.go;handle:40:server.go 7\n");
//! ```
//!
//! The `fgprof` binary wraps the same encoders for folded files on disk.

pub mod aggregator;
pub mod commands;
pub mod flamegraph;
pub mod format;
pub mod output;
pub mod parser;
pub mod profile;
pub mod utils;

pub use aggregator::Aggregate;
pub use format::{encode, write_format, Format};
pub use utils::error::EncodeError;
