//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur while parsing a stack key
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("malformed frame: {0:?}")]
    MalformedFrame(String),
}

/// Errors that can occur while reading folded stacks back into an aggregate
#[derive(Error, Debug)]
pub enum FoldedError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: missing sample count")]
    MissingCount { line: usize },

    #[error("line {line}: invalid sample count {value:?}")]
    InvalidCount { line: usize, value: String },
}

/// Errors returned by the format dispatcher
#[derive(Error, Debug)]
pub enum EncodeError {
    #[error("unknown format: {0:?}")]
    UnknownFormat(String),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur during flamegraph generation
#[derive(Error, Debug)]
pub enum FlamegraphError {
    #[error("Empty stack data")]
    EmptyStacks,

    #[error("Failed to generate flamegraph: {0}")]
    GenerationFailed(String),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
