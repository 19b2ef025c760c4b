//! Stack key grammar.
//!
//! A stack key is a root-first, semicolon-separated list of frame tokens:
//!
//! ```text
//! stackKey   := frameToken (";" frameToken)*
//! frameToken := functionName ":" line ":" fileName
//! ```
//!
//! Only the first two colons of a frame token are delimiters, so file names
//! such as `C:\src\main.go` survive intact.

use crate::utils::error::ParseError;
use serde::Serialize;

/// Separator between frame tokens in a stack key
pub const FRAME_SEPARATOR: char = ';';

/// Separator between the fields of a frame token
pub const FIELD_SEPARATOR: char = ':';

/// One parsed frame token
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrameRecord {
    pub function_name: String,

    /// Source line; 0 when the token's line field is not a base-10 integer
    pub line: i64,

    /// Source file; empty when the token has no third field
    pub file_name: String,
}

impl FrameRecord {
    pub fn new(function_name: impl Into<String>, line: i64, file_name: impl Into<String>) -> Self {
        Self {
            function_name: function_name.into(),
            line,
            file_name: file_name.into(),
        }
    }
}

/// Parse a stack key into frame records, root frame first
///
/// **Public** - used by the profile builder
///
/// # Errors
/// * `ParseError::MalformedFrame` - a frame token has no `:` at all.
///   An empty key is a single empty token and therefore malformed.
///
/// # Example
/// ```
/// use fgprof::parser::parse_stack;
///
/// let frames = parse_stack("main:1:main.go;work:abc:C:/src/work.go").unwrap();
/// assert_eq!(frames[1].line, 0);
/// assert_eq!(frames[1].file_name, "C:/src/work.go");
/// ```
pub fn parse_stack(key: &str) -> Result<Vec<FrameRecord>, ParseError> {
    key.split(FRAME_SEPARATOR).map(parse_frame).collect()
}

/// Parse a single frame token
///
/// **Public** - exposed for callers that walk keys themselves
pub fn parse_frame(token: &str) -> Result<FrameRecord, ParseError> {
    let mut fields = token.splitn(3, FIELD_SEPARATOR);

    let function_name = fields.next().unwrap_or_default();
    let Some(line) = fields.next() else {
        return Err(ParseError::MalformedFrame(token.to_string()));
    };
    let file_name = fields.next().unwrap_or_default();

    Ok(FrameRecord {
        function_name: function_name.to_string(),
        // Best effort: an unreadable line number must not sink the profile.
        line: line.parse().unwrap_or(0),
        file_name: file_name.to_string(),
    })
}

/// Number of frame tokens in a stack key, without parsing them
pub fn frame_count(key: &str) -> usize {
    key.split(FRAME_SEPARATOR).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_token() {
        let frame = parse_frame("foo:10:bar.go").unwrap();
        assert_eq!(frame, FrameRecord::new("foo", 10, "bar.go"));
    }

    #[test]
    fn test_file_name_keeps_extra_colons() {
        let frame = parse_frame("handler:42:C:\\work\\srv.go").unwrap();
        assert_eq!(frame.function_name, "handler");
        assert_eq!(frame.line, 42);
        assert_eq!(frame.file_name, "C:\\work\\srv.go");
    }

    #[test]
    fn test_missing_file_defaults_to_empty() {
        let frame = parse_frame("foo:7").unwrap();
        assert_eq!(frame.line, 7);
        assert_eq!(frame.file_name, "");
    }

    #[test]
    fn test_non_numeric_line_is_zero() {
        let frame = parse_frame("foo:abc:bar.go").unwrap();
        assert_eq!(frame.line, 0);
        assert_eq!(frame.file_name, "bar.go");
    }

    #[test]
    fn test_signed_line() {
        assert_eq!(parse_frame("f:-3:x.go").unwrap().line, -3);
        assert_eq!(parse_frame("f:+3:x.go").unwrap().line, 3);
    }

    #[test]
    fn test_bare_token_is_malformed() {
        let err = parse_frame("main").unwrap_err();
        assert!(matches!(err, ParseError::MalformedFrame(ref t) if t == "main"));
    }

    #[test]
    fn test_empty_key_is_malformed() {
        assert!(parse_stack("").is_err());
    }

    #[test]
    fn test_parse_stack_keeps_root_first_order() {
        let frames = parse_stack("main:1:main.go;foo:10:bar.go;baz:3:baz.go").unwrap();
        let names: Vec<&str> = frames.iter().map(|f| f.function_name.as_str()).collect();
        assert_eq!(names, vec!["main", "foo", "baz"]);
    }

    #[test]
    fn test_one_bad_token_fails_whole_stack() {
        let err = parse_stack("main:1:main.go;oops;foo:2:foo.go").unwrap_err();
        assert!(matches!(err, ParseError::MalformedFrame(ref t) if t == "oops"));
    }

    #[test]
    fn test_frame_count() {
        assert_eq!(frame_count("a:1:x;b:2:y"), 2);
        assert_eq!(frame_count(""), 1);
    }
}
