use fgprof::parser::{parse_stack, read_folded, FrameRecord};
use fgprof::utils::error::{FoldedError, ParseError};
use pretty_assertions::assert_eq;

#[test]
fn test_parse_stack_records() {
    let frames = parse_stack("main:12:main.go;handle:40:srv/handler.go").unwrap();

    assert_eq!(
        frames,
        vec![
            FrameRecord::new("main", 12, "main.go"),
            FrameRecord::new("handle", 40, "srv/handler.go"),
        ]
    );
}

#[test]
fn test_parse_stack_bare_name_is_malformed() {
    let err = parse_stack("main").unwrap_err();
    assert!(matches!(err, ParseError::MalformedFrame(ref t) if t == "main"));
    assert_eq!(err.to_string(), "malformed frame: \"main\"");
}

#[test]
fn test_parse_stack_bad_line_number_is_zero() {
    let frames = parse_stack("foo:abc:bar.go").unwrap();
    assert_eq!(frames, vec![FrameRecord::new("foo", 0, "bar.go")]);
}

#[test]
fn test_parse_stack_empty_fields() {
    // "::" has three empty fields: valid, with line 0
    let frames = parse_stack("::").unwrap();
    assert_eq!(frames, vec![FrameRecord::new("", 0, "")]);
}

#[test]
fn test_parse_stack_trailing_separator_is_malformed() {
    assert!(parse_stack("a:1:x;").is_err());
}

#[test]
fn test_read_folded_reports_line_number() {
    let input = "a:1:x 1\n\nb:1:x many\n";
    let err = read_folded(input.as_bytes()).unwrap_err();

    match err {
        FoldedError::InvalidCount { line, value } => {
            assert_eq!(line, 3);
            assert_eq!(value, "many");
        }
        other => panic!("unexpected error: {other}"),
    }
}
