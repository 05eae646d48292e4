#![allow(clippy::unwrap_used)]

use rstest::rstest;
use tck::parser::{ErrorCode, ParseOptions, parse_system, parse_system_with};

use crate::helpers::diagnostic_helpers::{assert_rejected, codes, messages, rendered};

#[test]
fn test_every_broken_line_is_reported() {
    let source = "\
system:S
clock:x:1
event:e
int:1:0
process:P{a:b
location:P:l0
";
    let parse = parse_system(source);
    assert!(parse.system.is_none());
    assert!(!parse.fatal);
    assert_eq!(
        rendered(&parse),
        vec![
            "2.7 syntax error, unexpected identifier, expecting integer value",
            "4.8 syntax error, unexpected end of line, expecting \":\"",
            "5.14 syntax error, unexpected end of line, expecting \":\" or \"}\"",
            "6.10 process P is not declared",
        ]
    );
}

#[test]
fn test_semantic_errors_after_syntax_errors_are_reported() {
    assert_rejected(
        "system:S\nclock:1:x:\nevent:e\nevent:e\n",
        &[
            "2.10 syntax error, unexpected \":\", expecting \"{\" or end of line or end of file",
            "4.7 multiple declarations of event e",
        ],
    );
}

#[rstest]
#[case::clock_size(
    "system:S\nclock:99999999999999999999:x y\n",
    &[
        "2.7-26 value 99999999999999999999 out of range 0,4294967295",
        "2.30 syntax error, unexpected identifier, expecting \"{\" or end of line or end of file",
    ]
)]
#[case::int_max(
    "system:S\nint:1:0:99999999999:0:i :\n",
    &[
        "2.9-19 value 99999999999 out of range -2147483648,2147483647",
        "2.25 syntax error, unexpected \":\", expecting \"{\" or end of line or end of file",
    ]
)]
fn test_numeric_errors_before_syntax_error(#[case] source: &str, #[case] expected: &[&str]) {
    assert_rejected(source, expected);
}

#[test]
fn test_end_of_line_error_stays_on_its_line() {
    let parse = parse_system("system:S\nclock:1\nevent:e\n");
    let span = parse.diagnostics[0].span;
    assert_eq!(span.start, span.end);
    assert_eq!(span.to_string(), "2.8");
}

#[test]
fn test_recovery_skips_rest_of_line_only() {
    // the garbage after the error must not swallow the next declaration
    let parse = parse_system("system:S\nclock:1:x y z { } : @\nevent:e\nevent:e\n");
    assert_eq!(parse.error_count(), 2);
    assert_eq!(
        parse.diagnostics[1].message,
        "multiple declarations of event e"
    );
}

#[rstest]
#[case::missing_header("clock:1:x\n")]
#[case::bad_header_name("system:1\nclock:1:x\n")]
#[case::header_garbage("system:S extra\nclock:1:x\n")]
#[case::empty_input("")]
#[case::only_comments("# nothing\n\n")]
fn test_header_errors_are_fatal(#[case] source: &str) {
    let parse = parse_system(source);
    assert!(parse.fatal);
    assert!(parse.system.is_none());
    // nothing after the header is examined
    assert_eq!(parse.diagnostics.len(), 1);
}

#[test]
fn test_second_system_declaration_is_a_syntax_error() {
    let parse = parse_system("system:S\nsystem:T\nevent:e\n");
    assert!(!parse.fatal);
    assert_eq!(parse.error_count(), 1);
    assert_eq!(parse.diagnostics[0].code, ErrorCode::E0201);
    assert!(parse.diagnostics[0].message.starts_with("syntax error, unexpected \"system\""));
}

#[test]
fn test_error_codes() {
    assert_eq!(
        codes("system:S\nclock:1:x\nclock:1:x\nclock:9999999999:y\nedge:P:a:b:e\nevent:\n"),
        vec![
            ErrorCode::E0301,
            ErrorCode::E0502,
            ErrorCode::E0401,
            ErrorCode::E0201,
        ]
    );
}

#[test]
fn test_unexpected_end_of_file_code() {
    assert_eq!(codes("system:S\nedge:P:a"), vec![ErrorCode::E0202]);
}

#[test]
fn test_max_errors_aborts() {
    let source = "system:S\nevent:e\nevent:e\nevent:e\nevent:e\nevent:e\n";
    let options = ParseOptions::new().with_max_errors(1);
    let parse = parse_system_with(source, &options);
    assert!(parse.fatal);
    assert!(parse.system.is_none());
    let last = parse.diagnostics.last().unwrap();
    assert_eq!(last.code, ErrorCode::E0901);
    // two duplicates then the abort
    assert_eq!(parse.diagnostics.len(), 3);
}

#[test]
fn test_max_errors_not_reached() {
    let options = ParseOptions::new().with_max_errors(5);
    let parse = parse_system_with("system:S\nevent:e\nevent:e\n", &options);
    assert!(!parse.fatal);
    assert_eq!(parse.error_count(), 1);
}

#[test]
fn test_sync_with_dropped_constraint_still_reports() {
    assert_eq!(
        messages("system:S\nprocess:P\nevent:a\nsync:P@a:Q@a:P@b?\n"),
        vec!["process Q is not declared", "event b is not declared"]
    );
}

#[test]
fn test_render_is_one_line_per_diagnostic() {
    let options = ParseOptions::new().with_source_name("a.tck");
    let parse = parse_system_with("system:S\nevent:e\nevent:e\nprocess:P\nprocess:P\n", &options);
    assert_eq!(
        parse.render(),
        "a.tck:3.7 multiple declarations of event e\na.tck:5.9 multiple declarations of process P"
    );
}
