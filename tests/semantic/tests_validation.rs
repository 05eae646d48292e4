use rstest::rstest;
use tck::parser::{ErrorCode, IntBoundsCheck, ParseOptions, parse_system, parse_system_with};

use crate::helpers::diagnostic_helpers::{assert_rejected, messages, parse_clean_with, rendered};

#[test]
fn test_duplicate_clock_single_error() {
    let parse = parse_system("system:S\nclock : 1 : x {}\nclock : 1 : x {}\n");
    assert!(parse.system.is_none());
    assert_eq!(parse.error_count(), 1);
    let diag = &parse.diagnostics[0];
    assert_eq!(diag.message, "multiple declarations of clock x");
    assert_eq!(diag.related.len(), 1);
    assert_eq!(diag.related[0].span.to_string(), "2.1-16");
}

#[rstest]
#[case::clock_then_int(
    "system:S\nclock : 1 : x {}\nint : 1 : 0 : 0 : 0 : x {}\n",
    "variable x already declared as a clock"
)]
#[case::int_then_clock(
    "system:S\nint:1:0:0:0:x\nclock:1:x\n",
    "variable x already declared as an int"
)]
#[case::duplicate_int("system:S\nint:1:0:0:0:x\nint:1:0:0:0:x\n", "multiple declarations of int variable x")]
#[case::duplicate_event("system:S\nevent:e\nevent:e\n", "multiple declarations of event e")]
#[case::duplicate_process("system:S\nprocess:P\nprocess:P\n", "multiple declarations of process P")]
#[case::duplicate_location(
    "system:S\nprocess:P\nlocation:P:l\nlocation:P:l\n",
    "multiple declarations of location l in process P"
)]
#[case::location_before_process("system:S\nlocation:P:l\nprocess:P\n", "process P is not declared")]
#[case::clock_size_zero("system:S\nclock:0:x\n", "clock x has size 0, size should be >= 1")]
#[case::int_size_zero("system:S\nint:0:0:1:0:i\n", "int variable i has size 0, size should be >= 1")]
fn test_single_semantic_error(#[case] source: &str, #[case] expected: &str) {
    let parse = parse_system(source);
    assert!(parse.system.is_none());
    assert_eq!(parse.error_count(), 1, "{}", parse.render());
    assert_eq!(parse.diagnostics[0].message, expected);
}

#[test]
fn test_same_name_in_different_namespaces() {
    let parse = parse_system("system:S\nclock:1:n\nevent:n\nprocess:n\nlocation:n:n\n");
    assert!(parse.ok(), "{}", parse.render());
}

#[test]
fn test_location_names_are_per_process() {
    let parse = parse_system("system:S\nprocess:P\nprocess:Q\nlocation:P:l0\nlocation:Q:l0\n");
    assert!(parse.ok());
}

#[test]
fn test_dangling_edge_target() {
    let source = "\
system:S
process:P
location:P:locA
event:ev
edge : P : locB : locA : ev {}
";
    assert_rejected(source, &["5.12-15 location locB is not declared in process P"]);
}

#[rstest]
#[case::process("edge:Q:a:b:e", "process Q is not declared")]
#[case::target("edge:P:x:b:e", "location x is not declared in process P")]
#[case::source("edge:P:a:x:e", "location x is not declared in process P")]
#[case::event("edge:P:a:b:x", "event x is not declared")]
#[case::first_failure_only("edge:P:x:y:z", "location x is not declared in process P")]
fn test_edge_reference_checks(#[case] edge: &str, #[case] expected: &str) {
    let source = format!("system:S\nprocess:P\nlocation:P:a\nlocation:P:b\nevent:e\n{edge}\n");
    assert_eq!(messages(&source), vec![expected]);
}

#[test]
fn test_edge_location_of_other_process() {
    let source = "system:S\nprocess:P\nprocess:Q\nlocation:P:a\nlocation:Q:b\nevent:e\nedge:P:a:b:e\n";
    assert_eq!(
        messages(source),
        vec!["location b is not declared in process P"]
    );
}

#[test]
fn test_sync_constraint_errors() {
    let source = "system:S\nprocess:P\nevent:a\nsync:X@a:P@y?\n";
    let parse = parse_system(source);
    assert_eq!(
        rendered(&parse),
        vec!["4.6 process X is not declared", "4.12 event y is not declared"]
    );
    assert_eq!(parse.diagnostics[0].code, ErrorCode::E0401);
    assert_eq!(parse.diagnostics[1].code, ErrorCode::E0403);
}

#[rstest]
#[case::clock_size("system:S\nclock:99999999999999999999:x\n", "value 99999999999999999999 out of range 0,4294967295")]
#[case::negative_size("system:S\nclock:-1:x\n", "value -1 out of range 0,4294967295")]
#[case::int_min("system:S\nint:1:-2147483649:0:0:i\n", "value -2147483649 out of range -2147483648,2147483647")]
#[case::int_initial("system:S\nint:1:0:5:2147483648:i\n", "value 2147483648 out of range -2147483648,2147483647")]
fn test_numeric_range(#[case] source: &str, #[case] expected: &str) {
    let parse = parse_system(source);
    assert!(parse.system.is_none());
    assert_eq!(parse.error_count(), 1);
    assert_eq!(parse.diagnostics[0].message, expected);
}

#[test]
fn test_numeric_error_does_not_hide_later_errors() {
    assert_eq!(
        messages("system:S\nclock:4294967296:x\nclock:1:x\n"),
        vec![
            "value 4294967296 out of range 0,4294967295",
            "multiple declarations of clock x"
        ]
    );
}

#[test]
fn test_int_bounds_warning() {
    let options = ParseOptions::new().with_int_bounds(IntBoundsCheck::Warn);
    let system = parse_clean_with("system:S\nint:1:0:5:7:i\n", &options);
    assert!(system.store().find_int("i").is_some());

    let parse = parse_system_with("system:S\nint:1:0:5:7:i\n", &options);
    assert_eq!(
        parse.render(),
        "2.11 initial value 7 of int variable i is outside [0,5]"
    );
    assert!(!parse.diagnostics[0].is_error());
}

#[test]
fn test_int_bounds_error() {
    let options = ParseOptions::new().with_int_bounds(IntBoundsCheck::Error);
    let parse = parse_system_with("system:S\nint:1:3:5:1:i\n", &options);
    assert!(parse.system.is_none());
    assert_eq!(parse.diagnostics[0].code, ErrorCode::E0601);
}

#[test]
fn test_int_bounds_in_range_is_silent() {
    let options = ParseOptions::new().with_int_bounds(IntBoundsCheck::Error);
    let parse = parse_system_with("system:S\nint:1:0:5:5:i\n", &options);
    assert!(parse.ok());
}
