//! Diagnostic assertion helpers.

use tck::parser::{Diagnostic, ErrorCode, Parse, ParseOptions, parse_system, parse_system_with};
use tck::semantic::SystemDeclaration;

/// Rendered diagnostics (`span message`) in report order.
pub fn rendered(parse: &Parse) -> Vec<String> {
    parse.diagnostics.iter().map(Diagnostic::to_string).collect()
}

/// Messages only, without spans.
pub fn messages(source: &str) -> Vec<String> {
    parse_system(source)
        .diagnostics
        .into_iter()
        .map(|d| d.message)
        .collect()
}

pub fn codes(source: &str) -> Vec<ErrorCode> {
    parse_system(source)
        .diagnostics
        .iter()
        .map(|d| d.code)
        .collect()
}

/// Parse and assert a clean result.
pub fn parse_clean(source: &str) -> SystemDeclaration {
    parse_clean_with(source, &ParseOptions::default())
}

pub fn parse_clean_with(source: &str, options: &ParseOptions) -> SystemDeclaration {
    let parse = parse_system_with(source, options);
    assert!(
        parse.errors().next().is_none(),
        "Expected no errors, got:\n{}",
        parse.render()
    );
    match parse.system {
        Some(system) => system,
        None => panic!("Expected a model for:\n{source}"),
    }
}

/// Assert the parse failed with exactly the given rendered diagnostics.
pub fn assert_rejected(source: &str, expected: &[&str]) {
    let parse = parse_system(source);
    assert!(parse.system.is_none(), "Expected no model for:\n{source}");
    assert_eq!(rendered(&parse), expected);
}
