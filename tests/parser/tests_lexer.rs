use tck::parser::{TokenKind, tokenize};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source).into_iter().map(|t| t.kind).collect()
}

#[test]
fn test_declaration_tokens() {
    use TokenKind::*;
    assert_eq!(
        kinds("sync:P@a?:Q@b\n"),
        vec![SYNC_KW, COLON, IDENT, AT, IDENT, QUESTION, COLON, IDENT, AT, IDENT, EOL]
    );
}

#[test]
fn test_attribute_values_are_raw_text() {
    let tokens = tokenize("edge:P:a:b:e{provided:x>=1 && y<2 : do:x=0}");
    let texts: Vec<_> = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::TEXT)
        .map(|t| t.text)
        .collect();
    assert_eq!(texts, vec!["x>=1 && y<2 ", "x=0"]);
}

#[test]
fn test_state_resets_at_end_of_line() {
    use TokenKind::*;
    // the unterminated list does not leak into the next line
    assert_eq!(
        kinds("event:e{k:v\nclock:1:x"),
        vec![
            EVENT_KW, COLON, IDENT, L_BRACE, IDENT, COLON, TEXT, EOL, CLOCK_KW, COLON, INTEGER,
            COLON, IDENT
        ]
    );
}

#[test]
fn test_keywords_outside_attributes() {
    use TokenKind::*;
    assert_eq!(kinds("process:clock"), vec![PROCESS_KW, COLON, CLOCK_KW]);
}

#[test]
fn test_token_ranges() {
    let tokens = tokenize("clock:12:x");
    let integer = tokens[2];
    assert_eq!(integer.kind, TokenKind::INTEGER);
    assert_eq!(u32::from(integer.range.start()), 6);
    assert_eq!(u32::from(integer.range.end()), 8);
}

#[test]
fn test_invalid_character() {
    let tokens = tokenize("event:$");
    assert_eq!(tokens[2].kind, TokenKind::ERROR);
    assert_eq!(tokens[2].text, "$");
}
