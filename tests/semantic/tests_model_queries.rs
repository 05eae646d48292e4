#![allow(clippy::unwrap_used)]

use tck::semantic::{DeclarationId, DeclarationKind, DeclarationRef, Namespace, VariableId};

use crate::helpers::diagnostic_helpers::parse_clean;
use crate::helpers::source_fixtures::TRAIN_GATE;

#[test]
fn test_lookup_by_namespace() {
    let system = parse_clean(TRAIN_GATE);
    let store = system.store();

    assert!(matches!(
        store.lookup(Namespace::Variable, "x"),
        Some(DeclarationId::Clock(_))
    ));
    assert!(matches!(
        store.lookup(Namespace::Variable, "count"),
        Some(DeclarationId::Int(_))
    ));
    assert!(matches!(
        store.lookup(Namespace::Event, "tau"),
        Some(DeclarationId::Event(_))
    ));
    assert_eq!(store.lookup(Namespace::Event, "x"), None);

    let gate = store.find_process_id("Gate").unwrap();
    let train = store.find_process_id("Train").unwrap();
    assert!(store.lookup(Namespace::Location(gate), "up").is_some());
    assert!(store.lookup(Namespace::Location(train), "up").is_none());
}

#[test]
fn test_variable_ids() {
    let system = parse_clean(TRAIN_GATE);
    let store = system.store();
    assert!(matches!(store.find_variable_id("y"), Some(VariableId::Clock(_))));
    assert!(store.find_clock("count").is_none());
    assert_eq!(store.find_int("count").unwrap().max, 4);
}

#[test]
fn test_declarations_follow_source_order() {
    let system = parse_clean("system:S\nevent:b\nclock:1:x\nprocess:P\nevent:a\n");
    let names: Vec<_> = system
        .store()
        .declarations()
        .map(|d| (d.kind(), d.name().unwrap()))
        .collect();
    assert_eq!(
        names,
        vec![
            (DeclarationKind::Event, "b"),
            (DeclarationKind::Clock, "x"),
            (DeclarationKind::Process, "P"),
            (DeclarationKind::Event, "a"),
        ]
    );
    let events: Vec<_> = system.store().events().map(|e| e.name.as_str()).collect();
    assert_eq!(events, vec!["b", "a"]);
}

#[test]
fn test_get_by_declaration_id() {
    let system = parse_clean(TRAIN_GATE);
    let store = system.store();
    let id = store.lookup(Namespace::Process, "Gate").unwrap();
    match store.get(id).unwrap() {
        DeclarationRef::Process(process) => assert_eq!(process.name, "Gate"),
        other => panic!("unexpected declaration {other:?}"),
    }
}

#[test]
fn test_locations_of_process() {
    let system = parse_clean(TRAIN_GATE);
    let store = system.store();
    let train = store.find_process_id("Train").unwrap();
    let names: Vec<_> = store.locations_of(train).map(|l| l.name.as_str()).collect();
    assert_eq!(names, vec!["far", "near"]);
}

#[test]
fn test_declaration_spans() {
    let system = parse_clean("system:S\n\nclock:1:x{a:b}\n");
    let clock = system.store().find_clock("x").unwrap();
    assert_eq!(clock.span.to_string(), "3.1-14");
}
