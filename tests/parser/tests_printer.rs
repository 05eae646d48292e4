use tck::parser::parse_system;

use crate::helpers::diagnostic_helpers::parse_clean;
use crate::helpers::source_fixtures::{SINGLE_EDGE, TRAIN_GATE};

#[test]
fn test_print_single_edge() {
    let system = parse_clean(SINGLE_EDGE);
    assert_eq!(
        system.to_string(),
        "system:S{}\nprocess:P{}\nlocation:P:l0{}\nevent:e{}\nedge:P:l0:l0:e{}\n"
    );
}

#[test]
fn test_print_every_kind() {
    let system = parse_clean(
        "system:S{k:v}\nclock:2:x\nint:1:-1:5:0:i{a:  b }\nprocess:P\nprocess:Q\nevent:a\n\
         location:P:l0{initial: : invariant:x<=1}\nlocation:P:l1\nedge:P:l1:l0:a\nsync:P@a:Q@a?\n",
    );
    let expected = "\
system:S{k:v}
clock:2:x{}
int:1:-1:5:0:i{a:b}
process:P{}
process:Q{}
event:a{}
location:P:l0{initial: : invariant:x<=1}
location:P:l1{}
edge:P:l1:l0:a{}
sync:P@a:Q@a?{}
";
    assert_eq!(system.to_string(), expected);
}

#[test]
fn test_print_parse_round_trip() {
    let first = parse_clean(TRAIN_GATE).to_string();
    let reparsed = parse_system(&first);
    assert!(reparsed.ok(), "printed form rejected:\n{}", reparsed.render());
    let second = reparsed.system.map(|s| s.to_string()).unwrap_or_default();
    assert_eq!(first, second);
}

#[test]
fn test_round_trip_keeps_store_contents() {
    let original = parse_clean(TRAIN_GATE);
    let reparsed = parse_clean(&original.to_string());
    let (a, b) = (original.store(), reparsed.store());
    assert_eq!(a.len(), b.len());
    assert_eq!(a.clocks().len(), b.clocks().len());
    for (x, y) in a.syncs().iter().zip(b.syncs()) {
        let strengths = |s: &tck::semantic::SyncDeclaration| {
            s.constraints.iter().map(|c| c.strength).collect::<Vec<_>>()
        };
        assert_eq!(strengths(x), strengths(y));
        assert_eq!(x.attributes.len(), y.attributes.len());
    }
    for (x, y) in a.edges().iter().zip(b.edges()) {
        assert_eq!((x.process, x.target, x.source, x.event), (y.process, y.target, y.source, y.event));
        assert_eq!(x.attributes.first("do"), y.attributes.first("do"));
    }
}
