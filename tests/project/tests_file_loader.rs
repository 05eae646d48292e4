#![allow(clippy::unwrap_used)]

use std::fs;

use tck::parser::ParseOptions;
use tck::project::{LoadError, load_system};
use tempfile::TempDir;

use crate::helpers::source_fixtures::TRAIN_GATE;

#[test]
fn test_load_clean_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("train_gate.tck");
    fs::write(&path, TRAIN_GATE).unwrap();

    let parse = load_system(&path, &ParseOptions::default()).unwrap();
    assert!(parse.ok());
    assert_eq!(parse.system.unwrap().name(), "train_gate");
}

#[test]
fn test_load_rejects_other_extensions() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("train_gate.txt");
    fs::write(&path, TRAIN_GATE).unwrap();

    let err = load_system(&path, &ParseOptions::default()).unwrap_err();
    assert!(matches!(err, LoadError::UnsupportedExtension(_)));
    assert!(err.to_string().starts_with("unsupported file extension"));
}

#[test]
fn test_load_reports_with_file_name() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.tck");
    fs::write(&path, "system:S\nprocess:P\nlocation:Q:l\n").unwrap();

    let parse = load_system(&path, &ParseOptions::default()).unwrap();
    assert!(parse.system.is_none());
    let rendered = parse.render();
    assert!(rendered.starts_with(&path.display().to_string()));
    assert!(rendered.ends_with(":3.10 process Q is not declared"));
}
