mod common;

use std::fs;

use navigator_lib::{load_graph, Error, TravelConfig};
use tempfile::tempdir;

use common::fixture_path;

#[test]
fn loads_fixture_with_derived_times() {
    let travel = TravelConfig::new(100.0, 50.0).expect("valid config");
    let graph = load_graph(&fixture_path(), &travel).expect("fixture loads");
    assert_eq!(graph.len(), 8);
    assert_eq!(graph.edge_count(), 20);

    let edge = graph
        .edge_between(&"Great Hall".into(), &"Legon Hall".into())
        .expect("edge present");
    assert_eq!(edge.distance, 1.0);
    assert_eq!(edge.time, Some(2.0));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempdir().expect("temp dir");
    let err = load_graph(&dir.path().join("missing.csv"), &TravelConfig::default()).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn malformed_file_never_yields_a_graph() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("broken.csv");
    fs::write(&path, ",A,B,C\nA,0,1,2\nB,1,0,-3\nC,2,-3,0\n").expect("write csv");

    let err = load_graph(&path, &TravelConfig::default()).unwrap_err();
    match err {
        Error::InvalidInput { row, message } => {
            assert_eq!(row, 3);
            assert!(message.contains("non-negative"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn landmarks_differing_only_by_case_are_rejected() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("clash.csv");
    fs::write(&path, ",Gym,GYM,Hall\nGym,0,,1\nGYM,,0,2\nHall,1,2,0\n").expect("write csv");

    let err = load_graph(&path, &TravelConfig::default()).unwrap_err();
    match err {
        Error::InvalidInput { row, message } => {
            assert_eq!(row, 1);
            assert!(message.contains("duplicate column 'GYM'"), "{message}");
        }
        other => panic!("unexpected error: {other}"),
    }
}
