#![allow(missing_docs)]

use std::fs;
use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use serde_json::Value;
use tempfile::TempDir;

fn setup_input(contents: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("input.txt");
    fs::write(&path, contents).expect("write input graph");
    (dir, path)
}

#[test]
fn transform_writes_doubled_arcs() {
    let (dir, input) = setup_input("2\n1: 2\n2: 1\n");
    let into = dir.path().join("original.txt");
    let output = cargo_bin_cmd!("linegraph")
        .args(["--format", "json", "transform"])
        .arg(&input)
        .arg("--into")
        .arg(&into)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    assert_eq!(
        fs::read_to_string(&into).expect("transformed graph"),
        "2\n1: 2 2\n2: 1 1\n"
    );
    let json: Value = serde_json::from_slice(&output).expect("valid json");
    assert_eq!(json["one_graph"], false);
    assert_eq!(json["num_arcs"], 4);
}

#[test]
fn transform_requires_destination() {
    let (_dir, input) = setup_input("1\n1:\n");
    cargo_bin_cmd!("linegraph")
        .arg("transform")
        .arg(&input)
        .assert()
        .failure();
}

#[test]
fn dot_prints_to_stdout() {
    let (_dir, input) = setup_input("3\n1: 2 3\n2: 1\n3: 1\n");
    let output = cargo_bin_cmd!("linegraph")
        .arg("dot")
        .arg(&input)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    assert_eq!(
        String::from_utf8(output).expect("utf8"),
        "graph G {\n    1 -- 2;\n    1 -- 3;\n}\n"
    );
}

#[test]
fn dot_writes_file() {
    let (dir, input) = setup_input("2\n1: 2\n");
    let out = dir.path().join("g.dot");
    cargo_bin_cmd!("linegraph")
        .args(["--theme", "plain", "dot"])
        .arg(&input)
        .arg("--out")
        .arg(&out)
        .assert()
        .success();
    assert_eq!(
        fs::read_to_string(&out).expect("dot file"),
        "graph G {\n    1 -- 2;\n}\n"
    );
}

#[test]
fn missing_input_reports_error() {
    let dir = TempDir::new().expect("tempdir");
    let output = cargo_bin_cmd!("linegraph")
        .arg("dot")
        .arg(dir.path().join("absent.txt"))
        .assert()
        .failure()
        .get_output()
        .stderr
        .clone();
    assert!(String::from_utf8_lossy(&output).contains("could not open"));
}
