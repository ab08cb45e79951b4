#![allow(missing_docs)]

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::cargo::cargo_bin_cmd;
use serde_json::Value;
use tempfile::TempDir;

fn setup_input(name: &str, contents: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join(format!("{name}.txt"));
    fs::write(&path, contents).expect("write input graph");
    (dir, path)
}

fn analyze_args(dir: &Path, input: &Path) -> Vec<String> {
    vec![
        "--config".into(),
        dir.join("missing-config.toml").display().to_string(),
        "--theme".into(),
        "plain".into(),
        "analyze".into(),
        input.display().to_string(),
        "--out-dir".into(),
        dir.join("out").display().to_string(),
    ]
}

fn stdout_of(args: &[String]) -> String {
    let output = cargo_bin_cmd!("linegraph")
        .args(args)
        .arg("--no-render")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    String::from_utf8(output).expect("utf8 stdout")
}

#[test]
fn adjoint_input_writes_reconstruction() {
    let (dir, input) = setup_input("loops", "2\n1: 1 2\n2: 1 2\n");
    let stdout = stdout_of(&analyze_args(dir.path(), &input));

    assert!(stdout.contains("The graph is an adjoint graph."), "{stdout}");
    assert!(stdout.contains("The graph is not a line graph (verified through structures)."));
    assert!(stdout.contains("Graph H is not a 1-graph (multiple edges exist)."));
    assert!(stdout.contains("hasThirdStructure: true"));
    assert!(stdout.contains("hasFirstStructure: true"));

    let out = dir.path().join("out");
    assert_eq!(
        fs::read_to_string(out.join("output.txt")).expect("output graph"),
        "2\n1: 1 1 2 2\n2: 1 1 2 2\n"
    );
    assert_eq!(
        fs::read_to_string(out.join("input_graph.dot")).expect("input dot"),
        "graph G {\n    1 -- 2;\n}\n"
    );
    assert!(out.join("output_graph.dot").exists());
    assert!(!out.join("input_graph.png").exists());
}

#[test]
fn non_adjoint_input_still_exits_zero() {
    let (dir, input) = setup_input("triangle", "3\n1: 2 3\n2: 1 3\n3: 1 2\n");
    let stdout = stdout_of(&analyze_args(dir.path(), &input));

    assert!(stdout.contains("The graph is not an adjoint graph."));
    assert!(stdout.contains("hasSecondStructure: true"));
    assert!(!dir.path().join("out").join("output.txt").exists());
}

#[test]
fn json_report_lists_verdicts_and_files() {
    let (dir, input) = setup_input("path", "4\n1: 2\n2: 1 3\n3: 2 4\n4: 3\n");
    let mut args = vec!["--format".to_string(), "json".to_string()];
    args.extend(analyze_args(dir.path(), &input));
    let json: Value = serde_json::from_str(&stdout_of(&args)).expect("valid json");

    assert_eq!(json["adjoint"], false);
    assert_eq!(json["linear"], true);
    assert_eq!(json["structures"]["first"], false);
    assert_eq!(json["num_vertices"], 4);
    assert!(json["reconstruction"].is_null());
    let artifacts = json["artifacts"].as_array().expect("artifacts");
    assert_eq!(artifacts.len(), 1);
    assert_eq!(artifacts[0]["kind"], "input_dot");
}

#[test]
fn renderer_failure_is_not_fatal() {
    let (dir, input) = setup_input("edge", "2\n1:\n2:\n");
    let mut args = vec!["--format".to_string(), "json".to_string()];
    args.extend(analyze_args(dir.path(), &input));
    args.extend([
        "--renderer".to_string(),
        "linegraph-renderer-that-does-not-exist".to_string(),
    ]);
    let assert = cargo_bin_cmd!("linegraph").args(&args).assert().success();
    let output = assert.get_output();
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("could not render"), "{stderr}");

    let json: Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(json["reconstruction"]["one_graph"], true);
    let images: Vec<&Value> = json["artifacts"]
        .as_array()
        .expect("artifacts")
        .iter()
        .filter(|artifact| artifact["kind"].as_str().unwrap_or("").ends_with("_image"))
        .collect();
    assert_eq!(images.len(), 2);
    assert!(images.iter().all(|image| image["rendered"] == false));
}

#[test]
fn invalid_input_fails_with_message() {
    let (dir, input) = setup_input("invalid", "3\n4: 1 2\n2: 1\n3: 1\n");
    let output = cargo_bin_cmd!("linegraph")
        .args(analyze_args(dir.path(), &input))
        .arg("--no-render")
        .assert()
        .failure()
        .get_output()
        .stderr
        .clone();
    let stderr = String::from_utf8_lossy(&output);
    assert!(stderr.contains("invalid vertex 4"), "{stderr}");
}

#[test]
fn image_format_override_must_be_an_extension() {
    let (dir, input) = setup_input("fmt", "2\n1: 1 2\n2: 1 2\n");
    let output = cargo_bin_cmd!("linegraph")
        .args(analyze_args(dir.path(), &input))
        .args(["--image-format", "../x"])
        .assert()
        .failure()
        .get_output()
        .stderr
        .clone();
    let stderr = String::from_utf8_lossy(&output);
    assert!(stderr.contains("image format '../x' is invalid"), "{stderr}");
    assert!(!dir.path().join("out").exists());
}

#[test]
fn config_file_disables_rendering() {
    let (dir, input) = setup_input("cfg", "2\n1: 1 2\n2: 1 2\n");
    let config = dir.path().join("cli.toml");
    let out = dir.path().join("configured");
    fs::write(
        &config,
        format!(
            "[render]\nenabled = false\n\n[output]\ndirectory = {:?}\n",
            out.display().to_string()
        ),
    )
    .expect("write config");

    cargo_bin_cmd!("linegraph")
        .arg("--config")
        .arg(&config)
        .args(["--theme", "plain", "analyze"])
        .arg(&input)
        .assert()
        .success();

    assert!(out.join("input_graph.dot").exists());
    assert!(out.join("output.txt").exists());
    assert!(!out.join("input_graph.png").exists());
}
