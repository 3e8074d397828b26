use assert_cmd::prelude::*;
use predicates::prelude::*;
use serde::Deserialize;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

#[derive(Deserialize)]
struct VertexOut {
    position: String,
    region: usize,
}

#[derive(Deserialize)]
struct RegionsOut {
    region_count: usize,
    vertices: Vec<VertexOut>,
}

fn run_regions(case: &str) -> RegionsOut {
    let output = Command::cargo_bin("regions")
        .expect("binary exists")
        .args(["--case", case])
        .output()
        .expect("run regions");
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    serde_json::from_slice(&output.stdout).expect("regions prints JSON")
}

#[test]
fn regions_cli_reports_fixture_partition() {
    let out = run_regions("data/case_regions.json");
    assert_eq!(out.region_count, 3);
    let got: Vec<(String, usize)> = out.vertices.into_iter().map(|v| (v.position, v.region)).collect();
    assert_eq!(
        got,
        vec![
            ("[0][0][0]".to_string(), 0),
            ("[0][0][2]".to_string(), 1),
            ("[0][1][1]".to_string(), 2),
            ("[1][0][0]".to_string(), 0),
            ("[1][0][2]".to_string(), 1),
            ("[1][1][1]".to_string(), 1),
        ]
    );
}

#[test]
fn regions_cli_handles_missing_model_graph() {
    let dir = tempdir().expect("tempdir");
    let case = dir.path().join("case.json");
    fs::write(&case, r#"{"simulator": {}, "model_graph": null}"#).expect("write case");
    let out = run_regions(case.to_str().expect("utf-8 path"));
    assert_eq!(out.region_count, 0);
    assert!(out.vertices.is_empty());
}

#[test]
fn regions_cli_fails_on_missing_file() {
    Command::cargo_bin("regions")
        .expect("binary exists")
        .args(["--case", "data/nope.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Case load error"));
}

#[test]
fn rand_stream_prints_pinned_words() {
    Command::cargo_bin("rand-stream")
        .expect("binary exists")
        .args(["--seed", "1.0", "--count", "2", "--format", "hex"])
        .assert()
        .success()
        .stdout("f6ab9004f0695786\nd72dcdc531a09da2\n");
}

#[test]
fn rand_stream_doubles_and_state() {
    Command::cargo_bin("rand-stream")
        .expect("binary exists")
        .args(["--seed", "1", "--count", "1", "--format", "f64", "--show-state"])
        .assert()
        .success()
        .stdout(predicate::str::contains("s0 88d7c35bbbf3eded"))
        .stdout(predicate::str::contains("0.9635553371485106"));
}

#[test]
fn rand_stream_integer_seed() {
    Command::cargo_bin("rand-stream")
        .expect("binary exists")
        .args(["--seed", "42", "--integer-seed", "--count", "3"])
        .assert()
        .success()
        .stdout("7631449856891427754\n4306334408478191133\n4482733528210176216\n");
}

#[test]
fn rand_stream_rejects_bad_seed() {
    Command::cargo_bin("rand-stream")
        .expect("binary exists")
        .args(["--seed", "banana"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid seed"));
}

#[test]
fn unknown_log_level_is_a_usage_error() {
    let runs: [(&str, &[&str]); 2] = [
        ("regions", &["--case", "data/case_regions.json", "--log-level", "verbose"]),
        ("rand-stream", &["--seed", "1.0", "--log-level", "verbose"]),
    ];
    for (bin, args) in runs {
        Command::cargo_bin(bin)
            .expect("binary exists")
            .args(args)
            .assert()
            .failure()
            .code(2)
            .stderr(predicate::str::contains("--log-level"));
    }
}

#[test]
fn known_log_level_is_accepted() {
    Command::cargo_bin("regions")
        .expect("binary exists")
        .args(["--case", "data/case_regions.json", "--log-level", "debug"])
        .assert()
        .success();
}
