//! E2E tests for the `netcent` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const VALID: &str = "source\ttype\ttarget\tweight\nA\tknows\tB\t1\nB\tknows\tC\t2\n";
const NO_WEIGHT: &str = "source\ttype\ttarget\nA\tknows\tB\n";

fn netcent_cmd(dir: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("netcent"));
    cmd.current_dir(dir);
    cmd.env("NETCENT_LOG", "error");
    cmd
}

fn write_inputs(dir: &Path, files: &[(&str, &str)]) {
    fs::create_dir_all(dir.join("in")).expect("mkdir");
    for (name, body) in files {
        fs::write(dir.join("in").join(name), body).expect("write input");
    }
}

#[test]
fn unknown_layout_fails_before_loading() {
    let dir = TempDir::new().expect("tempdir");
    write_inputs(dir.path(), &[("g.tsv", VALID)]);

    netcent_cmd(dir.path())
        .args(["-f", "in", "-l", "triangular", "-o", "out"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown layout `triangular`"));

    assert!(!dir.path().join("out").exists(), "no output directory created");
}

#[test]
fn mixed_directory_exits_zero_with_valid_artifacts() {
    let dir = TempDir::new().expect("tempdir");
    write_inputs(dir.path(), &[("good.tsv", VALID), ("bad.tsv", NO_WEIGHT)]);

    let output = netcent_cmd(dir.path())
        .args(["-f", "in", "-l", "circular", "-o", "out", "--json"])
        .output()
        .expect("run should not crash");
    assert!(
        output.status.success(),
        "run failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let summary: Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    let files = summary["files"].as_array().expect("files array");
    assert_eq!(files.len(), 2);

    let bad = files
        .iter()
        .find(|f| f["input"].as_str().is_some_and(|p| p.ends_with("bad.tsv")))
        .expect("bad.tsv report");
    assert!(bad["table"].is_null());
    assert!(bad["errors"][0].as_str().is_some_and(|e| e.contains("weight")));

    let out = dir.path().join("out");
    assert!(out.join("good_network.csv").is_file());
    assert!(out.join("good_circular_false_false.png").is_file());
    assert!(!out.join("bad_network.csv").exists());
}

#[test]
fn human_summary_lists_artifacts() {
    let dir = TempDir::new().expect("tempdir");
    write_inputs(dir.path(), &[("g.tsv", VALID)]);

    netcent_cmd(dir.path())
        .args(["-f", "in/g.tsv", "--scale-nodes", "-o", "out"])
        .assert()
        .success()
        .stdout(predicate::str::contains("g_network.csv"))
        .stdout(predicate::str::contains("g_spring_true_false.png"))
        .stdout(predicate::str::contains("1 of 1 file(s) fully processed"));
}

#[test]
fn missing_input_fails() {
    let dir = TempDir::new().expect("tempdir");

    netcent_cmd(dir.path())
        .args(["-f", "does-not-exist.tsv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("input path not found"));
}

#[test]
fn empty_directory_fails() {
    let dir = TempDir::new().expect("tempdir");
    fs::create_dir(dir.path().join("in")).expect("mkdir");

    netcent_cmd(dir.path())
        .args(["-f", "in"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no edge-list files found"));
}

#[test]
fn config_file_sets_output_dir() {
    let dir = TempDir::new().expect("tempdir");
    write_inputs(dir.path(), &[("g.tsv", VALID)]);
    fs::write(
        dir.path().join("netcent.toml"),
        "[output]\ndir = \"from-config\"\n\n[render]\nwidth = 300\nheight = 300\nmargin = 20\n",
    )
    .expect("write config");

    netcent_cmd(dir.path())
        .args(["-f", "in", "--config", "netcent.toml"])
        .assert()
        .success();

    assert!(dir.path().join("from-config/g_network.csv").is_file());
}

#[test]
fn invalid_config_fails() {
    let dir = TempDir::new().expect("tempdir");
    write_inputs(dir.path(), &[("g.tsv", VALID)]);
    fs::write(dir.path().join("bad.toml"), "[render]\nwidth = \"wide\"\n").expect("write");

    netcent_cmd(dir.path())
        .args(["-f", "in", "--config", "bad.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid config"));
}
