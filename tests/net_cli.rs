// SPDX-License-Identifier: MPL-2.0

//! Binary-level checks for `conky-net`. Every run points `--state-file` and
//! `--sys-dir` at a scratch directory so nothing leaks between tests or onto
//! the host's real state.

use std::fs;
use std::path::Path;
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;

fn probe(scratch: &Path) -> Command {
    let mut cmd = Command::cargo_bin("conky-net").expect("binary builds");
    cmd.arg("--state-file")
        .arg(scratch.join("state.json"))
        .arg("--sys-dir")
        .arg(scratch.join("net"));
    cmd
}

fn write_iface(scratch: &Path, name: &str, operstate: &str, rx: u64, tx: u64) {
    let dir = scratch.join("net").join(name);
    let stats = dir.join("statistics");
    fs::create_dir_all(&stats).unwrap();
    fs::write(dir.join("operstate"), operstate).unwrap();
    fs::write(stats.join("rx_bytes"), rx.to_string()).unwrap();
    fs::write(stats.join("tx_bytes"), tx.to_string()).unwrap();
}

#[test]
fn unknown_mode_prints_the_literal_fallback() {
    let scratch = tempfile::tempdir().unwrap();
    probe(scratch.path())
        .arg("bogus")
        .assert()
        .success()
        .stdout("Network: Unknown mode\n");
}

#[test]
fn first_speed_invocation_has_no_baseline() {
    let scratch = tempfile::tempdir().unwrap();
    probe(scratch.path())
        .arg("speed")
        .assert()
        .success()
        .stdout("Down: 0.0 KiB/s  Up: 0.0 KiB/s\n");
}

#[test]
fn speed_mode_writes_a_snapshot_for_the_selected_interface() {
    let scratch = tempfile::tempdir().unwrap();
    write_iface(scratch.path(), "eth9", "up", 1000, 500);

    probe(scratch.path()).arg("speed").assert().success();

    // A snapshot exists whenever an interface was selected; on hosts with a
    // default route the entry is named after that device instead of eth9.
    let state = fs::read_to_string(scratch.path().join("state.json")).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&state).unwrap();
    assert!(parsed.as_object().is_some_and(|map| !map.is_empty()));
}

#[test]
fn summary_mode_prints_one_network_line() {
    let scratch = tempfile::tempdir().unwrap();
    write_iface(scratch.path(), "eth9", "up", 0, 0);

    probe(scratch.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Network: "))
        .stdout(predicate::str::ends_with("\n"));
}

#[test]
fn corrupt_state_file_is_not_fatal() {
    let scratch = tempfile::tempdir().unwrap();
    fs::create_dir_all(scratch.path().join("net")).unwrap();
    fs::write(scratch.path().join("state.json"), "][ not json").unwrap();

    probe(scratch.path())
        .arg("speed")
        .assert()
        .success()
        .stdout("Down: 0.0 KiB/s  Up: 0.0 KiB/s\n");
}
