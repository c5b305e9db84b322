//! CLI end-to-end tests
//!
//! Tests for the cuestream command-line interface.

use assert_cmd::prelude::*;
use bytes::BytesMut;
use cuestream::format::{encode_action, ActionKind, MediaActionRecord, SoundActionRecord};
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::tempdir;

/// Get a command for the cuestream binary
#[allow(deprecated)]
fn cuestream_cmd() -> Command {
    let mut cmd = Command::cargo_bin("cuestream").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Write a two-record stream (anim + sound) into `dir`
fn write_fixture(dir: &Path) -> PathBuf {
    let mut anim = MediaActionRecord::with_kind(ActionKind::Anim).unwrap();
    anim.base_mut().set_object_name(Some(b"Pepper")).unwrap();
    anim.base_mut().object_id = 9;
    anim.base_mut().location = [1.0, 2.0, 3.0];
    anim.base_mut().direction = [0.0, 0.0, 1.0];
    anim.base_mut().up = [0.0, 1.0, 0.0];
    anim.set_media_src_path(Some(b"pepper.flc")).unwrap();
    anim.set_frames_per_second(12);
    anim.refresh_size_on_disk();

    let mut sound = SoundActionRecord::new();
    sound.media_mut().set_media_src_path(Some(b"horn.wav")).unwrap();
    sound.set_volume(60);
    sound.refresh_size_on_disk();

    let mut buf = BytesMut::new();
    encode_action(&anim, &mut buf);
    encode_action(&sound, &mut buf);

    let path = dir.join("actions.bin");
    fs::write(&path, &buf).unwrap();
    path
}

#[test]
fn test_cli_no_args_shows_help() {
    let mut cmd = cuestream_cmd();
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_cli_help_flag() {
    let mut cmd = cuestream_cmd();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("cuestream"))
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn test_cli_version_command() {
    let mut cmd = cuestream_cmd();
    cmd.arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_cli_inspect_text() {
    let dir = tempdir().unwrap();
    let file = write_fixture(dir.path());

    let mut cmd = cuestream_cmd();
    cmd.current_dir(dir.path())
        .args(["inspect", file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("AnimAction"))
        .stdout(predicate::str::contains("SoundAction"))
        .stdout(predicate::str::contains("Media: pepper.flc"))
        .stdout(predicate::str::contains("Volume: 60"))
        .stdout(predicate::str::contains("2 record(s)"));
}

#[test]
fn test_cli_inspect_json() {
    let dir = tempdir().unwrap();
    let file = write_fixture(dir.path());

    let output = cuestream_cmd()
        .current_dir(dir.path())
        .args(["inspect", "--json", file.to_str().unwrap()])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let records = json.as_array().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["kind"], "AnimAction");
    assert_eq!(records[0]["object_id"], 9);
    assert_eq!(records[0]["placement"][0][3], 1.0);
    assert_eq!(records[1]["volume"], 60);
}

#[test]
fn test_cli_inspect_truncated_file() {
    let dir = tempdir().unwrap();
    let file = write_fixture(dir.path());
    let data = fs::read(&file).unwrap();
    fs::write(&file, &data[..data.len() - 2]).unwrap();

    let mut cmd = cuestream_cmd();
    cmd.current_dir(dir.path())
        .args(["inspect", file.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to decode record"));
}

#[test]
fn test_cli_inspect_missing_file() {
    let dir = tempdir().unwrap();

    let mut cmd = cuestream_cmd();
    cmd.current_dir(dir.path())
        .args(["inspect", "/nonexistent/actions.bin"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn test_cli_frame_axis_aligned() {
    let mut cmd = cuestream_cmd();
    cmd.args([
        "frame",
        "--position",
        "1,2,3",
        "--direction",
        "0,0,1",
        "--up",
        "0,1,0",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains(
        "    1.000000     0.000000     0.000000     1.000000",
    ))
    .stdout(predicate::str::contains(
        "    0.000000     0.000000     1.000000     3.000000",
    ));
}

#[test]
fn test_cli_frame_json() {
    let output = cuestream_cmd()
        .args([
            "frame",
            "--position",
            "0,0,0",
            "--direction",
            "3,0,4",
            "--up",
            "0,1,0",
            "--json",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let rows = json["rows"].as_array().unwrap();
    assert_eq!(rows[0][0].as_f64().unwrap() as f32, 0.8);
    assert_eq!(rows[0][2].as_f64().unwrap() as f32, 0.6);
    assert_eq!(rows[2][0].as_f64().unwrap() as f32, -0.6);
}

#[test]
fn test_cli_frame_degenerate() {
    let mut cmd = cuestream_cmd();
    cmd.args([
        "frame",
        "--position",
        "0,0,0",
        "--direction",
        "0,0,1",
        "--up",
        "0,0,2",
    ])
    .assert()
    .failure()
    .stderr(predicate::str::contains("Degenerate"));
}

#[test]
fn test_cli_validate_valid_config() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.toml");

    fs::write(
        &config_path,
        r#"
[decode]
format_hint = 3
max_records = 16

[output]
include_placement = false
"#,
    )
    .unwrap();

    let mut cmd = cuestream_cmd();
    cmd.args(["validate", config_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"))
        .stdout(predicate::str::contains("Max records: 16"));
}

#[test]
fn test_cli_validate_invalid_config() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.toml");

    fs::write(&config_path, "[decode]\nmax_records = 0\n").unwrap();

    let mut cmd = cuestream_cmd();
    cmd.args(["validate", config_path.to_str().unwrap()])
        .assert()
        .failure();
}

#[test]
fn test_cli_init_config() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("nested/cuestream.toml");

    let mut cmd = cuestream_cmd();
    cmd.args(["init-config", config_path.to_str().unwrap()])
        .assert()
        .success();
    assert!(config_path.exists());

    // Written config must validate
    let mut cmd = cuestream_cmd();
    cmd.args(["validate", config_path.to_str().unwrap()])
        .assert()
        .success();

    // And is not overwritten
    let mut cmd = cuestream_cmd();
    cmd.args(["init-config", config_path.to_str().unwrap()])
        .assert()
        .failure();
}
