//! ---
//! fx_section: "03-cli"
//! fx_subsection: "tests"
//! fx_type: "source"
//! fx_scope: "code"
//! fx_description: "End-to-end tests for the fixture control CLI."
//! fx_version: "v0.1.0"
//! fx_owner: "tbd"
//! ---
use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::{tempdir, TempDir};

fn fixturectl(workdir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("fixturectl").unwrap();
    cmd.current_dir(workdir.path())
        .env_remove("FIXTURE_CONFIG")
        .env_remove("FIXTURE_LOG")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn print_commands_emit_exactly_their_line() {
    let dir = tempdir().unwrap();
    for (sub, line) in [
        ("top-level", "top level\n"),
        ("another", "another\n"),
        ("public", "public\n"),
        ("arrow", "arrow\n"),
        ("exported", "exported\n"),
        ("only", "only\n"),
    ] {
        fixturectl(&dir).arg(sub).assert().success().stdout(line);
    }
}

#[test]
fn value_defaults_to_zero() {
    let dir = tempdir().unwrap();
    fixturectl(&dir).arg("value").assert().success().stdout("0\n");
}

#[test]
fn value_reads_back_written_number() {
    let dir = tempdir().unwrap();
    fixturectl(&dir)
        .args(["value", "--set", "-2147483648"])
        .assert()
        .success()
        .stdout("-2147483648\n");
}

#[test]
fn value_through_class_methods() {
    let dir = tempdir().unwrap();
    fixturectl(&dir)
        .args(["value", "--class"])
        .assert()
        .success()
        .stdout("0\n");
    fixturectl(&dir)
        .args(["value", "--class", "--set", "31"])
        .assert()
        .success()
        .stdout("31\n");
}

#[test]
fn name_reads_back_argument() {
    let dir = tempdir().unwrap();
    fixturectl(&dir)
        .args(["name", "grid-a"])
        .assert()
        .success()
        .stdout("grid-a\n");
    fixturectl(&dir).arg("name").assert().success().stdout("fixture\n");
}

#[test]
fn config_defaults_apply_from_search_path() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("fixture.toml"),
        "[defaults]\nvalue = 5\nname = \"configured\"\n",
    )
    .unwrap();
    fixturectl(&dir).arg("value").assert().success().stdout("5\n");
    fixturectl(&dir)
        .args(["value", "--set", "9"])
        .assert()
        .success()
        .stdout("9\n");
    fixturectl(&dir)
        .arg("name")
        .assert()
        .success()
        .stdout("configured\n");
}

fn broken_config(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("broken.toml");
    fs::write(&path, "[defaults]\nname = \"\"\n").unwrap();
    path
}

#[test]
fn invalid_config_fails() {
    let dir = tempdir().unwrap();
    let path = broken_config(&dir);
    fixturectl(&dir)
        .arg("--config")
        .arg(&path)
        .arg("top-level")
        .assert()
        .failure()
        .stdout("");
}

#[test]
fn config_failure_is_logged_to_stderr_by_default() {
    let dir = tempdir().unwrap();
    let path = broken_config(&dir);
    let output = fixturectl(&dir)
        .arg("--config")
        .arg(&path)
        .arg("top-level")
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("config.load"), "stderr was: {stderr}");
}

#[test]
fn fixture_log_filters_config_failure_event() {
    let dir = tempdir().unwrap();
    let path = broken_config(&dir);
    let output = fixturectl(&dir)
        .env("FIXTURE_LOG", "off")
        .env("RUST_LOG", "trace")
        .arg("--config")
        .arg(&path)
        .arg("top-level")
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stderr.contains("config.load"), "stderr was: {stderr}");
    assert!(stderr.contains("failed to load configuration"));
}

#[test]
fn rust_log_applies_when_fixture_log_is_unset() {
    let dir = tempdir().unwrap();
    let path = broken_config(&dir);
    let output = fixturectl(&dir)
        .env("RUST_LOG", "off")
        .arg("--config")
        .arg(&path)
        .arg("top-level")
        .output()
        .unwrap();
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stderr.contains("config.load"), "stderr was: {stderr}");
}

#[test]
fn env_config_beats_search_path() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("fixture.toml"), "[defaults]\nvalue = 1\n").unwrap();
    let env_path = dir.path().join("env.toml");
    fs::write(&env_path, "[defaults]\nvalue = 11\n").unwrap();
    fixturectl(&dir)
        .env("FIXTURE_CONFIG", &env_path)
        .arg("value")
        .assert()
        .success()
        .stdout("11\n");
}

#[test]
fn explicit_config_beats_env_config() {
    let dir = tempdir().unwrap();
    let env_path = dir.path().join("env.toml");
    fs::write(&env_path, "[defaults]\nvalue = 11\n").unwrap();
    let explicit = dir.path().join("explicit.toml");
    fs::write(&explicit, "[defaults]\nvalue = 22\n").unwrap();
    fixturectl(&dir)
        .env("FIXTURE_CONFIG", &env_path)
        .arg("--config")
        .arg(&explicit)
        .arg("value")
        .assert()
        .success()
        .stdout("22\n");
}

#[test]
fn blank_env_config_falls_through_to_search_path() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("configs")).unwrap();
    fs::write(
        dir.path().join("configs").join("fixture.toml"),
        "[defaults]\nvalue = 3\n",
    )
    .unwrap();
    fixturectl(&dir)
        .env("FIXTURE_CONFIG", "  ")
        .arg("value")
        .assert()
        .success()
        .stdout("3\n");
}

#[test]
fn symbols_json_lists_catalogue() {
    let dir = tempdir().unwrap();
    let output = fixturectl(&dir)
        .args(["symbols", "--format", "json", "--public-only"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let names: Vec<_> = value
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["name"].as_str().unwrap().to_owned())
        .collect();
    assert!(names.contains(&"public_function".to_owned()));
    assert!(names.contains(&"exported_function".to_owned()));
    assert!(!names.contains(&"another_function".to_owned()));
    assert!(!names.contains(&"private_method".to_owned()));
}

#[test]
fn symbols_yaml_lists_catalogue() {
    let dir = tempdir().unwrap();
    let output = fixturectl(&dir)
        .args(["symbols", "--format", "yaml"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_yaml::Value = serde_yaml::from_slice(&output.stdout).unwrap();
    let entries = value.as_sequence().unwrap();
    let first = &entries[0];
    assert_eq!(first["name"].as_str(), Some("MyStruct"));
    assert_eq!(first["kind"].as_str(), Some("struct"));
    let arrow = entries
        .iter()
        .find(|s| s["name"].as_str() == Some("arrow_func"))
        .expect("arrow_func listed");
    assert_eq!(arrow["public"].as_bool(), Some(false));
}

#[test]
fn symbols_text_lists_one_symbol_per_line() {
    let dir = tempdir().unwrap();
    let output = fixturectl(&dir).arg("symbols").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(lines.first(), Some(&"struct   pub  MyStruct"));
    assert!(lines.contains(&"method   priv MyStruct::private_method"));
    assert!(lines.contains(&"function priv top_level_function"));
    assert!(lines.contains(&"function pub  public_function"));
}
