mod fixtures;

use std::fs;
use std::process::{Command, Output};
use tempfile::TempDir;

use fixtures::get_fixture_path;

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_crypto-inventory"))
        .args(args)
        .output()
        .expect("Failed to execute command")
}

fn stdout_json(output: &Output) -> serde_json::Value {
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}

#[test]
fn test_cli_help() {
    let output = run(&["--help"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("crypto-inventory"));
    assert!(stdout.contains("--path"));
    assert!(stdout.contains("--config"));
    assert!(stdout.contains("--format"));
    assert!(stdout.contains("--output-file"));
}

#[test]
fn test_cli_missing_path() {
    let output = run(&[]);
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("required") || stderr.contains("--path"));
}

#[test]
fn test_cli_invalid_path() {
    let output = run(&["--path", "/nonexistent/calls.json"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("does not exist"));
}

#[test]
fn test_cli_single_dump() {
    let dump = get_fixture_path("dumps/Crypto.json");
    let document = stdout_json(&run(&["--path", dump.to_str().unwrap(), "-q"]));

    assert_eq!(document["files_analyzed"], 1);
    assert_eq!(document["total_assets"], 2);
    assert_eq!(document["assets"][0]["kind"], "BlockCipher");
    assert_eq!(document["findings"][0]["line"], 12);
}

#[test]
fn test_cli_directory_walk() {
    let dumps = get_fixture_path("dumps");
    let document = stdout_json(&run(&["--path", dumps.to_str().unwrap(), "-q"]));

    assert_eq!(document["files_analyzed"], 2);
    assert_eq!(document["total_assets"], 3);
}

#[test]
fn test_cli_findings_format_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let out = temp_dir.path().join("findings.json");
    let dump = get_fixture_path("dumps/hashing.yaml");

    let output = run(&[
        "--path",
        dump.to_str().unwrap(),
        "-f",
        "findings",
        "-O",
        out.to_str().unwrap(),
        "-q",
    ]);
    assert!(output.status.success());

    let findings: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(findings[0]["rule"], "go.sha256");
    assert_eq!(findings[0]["value"], "SHA-256");
}

#[test]
fn test_cli_config_disables_conventions() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("pipeline.yaml");
    fs::write(&config, "conventions: [BouncyCastle]\n").unwrap();
    let dump = get_fixture_path("dumps/Crypto.json");

    let document = stdout_json(&run(&[
        "--path",
        dump.to_str().unwrap(),
        "--config",
        config.to_str().unwrap(),
        "-q",
    ]));
    assert_eq!(document["total_assets"], 0);
    assert_eq!(document["total_findings"], 0);
}

#[test]
fn test_cli_rejects_bad_config() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("pipeline.json");
    fs::write(&config, r#"{"max_depth": 0}"#).unwrap();
    let dump = get_fixture_path("dumps/Crypto.json");

    let output = run(&[
        "--path",
        dump.to_str().unwrap(),
        "--config",
        config.to_str().unwrap(),
    ]);
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("max_depth"));
}

#[test]
fn test_cli_reports_unwritable_output() {
    let temp_dir = TempDir::new().unwrap();
    let out = temp_dir.path().join("missing").join("inventory.json");
    let dump = get_fixture_path("dumps/Crypto.json");

    let output = run(&[
        "--path",
        dump.to_str().unwrap(),
        "-O",
        out.to_str().unwrap(),
        "-q",
    ]);
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("failed to write inventory"));
}
