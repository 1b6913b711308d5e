//! Tests running the `t9n` binary

#![allow(clippy::unwrap_used)]
#![allow(missing_docs)]

use std::fs;
use std::path::{
    Path,
    PathBuf,
};
use std::process::{
    Command,
    Output,
};

use rstest::rstest;
use tempfile::TempDir;

fn t9n_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_t9n"))
}

fn fixtures() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures")
}

/// Runs `t9n` inside `cwd`, so `t9n.config.json` ends up there.
fn run(cwd: &Path, args: &[&str]) -> Output {
    Command::new(t9n_bin()).current_dir(cwd).args(args).env_remove("RUST_LOG").output().unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[rstest]
fn test_no_command_shows_usage() {
    let temp_dir = TempDir::new().unwrap();

    let output = run(temp_dir.path(), &[]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage"));
}

#[rstest]
#[case("typedefs")]
#[case("export")]
#[case("import")]
#[case("check")]
fn test_missing_argument_fails(#[case] command: &str) {
    let temp_dir = TempDir::new().unwrap();

    let output = run(temp_dir.path(), &[command]);

    assert!(!output.status.success());
}

#[rstest]
fn test_check_prints_report() {
    let temp_dir = TempDir::new().unwrap();
    let folder = fixtures();

    let output = run(temp_dir.path(), &["check", folder.to_str().unwrap()]);

    assert!(output.status.success());
    let report = stdout(&output);
    assert!(report.starts_with("locale"));
    assert!(report.lines().any(|line| line.starts_with("de ") && line.contains("0.67")));
    assert!(report.lines().any(|line| line.starts_with("en ") && line.contains("0.33")));
    assert!(!temp_dir.path().join("t9n.config.json").exists());
}

#[rstest]
fn test_check_missing_reference_fails() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("de.json"), "{}").unwrap();

    let output = run(temp_dir.path(), &["check", "."]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("meta.json"));
}

#[rstest]
fn test_typedefs_to_stdout_and_file() {
    let temp_dir = TempDir::new().unwrap();
    let meta = fixtures().join("meta.json");

    let printed = run(temp_dir.path(), &["typedefs", meta.to_str().unwrap()]);
    let written = run(temp_dir.path(), &["typedefs", meta.to_str().unwrap(), "-o", "locale-types.ts"]);

    assert!(printed.status.success());
    assert!(stdout(&printed).starts_with("/*~ Type definitions for t9n"));
    assert!(written.status.success());
    assert_eq!(fs::read_to_string(temp_dir.path().join("locale-types.ts")).unwrap(), stdout(&printed));
}

#[rstest]
fn test_export_import_and_persisted_config() {
    let temp_dir = TempDir::new().unwrap();
    let folder = fixtures();

    let exported = run(temp_dir.path(), &["export", folder.to_str().unwrap(), "--output", "out"]);
    assert!(exported.status.success());
    assert!(temp_dir.path().join("out").join("translation.xlsx").exists());
    assert!(temp_dir.path().join("t9n.config.json").exists());

    let imported = run(temp_dir.path(), &["import", "out/translation.xlsx", "-o", "out"]);
    assert!(imported.status.success());

    let de = fs::read_to_string(temp_dir.path().join("out").join("de.json")).unwrap();
    assert!(de.contains("\"headline\": \"Das ist eine Überschrift\""));
    assert!(de.ends_with("}\n"));
    assert!(temp_dir.path().join("out").join("en.json").exists());
}
