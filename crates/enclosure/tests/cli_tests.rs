//! Integration tests for the enclosure CLI.
//!
//! These tests run the built binary against files in a temporary directory.

use rstest::{fixture, rstest};
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const SAMPLE: &str = "def outer():\n    def inner():\n        return 1\n    return inner()\n";

const CSHARP_SAMPLE: &str = "namespace Demo\n{\n    public class Greeter\n    {\n        public string Greet(string name)\n        {\n            return \"hi \" + name;\n        }\n    }\n}\n";

/// Run the enclosure binary in `dir` with colors disabled.
fn run_enclosure_in_dir(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_enclosure"))
        .args(args)
        .current_dir(dir)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute enclosure binary")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

// ============================================================================
// Test Fixtures
// ============================================================================

/// A temporary directory holding `sample.py`
#[fixture]
fn workspace() -> TempDir {
    let temp = TempDir::new().expect("Failed to create temp directory");
    fs::write(temp.path().join("sample.py"), SAMPLE).expect("Failed to write sample");
    temp
}

// ============================================================================
// find
// ============================================================================

#[rstest]
fn find_prints_json_summary(workspace: TempDir) {
    let output = run_enclosure_in_dir(
        workspace.path(),
        &["find", "sample.py", "--lines", "2:3", "--json"],
    );

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let summary: serde_json::Value =
        serde_json::from_str(&stdout(&output)).expect("stdout should be JSON");
    assert_eq!(summary["kind"], "module");
    assert_eq!(summary["span"]["start_line"], 1);
    assert!(summary["text"].as_str().unwrap().contains("def inner()"));
}

#[rstest]
fn find_past_end_of_file_prints_null(workspace: TempDir) {
    let output = run_enclosure_in_dir(
        workspace.path(),
        &["find", "sample.py", "--lines", "40:41", "--json"],
    );

    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "null");
}

#[rstest]
fn find_human_output_names_location(workspace: TempDir) {
    let output = run_enclosure_in_dir(workspace.path(), &["find", "sample.py", "-l", "3"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("sample.py:3 is inside module"));
    assert!(out.contains("return 1"));
}

#[rstest]
fn find_rejects_inverted_range(workspace: TempDir) {
    let output = run_enclosure_in_dir(workspace.path(), &["find", "sample.py", "--lines", "3:2"]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("line_start 3 is after line_end 2"));
}

#[rstest]
fn find_requires_known_language(workspace: TempDir) {
    fs::write(workspace.path().join("notes.txt"), "hello\nworld\n").unwrap();

    let output = run_enclosure_in_dir(workspace.path(), &["find", "notes.txt", "--lines", "1"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("cannot tell the language"));
}

#[rstest]
fn find_honors_language_flag(workspace: TempDir) {
    fs::write(workspace.path().join("script"), SAMPLE).unwrap();

    let output = run_enclosure_in_dir(
        workspace.path(),
        &["find", "script", "--lines", "2", "--language", "python", "--json"],
    );

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("\"kind\": \"module\""));
}

#[rstest]
fn find_uses_configured_extensions(workspace: TempDir) {
    fs::write(workspace.path().join("tool.pyw"), SAMPLE).unwrap();
    fs::write(
        workspace.path().join(".enclosure.yaml"),
        "extensions:\n  pyw: python\n",
    )
    .unwrap();

    let output = run_enclosure_in_dir(
        workspace.path(),
        &["find", "tool.pyw", "--lines", "2", "--json"],
    );

    assert!(output.status.success(), "stderr: {}", stderr(&output));
}

#[rstest]
fn missing_file_reports_io_error(workspace: TempDir) {
    let output = run_enclosure_in_dir(workspace.path(), &["find", "absent.py", "--lines", "1"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("failed to read absent.py"));
}

#[rstest]
fn find_works_on_csharp_files(workspace: TempDir) {
    fs::write(workspace.path().join("Greeter.cs"), CSHARP_SAMPLE).unwrap();

    let output = run_enclosure_in_dir(
        workspace.path(),
        &["find", "Greeter.cs", "--lines", "6:8", "--json"],
    );

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let summary: serde_json::Value =
        serde_json::from_str(&stdout(&output)).expect("stdout should be JSON");
    assert_eq!(summary["kind"], "compilation_unit");
    assert!(summary["text"].as_str().unwrap().contains("public string Greet"));
}

// ============================================================================
// check
// ============================================================================

#[rstest]
fn check_works_on_csharp_files(workspace: TempDir) {
    fs::write(workspace.path().join("Greeter.cs"), CSHARP_SAMPLE).unwrap();

    let output = run_enclosure_in_dir(workspace.path(), &["check", "Greeter.cs", "--json"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let validity: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(validity["valid"], true);
}

#[rstest]
fn malformed_config_exits_with_usage_status(workspace: TempDir) {
    fs::write(workspace.path().join(".enclosure.yaml"), "timeout: 5\n").unwrap();

    let output = run_enclosure_in_dir(workspace.path(), &["check", "sample.py"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("configuration error"));
}

#[rstest]
fn check_valid_file_succeeds(workspace: TempDir) {
    let output = run_enclosure_in_dir(workspace.path(), &["check", "sample.py", "--json"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let validity: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(validity["valid"], true);
    assert_eq!(validity["error"], "");
}

#[rstest]
fn check_reports_timeout_as_invalid(workspace: TempDir) {
    let big = "value = [1, 2, 3]\n".repeat(100_000);
    fs::write(workspace.path().join("big.py"), big).unwrap();
    let config = workspace.path().join("strict.yaml");
    fs::write(&config, "parse-timeout-micros: 1\n").unwrap();

    let output = run_enclosure_in_dir(
        workspace.path(),
        &["check", "big.py", "--config", config.to_str().unwrap()],
    );

    assert!(!output.status.success());
    assert!(stdout(&output).contains("failed to parse as python"));
}

#[test]
fn help_lists_commands() {
    let output = Command::new(env!("CARGO_BIN_EXE_enclosure"))
        .arg("--help")
        .output()
        .expect("Failed to execute enclosure binary");

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("find"));
    assert!(out.contains("check"));
}
