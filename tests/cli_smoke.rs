use std::io::Write;
use std::process::{Command, Output, Stdio};

use serde_json::Value;

fn fieldcheck() -> Command {
    let bin_path = std::env::var("CARGO_BIN_EXE_fieldcheck")
        .unwrap_or_else(|_| "target/debug/fieldcheck".to_string());

    let mut command = Command::new(bin_path);
    command.arg("--no-config");
    command
}

fn run_with_stdin(mut command: Command, stdin: &str) -> Output {
    let mut child = command
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn fieldcheck");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(stdin.as_bytes())
        .expect("write stdin");

    child.wait_with_output().expect("wait for fieldcheck")
}

#[test]
fn accepts_valid_arguments() {
    let output = fieldcheck()
        .args(["--kind", "phone", "13812345678", "+8613812345678"])
        .output()
        .expect("run fieldcheck");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "2 checked, 0 invalid\n");
}

#[test]
fn rejects_invalid_arguments() {
    let output = fieldcheck()
        .args(["--kind", "lat", "89.5", "90.1"])
        .output()
        .expect("run fieldcheck");

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("line 2: error: '90.1' is not a valid latitude"));
    assert!(stdout.ends_with("2 checked, 1 invalid\n"));
}

#[test]
fn reads_stdin_as_json_report() {
    let mut command = fieldcheck();
    command.args(["--kind", "longitude", "--format", "json"]);
    let output = run_with_stdin(command, "# points\n120.5\n181\n\n-180\n");

    assert_eq!(output.status.code(), Some(1));
    let report: Value = serde_json::from_slice(&output.stdout).expect("json report");
    assert_eq!(report["checked"], 3);
    assert_eq!(report["diagnostics"][0]["line"], 3);
    assert_eq!(report["diagnostics"][0]["value"], "181");
}

#[test]
fn missing_kind_fails_with_message() {
    let output = fieldcheck().arg("admin").output().expect("run fieldcheck");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("No field kind given"));
}
