//! Integration tests for the status command

use std::process::Command;

fn run_status(extra: &[&str]) -> std::process::Output {
    let mut args = vec!["run", "--quiet", "--bin", "coursegate", "--", "status"];
    args.extend_from_slice(extra);
    Command::new("cargo")
        .args(args)
        .output()
        .expect("Failed to execute command")
}

#[test]
fn test_help_output() {
    let output = Command::new("cargo")
        .args(["run", "--quiet", "--bin", "coursegate", "--", "--help"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Course unit access CLI"));
    assert!(stdout.contains("status"));
    assert!(stdout.contains("overlay"));
}

#[test]
fn test_status_json_for_finished_course() {
    // Enrollment far in the past with a single unit: expired, no next unit.
    let output = run_status(&[
        "2020-01-06T00:00:00Z",
        "--unit",
        "0",
        "--total-units",
        "1",
        "--json",
    ]);

    assert!(output.status.success());
    let parsed: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");

    let timer = &parsed["timer"];
    assert_eq!(timer["is_current_unit_active"], serde_json::json!(false));
    assert_eq!(timer["has_next_unit"], serde_json::json!(false));
    assert_eq!(
        timer["current_unit_time_left"]["state"],
        serde_json::json!("expired")
    );
    assert_eq!(parsed["rendered"]["current_unit_time_left"], "expired");
}

#[test]
fn test_malformed_enrollment_exits_unavailable() {
    let output = run_status(&["definitely-not-a-timestamp"]);
    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn test_out_of_range_unit_exits_unavailable() {
    let output = run_status(&["2020-01-06T00:00:00Z", "--unit", "9", "--total-units", "3"]);
    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn test_missing_enrollment_rejected() {
    let output = run_status(&["--unit", "0"]);
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ENROLLED_AT"));
}

#[test]
fn test_unknown_digit_style_rejected() {
    let output = run_status(&["2020-01-06T00:00:00Z", "--digits", "roman"]);
    assert_eq!(output.status.code(), Some(2));
}
