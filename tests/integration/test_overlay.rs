//! Integration tests for the overlay command

use std::process::Command;

fn run_overlay(extra: &[&str]) -> std::process::Output {
    let mut args = vec!["run", "--quiet", "--bin", "coursegate", "--", "overlay"];
    args.extend_from_slice(extra);
    Command::new("cargo")
        .args(args)
        .output()
        .expect("Failed to execute command")
}

#[test]
fn test_seeded_overlay_json() {
    let output = run_overlay(&["12", "--seed", "7", "--json"]);

    assert!(output.status.success());
    let parsed: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");

    assert_eq!(parsed["count"], serde_json::json!(12));
    let items = parsed["items"].as_array().expect("items array");
    assert_eq!(items.len(), 12);

    for item in items {
        let top = item["top_percent"].as_f64().expect("top_percent");
        let left = item["left_percent"].as_f64().expect("left_percent");
        let size = item["size_px"].as_f64().expect("size_px");
        let delay = item["delay_seconds"].as_f64().expect("delay_seconds");

        assert!((0.0..=100.0).contains(&top));
        assert!((0.0..=100.0).contains(&left));
        assert!((24.0..=64.0).contains(&size));
        assert!((0.0..4.0).contains(&delay));
        assert!(item["animation_variant"].is_string());
    }
}

#[test]
fn test_compact_viewport_halves_count() {
    let output = run_overlay(&["10", "--viewport", "compact", "--seed", "3", "--json"]);

    assert!(output.status.success());
    let parsed: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(parsed["count"], serde_json::json!(5));
}

#[test]
fn test_zero_count_yields_empty_sequence() {
    let output = run_overlay(&["0", "--json"]);

    assert!(output.status.success());
    let parsed: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(parsed["count"], serde_json::json!(0));
    assert!(parsed["items"].as_array().expect("items array").is_empty());
}

#[test]
fn test_unknown_viewport_rejected() {
    let output = run_overlay(&["12", "--viewport", "tablet"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_inverted_size_bounds_rejected() {
    let output = run_overlay(&["12", "--min-size", "80", "--max-size", "40"]);
    assert_eq!(output.status.code(), Some(2));
}
