//! Contract tests pinning the JSON shapes consumed by rendering code

use crate::fixtures::{days_after_enrollment, enrollment, seeded_rng};
use coursegate::cli::output::{format_overlay_json, format_status_json};
use coursegate::models::{AnimationVariant, Remaining, TimerState};
use coursegate::services::access;
use coursegate::services::format::DigitStyle;
use coursegate::services::placement::{SizeRange, ViewportClass, generate};
use serde_json::json;

#[test]
fn test_remaining_variants_shape() {
    assert_eq!(
        serde_json::to_value(Remaining::Left(345_600)).unwrap(),
        json!({"state": "left", "seconds": 345_600})
    );
    assert_eq!(
        serde_json::to_value(Remaining::Expired).unwrap(),
        json!({"state": "expired"})
    );
    assert_eq!(
        serde_json::to_value(Remaining::Unavailable).unwrap(),
        json!({"state": "unavailable"})
    );
}

#[test]
fn test_timer_state_shape() {
    let state = access::evaluate(enrollment(), 0, Some(8), days_after_enrollment(3));
    let value = serde_json::to_value(state).unwrap();
    let object = value.as_object().expect("TimerState serializes to object");

    assert_eq!(object.len(), 4);
    for key in [
        "current_unit_time_left",
        "next_unit_opens_in",
        "is_current_unit_active",
        "has_next_unit",
    ] {
        assert!(object.contains_key(key), "missing key {key}");
    }
}

#[test]
fn test_timer_state_round_trips() {
    let state = access::evaluate(enrollment(), 1, None, days_after_enrollment(9));
    let encoded = serde_json::to_string(&state).unwrap();
    let decoded: TimerState = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, state);
}

#[test]
fn test_placement_item_shape() {
    let mut rng = seeded_rng(7);
    let items = generate(
        3,
        ViewportClass::Wide,
        SizeRange::new(24.0, 64.0).unwrap(),
        &mut rng,
    );
    let value = serde_json::to_value(&items).unwrap();

    for item in value.as_array().expect("items serialize to array") {
        let object = item.as_object().expect("item serializes to object");
        assert_eq!(object.len(), 5);
        for key in [
            "top_percent",
            "left_percent",
            "size_px",
            "animation_variant",
            "delay_seconds",
        ] {
            assert!(object.contains_key(key), "missing key {key}");
        }

        let variant = object["animation_variant"].as_str().expect("variant string");
        assert!(
            AnimationVariant::ALL
                .iter()
                .any(|known| known.as_str() == variant),
            "unexpected variant {variant}"
        );
    }
}

#[test]
fn test_status_json_output_shape() {
    let state = access::evaluate(enrollment(), 0, None, days_after_enrollment(3));
    let rendered = format_status_json(&state, &DigitStyle::Western);
    let parsed: serde_json::Value = serde_json::from_str(&rendered).unwrap();

    assert!(parsed["timer"].is_object());
    assert_eq!(parsed["rendered"]["current_unit_time_left"], "4 days");
    assert_eq!(parsed["rendered"]["next_unit_opens_in"], "11 days");
}

#[test]
fn test_overlay_json_output_shape() {
    let mut rng = seeded_rng(7);
    let items = generate(
        4,
        ViewportClass::Wide,
        SizeRange::new(24.0, 64.0).unwrap(),
        &mut rng,
    );
    let rendered = format_overlay_json(&items);
    let parsed: serde_json::Value = serde_json::from_str(&rendered).unwrap();

    assert_eq!(parsed["count"], json!(4));
    assert_eq!(parsed["items"].as_array().expect("items array").len(), 4);
}
