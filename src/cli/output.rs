//! Output formatting for CLI

use crate::models::{PlacementItem, TimerState};
use crate::services::format::{DigitTransform, format_remaining};

/// Print a countdown snapshot as human-readable text.
pub fn print_status(state: &TimerState, digits: &dyn DigitTransform) {
    if state.is_unavailable() {
        println!("Unit access unavailable.");
        return;
    }

    let left = format_remaining(state.current_unit_time_left, digits);
    if state.is_current_unit_active {
        println!("Current unit: open ({left} left)");
    } else {
        println!("Current unit: closed ({left})");
    }

    if state.has_next_unit {
        println!(
            "Next unit opens in {}",
            format_remaining(state.next_unit_opens_in, digits)
        );
    } else {
        println!("No further units in this course.");
    }
}

/// Format a countdown snapshot as JSON, including rendered duration text.
pub fn format_status_json(state: &TimerState, digits: &dyn DigitTransform) -> String {
    let output = serde_json::json!({
        "timer": state,
        "rendered": {
            "current_unit_time_left": format_remaining(state.current_unit_time_left, digits),
            "next_unit_opens_in": format_remaining(state.next_unit_opens_in, digits),
        }
    });

    serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string())
}

/// Print placement items as a human-readable table.
pub fn print_overlay(items: &[PlacementItem]) {
    if items.is_empty() {
        println!("No items placed.");
        return;
    }

    println!("{:>7} {:>7} {:>8} {:<7} {:>7}", "Top%", "Left%", "Size px", "Anim", "Delay s");
    println!("{}", "-".repeat(41));
    for item in items {
        println!(
            "{:>7.1} {:>7.1} {:>8.1} {:<7} {:>7.2}",
            item.top_percent,
            item.left_percent,
            item.size_px,
            item.animation_variant.as_str(),
            item.delay_seconds
        );
    }
    println!();
    println!("{} items placed", items.len());
}

/// Format placement items as JSON
pub fn format_overlay_json(items: &[PlacementItem]) -> String {
    let output = serde_json::json!({
        "count": items.len(),
        "items": items,
    });

    serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string())
}
