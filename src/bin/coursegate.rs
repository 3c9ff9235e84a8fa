//! Course unit access CLI - Main binary entry point

use coursegate::cli::args::{Command, OverlayArgs, StatusArgs, parse_args};
use coursegate::cli::output::{format_overlay_json, format_status_json, print_overlay, print_status};
use coursegate::models::TimerState;
use coursegate::runtime::{CountdownDriver, CountdownParams, SystemClock};
use coursegate::services::format::DigitStyle;
use coursegate::services::placement;
use coursegate::{SizeRange, ViewportClass};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::process;
use std::str::FromStr;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc;

fn main() {
    // Initialize logger (controlled by RUST_LOG environment variable)
    // Example: RUST_LOG=debug coursegate status 2025-01-06T00:00:00Z
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_help();
        return;
    }

    match args[1].as_str() {
        "--help" | "-h" => {
            print_help();
            return;
        }
        "--version" | "-v" => {
            print_version();
            return;
        }
        _ => {}
    }

    // Parse arguments
    let cli_args = match parse_args(&args) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Use --help for usage information");
            process::exit(2);
        }
    };

    // Execute command
    let exit_code = match &cli_args.command {
        Command::Status(status_args) => handle_status(status_args),
        Command::Overlay(overlay_args) => handle_overlay(overlay_args),
    };

    process::exit(exit_code);
}

fn handle_status(args: &StatusArgs) -> i32 {
    let digits = match DigitStyle::from_str(&args.digits) {
        Ok(style) => style,
        Err(err) => {
            eprintln!("Error: {err}");
            return 2;
        }
    };

    if args.watch {
        return run_watch(args, digits);
    }

    let state = coursegate::unit_status(&args.enrolled_at, args.unit, args.total_units);
    emit_status(&state, digits, args.json);

    if state.is_unavailable() { 3 } else { 0 }
}

fn emit_status(state: &TimerState, digits: DigitStyle, json: bool) {
    if json {
        println!("{}", format_status_json(state, &digits));
    } else {
        print_status(state, &digits);
    }
}

/// Re-render the countdown every second until interrupted, or until the
/// requested number of refreshes when `--ticks` is given.
fn run_watch(args: &StatusArgs, digits: DigitStyle) -> i32 {
    let params = CountdownParams {
        enrollment: args.enrolled_at.clone(),
        unit_index: args.unit,
        total_units: args.total_units,
    };

    let (done_tx, done_rx) = mpsc::channel::<()>();
    let budget = args.ticks;
    let emitted = Arc::new(AtomicU64::new(0));
    let seen = Arc::clone(&emitted);
    let json = args.json;

    let mut driver = CountdownDriver::new(SystemClock);
    driver.set_params(params, move |state| {
        emit_status(&state, digits, json);
        if let Some(limit) = budget {
            if seen.fetch_add(1, Ordering::Relaxed) + 1 >= limit {
                let _ = done_tx.send(());
            }
        }
    });

    // Blocks until the tick budget is spent; without --ticks this runs until
    // the process is interrupted.
    let _ = done_rx.recv();
    driver.shutdown();

    0
}

fn handle_overlay(args: &OverlayArgs) -> i32 {
    let viewport = match ViewportClass::from_str(&args.viewport) {
        Ok(class) => class,
        Err(err) => {
            eprintln!("Error: {err}");
            return 2;
        }
    };

    let size_range = match SizeRange::new(args.min_size, args.max_size) {
        Ok(range) => range,
        Err(err) => {
            eprintln!("Error: {err}");
            return 2;
        }
    };

    let mut rng: StdRng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let items = placement::generate(args.count, viewport, size_range, &mut rng);

    if args.json {
        println!("{}", format_overlay_json(&items));
    } else {
        print_overlay(&items);
    }

    0
}

fn print_help() {
    println!("Course unit access CLI (coursegate) - Countdown and overlay placement");
    println!();
    println!("USAGE:");
    println!("    coursegate status <ENROLLED_AT> [OPTIONS]");
    println!("    coursegate overlay <COUNT> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    status    Evaluate a unit's access window and render the countdown");
    println!("    overlay   Generate randomized placements for decorative overlay items");
    println!();
    println!("GLOBAL OPTIONS:");
    println!("    -h, --help                 Show this help message");
    println!("    -v, --version              Show version information");
    println!();
    println!("STATUS OPTIONS:");
    println!("    --unit <N>                Zero-based unit index (default: 0)");
    println!("    --total-units <N>         Total units in the course (default: open-ended)");
    println!("    --digits <STYLE>          Numeral style: western (default) or eastern-arabic");
    println!("    --watch                   Re-render every second");
    println!("    --ticks <N>               With --watch, stop after N refreshes");
    println!("    --json                    Emit machine-readable output");
    println!();
    println!("OVERLAY OPTIONS:");
    println!("    --viewport <CLASS>        Viewport class: wide (default) or compact");
    println!("    --min-size <PX>           Minimum item size in pixels (default: 24)");
    println!("    --max-size <PX>           Maximum item size in pixels (default: 64)");
    println!("    --seed <N>                Seed the random source for reproducible output");
    println!("    --json                    Emit machine-readable output");
    println!();
    println!("EXIT CODES:");
    println!("    0  success");
    println!("    2  invalid arguments");
    println!("    3  countdown unavailable (bad timestamp or no such unit)");
    println!();
    println!("EXAMPLES:");
    println!("    coursegate status 2025-01-06T00:00:00Z --unit 1 --total-units 8");
    println!("    coursegate status 2025-01-06T00:00:00Z --watch --ticks 5");
    println!("    coursegate overlay 12 --viewport compact --seed 7 --json");
}

fn print_version() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_DATE: &str = env!("GIT_DATE");
    const BUILD_TARGET: &str = env!("BUILD_TARGET");

    println!("coursegate {VERSION}");
    println!("Commit: {GIT_HASH} ({GIT_DATE})");
    println!("Target: {BUILD_TARGET}");

    #[cfg(debug_assertions)]
    println!("Build: debug");
    #[cfg(not(debug_assertions))]
    println!("Build: release");
}
