//! CLI argument parsing

#[derive(Debug, Clone)]
pub struct CliArgs {
    pub command: Command,
}

#[derive(Debug, Clone)]
pub enum Command {
    Status(StatusArgs),
    Overlay(OverlayArgs),
}

#[derive(Debug, Clone)]
pub struct StatusArgs {
    pub enrolled_at: String,
    pub unit: i64,
    pub total_units: Option<u32>,
    pub digits: String,
    pub watch: bool,
    pub ticks: Option<u64>,
    pub json: bool,
}

#[derive(Debug, Clone)]
pub struct OverlayArgs {
    pub count: usize,
    pub viewport: String,
    pub min_size: f64,
    pub max_size: f64,
    pub seed: Option<u64>,
    pub json: bool,
}

impl Default for StatusArgs {
    fn default() -> Self {
        Self {
            enrolled_at: String::new(),
            unit: 0,
            total_units: None,
            digits: "western".to_string(),
            watch: false,
            ticks: None,
            json: false,
        }
    }
}

impl Default for OverlayArgs {
    fn default() -> Self {
        Self {
            count: 0,
            viewport: "wide".to_string(),
            min_size: 24.0,
            max_size: 64.0,
            seed: None,
            json: false,
        }
    }
}

/// Parse command line arguments
pub fn parse_args(args: &[String]) -> Result<CliArgs, String> {
    if args.len() < 2 {
        return Err("No command specified".to_string());
    }

    let command = match args[1].as_str() {
        "status" => {
            let status_args = parse_status_args(&args[2..])?;
            Command::Status(status_args)
        }
        "overlay" => {
            let overlay_args = parse_overlay_args(&args[2..])?;
            Command::Overlay(overlay_args)
        }
        _ => return Err(format!("Unknown command: {}", args[1])),
    };

    Ok(CliArgs { command })
}

fn parse_status_args(args: &[String]) -> Result<StatusArgs, String> {
    let mut status_args = StatusArgs::default();
    let mut i = 0;

    while i < args.len() {
        match args[i].as_str() {
            "--unit" => {
                i += 1;
                if i >= args.len() {
                    return Err("--unit requires a value".to_string());
                }
                status_args.unit = args[i]
                    .parse()
                    .map_err(|_| "--unit must be an integer".to_string())?;
            }
            "--total-units" => {
                i += 1;
                if i >= args.len() {
                    return Err("--total-units requires a value".to_string());
                }
                status_args.total_units = Some(
                    args[i]
                        .parse()
                        .map_err(|_| "--total-units must be a non-negative integer".to_string())?,
                );
            }
            "--digits" => {
                i += 1;
                if i >= args.len() {
                    return Err("--digits requires a value".to_string());
                }
                status_args.digits.clone_from(&args[i]);
            }
            "--watch" => {
                status_args.watch = true;
            }
            "--ticks" => {
                i += 1;
                if i >= args.len() {
                    return Err("--ticks requires a value".to_string());
                }
                let ticks: u64 = args[i]
                    .parse()
                    .map_err(|_| "--ticks must be a positive integer".to_string())?;
                if ticks == 0 {
                    return Err("--ticks must be greater than zero".to_string());
                }
                status_args.ticks = Some(ticks);
            }
            "--json" => {
                status_args.json = true;
            }
            arg if !arg.starts_with("--") => {
                if status_args.enrolled_at.is_empty() {
                    status_args.enrolled_at = arg.to_string();
                } else {
                    return Err(format!("Unexpected argument: {arg}"));
                }
            }
            _ => return Err(format!("Unknown option: {}", args[i])),
        }
        i += 1;
    }

    if status_args.enrolled_at.is_empty() {
        return Err("Missing required argument: ENROLLED_AT".to_string());
    }

    Ok(status_args)
}

fn parse_overlay_args(args: &[String]) -> Result<OverlayArgs, String> {
    let mut overlay_args = OverlayArgs::default();
    let mut count_set = false;
    let mut i = 0;

    while i < args.len() {
        match args[i].as_str() {
            "--viewport" => {
                i += 1;
                if i >= args.len() {
                    return Err("--viewport requires a value".to_string());
                }
                overlay_args.viewport.clone_from(&args[i]);
            }
            "--min-size" => {
                i += 1;
                if i >= args.len() {
                    return Err("--min-size requires a value".to_string());
                }
                overlay_args.min_size = args[i]
                    .parse()
                    .map_err(|_| "--min-size must be a number".to_string())?;
            }
            "--max-size" => {
                i += 1;
                if i >= args.len() {
                    return Err("--max-size requires a value".to_string());
                }
                overlay_args.max_size = args[i]
                    .parse()
                    .map_err(|_| "--max-size must be a number".to_string())?;
            }
            "--seed" => {
                i += 1;
                if i >= args.len() {
                    return Err("--seed requires a value".to_string());
                }
                overlay_args.seed = Some(
                    args[i]
                        .parse()
                        .map_err(|_| "--seed must be a non-negative integer".to_string())?,
                );
            }
            "--json" => {
                overlay_args.json = true;
            }
            arg if !arg.starts_with("--") => {
                if count_set {
                    return Err(format!("Unexpected argument: {arg}"));
                }
                overlay_args.count = arg
                    .parse()
                    .map_err(|_| "COUNT must be a non-negative integer".to_string())?;
                count_set = true;
            }
            _ => return Err(format!("Unknown option: {}", args[i])),
        }
        i += 1;
    }

    if !count_set {
        return Err("Missing required argument: COUNT".to_string());
    }

    Ok(overlay_args)
}
