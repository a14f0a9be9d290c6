//! Command-line checker for business-hours windows.
//!
//! ```text
//! check-hours 09:00 18:30
//! check-hours 09:07 18:30 --config hours.toml
//! ```
//!
//! Exits 0 when the window is legal, 1 when it is not, printing a
//! snap-to-grid suggestion for each endpoint that fails the time check.

use anyhow::{bail, Context, Result};

use business_hours::policy::{ConfigError, HoursConfig, HoursPolicy};
use business_hours::services::{correct_time_minutes_with, validate_business_hours_with};

struct Args {
    start: String,
    end: String,
    config_path: Option<String>,
}

fn parse_args() -> Result<Args> {
    let mut positional = Vec::new();
    let mut config_path = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                config_path = Some(
                    args.next()
                        .context("--config requires a path argument")?,
                );
            }
            _ => positional.push(arg),
        }
    }

    if positional.len() != 2 {
        bail!("usage: check-hours START END [--config PATH]");
    }

    let mut positional = positional.into_iter();
    Ok(Args {
        start: positional.next().expect("two positional args"),
        end: positional.next().expect("two positional args"),
        config_path,
    })
}

fn load_policy(config_path: Option<&str>) -> Result<HoursPolicy> {
    match config_path {
        Some(path) => {
            let config = HoursConfig::from_file(path)
                .with_context(|| format!("loading hours policy from {path}"))?;
            Ok(config.to_policy()?)
        }
        None => match HoursConfig::from_default_location() {
            Ok(config) => Ok(config.to_policy()?),
            Err(ConfigError::NotFound) => Ok(HoursPolicy::default()),
            Err(err) => Err(err.into()),
        },
    }
}

fn main() -> Result<()> {
    pretty_env_logger::init();

    let args = parse_args()?;
    let policy = load_policy(args.config_path.as_deref())?;

    match validate_business_hours_with(&policy, &args.start, &args.end) {
        Ok(window) => {
            println!("valid: {} ({} minutes)", window, window.duration_minutes());
            Ok(())
        }
        Err(err) => {
            eprintln!("invalid: {err}");
            for value in [&args.start, &args.end] {
                if !policy.is_valid_time(value) {
                    eprintln!(
                        "  suggestion: {value} -> {}",
                        correct_time_minutes_with(&policy, value)
                    );
                }
            }
            std::process::exit(1);
        }
    }
}
