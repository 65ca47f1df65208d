//! `roster` CLI — resolve team practice availability from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Resolve one day row (JSON on stdin) against a roster config
//! roster resolve --roster roster.toml < day.json
//!
//! # Same, from a file, emitting the full result as JSON
//! roster resolve --roster roster.toml -i day.json --json
//!
//! # Resolve a JSON array of day rows, one line per day
//! roster week --roster roster.toml -i week.json
//!
//! # Check how a single availability cell is read
//! roster parse "18:00-21:00"
//!
//! # Debug logging to stderr
//! roster -vv resolve --roster roster.toml -i day.json
//! ```
//!
//! The roster config is TOML:
//!
//! ```toml
//! coach = "Coach"
//! mains = ["Ana", "Ben", "Cy", "Dee", "Eli"]
//! subs = ["Sam", "Tia"]
//! ```

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use log::LevelFilter;
use roster_engine::{
    parse_cell, resolve_day, resolve_days, Availability, DayInput, Role, Roster, ScheduleResult,
    ScheduleStatus,
};
use std::io::{self, Read};
use std::process;

#[derive(Parser)]
#[command(
    name = "roster",
    version,
    about = "Resolve team practice availability from roster day rows"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a single day row
    Resolve {
        /// Roster config file (TOML)
        #[arg(short, long)]
        roster: String,
        /// Day row JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Print the full result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Resolve a JSON array of day rows
    Week {
        /// Roster config file (TOML)
        #[arg(short, long)]
        roster: String,
        /// Day rows JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Print the full results as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show how a single availability cell is parsed
    Parse {
        /// The raw cell value, e.g. "18:00-21:00" or "x"
        cell: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    match cli.command {
        Commands::Resolve {
            roster,
            input,
            json,
        } => {
            let roster = load_roster(&roster)?;
            let raw = read_input(input.as_deref())?;
            let day: DayInput =
                serde_json::from_str(&raw).context("Failed to parse day row JSON")?;
            let result = resolve_day(&roster, &day).context("Failed to resolve day")?;

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print_result(&result);
            }
        }
        Commands::Week {
            roster,
            input,
            json,
        } => {
            let roster = load_roster(&roster)?;
            let raw = read_input(input.as_deref())?;
            let days: Vec<DayInput> =
                serde_json::from_str(&raw).context("Failed to parse day rows JSON")?;
            let results = resolve_days(&roster, &days).context("Failed to resolve days")?;

            if json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                for result in &results {
                    print_result(result);
                }
                println!("{}", summary(&results));
            }
        }
        Commands::Parse { cell } => match parse_cell(&cell) {
            Availability::Unavailable => println!("unavailable"),
            Availability::Available { window } => {
                println!("available {} ({} min)", window, window.duration_minutes())
            }
            Availability::Malformed { error } => {
                println!("malformed: {}", error);
                process::exit(2);
            }
        },
    }

    Ok(())
}

fn init_logging(verbose: u8) -> Result<()> {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}][{}] {}",
                record.target(),
                record.level(),
                message
            ))
        })
        .level(level)
        .chain(io::stderr())
        .apply()
        .context("Failed to initialize logging")
}

/// Load and validate the roster config.
fn load_roster(path: &str) -> Result<Roster> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read roster file: {}", path))?;
    let roster: Roster =
        toml::from_str(&text).with_context(|| format!("Failed to parse roster file: {}", path))?;
    roster
        .validate()
        .with_context(|| format!("Invalid roster in {}", path))?;
    log::info!(
        "loaded roster: {} mains, {} subs, coach {}",
        roster.mains.len(),
        roster.subs.len(),
        roster.coach
    );
    Ok(roster)
}

fn print_result(result: &ScheduleResult) {
    println!("{}: {}", result.date_label, result.message);
    if let Some(focus) = &result.focus {
        println!("  focus: {}", focus);
    }
    for warning in &result.warnings {
        println!(
            "  warning: {} ({}) {:?}: {}",
            warning.name,
            role_label(warning.role),
            warning.raw_value,
            warning.error
        );
    }
}

/// One-line tally, e.g. `4 days: 2 full roster, 1 with subs, 0 not enough, 1 off`.
fn summary(results: &[ScheduleResult]) -> String {
    let count = |status: ScheduleStatus| results.iter().filter(|r| r.status == status).count();
    format!(
        "{} days: {} full roster, {} with subs, {} not enough, {} off",
        results.len(),
        count(ScheduleStatus::FullRoster),
        count(ScheduleStatus::WithSubs),
        count(ScheduleStatus::NotEnough),
        count(ScheduleStatus::OffDay)
    )
}

fn role_label(role: Role) -> &'static str {
    match role {
        Role::Main => "main",
        Role::Sub => "sub",
        Role::Coach => "coach",
    }
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}
