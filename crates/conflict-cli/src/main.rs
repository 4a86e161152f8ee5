//! `conflicts` CLI — check a course selection for schedule conflicts.
//!
//! Input is a JSON array of selected classrooms (the planner's camelCase
//! shape). Logs go to stderr; results go to stdout or `-o`.
//!
//! ## Usage
//!
//! ```sh
//! # Detect conflicts (stdin → stdout, JSON array)
//! cat selection.json | conflicts detect
//!
//! # From file to file, pretty-printed, rejecting inconsistent input
//! conflicts detect -i selection.json -o conflicts.json --pretty --strict
//!
//! # Human-readable report; exits 2 while conflicts remain
//! conflicts check -i selection.json
//!
//! # List every data problem in a selection
//! conflicts validate -i selection.json
//!
//! # Debug logging (or set RUST_LOG)
//! conflicts --verbose check -i selection.json
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use conflict_engine::{Classroom, ConflictResult, ConflictSummary};
use std::io::{self, IsTerminal, Read};
use std::process;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Exit status of `check` when the selection still has conflicts.
const EXIT_CONFLICTS: i32 = 2;

#[derive(Parser)]
#[command(
    name = "conflicts",
    version,
    about = "Schedule-conflict checker for course selections"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log at debug level (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Detect conflicts and write them as a JSON array
    Detect {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Validate the selection before detecting
        #[arg(long)]
        strict: bool,
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Print a readable conflict report; exit 2 if any conflict remains
    Check {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Validate the selection before detecting
        #[arg(long)]
        strict: bool,
    },
    /// List every validation issue; exit 1 if any is found
    Validate {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Detect {
            input,
            output,
            strict,
            pretty,
        } => {
            let classrooms = load_selection(input.as_deref(), strict)?;
            let conflicts = conflict_engine::detect_conflicts(&classrooms);
            info!(conflicts = conflicts.len(), "detection complete");

            let json = if pretty {
                serde_json::to_string_pretty(&conflicts)?
            } else {
                serde_json::to_string(&conflicts)?
            };
            write_output(output.as_deref(), &json)?;
        }
        Commands::Check { input, strict } => {
            let classrooms = load_selection(input.as_deref(), strict)?;
            let conflicts = conflict_engine::detect_conflicts(&classrooms);
            let summary = ConflictSummary::from_conflicts(&conflicts);

            if summary.can_complete_registration() {
                println!("No conflicts among {} classrooms.", classrooms.len());
            } else {
                for conflict in &conflicts {
                    println!("{}", describe(conflict));
                }
                println!(
                    "{} conflict(s): {} regular-regular, {} makeup-regular, {} makeup-makeup",
                    summary.total,
                    summary.regular_regular,
                    summary.makeup_regular,
                    summary.makeup_makeup
                );
                let ids: Vec<&str> = summary
                    .conflicting_reg_ids
                    .iter()
                    .map(String::as_str)
                    .collect();
                println!("Conflicting classrooms: {}", ids.join(", "));
                process::exit(EXIT_CONFLICTS);
            }
        }
        Commands::Validate { input } => {
            let classrooms = load_selection(input.as_deref(), false)?;
            let issues = conflict_engine::validation_issues(&classrooms);
            if issues.is_empty() {
                println!("Selection is valid ({} classrooms).", classrooms.len());
            } else {
                for issue in &issues {
                    println!("{}", issue);
                }
                process::exit(1);
            }
        }
    }

    Ok(())
}

/// Install the stderr log subscriber. Defaults to `warn` unless `RUST_LOG`
/// is set; `--verbose` forces `debug`.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .init();
}

fn load_selection(path: Option<&str>, strict: bool) -> Result<Vec<Classroom>> {
    let json = read_input(path)?;
    let classrooms =
        conflict_engine::parse_classrooms(&json).context("Failed to parse classroom selection")?;
    info!(classrooms = classrooms.len(), "loaded selection");

    if strict {
        conflict_engine::validate_classrooms(&classrooms)
            .context("Selection failed strict validation")?;
    }
    Ok(classrooms)
}

/// One line per conflict, e.g.
/// `regular-regular  A <-> B  day 2  08:00 - 09:30 (A-101) / 09:00 - 10:00 (B-202)  weeks 1-15`.
fn describe(conflict: &ConflictResult) -> String {
    match conflict {
        ConflictResult::RegularRegular {
            reg_id1,
            reg_id2,
            day_of_week,
            time1,
            time2,
            room1,
            room2,
            overlapping_weeks,
        } => format!(
            "regular-regular  {reg_id1} <-> {reg_id2}  day {day_of_week}  {time1} ({room1}) / {time2} ({room2})  weeks {}",
            format_weeks(overlapping_weeks)
        ),
        ConflictResult::MakeupRegular {
            reg_id1,
            reg_id2,
            date,
            time1,
            time2,
            room1,
            room2,
            makeup_week,
        } => format!(
            "makeup-regular  {reg_id1} <-> {reg_id2}  {date} (week {makeup_week})  {time1} ({room1}) / {time2} ({room2})"
        ),
        ConflictResult::MakeupMakeup {
            reg_id1,
            reg_id2,
            date,
            time1,
            time2,
            room1,
            room2,
        } => format!(
            "makeup-makeup  {reg_id1} <-> {reg_id2}  {date}  {time1} ({room1}) / {time2} ({room2})"
        ),
    }
}

/// Collapse ascending week numbers into runs: `[1, 2, 3, 5]` → `1-3,5`.
fn format_weeks(weeks: &[u32]) -> String {
    let mut runs: Vec<String> = Vec::new();
    let mut iter = weeks.iter().copied().peekable();
    while let Some(start) = iter.next() {
        let mut end = start;
        while iter.peek() == Some(&(end + 1)) {
            end += 1;
            iter.next();
        }
        if start == end {
            runs.push(start.to_string());
        } else {
            runs.push(format!("{}-{}", start, end));
        }
    }
    runs.join(",")
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

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
