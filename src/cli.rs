use chrono::{Local, NaiveDate};
use clap::error::ErrorKind;
use clap::Parser;
use pension_planner::config::AppConfig;
use pension_planner::error::AppError;
use pension_planner::roster::{
    render_json, roster_listing, seed_roster, upcoming_enrollees, ReportError, Roster,
    RosterImporter,
};
use pension_planner::telemetry;
use serde::Serialize;
use std::ffi::OsString;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub(crate) const USAGE: &str = "Usage: employee-pension-planner [list|upcoming]";

#[derive(Parser, Debug)]
#[command(
    name = "employee-pension-planner",
    about = "Report on employee pension-plan enrollment",
    version
)]
pub(crate) struct Cli {
    /// Report to run: `list` or `upcoming` (case-insensitive)
    command: Option<String>,
    /// Evaluation date for the upcoming report (defaults to today)
    #[arg(long, value_parser = parse_date)]
    today: Option<NaiveDate>,
    /// CSV roster to report on instead of the built-in employees
    #[arg(long)]
    roster: Option<PathBuf>,
    /// Anything after the command is accepted and ignored
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    rest: Vec<String>,
}

/// Outcome of reading the command line.
#[derive(Debug)]
pub(crate) enum Invocation {
    Report(Cli),
    Usage,
}

/// Parses arguments, turning anything unrecognized into the usage fallback.
/// Help, version and malformed option values still surface as clap errors.
pub(crate) fn parse_invocation<I, T>(args: I) -> Result<Invocation, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => Ok(Invocation::Report(cli)),
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion | ErrorKind::ValueValidation => {
                Err(err)
            }
            _ => Ok(Invocation::Usage),
        },
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ReportCommand {
    List,
    Upcoming,
}

impl ReportCommand {
    pub(crate) fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "list" => Some(Self::List),
            "upcoming" => Some(Self::Upcoming),
            _ => None,
        }
    }
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = match parse_invocation(std::env::args_os()) {
        Ok(Invocation::Report(cli)) => cli,
        Ok(Invocation::Usage) => {
            println!("{USAGE}");
            return Ok(());
        }
        Err(err) => err.exit(),
    };
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    info!(?config.environment, "pension planner starting");

    let stdout = io::stdout();
    let stderr = io::stderr();
    execute(cli, &config, &mut stdout.lock(), &mut stderr.lock())
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

fn load_roster(path: Option<&Path>) -> Result<Roster, AppError> {
    let roster = match path {
        Some(path) => {
            info!(path = %path.display(), "loading roster from CSV");
            RosterImporter::from_path(path)?
        }
        None => seed_roster(),
    };
    info!(employees = roster.len(), "roster loaded");
    Ok(roster)
}

fn execute<O, E>(cli: Cli, config: &AppConfig, out: &mut O, err: &mut E) -> Result<(), AppError>
where
    O: Write,
    E: Write,
{
    let Some(command) = cli.command.as_deref().and_then(ReportCommand::parse) else {
        writeln!(out, "{USAGE}")?;
        return Ok(());
    };
    if !cli.rest.is_empty() {
        debug!(ignored = ?cli.rest, "ignoring arguments after the command");
    }

    let roster_path = cli.roster.as_deref().or(config.roster.csv_path.as_deref());
    let roster = load_roster(roster_path)?;

    match command {
        ReportCommand::List => emit(&roster_listing(&roster), out, err),
        ReportCommand::Upcoming => {
            let today = cli.today.unwrap_or_else(|| Local::now().date_naive());
            let report = upcoming_enrollees(&roster, today);
            if let Some(window) = report.window {
                info!(
                    %today,
                    start = %window.start,
                    end = %window.end,
                    matches = report.employees.len(),
                    "evaluated upcoming enrollment window"
                );
            }
            emit(&report.employees, out, err)
        }
    }
}

/// Writes the report to `out`. Serialization failures are reported once on
/// `err` and do not fail the process.
fn emit<T, O, E>(value: &T, out: &mut O, err: &mut E) -> Result<(), AppError>
where
    T: Serialize + ?Sized,
    O: Write,
    E: Write,
{
    match render_json(value, &mut *out) {
        Ok(()) => Ok(()),
        Err(failure @ ReportError::Serialize(_)) => {
            writeln!(err, "{failure}")?;
            Ok(())
        }
        Err(other) => Err(other.into()),
    }
}
