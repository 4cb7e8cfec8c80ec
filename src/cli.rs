use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// Splits a vacation budget into periods that bridge weekends and holidays.
#[derive(Parser)]
#[command(name = "vacationsplit", version, about = "Vacation period planner")]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Place the vacation periods of a plan file.
    Plan(PlanArgs),
    /// List the holidays of a country or region.
    Holidays(HolidaysArgs),
}

#[derive(clap::Args)]
pub struct PlanArgs {
    /// Path to the JSON plan configuration.
    #[arg(short, long, default_value = "data/plan.json")]
    pub config: PathBuf,

    /// Path to the JSON holiday calendars.
    #[arg(long, default_value = "data/calendars.json")]
    pub calendars: PathBuf,

    /// Re-run with the feasible period count when the minimums exceed the budget.
    #[arg(long)]
    pub adjust: bool,

    /// Print the periods as JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

#[derive(clap::Args)]
pub struct HolidaysArgs {
    /// Path to the JSON holiday calendars.
    #[arg(long, default_value = "data/calendars.json")]
    pub calendars: PathBuf,

    /// Country code, e.g. BR.
    #[arg(long)]
    pub country: Option<String>,

    /// Region code within the country, e.g. SP.
    #[arg(long)]
    pub region: Option<String>,

    /// First day listed (YYYY-MM-DD).
    #[arg(long)]
    pub from: Option<NaiveDate>,

    /// Last day listed (YYYY-MM-DD).
    #[arg(long)]
    pub to: Option<NaiveDate>,
}
