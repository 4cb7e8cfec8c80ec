mod cli;
mod logging;

use std::process;

use anyhow::{Context, Result};
use chrono::{Datelike, Local, NaiveDate};
use clap::Parser;
use tracing::info;

use vacationsplit::configuration::Configuration;
use vacationsplit::planner::allocationerror::AllocationError;
use vacationsplit::planner::periodallocator::allocate_with_source;
use vacationsplit::planner::vacationperiod::VacationPeriod;
use vacationsplit::time::calendar::holidaycalendarmanager::HolidayCalendarManager;
use vacationsplit::time::calendar::holidayset::HolidaySet;
use vacationsplit::time::rangeofdates::RangeOfDates;

use crate::cli::{Cli, Command, HolidaysArgs, PlanArgs};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Plan(args) => plan(args),
        Command::Holidays(args) => holidays(args),
    }
}

fn plan(args: PlanArgs) -> Result<()> {
    let config = Configuration::from_file(&args.config)
        .with_context(|| format!("reading plan {}", args.config.display()))?;
    let calendars = HolidayCalendarManager::from_file(&args.calendars)
        .with_context(|| format!("reading calendars {}", args.calendars.display()))?;
    let source = calendars.calendar(&config.country_code, config.region_code.as_deref())?;

    let periods = match allocate_with_source(&config, source.as_ref()) {
        Err(AllocationError::InfeasibleConstraints { feasible_period_count, .. })
            if args.adjust && feasible_period_count > 0 => {
            info!(feasible_period_count, "re-running with the feasible period count");
            println!("Minimum lengths exceed the budget; using {feasible_period_count} period(s) instead.");
            allocate_with_source(&config.with_period_count(feasible_period_count), source.as_ref())?
        },
        result => result?
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&periods)?);
    } else {
        print_periods(&periods);
    }
    Ok(())
}

fn print_periods(periods: &[VacationPeriod]) {
    println!("{:>3}  {:<10}  {:<10}  {:>6}  {:<10}  {:<10}  {:>8}",
             "#", "from", "to", "days", "off from", "off to", "days off");
    for (i, p) in periods.iter().enumerate() {
        println!("{:>3}  {:<10}  {:<10}  {:>6}  {:<10}  {:<10}  {:>8}",
                 i + 1,
                 p.worked_start(),
                 p.worked_end(),
                 p.worked_day_count(),
                 p.extended_start(),
                 p.extended_end(),
                 p.total_days_off());
    }
}

fn holidays(args: HolidaysArgs) -> Result<()> {
    let calendars = HolidayCalendarManager::from_file(&args.calendars)
        .with_context(|| format!("reading calendars {}", args.calendars.display()))?;

    let Some(country) = args.country else {
        for country in calendars.countries() {
            let regions = calendars.regions(&country);
            if regions.is_empty() {
                println!("{country}");
            } else {
                println!("{country}: {}", regions.join(", "));
            }
        }
        return Ok(());
    };

    let year = Local::now().date_naive().year();
    let from = args.from.or_else(|| NaiveDate::from_ymd_opt(year, 1, 1)).context("invalid start date")?;
    let to = args.to.or_else(|| NaiveDate::from_ymd_opt(year, 12, 31)).context("invalid end date")?;
    let window = RangeOfDates::new(from, to);

    let source = calendars.calendar(&country, args.region.as_deref())?;
    let holiday_set = HolidaySet::from_source(source.as_ref(), &window);
    for holiday in holiday_set.holidays().iter().filter(|h| window.contain(h.date())) {
        println!("{}  {:<3}  {}", holiday.date(), holiday.date().weekday(), holiday.name());
    }
    Ok(())
}
