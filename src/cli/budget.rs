//! Budget CLI commands
//!
//! Onboarding, the budget settings, and the two read-only views built on
//! the engine: the status screen and the chart.

use chrono::{Local, Utc};
use clap::Subcommand;

use super::parse::{parse_amount, parse_optional_date, parse_week_start};
use crate::config::settings::Settings;
use crate::display::{format_chart, format_config, format_status};
use crate::error::{SpendableError, SpendableResult};
use crate::services::BudgetService;
use crate::storage::Storage;

#[derive(Subcommand, Debug)]
pub enum BudgetCommands {
    /// Show the current budget settings
    Show,

    /// Change the weekly amount or week-start day
    Set {
        /// Weekly allowance (e.g. "100" or "100.00")
        #[arg(allow_hyphen_values = true)]
        weekly: String,

        /// Day weeks start on: 1-7 or a name (mon, sunday, ...)
        #[arg(short = 'd', long)]
        start_day: Option<String>,

        /// Restart accrual from today instead of the original start date
        #[arg(long)]
        reset_start: bool,
    },
}

/// `spendable init`
pub fn handle_init(
    storage: &Storage,
    settings: &Settings,
    weekly: &str,
    start_day: Option<&str>,
    start: Option<&str>,
) -> SpendableResult<()> {
    let weekly = parse_amount(weekly)?;
    let start_day = parse_week_start(start_day, settings.default_week_start)?;
    let start = parse_optional_date(start)?.unwrap_or_else(Local::now);

    let config = BudgetService::new(storage).init_budget(
        weekly,
        start_day,
        start.with_timezone(&Utc),
    )?;

    if !storage.paths().settings_file().exists() {
        settings.save(storage.paths())?;
    }

    println!("Budget created at: {}", storage.paths().base_dir().display());
    println!();
    print!("{}", format_config(&config, settings));
    Ok(())
}

pub fn handle_budget_command(
    storage: &Storage,
    settings: &Settings,
    cmd: BudgetCommands,
) -> SpendableResult<()> {
    let service = BudgetService::new(storage);

    match cmd {
        BudgetCommands::Show => {
            let config = service
                .get_config()?
                .ok_or_else(SpendableError::budget_not_configured)?;
            print!("{}", format_config(&config, settings));
        }
        BudgetCommands::Set {
            weekly,
            start_day,
            reset_start,
        } => {
            let weekly = parse_amount(&weekly)?;
            let current_day = service
                .get_config()?
                .map_or(settings.default_week_start, |c| c.start_day);
            let start_day = parse_week_start(start_day.as_deref(), current_day)?;

            let new_start = reset_start.then(Utc::now);
            let config = service.reconfigure(weekly, start_day, new_start)?;

            println!("Budget updated.");
            print!("{}", format_config(&config, settings));
        }
    }

    Ok(())
}

/// `spendable status`: total spendable and what is left this week
pub fn handle_status(
    storage: &Storage,
    settings: &Settings,
    as_of: Option<&str>,
    json: bool,
) -> SpendableResult<()> {
    let now = parse_optional_date(as_of)?.unwrap_or_else(Local::now);
    let summary = BudgetService::new(storage).summary(&now)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print!("{}", format_status(&summary, settings));
    }
    Ok(())
}

/// `spendable chart`
pub fn handle_chart(storage: &Storage, settings: &Settings, as_of: Option<&str>) -> SpendableResult<()> {
    let now = parse_optional_date(as_of)?.unwrap_or_else(Local::now);
    let points = BudgetService::new(storage).chart(&now)?;
    print!("{}", format_chart(&points, settings));
    if points.is_empty() {
        println!();
    }
    Ok(())
}
