//! Expense CLI commands

use chrono::Utc;
use clap::Subcommand;

use super::parse::{parse_amount, parse_date, parse_optional_date};
use crate::config::settings::Settings;
use crate::display::{format_expense_list, money};
use crate::error::SpendableResult;
use crate::services::{ExpenseChanges, ExpenseService};
use crate::storage::Storage;

#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// Record an expense
    Add {
        /// What the money went on
        name: String,
        /// Amount (e.g. "4.50")
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// When it happened (YYYY-MM-DD or RFC 3339; defaults to now)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// List expenses, newest first
    #[command(alias = "ls")]
    List {
        /// Only expenses on or after this date
        #[arg(short, long)]
        since: Option<String>,
        /// Maximum number of rows
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Change an expense's name, amount or date
    Edit {
        /// Expense ID (full, exp-xxxxxxxx, or a unique prefix)
        id: String,
        #[arg(short, long)]
        name: Option<String>,
        #[arg(short, long, allow_hyphen_values = true)]
        amount: Option<String>,
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Delete an expense
    #[command(alias = "rm")]
    Delete {
        /// Expense ID
        id: String,
    },
}

pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> SpendableResult<()> {
    let service = ExpenseService::new(storage);

    match cmd {
        ExpenseCommands::Add { name, amount, date } => {
            let amount = parse_amount(&amount)?;
            let date = parse_optional_date(date.as_deref())?.map(|d| d.with_timezone(&Utc));
            let expense = service.add(&name, amount, date)?;
            println!(
                "Added expense {}: {} {}",
                expense.id,
                expense.name,
                money(expense.amount, settings)
            );
        }
        ExpenseCommands::List { since, limit } => {
            let mut expenses = match parse_optional_date(since.as_deref())? {
                Some(since) => service.list_since(since.with_timezone(&Utc))?,
                None => service.list()?,
            };
            if let Some(limit) = limit {
                expenses.truncate(limit);
            }
            print!("{}", format_expense_list(&expenses, settings));
            if expenses.is_empty() {
                println!();
            }
        }
        ExpenseCommands::Edit {
            id,
            name,
            amount,
            date,
        } => {
            let changes = ExpenseChanges {
                name,
                amount: amount.as_deref().map(parse_amount).transpose()?,
                date: date
                    .as_deref()
                    .map(parse_date)
                    .transpose()?
                    .map(|d| d.with_timezone(&Utc)),
            };
            let expense = service.update(&id, changes)?;
            println!(
                "Updated expense {}: {} {}",
                expense.id,
                expense.name,
                money(expense.amount, settings)
            );
        }
        ExpenseCommands::Delete { id } => {
            let expense = service.delete(&id)?;
            println!("Deleted expense {} ({})", expense.id, expense.name);
        }
    }

    Ok(())
}
