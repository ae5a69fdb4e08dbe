//! Infusion CLI commands

use chrono::Utc;
use clap::Subcommand;

use super::parse::{parse_amount, parse_optional_date};
use crate::config::settings::Settings;
use crate::display::{format_infusion_list, money};
use crate::error::SpendableResult;
use crate::services::InfusionService;
use crate::storage::Storage;

#[derive(Subcommand, Debug)]
pub enum InfusionCommands {
    /// Add a one-off amount to the spendable pool
    Add {
        /// Amount (e.g. "50")
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Where the money came from
        #[arg(short, long, default_value = "")]
        note: String,
        /// When it arrived (YYYY-MM-DD or RFC 3339; defaults to now)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// List infusions, newest first
    #[command(alias = "ls")]
    List,

    /// Delete an infusion
    #[command(alias = "rm")]
    Delete {
        /// Infusion ID
        id: String,
    },
}

pub fn handle_infusion_command(
    storage: &Storage,
    settings: &Settings,
    cmd: InfusionCommands,
) -> SpendableResult<()> {
    let service = InfusionService::new(storage);

    match cmd {
        InfusionCommands::Add { amount, note, date } => {
            let amount = parse_amount(&amount)?;
            let date = parse_optional_date(date.as_deref())?.map(|d| d.with_timezone(&Utc));
            let infusion = service.add(amount, &note, date)?;
            println!(
                "Added infusion {}: {}",
                infusion.id,
                money(infusion.amount, settings)
            );
        }
        InfusionCommands::List => {
            let infusions = service.list()?;
            print!("{}", format_infusion_list(&infusions, settings));
            if infusions.is_empty() {
                println!();
            }
        }
        InfusionCommands::Delete { id } => {
            let infusion = service.delete(&id)?;
            println!(
                "Deleted infusion {} ({})",
                infusion.id,
                money(infusion.amount, settings)
            );
        }
    }

    Ok(())
}
