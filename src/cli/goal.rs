//! Goal CLI commands

use clap::Subcommand;

use super::parse::parse_amount;
use crate::config::settings::Settings;
use crate::display::{format_goal_list, money};
use crate::error::{SpendableError, SpendableResult};
use crate::services::GoalService;
use crate::storage::Storage;

#[derive(Subcommand, Debug)]
pub enum GoalCommands {
    /// Create a savings goal
    Add {
        /// What you are saving for
        title: String,
        /// Target amount
        #[arg(allow_hyphen_values = true)]
        target: String,
    },

    /// Put money towards a goal
    Fund {
        /// Goal ID
        id: String,
        /// Amount to move out of the spendable pool
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Allow funding past the target
        #[arg(short, long)]
        force: bool,
    },

    /// List goals and their progress
    #[command(alias = "ls")]
    List,

    /// Delete a goal, returning its funds to the spendable pool
    #[command(alias = "rm")]
    Delete {
        /// Goal ID
        id: String,
    },
}

pub fn handle_goal_command(
    storage: &Storage,
    settings: &Settings,
    cmd: GoalCommands,
) -> SpendableResult<()> {
    let service = GoalService::new(storage);

    match cmd {
        GoalCommands::Add { title, target } => {
            let target = parse_amount(&target)?;
            let goal = service.add(&title, target)?;
            println!(
                "Created goal {}: {} (target {})",
                goal.id,
                goal.title,
                money(goal.target_amount, settings)
            );
        }
        GoalCommands::Fund { id, amount, force } => {
            let amount = parse_amount(&amount)?;
            let current = service.find(&id)?;
            if !force && current.funded_amount + amount > current.target_amount {
                return Err(SpendableError::Validation(format!(
                    "Funding {} would exceed the target of '{}' ({} still needed); use --force to fund anyway",
                    money(amount, settings),
                    current.title,
                    money(current.remaining(), settings)
                )));
            }

            let goal = service.fund(&current.id.as_uuid().to_string(), amount)?;
            println!(
                "Funded {}: {} of {} ({}%)",
                goal.title,
                money(goal.funded_amount, settings),
                money(goal.target_amount, settings),
                goal.progress_percent()
            );
        }
        GoalCommands::List => {
            let goals = service.list()?;
            print!("{}", format_goal_list(&goals, settings));
            if goals.is_empty() {
                println!();
            }
        }
        GoalCommands::Delete { id } => {
            let goal = service.delete(&id)?;
            println!(
                "Deleted goal {} ({}); {} returned to spendable",
                goal.id,
                goal.title,
                money(goal.funded_amount, settings)
            );
        }
    }

    Ok(())
}
