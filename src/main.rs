use anyhow::Result;
use clap::{Parser, Subcommand};

use spendable::cli::{
    handle_audit, handle_budget_command, handle_chart, handle_expense_command,
    handle_export_command, handle_goal_command, handle_infusion_command, handle_init,
    handle_status,
};
use spendable::config::{paths::SpendablePaths, settings::Settings};
use spendable::logging;
use spendable::storage::Storage;

#[derive(Parser)]
#[command(
    name = "spendable",
    version,
    about = "Weekly allowance budgeting",
    long_about = "Spendable tracks a weekly allowance. Each week that has started adds \
                  your weekly amount to the pool; expenses and goal funding spend it, \
                  infusions top it up."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the budget with a weekly amount
    Init {
        /// Weekly allowance (e.g. "100")
        weekly: String,
        /// Day weeks start on: 1-7 or a name
        #[arg(short = 'd', long)]
        start_day: Option<String>,
        /// Accrual start date (YYYY-MM-DD; defaults to today)
        #[arg(short, long)]
        start: Option<String>,
    },

    /// Show current configuration and paths
    Config,

    /// Budget settings
    #[command(subcommand)]
    Budget(spendable::cli::BudgetCommands),

    /// Total spendable and what is left this week
    Status {
        /// Evaluate as of this date instead of now
        #[arg(long)]
        as_of: Option<String>,
        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Expense management
    #[command(subcommand, alias = "exp")]
    Expense(spendable::cli::ExpenseCommands),

    /// Infusion management
    #[command(subcommand)]
    Infusion(spendable::cli::InfusionCommands),

    /// Savings goals
    #[command(subcommand)]
    Goal(spendable::cli::GoalCommands),

    /// Running balance over time
    Chart {
        /// Evaluate as of this date instead of now
        #[arg(long)]
        as_of: Option<String>,
    },

    /// Export data as CSV
    #[command(subcommand)]
    Export(spendable::cli::ExportCommands),

    /// Show recent changes from the audit log
    Audit {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "20")]
        limit: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = SpendablePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    logging::init_tracing(&settings.log_filter);

    let storage = Storage::open(paths.clone())?;
    tracing::debug!(base = %paths.base_dir().display(), "storage opened");

    match cli.command {
        Some(Commands::Init {
            weekly,
            start_day,
            start,
        }) => {
            handle_init(
                &storage,
                &settings,
                &weekly,
                start_day.as_deref(),
                start.as_deref(),
            )?;
        }
        Some(Commands::Config) => {
            println!("Spendable Configuration");
            println!("=======================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Data directory:  {}", paths.data_dir().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!("Audit log:       {}", paths.audit_log().display());
            println!();
            println!("Currency symbol: {}", settings.currency_symbol);
            println!("Date format:     {}", settings.date_format);
            println!("Week starts on:  {}", settings.default_week_start);
            println!("Log filter:      {}", settings.log_filter);
            println!();
            println!(
                "Budget configured: {}",
                if storage.is_initialized() { "yes" } else { "no" }
            );
        }
        Some(Commands::Budget(cmd)) => handle_budget_command(&storage, &settings, cmd)?,
        Some(Commands::Status { as_of, json }) => {
            handle_status(&storage, &settings, as_of.as_deref(), json)?;
        }
        Some(Commands::Expense(cmd)) => handle_expense_command(&storage, &settings, cmd)?,
        Some(Commands::Infusion(cmd)) => handle_infusion_command(&storage, &settings, cmd)?,
        Some(Commands::Goal(cmd)) => handle_goal_command(&storage, &settings, cmd)?,
        Some(Commands::Chart { as_of }) => handle_chart(&storage, &settings, as_of.as_deref())?,
        Some(Commands::Export(cmd)) => handle_export_command(&storage, cmd)?,
        Some(Commands::Audit { limit }) => handle_audit(&storage, limit)?,
        None => {
            println!("Spendable - weekly allowance budgeting");
            println!();
            println!("Run 'spendable --help' for usage information.");
            println!("Run 'spendable init <weekly-amount>' to get started.");
        }
    }

    Ok(())
}
