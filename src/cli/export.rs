//! CLI commands for data export

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use chrono::Local;
use clap::Subcommand;

use super::parse::parse_optional_date;
use crate::error::SpendableResult;
use crate::export::{export_chart_csv, export_expenses_csv};
use crate::services::{BudgetService, ExpenseService};
use crate::storage::Storage;

#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Export every expense as CSV
    Expenses {
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export the running-balance series as CSV
    Chart {
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Evaluate the series at this date instead of now
        #[arg(long)]
        as_of: Option<String>,
    },
}

pub fn handle_export_command(storage: &Storage, cmd: ExportCommands) -> SpendableResult<()> {
    match cmd {
        ExportCommands::Expenses { output } => {
            let expenses = ExpenseService::new(storage).list()?;
            let written = with_output(output.as_ref(), |w| export_expenses_csv(&expenses, w))?;
            report(output.as_ref(), written, "expenses");
        }
        ExportCommands::Chart { output, as_of } => {
            let now = parse_optional_date(as_of.as_deref())?.unwrap_or_else(Local::now);
            let points = BudgetService::new(storage).chart(&now)?;
            let written = with_output(output.as_ref(), |w| export_chart_csv(&points, w))?;
            report(output.as_ref(), written, "chart points");
        }
    }

    Ok(())
}

fn with_output<F>(output: Option<&PathBuf>, write: F) -> SpendableResult<usize>
where
    F: FnOnce(&mut dyn Write) -> SpendableResult<usize>,
{
    match output {
        Some(path) => {
            let mut file = BufWriter::new(File::create(path)?);
            let written = write(&mut file)?;
            file.flush()?;
            Ok(written)
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            write(&mut handle)
        }
    }
}

// Confirmation goes to stderr so stdout stays pure CSV.
fn report(output: Option<&PathBuf>, written: usize, what: &str) {
    if let Some(path) = output {
        eprintln!("Exported {} {} to {}", written, what, path.display());
    }
}
