//! Display formatting for terminal output
//!
//! Plain-text tables and summaries. Money uses the configured currency
//! symbol; dates are shown in the local zone with the configured format.

pub mod chart;
pub mod ledger;
pub mod summary;

pub use chart::format_chart;
pub use ledger::{format_expense_list, format_goal_list, format_infusion_list};
pub use summary::{format_config, format_status};

use chrono::{DateTime, Local, Utc};

use crate::config::Settings;
use crate::models::Money;

pub(crate) fn money(amount: Money, settings: &Settings) -> String {
    amount.format_with_symbol(&settings.currency_symbol)
}

pub(crate) fn date(instant: &DateTime<Utc>, settings: &Settings) -> String {
    instant
        .with_timezone(&Local)
        .format(&settings.date_format)
        .to_string()
}

/// Width of the widest cell in a column, but at least `min`
pub(crate) fn column_width<'a>(cells: impl Iterator<Item = &'a str>, min: usize) -> usize {
    cells.map(|c| c.chars().count()).max().unwrap_or(min).max(min)
}
