//! Status screen and configuration view

use super::{date, money};
use crate::config::Settings;
use crate::engine::BudgetSummary;
use crate::models::BudgetConfig;

/// The home screen: the two headline figures, then the inputs behind them
pub fn format_status(summary: &BudgetSummary, settings: &Settings) -> String {
    if !summary.configured {
        return "No budget configured. Run `spendable init <weekly-amount>` to start.".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "Spendable:        {:>12}\n",
        money(summary.total_spendable, settings)
    ));
    output.push_str(&format!(
        "Left this week:   {:>12}  of {}\n",
        money(summary.weekly_remaining, settings),
        money(summary.weekly_amount, settings)
    ));
    output.push_str(&format!("{}\n", "-".repeat(40)));

    if let Some(week_start) = &summary.week_start {
        output.push_str(&format!("Week started:     {:>12}\n", date(week_start, settings)));
    }
    output.push_str(&format!("Weeks counted:    {:>12}\n", summary.weeks_elapsed));
    output.push_str(&format!(
        "Spent this week:  {:>12}\n",
        money(summary.spent_this_week, settings)
    ));
    output.push_str(&format!(
        "Total expenses:   {:>12}\n",
        money(summary.total_expenses, settings)
    ));
    output.push_str(&format!(
        "Total infusions:  {:>12}\n",
        money(summary.total_infusions, settings)
    ));
    output.push_str(&format!(
        "Saved in goals:   {:>12}\n",
        money(summary.total_goals_funded, settings)
    ));

    if summary.weeks_elapsed <= 0 {
        output.push_str("\nNote: the budget start date is in a later week than today.\n");
    }

    output
}

pub fn format_config(config: &BudgetConfig, settings: &Settings) -> String {
    format!(
        "Weekly amount:  {}\nWeek starts on: {}\nAccruing since: {}\nLast changed:   {}\n",
        money(config.weekly_amount, settings),
        config.start_day.name(),
        date(&config.start_date, settings),
        date(&config.updated_at, settings),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::summarize;
    use crate::models::{Expense, Money, WeekStart};
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_unconfigured_status() {
        let now = Utc.with_ymd_and_hms(2024, 1, 3, 12, 0, 0).unwrap();
        let summary = summarize(None, &[], &[], &[], &now);
        let output = format_status(&summary, &Settings::default());
        assert!(output.contains("spendable init"));
    }

    #[test]
    fn test_status_shows_headlines() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let now = Utc.with_ymd_and_hms(2024, 1, 3, 12, 0, 0).unwrap();
        let config = BudgetConfig::new(Money::from_units(100), start, WeekStart::MONDAY);
        let expenses = vec![Expense::with_date("Coffee", Money::from_units(40), now)];

        let summary = summarize(Some(&config), &expenses, &[], &[], &now);
        let output = format_status(&summary, &Settings::default());

        assert!(output.contains("Spendable:"));
        assert!(output.contains("$60.00"));
        assert!(output.contains("of $100.00"));
        assert!(!output.contains("later week"));
    }

    #[test]
    fn test_config_view() {
        let start = Utc.with_ymd_and_hms(2024, 1, 7, 12, 0, 0).unwrap();
        let config = BudgetConfig::new(Money::from_units(75), start, WeekStart::SUNDAY);
        let output = format_config(&config, &Settings::default());
        assert!(output.contains("$75.00"));
        assert!(output.contains("Sunday"));
    }
}
