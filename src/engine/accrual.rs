//! Budget accrual
//!
//! Turns the configuration plus aggregate sums into the two headline
//! figures. Nothing here is cached; every call recomputes from the sums it
//! is handed.

use chrono::{DateTime, TimeZone, Utc};
use serde::Serialize;

use super::calendar::{start_of_week_containing, week_count};
use crate::models::{BudgetConfig, Expense, Goal, Infusion, Money};

/// Aligned weeks elapsed since the configuration's start, inclusive
///
/// Zero or negative when the start date lies in a later week than `now`.
pub fn weeks_elapsed<Tz: TimeZone>(config: &BudgetConfig, now: &DateTime<Tz>) -> i64 {
    week_count(&config.start_date, now, config.start_day)
}

/// Allowance issued so far: `weeks_elapsed * weekly_amount`
pub fn accrued_allowance<Tz: TimeZone>(config: &BudgetConfig, now: &DateTime<Tz>) -> Money {
    config.weekly_amount * weeks_elapsed(config, now)
}

/// Total money that can still be spent
///
/// `weeks * weekly_amount + infusions - expenses - goals_funded`, or zero
/// when no budget has been configured. A start date in the future yields a
/// non-positive week count, which flows straight through the arithmetic.
pub fn total_spendable<Tz: TimeZone>(
    config: Option<&BudgetConfig>,
    total_expenses: Money,
    total_infusions: Money,
    total_goals_funded: Money,
    now: &DateTime<Tz>,
) -> Money {
    let Some(config) = config else {
        return Money::zero();
    };

    accrued_allowance(config, now) + total_infusions - total_expenses - total_goals_funded
}

/// Start of the week that contains `now`, for the configured week-start day
pub fn current_week_start<Tz: TimeZone>(
    config: Option<&BudgetConfig>,
    now: &DateTime<Tz>,
) -> Option<DateTime<Tz>> {
    config.map(|config| start_of_week_containing(now, config.start_day))
}

/// Sum of expense amounts dated at or after `since`
pub fn spent_since<Tz: TimeZone>(expenses: &[Expense], since: &DateTime<Tz>) -> Money {
    let since = since.with_timezone(&Utc);
    expenses
        .iter()
        .filter(|expense| expense.date >= since)
        .map(|expense| expense.amount)
        .sum()
}

/// What is left of this week's allotment
///
/// Infusions and goals do not touch the weekly cadence; only expenses
/// since the current week start (see [`current_week_start`]) count.
pub fn weekly_remaining(config: Option<&BudgetConfig>, spent_since_week_start: Money) -> Money {
    match config {
        Some(config) => config.weekly_amount - spent_since_week_start,
        None => Money::zero(),
    }
}

/// Every headline figure at one instant
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BudgetSummary {
    pub configured: bool,
    pub weekly_amount: Money,
    pub weeks_elapsed: i64,
    pub week_start: Option<DateTime<Utc>>,
    pub spent_this_week: Money,
    pub weekly_remaining: Money,
    pub total_expenses: Money,
    pub total_infusions: Money,
    pub total_goals_funded: Money,
    pub total_spendable: Money,
}

/// Compute the full summary from the raw collections
pub fn summarize<Tz: TimeZone>(
    config: Option<&BudgetConfig>,
    expenses: &[Expense],
    infusions: &[Infusion],
    goals: &[Goal],
    now: &DateTime<Tz>,
) -> BudgetSummary {
    let total_expenses: Money = expenses.iter().map(|e| e.amount).sum();
    let total_infusions: Money = infusions.iter().map(|i| i.amount).sum();
    let total_goals_funded: Money = goals.iter().map(|g| g.funded_amount).sum();

    let week_start = current_week_start(config, now);
    let spent_this_week = week_start
        .as_ref()
        .map_or(Money::zero(), |start| spent_since(expenses, start));

    BudgetSummary {
        configured: config.is_some(),
        weekly_amount: config.map_or(Money::zero(), |c| c.weekly_amount),
        weeks_elapsed: config.map_or(0, |c| weeks_elapsed(c, now)),
        week_start: week_start.map(|start| start.with_timezone(&Utc)),
        spent_this_week,
        weekly_remaining: weekly_remaining(config, spent_this_week),
        total_expenses,
        total_infusions,
        total_goals_funded,
        total_spendable: total_spendable(
            config,
            total_expenses,
            total_infusions,
            total_goals_funded,
            now,
        ),
    }
}
