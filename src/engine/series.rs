//! Running-balance time series
//!
//! Rebuilds the "budget over time" line from the full expense history: one
//! anchor point at the start date, one point per expense, and a closing
//! point at `now`. Infusions and goals are left out of this series; it
//! tracks accrued allowance against spending only.

use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::Serialize;

use super::calendar::week_count;
use crate::models::{BudgetConfig, Expense, Money};

/// A closing point is skipped when the last point is this close to `now`
pub const TAIL_SUPPRESSION_MINUTES: i64 = 60;

/// One sample of the running balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChartPoint {
    pub at: DateTime<Utc>,
    pub balance: Money,
}

/// Build the chart series
///
/// Returns an empty series when there is no configuration or the weekly
/// amount is zero. Otherwise the points are ordered by instant ascending
/// and each balance is `week_count(start, at) * weekly - expenses so far`.
pub fn build_series<Tz: TimeZone>(
    config: Option<&BudgetConfig>,
    expenses: &[Expense],
    now: &DateTime<Tz>,
) -> Vec<ChartPoint> {
    let Some(config) = config else {
        return Vec::new();
    };
    if config.weekly_amount.is_zero() {
        return Vec::new();
    }

    let zone = now.timezone();
    let allowance_at = |at: &DateTime<Utc>| {
        let local = at.with_timezone(&zone);
        config.weekly_amount * week_count(&config.start_date, &local, config.start_day)
    };

    let mut ordered: Vec<&Expense> = expenses.iter().collect();
    ordered.sort_by_key(|expense| expense.date);

    let mut points = Vec::with_capacity(ordered.len() + 2);
    points.push(ChartPoint {
        at: config.start_date,
        balance: allowance_at(&config.start_date),
    });

    let mut running = Money::zero();
    for expense in ordered {
        running += expense.amount;
        points.push(ChartPoint {
            at: expense.date,
            balance: allowance_at(&expense.date) - running,
        });
    }

    // Expenses dated before the anchor would otherwise precede it out of order
    points.sort_by_key(|point| point.at);

    let now_utc = now.with_timezone(&Utc);
    let cutoff = now_utc - Duration::minutes(TAIL_SUPPRESSION_MINUTES);
    let needs_tail = points.last().map_or(true, |last| last.at < cutoff);
    if needs_tail {
        points.push(ChartPoint {
            at: now_utc,
            balance: allowance_at(&now_utc) - running,
        });
    }

    points
}
