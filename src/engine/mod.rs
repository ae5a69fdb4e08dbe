//! Budget calculation engine
//!
//! Pure, side-effect-free functions over immutable inputs:
//!
//! - `calendar`: week alignment and week counting for a configurable
//!   week-start day
//! - `accrual`: total spendable and weekly remaining
//! - `series`: the running-balance chart series
//!
//! None of these own state, so they can be called from any thread without
//! coordination. Time zones come in through the `DateTime` arguments.

pub mod accrual;
pub mod calendar;
pub mod series;

pub use accrual::{
    accrued_allowance, current_week_start, spent_since, summarize, total_spendable,
    weekly_remaining, weeks_elapsed, BudgetSummary,
};
pub use calendar::{local_midnight, start_of_week_containing, week_count, week_start_utc};
pub use series::{build_series, ChartPoint};
