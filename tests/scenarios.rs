//! End-to-end budget scenarios through the services and the facade

use std::sync::Arc;

use chrono::{DateTime, Local, TimeZone, Utc};
use tempfile::TempDir;

use spendable::config::SpendablePaths;
use spendable::models::{Money, WeekStart};
use spendable::observe::{BudgetFacade, Clock, FixedClock};
use spendable::services::{BudgetService, ExpenseService, GoalService, InfusionService};
use spendable::storage::Storage;

fn local_noon(y: i32, m: u32, d: u32) -> DateTime<Local> {
    Local.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
}

fn dollars(units: i64) -> Money {
    Money::from_units(units)
}

/// Weekly 100, starting Monday 2024-01-01
fn monday_budget() -> (TempDir, Storage) {
    let temp_dir = TempDir::new().unwrap();
    let paths = SpendablePaths::with_base_dir(temp_dir.path().to_path_buf());
    let storage = Storage::open(paths).unwrap();

    BudgetService::new(&storage)
        .init_budget(
            dollars(100),
            WeekStart::MONDAY,
            local_noon(2024, 1, 1).with_timezone(&Utc),
        )
        .unwrap();

    (temp_dir, storage)
}

#[test]
fn first_week_accrues_one_allowance() {
    let (_temp, storage) = monday_budget();
    let summary = BudgetService::new(&storage)
        .summary(&local_noon(2024, 1, 1))
        .unwrap();

    assert_eq!(summary.weeks_elapsed, 1);
    assert_eq!(summary.total_spendable, dollars(100));
}

#[test]
fn two_weeks_later_counts_three_weeks() {
    let (_temp, storage) = monday_budget();
    let summary = BudgetService::new(&storage)
        .summary(&local_noon(2024, 1, 15))
        .unwrap();

    assert_eq!(summary.weeks_elapsed, 3);
    assert_eq!(summary.total_spendable, dollars(300));
}

#[test]
fn full_lifecycle_through_the_facade() {
    let (_temp, storage) = monday_budget();
    let clock = Arc::new(FixedClock::new(local_noon(2024, 1, 1)));
    let facade = BudgetFacade::new(&storage, clock);

    let mut spendable = facade.observe_total_spendable();
    let mut remaining = facade.observe_weekly_remaining();
    let mut funded = facade.observe_total_goals_funded();
    assert_eq!(spendable.current(), dollars(100));

    ExpenseService::new(&storage)
        .add("Groceries", dollars(40), Some(local_noon(2024, 1, 1).with_timezone(&Utc)))
        .unwrap();
    assert_eq!(spendable.current(), dollars(60));
    assert_eq!(remaining.current(), dollars(60));

    InfusionService::new(&storage)
        .add(dollars(50), "birthday", Some(local_noon(2024, 1, 1).with_timezone(&Utc)))
        .unwrap();
    let goals = GoalService::new(&storage);
    let goal = goals.add("Bike", dollars(200)).unwrap();
    goals.fund(&goal.id.as_uuid().to_string(), dollars(30)).unwrap();
    assert_eq!(spendable.current(), dollars(80));
    assert_eq!(funded.current(), dollars(30));
    // Infusions and goals leave the weekly figure alone.
    assert_eq!(remaining.current(), dollars(60));

    goals.delete(&goal.id.as_uuid().to_string()).unwrap();
    assert_eq!(funded.current(), Money::zero());
    assert_eq!(spendable.current(), dollars(110));
}

#[test]
fn clock_advance_needs_explicit_recompute() {
    let (_temp, storage) = monday_budget();
    let clock = Arc::new(FixedClock::new(local_noon(2024, 1, 1)));
    let shared: Arc<dyn Clock> = clock.clone();
    let facade = BudgetFacade::new(&storage, shared);

    let mut spendable = facade.observe_total_spendable();
    assert_eq!(spendable.current(), dollars(100));

    clock.set(local_noon(2024, 1, 8));
    assert_eq!(spendable.current(), dollars(100));
    assert_eq!(spendable.recompute(), dollars(200));
}

#[test]
fn reopened_storage_sees_persisted_state() {
    let (temp, storage) = monday_budget();
    ExpenseService::new(&storage)
        .add("Coffee", Money::from_cents(450), Some(local_noon(2024, 1, 2).with_timezone(&Utc)))
        .unwrap();
    drop(storage);

    let paths = SpendablePaths::with_base_dir(temp.path().to_path_buf());
    let reopened = Storage::open(paths).unwrap();
    let summary = BudgetService::new(&reopened)
        .summary(&local_noon(2024, 1, 3))
        .unwrap();

    assert_eq!(summary.total_expenses, Money::from_cents(450));
    assert_eq!(summary.weekly_remaining, Money::from_cents(9_550));
    assert_eq!(reopened.audit().entry_count().unwrap(), 2);
}

#[tokio::test]
async fn subscriber_wakes_on_new_expense() {
    let (_temp, storage) = monday_budget();
    let clock = Arc::new(FixedClock::new(local_noon(2024, 1, 3)));
    let facade = BudgetFacade::new(&storage, clock);

    let mut total = facade.observe_total_expenses();
    assert!(total.current().is_zero());

    ExpenseService::new(&storage)
        .add("Lunch", dollars(12), Some(local_noon(2024, 1, 3).with_timezone(&Utc)))
        .unwrap();

    assert_eq!(total.changed().await.unwrap(), dollars(12));
}
