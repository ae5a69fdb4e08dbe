//! Budget read model
//!
//! `BudgetFacade` hands out live views over storage: the raw collections
//! as subscriptions, and every aggregate or engine figure as a `Derived`
//! that recomputes only when one of its inputs has been republished.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use super::clock::Clock;
use super::derived::{Derived, Snapshot, Sources, Upstream};
use super::feed::Subscription;
use crate::engine::{self, BudgetSummary, ChartPoint};
use crate::models::{BudgetConfig, Expense, Goal, Infusion, Money};
use crate::storage::Storage;

fn expense_total(snapshot: &Snapshot) -> Money {
    snapshot.expenses.iter().map(|e| e.amount).sum()
}

fn infusion_total(snapshot: &Snapshot) -> Money {
    snapshot.infusions.iter().map(|i| i.amount).sum()
}

fn funded_total(snapshot: &Snapshot) -> Money {
    snapshot.goals.iter().map(|g| g.funded_amount).sum()
}

pub struct BudgetFacade {
    config: Subscription<Option<BudgetConfig>>,
    expenses: Subscription<Arc<Vec<Expense>>>,
    infusions: Subscription<Arc<Vec<Infusion>>>,
    goals: Subscription<Arc<Vec<Goal>>>,
    clock: Arc<dyn Clock>,
}

impl BudgetFacade {
    pub fn new(storage: &Storage, clock: Arc<dyn Clock>) -> Self {
        Self {
            config: storage.config.subscribe(),
            expenses: storage.expenses.subscribe(),
            infusions: storage.infusions.subscribe(),
            goals: storage.goals.subscribe(),
            clock,
        }
    }

    fn sources(&self) -> Sources {
        Sources {
            config: self.config.fresh().into_receiver(),
            expenses: self.expenses.fresh().into_receiver(),
            infusions: self.infusions.fresh().into_receiver(),
            goals: self.goals.fresh().into_receiver(),
        }
    }

    pub fn clock(&self) -> &Arc<dyn Clock> {
        &self.clock
    }

    pub fn observe_configuration(&self) -> Subscription<Option<BudgetConfig>> {
        self.config.fresh()
    }

    /// All expenses, newest first
    pub fn observe_expenses(&self) -> Subscription<Arc<Vec<Expense>>> {
        self.expenses.fresh()
    }

    pub fn observe_total_expenses(&self) -> Derived<Money> {
        Derived::new("total_expenses", self.sources(), &[Upstream::Expenses], expense_total)
    }

    /// Expenses dated at or after `since`, newest first
    pub fn observe_expenses_since(&self, since: DateTime<Utc>) -> Derived<Vec<Expense>> {
        Derived::new("expenses_since", self.sources(), &[Upstream::Expenses], move |s| {
            s.expenses
                .iter()
                .filter(|e| e.date >= since)
                .cloned()
                .collect()
        })
    }

    pub fn observe_spent_since(&self, since: DateTime<Utc>) -> Derived<Money> {
        Derived::new("spent_since", self.sources(), &[Upstream::Expenses], move |s| {
            engine::spent_since(&s.expenses, &since)
        })
    }

    /// All infusions, newest first
    pub fn observe_infusions(&self) -> Subscription<Arc<Vec<Infusion>>> {
        self.infusions.fresh()
    }

    pub fn observe_total_infusions(&self) -> Derived<Money> {
        Derived::new("total_infusions", self.sources(), &[Upstream::Infusions], infusion_total)
    }

    /// All goals, most recently created first
    pub fn observe_goals(&self) -> Subscription<Arc<Vec<Goal>>> {
        self.goals.fresh()
    }

    pub fn observe_total_goals_funded(&self) -> Derived<Money> {
        Derived::new("total_goals_funded", self.sources(), &[Upstream::Goals], funded_total)
    }

    /// Accrued allowance plus infusions, minus expenses and goal funding
    pub fn observe_total_spendable(&self) -> Derived<Money> {
        let clock = Arc::clone(&self.clock);
        Derived::new("total_spendable", self.sources(), &Upstream::ALL, move |s| {
            engine::total_spendable(
                s.config.as_ref(),
                expense_total(s),
                infusion_total(s),
                funded_total(s),
                &clock.now(),
            )
        })
    }

    /// What is left of the current week's allotment
    ///
    /// The week boundary is taken from the clock at recompute time.
    pub fn observe_weekly_remaining(&self) -> Derived<Money> {
        let clock = Arc::clone(&self.clock);
        let watched = [Upstream::Config, Upstream::Expenses];
        Derived::new("weekly_remaining", self.sources(), &watched, move |s| {
            let config = s.config.as_ref();
            let spent = engine::current_week_start(config, &clock.now())
                .map_or(Money::zero(), |start| engine::spent_since(&s.expenses, &start));
            engine::weekly_remaining(config, spent)
        })
    }

    pub fn observe_chart(&self) -> Derived<Vec<ChartPoint>> {
        let clock = Arc::clone(&self.clock);
        let watched = [Upstream::Config, Upstream::Expenses];
        Derived::new("chart", self.sources(), &watched, move |s| {
            engine::build_series(s.config.as_ref(), &s.expenses, &clock.now())
        })
    }

    /// Every headline figure in one value
    pub fn observe_summary(&self) -> Derived<BudgetSummary> {
        let clock = Arc::clone(&self.clock);
        Derived::new("summary", self.sources(), &Upstream::ALL, move |s| {
            engine::summarize(
                s.config.as_ref(),
                &s.expenses,
                &s.infusions,
                &s.goals,
                &clock.now(),
            )
        })
    }
}
