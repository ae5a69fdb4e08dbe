//! Derived values over the primitive feeds
//!
//! A `Derived<T>` caches one computed value and remembers which feed
//! versions it was computed from. Reading it after any of its upstream
//! feeds has published triggers a recompute from the newest values of all
//! four feeds; otherwise the cached value is returned as is.

use std::future::pending;
use std::sync::Arc;

use tokio::sync::watch;

use crate::error::{SpendableError, SpendableResult};
use crate::models::{BudgetConfig, Expense, Goal, Infusion};

/// The primitive streams a derived value can depend on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upstream {
    Config,
    Expenses,
    Infusions,
    Goals,
}

impl Upstream {
    pub const ALL: [Upstream; 4] = [
        Upstream::Config,
        Upstream::Expenses,
        Upstream::Infusions,
        Upstream::Goals,
    ];
}

/// Newest value of every primitive feed at recompute time
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub config: Option<BudgetConfig>,
    pub expenses: Arc<Vec<Expense>>,
    pub infusions: Arc<Vec<Infusion>>,
    pub goals: Arc<Vec<Goal>>,
}

/// Receivers for the four primitive feeds
#[derive(Debug, Clone)]
pub(crate) struct Sources {
    pub(crate) config: watch::Receiver<Option<BudgetConfig>>,
    pub(crate) expenses: watch::Receiver<Arc<Vec<Expense>>>,
    pub(crate) infusions: watch::Receiver<Arc<Vec<Infusion>>>,
    pub(crate) goals: watch::Receiver<Arc<Vec<Goal>>>,
}

impl Sources {
    fn has_changed(&self, upstream: Upstream) -> bool {
        let changed = match upstream {
            Upstream::Config => self.config.has_changed(),
            Upstream::Expenses => self.expenses.has_changed(),
            Upstream::Infusions => self.infusions.has_changed(),
            Upstream::Goals => self.goals.has_changed(),
        };
        changed.unwrap_or(false)
    }

    /// Read every feed, marking the watched ones as seen
    fn snapshot(&mut self, watched: &[Upstream]) -> Snapshot {
        let mark = |u: Upstream| watched.contains(&u);

        let config = if mark(Upstream::Config) {
            self.config.borrow_and_update().clone()
        } else {
            self.config.borrow().clone()
        };
        let expenses = if mark(Upstream::Expenses) {
            Arc::clone(&self.expenses.borrow_and_update())
        } else {
            Arc::clone(&self.expenses.borrow())
        };
        let infusions = if mark(Upstream::Infusions) {
            Arc::clone(&self.infusions.borrow_and_update())
        } else {
            Arc::clone(&self.infusions.borrow())
        };
        let goals = if mark(Upstream::Goals) {
            Arc::clone(&self.goals.borrow_and_update())
        } else {
            Arc::clone(&self.goals.borrow())
        };

        Snapshot {
            config,
            expenses,
            infusions,
            goals,
        }
    }
}

type Compute<T> = Box<dyn Fn(&Snapshot) -> T + Send + Sync>;

/// A cached value recomputed whenever an upstream feed publishes
pub struct Derived<T> {
    name: &'static str,
    sources: Sources,
    watched: Vec<Upstream>,
    compute: Compute<T>,
    value: T,
}

impl<T: Clone> Derived<T> {
    pub(crate) fn new<F>(
        name: &'static str,
        mut sources: Sources,
        watched: &[Upstream],
        compute: F,
    ) -> Self
    where
        F: Fn(&Snapshot) -> T + Send + Sync + 'static,
    {
        let snapshot = sources.snapshot(watched);
        let value = compute(&snapshot);
        Self {
            name,
            sources,
            watched: watched.to_vec(),
            compute: Box::new(compute),
            value,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether any watched feed has published since the last recompute
    pub fn has_changed(&self) -> bool {
        self.watched.iter().any(|u| self.sources.has_changed(*u))
    }

    /// The value, recomputed first if an upstream feed moved
    pub fn current(&mut self) -> T {
        if self.has_changed() {
            self.recompute()
        } else {
            self.value.clone()
        }
    }

    /// Recompute unconditionally
    ///
    /// Needed when only the clock moved, e.g. a week boundary passed with
    /// no new data.
    pub fn recompute(&mut self) -> T {
        let snapshot = self.sources.snapshot(&self.watched);
        self.value = (self.compute)(&snapshot);
        self.value.clone()
    }

    /// Wait until a watched feed publishes, then return the recomputed value
    ///
    /// Returns immediately if a publication is already pending.
    pub async fn changed(&mut self) -> SpendableResult<T> {
        if self.has_changed() {
            return Ok(self.recompute());
        }

        let watched = &self.watched;
        let on = |u: Upstream| watched.contains(&u);
        let sources = &mut self.sources;

        let outcome = tokio::select! {
            r = wait_on(&mut sources.config, on(Upstream::Config)) => r,
            r = wait_on(&mut sources.expenses, on(Upstream::Expenses)) => r,
            r = wait_on(&mut sources.infusions, on(Upstream::Infusions)) => r,
            r = wait_on(&mut sources.goals, on(Upstream::Goals)) => r,
        };
        outcome.map_err(|_| SpendableError::FeedClosed(self.name))?;

        Ok(self.recompute())
    }
}

async fn wait_on<V>(
    rx: &mut watch::Receiver<V>,
    enabled: bool,
) -> Result<(), watch::error::RecvError> {
    if enabled {
        rx.changed().await
    } else {
        pending().await
    }
}
