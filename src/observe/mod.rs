//! Reactive read model
//!
//! Repositories publish their records on `Feed`s; the `BudgetFacade` turns
//! those into subscriptions and derived values that recompute only after
//! an input they depend on has changed.

pub mod clock;
pub mod derived;
pub mod facade;
pub mod feed;

pub use clock::{Clock, FixedClock, SystemClock};
pub use derived::{Derived, Snapshot, Upstream};
pub use facade::BudgetFacade;
pub use feed::{Feed, Subscription};
