//! Spendable - weekly allowance budgeting
//!
//! You set a weekly amount and a start date. Every week that has begun adds
//! the weekly amount to a pool; expenses and goal funding take from it and
//! one-off infusions add to it. Two numbers fall out: the total spendable
//! balance and what is left of the current week's allowance.
//!
//! # Architecture
//!
//! - `models`: money, ids, the budget configuration and the three entities
//! - `engine`: pure week arithmetic, accrual and the chart series
//! - `storage`: JSON file repositories, each publishing a change feed
//! - `observe`: derived values recomputed from the feeds, plus the clock
//! - `services`: validated mutations with audit logging
//! - `audit`, `config`, `logging`: ambient support
//! - `cli`, `display`, `export`: the command-line surface
//!
//! # Example
//!
//! ```rust,ignore
//! use spendable::config::{paths::SpendablePaths, settings::Settings};
//! use spendable::storage::Storage;
//!
//! let paths = SpendablePaths::new()?;
//! let storage = Storage::open(paths)?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod engine;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod observe;
pub mod services;
pub mod storage;

pub use error::{SpendableError, SpendableResult};
