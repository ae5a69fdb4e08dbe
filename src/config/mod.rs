//! Configuration for Spendable
//!
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::SpendablePaths;
pub use settings::Settings;
