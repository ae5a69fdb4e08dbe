//! Diagnostic logging setup
//!
//! Installs a `tracing` fmt subscriber on stderr. The filter comes from
//! `SPENDABLE_LOG` when set, otherwise from the caller (normally
//! `Settings::log_filter`). Safe to call more than once.

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding a `tracing` filter directive
pub const LOG_ENV: &str = "SPENDABLE_LOG";

static TRACING_INIT: Once = Once::new();

pub fn init_tracing(fallback_filter: &str) {
    TRACING_INIT.call_once(|| {
        let filter = resolve_filter(std::env::var(LOG_ENV).ok().as_deref(), fallback_filter);

        // A subscriber installed elsewhere (e.g. by a test harness) wins
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}

fn resolve_filter(from_env: Option<&str>, fallback: &str) -> EnvFilter {
    from_env
        .filter(|directive| !directive.trim().is_empty())
        .and_then(|directive| EnvFilter::try_new(directive).ok())
        .or_else(|| EnvFilter::try_new(fallback).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_directive_wins() {
        let filter = resolve_filter(Some("spendable=debug"), "spendable=warn");
        assert_eq!(filter.to_string(), "spendable=debug");
    }

    #[test]
    fn test_blank_env_falls_back() {
        let filter = resolve_filter(Some("  "), "spendable=info");
        assert_eq!(filter.to_string(), "spendable=info");
        let filter = resolve_filter(None, "spendable=info");
        assert_eq!(filter.to_string(), "spendable=info");
    }

    #[test]
    fn test_init_is_idempotent() {
        init_tracing("spendable=warn");
        init_tracing("spendable=trace");
    }
}
