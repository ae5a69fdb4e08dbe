//! Time source for the facade
//!
//! Derived values that depend on "now" read it through a `Clock` so tests
//! can pin the instant.

use std::sync::RwLock;

use chrono::{DateTime, Local, TimeZone};

pub trait Clock: Send + Sync {
    /// The current instant in the user's zone
    fn now(&self) -> DateTime<Local>;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// A clock that only moves when told to
#[derive(Debug)]
pub struct FixedClock {
    instant: RwLock<DateTime<Local>>,
}

impl FixedClock {
    pub fn new<Tz: TimeZone>(instant: DateTime<Tz>) -> Self {
        Self {
            instant: RwLock::new(instant.with_timezone(&Local)),
        }
    }

    pub fn set<Tz: TimeZone>(&self, instant: DateTime<Tz>) {
        let mut guard = match self.instant.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *guard = instant.with_timezone(&Local);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        match self.instant.read() {
            Ok(guard) => *guard,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_fixed_clock_moves_only_on_set() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let clock = FixedClock::new(start);
        assert_eq!(clock.now(), start);
        assert_eq!(clock.now(), start);

        let later = Utc.with_ymd_and_hms(2024, 1, 8, 12, 0, 0).unwrap();
        clock.set(later);
        assert_eq!(clock.now(), later);
    }

    #[test]
    fn test_system_clock_is_monotone_enough() {
        let a = SystemClock.now();
        let b = SystemClock.now();
        assert!(b >= a);
    }
}
